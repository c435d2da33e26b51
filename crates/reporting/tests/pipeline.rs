//! End-to-end pipeline: raw payload -> parse -> pivot -> projection.

use reporting::parser::parse_report;
use reporting::projectors::{line_chart, table_props, ProjectionOptions};
use reporting::transform::{transform_report, TransformError};

use contracts::mapping::TableColumn;
use contracts::report::CellValue;

const PAYLOAD: &str = r#"
    <ZBW_QUERY_OUTPUT_METADATA type="CHA">
        <FIELDNAME>ZSCMCMD</FIELDNAME>
        <SCRTEXT_L>Commodity</SCRTEXT_L>
        <AXIS_TYPE>ROW</AXIS_TYPE>
        <DISPLAY_STYLE>KEY</DISPLAY_STYLE>
    </ZBW_QUERY_OUTPUT_METADATA>
    <ZBW_QUERY_OUTPUT_METADATA type="KF">
        <FIELDNAME>VALUE001</FIELDNAME>
        <SCRTEXT_L>Order Value</SCRTEXT_L>
        <AXIS_TYPE>COLUMN</AXIS_TYPE>
        <DISPLAY_STYLE>NUMBER</DISPLAY_STYLE>
    </ZBW_QUERY_OUTPUT_METADATA>
    <OUTPUT>
        <item>
            <ZSCMCMD>OCTG</ZSCMCMD>
            <VALUE001>100</VALUE001>
        </item>
        <item>
            <ZSCMCMD>Mud</ZSCMCMD>
            <VALUE001>200</VALUE001>
        </item>
        <item>
            <ZSCMCMD>Overall Result</ZSCMCMD>
            <VALUE001>300</VALUE001>
        </item>
    </OUTPUT>
"#;

#[test]
fn payload_flows_from_parse_to_projection() {
    let parsed = parse_report(PAYLOAD);
    assert!(parsed.error.is_none());
    assert_eq!(parsed.header.len(), 2);
    assert_eq!(parsed.rows.len(), 3);

    let report = transform_report(&parsed).unwrap();
    assert_eq!(report.structure.pivot_field(), "ZSCMCMD");
    assert_eq!(
        report.cell("ZSCMCMD", "OCTG", "VALUE001"),
        Some(&CellValue::Number(100.0))
    );
    assert_eq!(
        report.overall_value("ZSCMCMD", "VALUE001").map(|v| v.to_number()),
        Some(300.0)
    );

    let props = line_chart(
        &report,
        "ZSCMCMD",
        "VALUE001",
        false,
        0,
        &ProjectionOptions::default(),
    );
    let names: Vec<&str> = props.data.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["OCTG", "Mud"]);
    assert_eq!(props.data[0].value, 100.0);
    assert_eq!(props.title, "Order Value");
    assert_eq!(props.total_value, "$300");

    let columns = vec![
        TableColumn {
            field: "ZSCMCMD".to_string(),
            header: "Commodity".to_string(),
        },
        TableColumn {
            field: "VALUE001".to_string(),
            header: "Order Value".to_string(),
        },
    ];
    let table = table_props(
        &report,
        &columns,
        Some("VALUE001"),
        &ProjectionOptions::default(),
    );
    assert_eq!(table.data.len(), 2);
    assert_eq!(table.total_amount.as_deref(), Some("$300"));
}

#[test]
fn malformed_payload_parses_empty_and_fails_to_pivot() {
    let parsed = parse_report("not a report at all");
    assert!(parsed.error.is_none());
    assert!(parsed.header.is_empty());
    assert!(parsed.rows.is_empty());

    let err = transform_report(&parsed).unwrap_err();
    assert!(matches!(err, TransformError::NoCharacteristicField));
}
