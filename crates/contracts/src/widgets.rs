//! Prop shapes consumed by the rendering layer.
//!
//! These are the contract surface between the projection engine and any
//! widget renderer; wire names are stable and must not change.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

use crate::mapping::TableColumn;
use crate::report::CellValue;

/// One point of a single line series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinePoint {
    /// X-axis label (characteristic value)
    pub name: String,
    /// Y-axis value
    pub value: f64,
}

/// Props for the plain line chart widget
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineChartProps {
    pub data: Vec<LinePoint>,
    pub title: String,
    pub total_value: String,
}

impl LineChartProps {
    /// No-data placeholder shown when the pivot field is absent
    pub fn no_data() -> Self {
        Self {
            data: Vec::new(),
            title: "No Data".to_string(),
            total_value: "$0".to_string(),
        }
    }
}

/// One point of the metric line chart series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricLinePoint {
    /// X-axis label
    pub date: String,
    /// Y-axis value
    pub value: f64,
    /// Unit hint carried from field metadata
    pub unit: String,
}

/// Headline metric block of the metric line chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricData {
    pub metric_value: String,
    pub metric_variance: String,
    pub metric_label: String,
}

/// Inner data block of the metric line chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricLineBlock {
    pub chart_data: Vec<MetricLinePoint>,
    /// Key figure field the series was read from
    pub chart_yaxis: String,
    pub metric_data: MetricData,
    pub widget_name: String,
}

/// Props for the line chart with a headline metric
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricLineChartProps {
    pub data: MetricLineBlock,
}

impl MetricLineChartProps {
    pub fn no_data() -> Self {
        Self {
            data: MetricLineBlock {
                chart_data: Vec::new(),
                chart_yaxis: String::new(),
                metric_data: MetricData {
                    metric_value: String::new(),
                    metric_variance: "+0.00%".to_string(),
                    metric_label: "No Data".to_string(),
                },
                widget_name: "No Data".to_string(),
            },
        }
    }
}

/// One point of a two-line series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DualLinePoint {
    pub name: String,
    pub line1: f64,
    pub line2: f64,
}

/// Descriptor of one rendered series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesDescriptor {
    /// Display name (field label)
    pub name: String,
    /// Key of the series values inside each data point
    pub data_key: String,
    /// Series color
    pub color: String,
}

/// Props for the dual line chart widget
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DualLineChartProps {
    pub data: Vec<DualLinePoint>,
    pub series: Vec<SeriesDescriptor>,
    pub title: String,
}

impl DualLineChartProps {
    pub fn no_data() -> Self {
        Self {
            data: Vec::new(),
            series: Vec::new(),
            title: "No Data".to_string(),
        }
    }
}

/// One pie segment with its share of the non-excluded total
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PieSegment {
    pub label: String,
    pub value: f64,
    /// Share of the total, one decimal place
    pub percentage: String,
    pub fill: String,
}

/// Headline block of the pie chart widget
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PieMetrics {
    pub amount: String,
    pub percentage: String,
    pub label: String,
}

/// Props for the pie chart widget
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PieChartProps {
    pub data: Vec<PieSegment>,
    pub metrics: PieMetrics,
}

impl PieChartProps {
    pub fn no_data() -> Self {
        Self {
            data: Vec::new(),
            metrics: PieMetrics {
                amount: String::new(),
                percentage: String::new(),
                label: "No Data".to_string(),
            },
        }
    }
}

/// One bar (also used as a plain pie segment)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarPoint {
    pub name: String,
    pub value: f64,
    pub fill: String,
}

/// Props for the bar chart widget
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarChartProps {
    pub data: Vec<BarPoint>,
    pub title: String,
    /// First-to-last percentage change
    pub variance: String,
}

impl BarChartProps {
    pub fn no_data() -> Self {
        Self {
            data: Vec::new(),
            title: "No Data".to_string(),
            variance: "+0.00%".to_string(),
        }
    }
}

/// Props for the pie chart with total/sub-value block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PieChartTotalProps {
    pub data: Vec<BarPoint>,
    pub title: String,
    pub total_value: String,
    pub sub_value: String,
    pub variance: String,
}

impl PieChartTotalProps {
    pub fn no_data() -> Self {
        Self {
            data: Vec::new(),
            title: "No Data".to_string(),
            total_value: "$0".to_string(),
            sub_value: "$0".to_string(),
            variance: "0%".to_string(),
        }
    }
}

/// One stacked bar: x-label plus one value per series label
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StackedPoint {
    pub name: String,
    /// Series label -> value; flattened onto the point on the wire
    #[serde(flatten)]
    pub values: HashMap<String, f64>,
}

/// Props for the stacked bar chart widget
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StackedBarChartProps {
    pub data: Vec<StackedPoint>,
    pub series: Vec<SeriesDescriptor>,
    pub title: String,
    pub total_value: String,
}

impl StackedBarChartProps {
    pub fn no_data() -> Self {
        Self {
            data: Vec::new(),
            series: Vec::new(),
            title: "No Data".to_string(),
            total_value: String::new(),
        }
    }
}

/// One point of a comparison chart: period plus one value per series field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonPoint {
    pub period: String,
    /// Series field -> value; flattened onto the point on the wire
    #[serde(flatten)]
    pub values: HashMap<String, f64>,
}

/// Per-series total card of the comparison chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesValue {
    pub name: String,
    /// Formatted aggregate read from the "Overall Result" row
    pub value: String,
    pub color: String,
}

/// Props for the comparison chart widget
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonChartProps {
    pub data: Vec<ComparisonPoint>,
    pub series: Vec<SeriesValue>,
    pub title: String,
    pub subtitle: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub max_value: Option<Value>,
}

impl ComparisonChartProps {
    pub fn no_data() -> Self {
        Self {
            data: Vec::new(),
            series: Vec::new(),
            title: "No Data".to_string(),
            subtitle: String::new(),
            max_value: None,
        }
    }
}

/// Props for the table widget
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableProps {
    pub columns: Vec<TableColumn>,
    /// One row object per category, keyed by column header
    pub data: Vec<HashMap<String, CellValue>>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub total_amount: Option<String>,
}

impl TableProps {
    pub fn no_data() -> Self {
        Self {
            columns: Vec::new(),
            data: Vec::new(),
            total_amount: None,
        }
    }
}

/// Slot of a quadrant metric
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum QuadrantPosition {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl QuadrantPosition {
    /// The four slots in fill order
    pub const ORDER: [QuadrantPosition; 4] = [
        QuadrantPosition::TopLeft,
        QuadrantPosition::TopRight,
        QuadrantPosition::BottomLeft,
        QuadrantPosition::BottomRight,
    ];
}

/// One positioned metric of the quadrant widget
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuadrantMetric {
    pub title: String,
    pub value: String,
    pub position: QuadrantPosition,
}

impl QuadrantMetric {
    /// Placeholder for an unfilled slot
    pub fn placeholder(position: QuadrantPosition) -> Self {
        Self {
            title: "No Data".to_string(),
            value: "0".to_string(),
            position,
        }
    }
}

/// Props for the quadrant metrics widget; always exactly four entries
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuadrantProps {
    pub metrics: Vec<QuadrantMetric>,
}

impl QuadrantProps {
    /// Four placeholder slots
    pub fn no_data() -> Self {
        Self {
            metrics: QuadrantPosition::ORDER
                .iter()
                .map(|p| QuadrantMetric::placeholder(*p))
                .collect(),
        }
    }
}

/// Output of one projection, ready to hand to the rendering layer
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum WidgetProps {
    Line(LineChartProps),
    MetricLine(MetricLineChartProps),
    DualLine(DualLineChartProps),
    Pie(PieChartProps),
    PieTotal(PieChartTotalProps),
    Bar(BarChartProps),
    StackedBar(StackedBarChartProps),
    Comparison(ComparisonChartProps),
    Table(TableProps),
    Quadrant(QuadrantProps),
    /// Arbitrary prop tree built from defaults plus field mappings
    Simple(Value),
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn stacked_point_flattens_series_values() {
        let mut values = HashMap::new();
        values.insert("Supplier A".to_string(), 400.0);
        let point = StackedPoint {
            name: "Jan".to_string(),
            values,
        };
        let json = serde_json::to_value(&point).unwrap();
        assert_eq!(json["name"], "Jan");
        assert_eq!(json["Supplier A"], 400.0);
    }

    #[test]
    fn quadrant_positions_serialize_kebab_case() {
        assert_eq!(
            serde_json::to_value(QuadrantPosition::BottomRight).unwrap(),
            json!("bottom-right")
        );
    }

    #[test]
    fn wire_names_stay_camel_case() {
        let props = PieChartTotalProps::no_data();
        let json = serde_json::to_value(&props).unwrap();
        assert!(json.get("totalValue").is_some());
        assert!(json.get("subValue").is_some());

        let descriptor = SeriesDescriptor {
            name: "Actual".into(),
            data_key: "line1".into(),
            color: "#5899DA".into(),
        };
        let json = serde_json::to_value(&descriptor).unwrap();
        assert!(json.get("dataKey").is_some());
    }

    #[test]
    fn no_data_quadrant_has_four_slots() {
        let props = QuadrantProps::no_data();
        assert_eq!(props.metrics.len(), 4);
        assert_eq!(props.metrics[3].position, QuadrantPosition::BottomRight);
    }
}
