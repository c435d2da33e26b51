use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// Widget kinds available to the dashboard builder
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WidgetType {
    OneMetric,
    OneMetricDate,
    TwoMetrics,
    TwoMetricsLinechart,
    TwoMetricsPiechart,
    OneMetricTable,
    BarChart,
    StackedBarChart,
    OrdersLineChart,
    DualLineChart,
    PieChartTotal,
    QuadrantMetrics,
}

/// How one widget prop gets its value: entered by hand or looked up
/// in the report structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "inputType", rename_all = "lowercase")]
pub enum FieldMapping {
    /// Literal value entered in the mapping editor
    #[serde(rename_all = "camelCase")]
    Manual {
        /// Dot-separated path to the prop inside the widget's prop tree
        field_path: String,
        /// The literal value
        manual_value: Value,
    },
    /// Lookup of a single cell in the pivoted report structure
    #[serde(rename_all = "camelCase")]
    Mapped {
        /// Dot-separated path to the prop inside the widget's prop tree
        field_path: String,
        /// Which cell to read
        mapped_config: MappedField,
    },
}

impl FieldMapping {
    /// Path of the prop this mapping feeds
    pub fn field_path(&self) -> &str {
        match self {
            FieldMapping::Manual { field_path, .. } => field_path,
            FieldMapping::Mapped { field_path, .. } => field_path,
        }
    }
}

/// Address of one cell in the pivoted structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MappedField {
    /// Characteristic field (e.g. "ZSCMCMD")
    pub cha_field: String,
    /// Characteristic value (e.g. "OCTG")
    pub cha_value: String,
    /// Key figure field (e.g. "VALUE002")
    pub kf_field: String,
}

/// One series of a multi-series chart mapping
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesAxis {
    /// Key figure field feeding this series
    pub field: String,
    /// Series color
    pub color: String,
}

/// One column of a table mapping; the first column refers to the
/// characteristic field itself
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableColumn {
    /// Report field backing the column
    pub field: String,
    /// Column header shown to the user
    pub header: String,
}

/// Per-family mapping configuration, one variant per projector shape
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mappingType", rename_all = "kebab-case")]
pub enum MappingSpec {
    /// Field-by-field mapping over the widget's default prop tree
    Simple,
    /// Single line series
    #[serde(rename_all = "camelCase")]
    LineChart {
        cha_field: String,
        kf_field: String,
        /// Sort categories (date, then numeric, then lexicographic)
        /// instead of keeping first-seen row order
        #[serde(default)]
        sorted: bool,
        /// Cap on emitted points (0 = unlimited)
        #[serde(default)]
        limit: usize,
    },
    /// Line series plus a headline metric block
    #[serde(rename_all = "camelCase")]
    MetricLineChart { cha_field: String, kf_field: String },
    /// Two line series sharing one axis
    #[serde(rename_all = "camelCase")]
    DualLineChart {
        cha_field: String,
        kf_fields: [String; 2],
    },
    /// Pie segments with percentage shares
    #[serde(rename_all = "camelCase")]
    PieChart { cha_field: String, kf_field: String },
    /// Pie segments plus total/sub-value/variance block
    #[serde(rename_all = "camelCase")]
    PieChartTotal { cha_field: String, kf_field: String },
    /// Bars with first-to-last variance
    #[serde(rename_all = "camelCase")]
    BarChart { cha_field: String, kf_field: String },
    /// Stacked bars, one stack segment per key figure
    #[serde(rename_all = "camelCase")]
    StackedBarChart {
        cha_field: String,
        kf_fields: Vec<String>,
    },
    /// Multi-series comparison chart with per-series total cards
    #[serde(rename_all = "camelCase")]
    ComparisonChart {
        cha_field: String,
        series: Vec<SeriesAxis>,
    },
    /// Table keyed by the characteristic value
    #[serde(rename_all = "camelCase")]
    Table {
        columns: Vec<TableColumn>,
        /// Column whose values are summed into `totalAmount`
        #[serde(default)]
        total_column: Option<String>,
    },
    /// Four positioned metrics, one per configured category
    #[serde(rename_all = "camelCase")]
    Quadrant {
        cha_field: String,
        /// Characteristic values to show, in position order
        categories: Vec<String>,
        /// Key figure per slot; slots beyond the list reuse the first
        kf_fields: Vec<String>,
    },
}

/// User-authored mapping of one widget onto one report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WidgetMappingConfig {
    /// Report the widget reads from
    pub report_name: String,
    /// Family-specific mapping
    #[serde(flatten)]
    pub spec: MappingSpec,
    /// Manual/mapped prop overrides keyed by prop name
    #[serde(default)]
    pub fields: HashMap<String, FieldMapping>,
}

impl WidgetMappingConfig {
    /// Manual override value for a named prop, if one is configured
    pub fn manual_field(&self, name: &str) -> Option<&Value> {
        match self.fields.get(name) {
            Some(FieldMapping::Manual { manual_value, .. }) => Some(manual_value),
            _ => None,
        }
    }
}

/// Persisted unit of a dashboard layout: widget kind plus its mapping
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedWidgetMapping {
    /// Unique identifier (UUID)
    pub id: String,
    /// Widget kind
    pub widget: WidgetType,
    /// Mapping configuration
    pub config: WidgetMappingConfig,
}

impl SavedWidgetMapping {
    /// New layout unit with a fresh id
    pub fn new(widget: WidgetType, config: WidgetMappingConfig) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            widget,
            config,
        }
    }
}
