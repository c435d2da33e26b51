//! Default widget props.
//!
//! The registry is passed explicitly into the projection layer; widgets
//! with incomplete mappings render these values instead of crashing or
//! going blank.

use contracts::mapping::WidgetType;
use serde_json::{json, Value};
use std::collections::HashMap;

/// Explicit registry of per-widget default prop trees
#[derive(Debug, Clone, Default)]
pub struct DefaultPropsRegistry {
    props: HashMap<WidgetType, Value>,
}

impl DefaultPropsRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register (or replace) the defaults for one widget kind
    pub fn insert(&mut self, widget: WidgetType, props: Value) {
        self.props.insert(widget, props);
    }

    pub fn get(&self, widget: WidgetType) -> Option<&Value> {
        self.props.get(&widget)
    }

    /// Starting prop tree for a projection: the registered defaults, or
    /// an empty object when the widget has none
    pub fn base(&self, widget: WidgetType) -> Value {
        self.props
            .get(&widget)
            .cloned()
            .unwrap_or_else(|| json!({}))
    }

    /// Registry preloaded with the stock preview defaults
    pub fn sample() -> Self {
        let mut registry = Self::new();
        registry.insert(
            WidgetType::OneMetric,
            json!({ "name": "Active Contracts", "value": 45 }),
        );
        registry.insert(
            WidgetType::OneMetricDate,
            json!({ "name": "Open PO Orders", "value": 18, "date": "13-Aug-2024" }),
        );
        registry.insert(
            WidgetType::TwoMetrics,
            json!({
                "metric1": "Long Form",
                "value1": "12.3",
                "metric2": "Short & Mid-Form",
                "value2": "135"
            }),
        );
        registry.insert(
            WidgetType::TwoMetricsLinechart,
            json!({
                "data": {
                    "chart_data": [
                        { "date": "01-01-2024", "Actual": 50, "unit": "%" },
                        { "date": "01-02-2024", "Actual": 100, "unit": "%" },
                        { "date": "01-03-2024", "Actual": 90, "unit": "%" },
                        { "date": "01-04-2024", "Actual": 150, "unit": "%" },
                        { "date": "01-05-2024", "Actual": 120, "unit": "%" },
                        { "date": "01-06-2024", "Actual": 195, "unit": "%" }
                    ],
                    "chart_yaxis": "Actual",
                    "metric_data": {
                        "metric_value": "$142",
                        "metric_variance": "+5.40%",
                        "metric_label": "Received Payments"
                    },
                    "widget_name": "Successful Payments"
                }
            }),
        );
        registry.insert(
            WidgetType::TwoMetricsPiechart,
            json!({
                "data": [
                    { "label": "Flaring Intensity", "value": 30, "fill": "#84BD00" },
                    { "label": "SO2 Emissions", "value": 70, "fill": "#E1553F" }
                ],
                "metrics": {
                    "amount": "$234K",
                    "percentage": "0.31%",
                    "label": "Contracts Under Development"
                }
            }),
        );
        registry.insert(
            WidgetType::OneMetricTable,
            json!({
                "totalAmount": "$15,223,050",
                "data": [
                    { "supplier_name": "Reliable Suppliers", "contracts": 7, "value": "$52,345" },
                    { "supplier_name": "Supply Solutions", "contracts": 5, "value": "$42,345" }
                ]
            }),
        );
        registry.insert(
            WidgetType::BarChart,
            json!({
                "data": [
                    { "name": "2024", "value": 163000, "fill": "#83bd01" },
                    { "name": "2025", "value": 118000, "fill": "#FFC846" }
                ],
                "title": "Spend Comparison",
                "variance": "+5.40%"
            }),
        );
        registry.insert(
            WidgetType::StackedBarChart,
            json!({
                "data": [
                    { "name": "Jan", "Supplier1": 400, "Supplier2": 240, "Supplier3": 100 },
                    { "name": "Feb", "Supplier1": 300, "Supplier2": 200, "Supplier3": 150 },
                    { "name": "Mar", "Supplier1": 450, "Supplier2": 220, "Supplier3": 180 },
                    { "name": "Apr", "Supplier1": 470, "Supplier2": 260, "Supplier3": 120 },
                    { "name": "May", "Supplier1": 390, "Supplier2": 210, "Supplier3": 160 },
                    { "name": "Jun", "Supplier1": 520, "Supplier2": 280, "Supplier3": 220 }
                ],
                "title": "Top Spend Supplier",
                "series": [
                    { "name": "Supplier A", "dataKey": "Supplier1", "color": "#84BD00" },
                    { "name": "Supplier B", "dataKey": "Supplier2", "color": "#FFC846" },
                    { "name": "Supplier C", "dataKey": "Supplier3", "color": "#8979FF" }
                ]
            }),
        );
        registry.insert(
            WidgetType::OrdersLineChart,
            json!({
                "data": [
                    { "name": "Jan", "value": 120000 },
                    { "name": "Feb", "value": 150000 },
                    { "name": "Mar", "value": 180000 },
                    { "name": "Apr", "value": 140000 },
                    { "name": "May", "value": 160000 },
                    { "name": "Jun", "value": 190000 },
                    { "name": "Jul", "value": 175000 },
                    { "name": "Aug", "value": 195000 },
                    { "name": "Sep", "value": 165000 },
                    { "name": "Oct", "value": 185000 },
                    { "name": "Nov", "value": 205000 },
                    { "name": "Dec", "value": 220000 }
                ],
                "title": "Last 12 Months Orders",
                "totalValue": "$235MM"
            }),
        );
        registry.insert(
            WidgetType::DualLineChart,
            json!({
                "data": [
                    { "name": "Jan", "line1": 10000, "line2": 15000 },
                    { "name": "Feb", "line1": 12000, "line2": 18000 },
                    { "name": "Mar", "line1": 15000, "line2": 14000 },
                    { "name": "Apr", "line1": 13000, "line2": 19000 },
                    { "name": "May", "line1": 17000, "line2": 16000 },
                    { "name": "Jun", "line1": 20000, "line2": 21000 }
                ],
                "title": "Spend Trends",
                "series": [
                    { "name": "Contract Spend", "dataKey": "line1", "color": "#5899DA" },
                    { "name": "Material Spend", "dataKey": "line2", "color": "#FFC846" }
                ]
            }),
        );
        registry.insert(
            WidgetType::PieChartTotal,
            json!({
                "data": [
                    { "name": "Segment 1", "value": 2000, "fill": "#84BD00" },
                    { "name": "Segment 2", "value": 1128, "fill": "#E1553F" }
                ],
                "title": "With P&SCM Buyers",
                "totalValue": "$3,128B",
                "subValue": "$339.1B",
                "variance": "+23.98%"
            }),
        );
        registry.insert(
            WidgetType::QuadrantMetrics,
            json!({
                "topLeftTitle": "In Process Requestions",
                "topLeftValue": "53",
                "topRightTitle": "With Supplier",
                "topRightValue": "18",
                "bottomLeftTitle": "B2B Order",
                "bottomLeftValue": "1,335",
                "bottomRightTitle": "Completed Order",
                "bottomRightValue": "1,247"
            }),
        );
        registry
    }
}
