//! Presentation-only records for the dashboard and system journal

use serde::{Deserialize, Serialize};

/// One KPI tile. Values are display strings, not derived from live data.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatMetric {
    pub label: String,
    pub value: String,
    pub trend: f32,
    pub trend_label: String,
}

/// One point of a chart series (weekly revenue, per-module activity)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartPoint {
    pub name: String,
    pub value: i64,
}

/// One line of the system activity journal
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityLogEntry {
    pub timestamp: String,
    pub category: String,
    pub message: String,
}
