//! Chart view-models for the yield bar chart and the damage doughnut chart.
//!
//! Each model carries labels and datasets with their fixed color encoding,
//! and serializes to the Chart.js configuration shape
//! `{type, data: {labels, datasets}, options}` via `chart_config()`.

use farm_store::{DamageBreakdown, YieldSeries};
use serde::Serialize;

pub const HISTORICAL_LABEL: &str = "Historical Yield (t/ha)";
pub const PREDICTED_LABEL: &str = "Predicted Yield (t/ha)";
pub const DAMAGE_LABEL: &str = "Damage Types (%)";

const HISTORICAL_FILL: &str = "rgba(41, 128, 185, 0.6)";
const HISTORICAL_BORDER: &str = "rgba(41, 128, 185, 1)";
const PREDICTED_FILL: &str = "rgba(39, 174, 96, 0.6)";
const PREDICTED_BORDER: &str = "rgba(39, 174, 96, 1)";

/// Slice fills for drought, pest and flood. Further slices reuse them in order.
pub const DAMAGE_COLORS: [&str; 3] = [
    "rgba(243, 156, 18, 0.7)",
    "rgba(192, 57, 43, 0.7)",
    "rgba(52, 152, 219, 0.7)",
];

/// One bar series. Missing values serialize as `null`, which Chart.js skips.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BarDataset {
    pub label: String,
    pub data: Vec<Option<f64>>,
    pub background_color: String,
    pub border_color: String,
    pub border_width: u32,
}

/// Historical and predicted yield sharing one set of period labels.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct YieldChart {
    pub labels: Vec<String>,
    pub historical: BarDataset,
    pub predicted: BarDataset,
}

impl YieldChart {
    pub fn from_series(series: &YieldSeries) -> Self {
        Self {
            labels: series.labels().to_vec(),
            historical: BarDataset {
                label: HISTORICAL_LABEL.to_string(),
                data: series.historical().to_vec(),
                background_color: HISTORICAL_FILL.to_string(),
                border_color: HISTORICAL_BORDER.to_string(),
                border_width: 1,
            },
            predicted: BarDataset {
                label: PREDICTED_LABEL.to_string(),
                data: series.predicted().to_vec(),
                background_color: PREDICTED_FILL.to_string(),
                border_color: PREDICTED_BORDER.to_string(),
                border_width: 1,
            },
        }
    }

    pub fn chart_config(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "bar",
            "data": {
                "labels": self.labels,
                "datasets": [self.historical, self.predicted],
            },
            "options": {
                "responsive": true,
                "scales": { "y": { "beginAtZero": true } },
            },
        })
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DoughnutDataset {
    pub label: String,
    pub data: Vec<f64>,
    pub background_color: Vec<String>,
}

/// Damage proportions, one slice per category.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DamageChart {
    pub labels: Vec<String>,
    pub dataset: DoughnutDataset,
}

impl DamageChart {
    pub fn from_breakdown(damage: &DamageBreakdown) -> Self {
        let background_color = DAMAGE_COLORS
            .iter()
            .cycle()
            .take(damage.len())
            .map(|c| c.to_string())
            .collect();
        Self {
            labels: damage.labels().to_vec(),
            dataset: DoughnutDataset {
                label: DAMAGE_LABEL.to_string(),
                data: damage.values().to_vec(),
                background_color,
            },
        }
    }

    pub fn chart_config(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "doughnut",
            "data": {
                "labels": self.labels,
                "datasets": [self.dataset],
            },
            "options": { "responsive": true },
        })
    }
}
