//! Farm record model structs.
//!
//! All structs derive `Serialize` so they can be handed to the front end
//! as JSON when needed.

use chrono::NaiveDate;
use serde::Serialize;

/// Static descriptive and time-series data for one monitored plot.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct FarmRecord {
    /// Unique key in the store (e.g. "1").
    pub id: String,
    /// Display name shown in the farm list.
    pub name: String,
    pub soil_type: String,
    pub crop_type: String,
    pub last_irrigation: NaiveDate,
    pub fertilizer: String,
    pub yield_series: YieldSeries,
    pub damage: DamageBreakdown,
}

/// Per-period historical and predicted yield figures in tonnes per hectare.
///
/// `labels`, `historical` and `predicted` always have the same length: every
/// period is appended through [`YieldSeries::push`]. Either value of a
/// period may be missing, and both may be present.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct YieldSeries {
    labels: Vec<String>,
    historical: Vec<Option<f64>>,
    predicted: Vec<Option<f64>>,
}

impl YieldSeries {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one period.
    pub fn push(
        &mut self,
        label: impl Into<String>,
        historical: Option<f64>,
        predicted: Option<f64>,
    ) {
        self.labels.push(label.into());
        self.historical.push(historical);
        self.predicted.push(predicted);
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn historical(&self) -> &[Option<f64>] {
        &self.historical
    }

    pub fn predicted(&self) -> &[Option<f64>] {
        &self.predicted
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

/// Proportional attribution of crop damage to categories (drought, pest, flood).
///
/// `labels` and `values` always have the same length.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct DamageBreakdown {
    labels: Vec<String>,
    values: Vec<f64>,
}

impl DamageBreakdown {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one damage category.
    pub fn push(&mut self, label: impl Into<String>, value: f64) {
        self.labels.push(label.into());
        self.values.push(value);
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

/// Clickable rectangle for a farm on the map placeholder.
///
/// Coordinates are percentages of the map's width and height.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MapBoundary {
    pub farm_id: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}
