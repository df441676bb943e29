//! Read-only store of farm records for the farm monitoring dashboard.
//!
//! The store is populated once at startup from CSV fixtures and never
//! mutated afterwards. Records keep their fixture insertion order, which is
//! the order the farm list is rendered in.
//!
//! # Usage
//!
//! ```rust
//! use farm_store::FarmStore;
//!
//! let store = FarmStore::sample().unwrap();
//! assert_eq!(store.all_ids(), ["1", "2", "3"]);
//!
//! let farm = store.get("2").unwrap();
//! assert_eq!(farm.name, "Sunset Acres");
//! assert_eq!(farm.crop_type, "Corn");
//! assert!(store.get("42").is_none());
//! ```
//!
//! # Fixtures
//!
//! See [`FarmStore::from_csv`] and the `fixtures/` directory for the CSV
//! formats.

mod loader;
pub mod models;

pub use models::{DamageBreakdown, FarmRecord, MapBoundary, YieldSeries};

use std::collections::HashMap;

static FARMS_CSV: &str = include_str!("../../fixtures/farms.csv");
static YIELD_CSV: &str = include_str!("../../fixtures/yield.csv");
static DAMAGE_CSV: &str = include_str!("../../fixtures/damage.csv");
static BOUNDARIES_CSV: &str = include_str!("../../fixtures/boundaries.csv");

/// Immutable-at-runtime mapping from farm id to [`FarmRecord`].
#[derive(Debug, Clone, Default)]
pub struct FarmStore {
    records: Vec<FarmRecord>,
    index: HashMap<String, usize>,
    boundaries: Vec<MapBoundary>,
}

impl FarmStore {
    /// Build a store from the embedded hand-authored sample data.
    pub fn sample() -> anyhow::Result<Self> {
        Self::from_csv(FARMS_CSV, YIELD_CSV, DAMAGE_CSV, BOUNDARIES_CSV)
    }

    /// Build a store from fixture text.
    ///
    /// Fails if a farm id is empty or duplicated, a date or number does not
    /// parse, or a yield/damage/boundary row refers to an unknown farm.
    pub fn from_csv(
        farms_csv: &str,
        yield_csv: &str,
        damage_csv: &str,
        boundaries_csv: &str,
    ) -> anyhow::Result<Self> {
        let mut store = Self::default();
        store.load_farms(farms_csv)?;
        store.load_yields(yield_csv)?;
        store.load_damage(damage_csv)?;
        store.load_boundaries(boundaries_csv)?;
        Ok(store)
    }

    /// Look up a farm by id.
    pub fn get(&self, id: &str) -> Option<&FarmRecord> {
        self.index.get(id).map(|&i| &self.records[i])
    }

    /// All farm ids in insertion order.
    pub fn all_ids(&self) -> Vec<&str> {
        self.records.iter().map(|r| r.id.as_str()).collect()
    }

    /// All records in insertion order.
    pub fn records(&self) -> impl Iterator<Item = &FarmRecord> {
        self.records.iter()
    }

    /// The map boundary of a farm, if it has one.
    pub fn boundary(&self, id: &str) -> Option<&MapBoundary> {
        self.boundaries.iter().find(|b| b.farm_id == id)
    }

    pub fn boundaries(&self) -> &[MapBoundary] {
        &self.boundaries
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn sample_store_loads() {
        let store = FarmStore::sample().unwrap();
        assert_eq!(store.len(), 3);
        assert_eq!(store.boundaries().len(), 3);
    }

    #[test]
    fn sample_store_keeps_insertion_order() {
        let store = FarmStore::sample().unwrap();
        let names: Vec<&str> = store.records().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["Green Valley Farms", "Sunset Acres", "Riverbend Plots"]);
    }

    #[test]
    fn sample_farm_two_matches_fixture() {
        let store = FarmStore::sample().unwrap();
        let farm = store.get("2").unwrap();
        assert_eq!(farm.soil_type, "Sandy Loam");
        assert_eq!(farm.fertilizer, "NPK 10-20-20");
        assert_eq!(farm.last_irrigation, NaiveDate::from_ymd_opt(2025, 10, 20).unwrap());
        assert_eq!(farm.yield_series.labels(), ["2023", "2024", "2025 (Predicted)"]);
        assert_eq!(farm.yield_series.historical(), [Some(9.1), Some(8.9), None]);
        assert_eq!(farm.yield_series.predicted(), [None, None, Some(9.5)]);
        assert_eq!(farm.damage.labels(), ["Drought", "Pest", "Flood"]);
        assert_eq!(farm.damage.values(), [40.0, 15.0, 10.0]);
    }

    #[test]
    fn sample_series_are_aligned() {
        let store = FarmStore::sample().unwrap();
        for farm in store.records() {
            assert_eq!(farm.yield_series.len(), 3, "farm {}", farm.id);
            assert_eq!(farm.damage.len(), 3, "farm {}", farm.id);
        }
    }

    #[test]
    fn unknown_id_is_none() {
        let store = FarmStore::sample().unwrap();
        assert!(store.get("4").is_none());
        assert!(store.get("").is_none());
        assert!(store.boundary("4").is_none());
    }

    #[test]
    fn farm_without_boundary() {
        let store = FarmStore::from_csv(
            "ID,NAME,SOIL TYPE,CROP TYPE,LAST IRRIGATION,FERTILIZER\n\
             a,Alpha,Loam,Rye,2024-01-02,None\n\
             b,Beta,Loam,Rye,2024-01-03,None\n",
            "FARM ID,PERIOD,HISTORICAL,PREDICTED\n",
            "FARM ID,CATEGORY,VALUE\n",
            "FARM ID,X,Y,WIDTH,HEIGHT\nb,0,0,10,10\n",
        )
        .unwrap();
        assert!(store.boundary("a").is_none());
        assert_eq!(store.boundary("b").map(|b| b.width), Some(10.0));
        assert!(store.get("a").unwrap().yield_series.is_empty());
    }

    #[test]
    fn empty_store() {
        let store = FarmStore::default();
        assert!(store.is_empty());
        assert!(store.all_ids().is_empty());
    }
}
