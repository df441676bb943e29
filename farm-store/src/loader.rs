//! CSV loading functions for populating the farm store.
//!
//! Each loader parses CSV data from a string slice and appends to the
//! store. Farms must be loaded first; every other fixture refers to farms
//! by id and is rejected if the id is unknown.
//!
//! # CSV Formats
//!
//! - **Farms** (has headers): `ID,NAME,SOIL TYPE,CROP TYPE,LAST IRRIGATION,FERTILIZER`
//! - **Yield** (has headers): `FARM ID,PERIOD,HISTORICAL,PREDICTED`
//! - **Damage** (has headers): `FARM ID,CATEGORY,VALUE`
//! - **Boundaries** (has headers): `FARM ID,X,Y,WIDTH,HEIGHT`

use crate::models::{DamageBreakdown, FarmRecord, MapBoundary, YieldSeries};
use crate::FarmStore;
use anyhow::{bail, Context};
use farm_utils::dates::parse_date;

fn reader(csv_data: &str) -> csv::Reader<&[u8]> {
    csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(csv_data.as_bytes())
}

/// Parse an optional numeric cell. Blank and `null`-like cells are `None`.
/// Values must be finite.
fn parse_optional(cell: &str) -> anyhow::Result<Option<f64>> {
    let lowered = cell.trim().to_lowercase();
    match lowered.as_str() {
        "" | "null" | "n/a" | "na" => Ok(None),
        s => {
            let value = s
                .parse::<f64>()
                .with_context(|| format!("invalid number '{}'", cell.trim()))?;
            if !value.is_finite() {
                bail!("non-finite number '{}'", cell.trim());
            }
            Ok(Some(value))
        }
    }
}

fn parse_required(cell: &str) -> anyhow::Result<f64> {
    match parse_optional(cell)? {
        Some(v) => Ok(v),
        None => bail!("missing number"),
    }
}

impl FarmStore {
    /// Load farm descriptions.
    ///
    /// # Example CSV
    /// ```text
    /// ID,NAME,SOIL TYPE,CROP TYPE,LAST IRRIGATION,FERTILIZER
    /// 1,Green Valley Farms,Clay Loam,Wheat,2025-10-18,Urea
    /// ```
    pub(crate) fn load_farms(&mut self, csv_data: &str) -> anyhow::Result<()> {
        let mut rdr = reader(csv_data);
        for (row, result) in rdr.records().enumerate() {
            let r = result?;
            let id = r.get(0).unwrap_or("").trim();
            if id.is_empty() {
                bail!("farms row {}: empty farm id", row + 1);
            }
            if self.index.contains_key(id) {
                bail!("farms row {}: duplicate farm id '{}'", row + 1, id);
            }
            let last_irrigation = parse_date(r.get(4).unwrap_or(""))
                .with_context(|| format!("farms row {}: bad irrigation date for '{}'", row + 1, id))?;

            let record = FarmRecord {
                id: id.to_string(),
                name: r.get(1).unwrap_or("").trim().to_string(),
                soil_type: r.get(2).unwrap_or("").trim().to_string(),
                crop_type: r.get(3).unwrap_or("").trim().to_string(),
                last_irrigation,
                fertilizer: r.get(5).unwrap_or("").trim().to_string(),
                yield_series: YieldSeries::new(),
                damage: DamageBreakdown::new(),
            };
            self.index.insert(record.id.clone(), self.records.len());
            self.records.push(record);
        }
        log::info!("farm-store loader: loaded {} farms", self.records.len());
        Ok(())
    }

    fn record_mut(&mut self, id: &str, fixture: &str, row: usize) -> anyhow::Result<&mut FarmRecord> {
        match self.index.get(id) {
            Some(&i) => Ok(&mut self.records[i]),
            None => bail!("{} row {}: unknown farm id '{}'", fixture, row + 1, id),
        }
    }

    /// Load yield periods. Rows for the same farm are appended in file order.
    ///
    /// # Example CSV
    /// ```text
    /// FARM ID,PERIOD,HISTORICAL,PREDICTED
    /// 1,2024,7.8,
    /// 1,2025 (Predicted),,8.2
    /// ```
    pub(crate) fn load_yields(&mut self, csv_data: &str) -> anyhow::Result<()> {
        let mut rdr = reader(csv_data);
        let mut count = 0u32;
        for (row, result) in rdr.records().enumerate() {
            let r = result?;
            let id = r.get(0).unwrap_or("").trim();
            let period = r.get(1).unwrap_or("").trim();
            let historical = parse_optional(r.get(2).unwrap_or(""))
                .with_context(|| format!("yield row {}: historical value", row + 1))?;
            let predicted = parse_optional(r.get(3).unwrap_or(""))
                .with_context(|| format!("yield row {}: predicted value", row + 1))?;
            self.record_mut(id, "yield", row)?
                .yield_series
                .push(period, historical, predicted);
            count += 1;
        }
        log::info!("farm-store loader: loaded {} yield periods", count);
        Ok(())
    }

    /// Load damage categories. Rows for the same farm are appended in file order.
    pub(crate) fn load_damage(&mut self, csv_data: &str) -> anyhow::Result<()> {
        let mut rdr = reader(csv_data);
        let mut count = 0u32;
        for (row, result) in rdr.records().enumerate() {
            let r = result?;
            let id = r.get(0).unwrap_or("").trim();
            let category = r.get(1).unwrap_or("").trim();
            let value = parse_required(r.get(2).unwrap_or(""))
                .with_context(|| format!("damage row {}: value", row + 1))?;
            self.record_mut(id, "damage", row)?.damage.push(category, value);
            count += 1;
        }
        log::info!("farm-store loader: loaded {} damage categories", count);
        Ok(())
    }

    /// Load map boundaries. A farm has at most one boundary.
    pub(crate) fn load_boundaries(&mut self, csv_data: &str) -> anyhow::Result<()> {
        let mut rdr = reader(csv_data);
        for (row, result) in rdr.records().enumerate() {
            let r = result?;
            let id = r.get(0).unwrap_or("").trim();
            if !self.index.contains_key(id) {
                bail!("boundaries row {}: unknown farm id '{}'", row + 1, id);
            }
            if self.boundary(id).is_some() {
                bail!("boundaries row {}: second boundary for farm '{}'", row + 1, id);
            }
            let field = |i: usize, name: &str| {
                parse_required(r.get(i).unwrap_or(""))
                    .with_context(|| format!("boundaries row {}: {}", row + 1, name))
            };
            let boundary = MapBoundary {
                farm_id: id.to_string(),
                x: field(1, "x")?,
                y: field(2, "y")?,
                width: field(3, "width")?,
                height: field(4, "height")?,
            };
            self.boundaries.push(boundary);
        }
        log::info!("farm-store loader: loaded {} map boundaries", self.boundaries.len());
        Ok(())
    }
}
