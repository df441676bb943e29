//! View-models pushed through the [`RenderPort`](crate::RenderPort).

use farm_store::FarmRecord;
use farm_utils::dates::format_date;
use serde::Serialize;

/// Scalar fields shown in the overview cards.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Overview {
    pub farm_name: String,
    pub soil_type: String,
    pub crop_type: String,
    /// `YYYY-MM-DD`
    pub last_irrigation: String,
    pub fertilizer: String,
}

impl From<&FarmRecord> for Overview {
    fn from(record: &FarmRecord) -> Self {
        Self {
            farm_name: record.name.clone(),
            soil_type: record.soil_type.clone(),
            crop_type: record.crop_type.clone(),
            last_irrigation: format_date(&record.last_irrigation),
            fertilizer: record.fertilizer.clone(),
        }
    }
}

/// One selectable row of the farm list.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ListEntry {
    pub farm_id: String,
    pub name: String,
}

impl From<&FarmRecord> for ListEntry {
    fn from(record: &FarmRecord) -> Self {
        Self {
            farm_id: record.id.clone(),
            name: record.name.clone(),
        }
    }
}
