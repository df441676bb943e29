//! Ephemeral UI state owned by the dashboard controller.

use crate::chrome::{PanelState, Theme};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardState {
    /// Currently selected farm id.
    pub selected: Option<String>,
    /// Current search box contents.
    pub search_term: String,
    pub theme: Theme,
    /// Panels that have been toggled, keyed by content id. Absent means expanded.
    pub panels: BTreeMap<String, PanelState>,
}

impl DashboardState {
    pub fn panel_state(&self, panel: &str) -> PanelState {
        self.panels.get(panel).copied().unwrap_or_default()
    }
}
