//! `RenderPort` implementation backed by `AppState` signals.
//!
//! List, map, overview, theme and panel updates are signal writes that the
//! components re-render from. Chart updates go straight to Chart.js.

use crate::dom::apply_theme_attribute;
use crate::js_bridge::{render_chart, DAMAGE_CANVAS_ID, YIELD_CANVAS_ID};
use crate::state::{AppState, FarmEntryView, MapRegionView};
use dioxus::prelude::*;
use farm_dashboard::{DamageChart, ListEntry, Overview, PanelState, RenderPort, Theme, YieldChart};
use farm_store::MapBoundary;

pub struct SignalPort {
    state: AppState,
}

impl SignalPort {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }
}

impl RenderPort for SignalPort {
    fn render_list(&mut self, entries: &[ListEntry]) {
        let rows = entries
            .iter()
            .map(|e| FarmEntryView {
                farm_id: e.farm_id.clone(),
                name: e.name.clone(),
                selected: false,
                visible: true,
            })
            .collect();
        self.state.entries.set(rows);
    }

    fn set_list_visibility(&mut self, farm_id: &str, visible: bool) {
        for row in self.state.entries.write().iter_mut() {
            if row.farm_id == farm_id {
                row.visible = visible;
            }
        }
    }

    fn render_map(&mut self, boundaries: &[MapBoundary]) {
        let names: Vec<(String, String)> = self
            .state
            .entries
            .peek()
            .iter()
            .map(|e| (e.farm_id.clone(), e.name.clone()))
            .collect();
        let regions = boundaries
            .iter()
            .map(|b| MapRegionView {
                boundary: b.clone(),
                label: names
                    .iter()
                    .find(|(id, _)| *id == b.farm_id)
                    .map(|(_, name)| name.clone())
                    .unwrap_or_else(|| b.farm_id.clone()),
                highlighted: false,
            })
            .collect();
        self.state.regions.set(regions);
    }

    fn render_overview(&mut self, overview: &Overview) {
        self.state.overview.set(Some(overview.clone()));
    }

    fn render_yield_chart(&mut self, chart: &YieldChart) {
        render_chart(YIELD_CANVAS_ID, &chart.chart_config());
    }

    fn render_damage_chart(&mut self, chart: &DamageChart) {
        render_chart(DAMAGE_CANVAS_ID, &chart.chart_config());
    }

    fn set_selection_marker(&mut self, farm_id: &str) {
        for row in self.state.entries.write().iter_mut() {
            row.selected = row.farm_id == farm_id;
        }
        for region in self.state.regions.write().iter_mut() {
            region.highlighted = region.boundary.farm_id == farm_id;
        }
    }

    fn apply_theme(&mut self, theme: Theme) {
        self.state.theme.set(theme);
        apply_theme_attribute(theme);
    }

    fn apply_panel(&mut self, panel: &str, state: PanelState) {
        self.state.panels.write().insert(panel.to_string(), state);
    }
}
