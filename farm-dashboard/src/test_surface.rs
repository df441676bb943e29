//! In-memory rendering surface for controller tests.
//!
//! Models the markup the web front end renders: list items with a
//! `selected` class and a display toggle, map boundaries with a
//! `highlighted` class, overview slots, chart data, the document theme
//! attribute and per-panel `collapsed` classes.

use crate::charts::{DamageChart, YieldChart};
use crate::chrome::{PanelState, Theme};
use crate::port::RenderPort;
use crate::view::{ListEntry, Overview};
use farm_store::MapBoundary;
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq)]
pub struct TestListItem {
    pub farm_id: String,
    pub name: String,
    pub selected: bool,
    pub visible: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TestRegion {
    pub farm_id: String,
    pub highlighted: bool,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TestSurface {
    pub list: Vec<TestListItem>,
    pub map: Vec<TestRegion>,
    pub overview: Option<Overview>,
    pub yield_chart: Option<YieldChart>,
    pub yield_redraws: usize,
    pub damage_chart: Option<DamageChart>,
    pub damage_redraws: usize,
    pub theme_attribute: Option<&'static str>,
    pub theme_icon: Option<&'static str>,
    /// Panel content id -> (collapsed, chevron)
    pub panels: BTreeMap<String, (bool, &'static str)>,
}

impl TestSurface {
    pub fn list_names(&self) -> Vec<&str> {
        self.list.iter().map(|i| i.name.as_str()).collect()
    }

    pub fn visible_names(&self) -> Vec<&str> {
        self.list
            .iter()
            .filter(|i| i.visible)
            .map(|i| i.name.as_str())
            .collect()
    }

    pub fn selected_entries(&self) -> Vec<&str> {
        self.list
            .iter()
            .filter(|i| i.selected)
            .map(|i| i.farm_id.as_str())
            .collect()
    }

    pub fn highlighted_regions(&self) -> Vec<&str> {
        self.map
            .iter()
            .filter(|r| r.highlighted)
            .map(|r| r.farm_id.as_str())
            .collect()
    }

    pub fn is_collapsed(&self, panel: &str) -> bool {
        self.panels.get(panel).map(|(c, _)| *c).unwrap_or(false)
    }

    pub fn chevron(&self, panel: &str) -> Option<&'static str> {
        self.panels.get(panel).map(|(_, chevron)| *chevron)
    }
}

impl RenderPort for TestSurface {
    fn render_list(&mut self, entries: &[ListEntry]) {
        self.list = entries
            .iter()
            .map(|e| TestListItem {
                farm_id: e.farm_id.clone(),
                name: e.name.clone(),
                selected: false,
                visible: true,
            })
            .collect();
    }

    fn set_list_visibility(&mut self, farm_id: &str, visible: bool) {
        for item in self.list.iter_mut().filter(|i| i.farm_id == farm_id) {
            item.visible = visible;
        }
    }

    fn render_map(&mut self, boundaries: &[MapBoundary]) {
        self.map = boundaries
            .iter()
            .map(|b| TestRegion {
                farm_id: b.farm_id.clone(),
                highlighted: false,
            })
            .collect();
    }

    fn render_overview(&mut self, overview: &Overview) {
        self.overview = Some(overview.clone());
    }

    fn render_yield_chart(&mut self, chart: &YieldChart) {
        self.yield_chart = Some(chart.clone());
        self.yield_redraws += 1;
    }

    fn render_damage_chart(&mut self, chart: &DamageChart) {
        self.damage_chart = Some(chart.clone());
        self.damage_redraws += 1;
    }

    fn set_selection_marker(&mut self, farm_id: &str) {
        for item in &mut self.list {
            item.selected = item.farm_id == farm_id;
        }
        for region in &mut self.map {
            region.highlighted = region.farm_id == farm_id;
        }
    }

    fn apply_theme(&mut self, theme: Theme) {
        self.theme_attribute = theme.data_theme();
        self.theme_icon = Some(theme.icon());
    }

    fn apply_panel(&mut self, panel: &str, state: PanelState) {
        self.panels
            .insert(panel.to_string(), (state.is_collapsed(), state.chevron()));
    }
}
