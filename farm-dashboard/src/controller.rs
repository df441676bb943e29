//! Farm selection and list filtering.

use crate::charts::{DamageChart, YieldChart};
use crate::chrome::{PanelState, Theme};
use crate::config::DashboardConfig;
use crate::error::DashboardError;
use crate::port::RenderPort;
use crate::state::DashboardState;
use crate::view::{ListEntry, Overview};
use farm_store::FarmStore;
use farm_utils::text::contains_ignore_case;

/// Owns the farm store and the dashboard's UI state, and pushes view-models
/// into a [`RenderPort`] in response to user interactions.
#[derive(Debug, Clone)]
pub struct Dashboard {
    store: FarmStore,
    state: DashboardState,
}

impl Dashboard {
    pub fn new(store: FarmStore) -> Self {
        Self {
            store,
            state: DashboardState::default(),
        }
    }

    pub fn selected(&self) -> Option<&str> {
        self.state.selected.as_deref()
    }

    pub fn search_term(&self) -> &str {
        &self.state.search_term
    }

    pub fn theme(&self) -> Theme {
        self.state.theme
    }

    pub fn panel_state(&self, panel: &str) -> PanelState {
        self.state.panel_state(panel)
    }

    /// Ids of the list entries the current search term leaves visible.
    pub fn visible_ids(&self) -> Vec<&str> {
        self.store
            .records()
            .filter(|r| contains_ignore_case(&r.name, &self.state.search_term))
            .map(|r| r.id.as_str())
            .collect()
    }

    /// Render the farm list and map boundaries, then reapply the current
    /// filter and selection marker on top of them.
    pub fn populate<P: RenderPort + ?Sized>(&self, port: &mut P) {
        let entries: Vec<ListEntry> = self.store.records().map(ListEntry::from).collect();
        port.render_list(&entries);
        port.render_map(self.store.boundaries());

        if !self.state.search_term.is_empty() {
            self.apply_filter(port);
        }
        if let Some(id) = &self.state.selected {
            port.set_selection_marker(id);
        }
    }

    /// Initial render: list, chrome from `config`, then the default farm.
    ///
    /// The default farm is `config.default_farm`, or the first farm in the
    /// store when none is configured. An empty store starts with nothing
    /// selected. An unknown configured farm is reported after the list and
    /// chrome have been rendered.
    pub fn start<P: RenderPort + ?Sized>(
        &mut self,
        config: &DashboardConfig,
        port: &mut P,
    ) -> Result<(), DashboardError> {
        self.populate(port);

        self.state.theme = config.theme;
        port.apply_theme(config.theme);
        for panel in &config.collapsed_panels {
            self.state
                .panels
                .insert(panel.clone(), PanelState::Collapsed);
            port.apply_panel(panel, PanelState::Collapsed);
        }

        let default_farm = match &config.default_farm {
            Some(id) => Some(id.clone()),
            None => self.store.all_ids().first().map(|id| id.to_string()),
        };
        log::info!(
            "dashboard: starting with {} farms, default farm {:?}",
            self.store.len(),
            default_farm
        );
        match default_farm {
            Some(id) => self.select_farm(&id, port),
            None => Ok(()),
        }
    }

    /// Show `farm_id` on the dashboard.
    ///
    /// Writes the overview fields, replaces both charts' data and moves the
    /// selection marker. An unknown id leaves state and views untouched.
    pub fn select_farm<P: RenderPort + ?Sized>(
        &mut self,
        farm_id: &str,
        port: &mut P,
    ) -> Result<(), DashboardError> {
        let record = match self.store.get(farm_id) {
            Some(record) => record,
            None => {
                log::warn!("dashboard: rejected selection of unknown farm '{}'", farm_id);
                return Err(DashboardError::UnknownFarm(farm_id.to_string()));
            }
        };

        port.render_overview(&Overview::from(record));
        port.render_yield_chart(&YieldChart::from_series(&record.yield_series));
        port.render_damage_chart(&DamageChart::from_breakdown(&record.damage));
        port.set_selection_marker(&record.id);

        log::debug!("dashboard: selected farm '{}'", record.id);
        self.state.selected = Some(record.id.clone());
        Ok(())
    }

    /// Hide every list entry whose name does not contain `term`,
    /// ignoring case. An empty term shows every entry.
    pub fn filter_list<P: RenderPort + ?Sized>(&mut self, term: &str, port: &mut P) {
        self.state.search_term = term.to_string();
        self.apply_filter(port);
    }

    fn apply_filter<P: RenderPort + ?Sized>(&self, port: &mut P) {
        let mut shown = 0usize;
        for record in self.store.records() {
            let visible = contains_ignore_case(&record.name, &self.state.search_term);
            if visible {
                shown += 1;
            }
            port.set_list_visibility(&record.id, visible);
        }
        log::debug!(
            "dashboard: filter '{}' shows {}/{} farms",
            self.state.search_term,
            shown,
            self.store.len()
        );
    }

    /// Flip between light and dark. Returns the new theme.
    pub fn toggle_theme<P: RenderPort + ?Sized>(&mut self, port: &mut P) -> Theme {
        self.state.theme = self.state.theme.toggled();
        port.apply_theme(self.state.theme);
        self.state.theme
    }

    /// Collapse or expand one panel. Other panels are unaffected.
    pub fn toggle_panel<P: RenderPort + ?Sized>(&mut self, panel: &str, port: &mut P) -> PanelState {
        let next = self.state.panel_state(panel).toggled();
        self.state.panels.insert(panel.to_string(), next);
        port.apply_panel(panel, next);
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_surface::TestSurface;
    use farm_utils::dates::format_date;

    const NAMES: [&str; 3] = ["Green Valley Farms", "Sunset Acres", "Riverbend Plots"];

    fn started() -> (Dashboard, TestSurface) {
        let mut dashboard = Dashboard::new(FarmStore::sample().unwrap());
        let mut surface = TestSurface::default();
        dashboard
            .start(&DashboardConfig::default(), &mut surface)
            .unwrap();
        (dashboard, surface)
    }

    #[test]
    fn start_selects_first_farm() {
        let (dashboard, surface) = started();
        assert_eq!(dashboard.selected(), Some("1"));
        assert_eq!(surface.list_names(), NAMES);
        assert_eq!(surface.selected_entries(), ["1"]);
        assert_eq!(surface.overview.as_ref().unwrap().farm_name, "Green Valley Farms");
        assert_eq!(surface.theme_attribute, None);
        assert_eq!(surface.theme_icon, Some("fa-moon"));
    }

    #[test]
    fn start_applies_config() {
        let mut dashboard = Dashboard::new(FarmStore::sample().unwrap());
        let mut surface = TestSurface::default();
        let config = DashboardConfig {
            default_farm: Some("3".to_string()),
            theme: Theme::Dark,
            collapsed_panels: vec!["overview-content".to_string()],
            ..DashboardConfig::default()
        };
        dashboard.start(&config, &mut surface).unwrap();
        assert_eq!(dashboard.selected(), Some("3"));
        assert_eq!(surface.theme_attribute, Some("dark"));
        assert!(surface.is_collapsed("overview-content"));
        assert_eq!(dashboard.panel_state("overview-content"), PanelState::Collapsed);
        assert_eq!(dashboard.panel_state("farm-list-content"), PanelState::Expanded);
    }

    #[test]
    fn start_with_unknown_default_farm_still_renders_list() {
        let mut dashboard = Dashboard::new(FarmStore::sample().unwrap());
        let mut surface = TestSurface::default();
        let config = DashboardConfig {
            default_farm: Some("9".to_string()),
            ..DashboardConfig::default()
        };
        let err = dashboard.start(&config, &mut surface).unwrap_err();
        assert!(matches!(err, DashboardError::UnknownFarm(id) if id == "9"));
        assert_eq!(surface.list.len(), 3);
        assert!(surface.overview.is_none());
        assert_eq!(dashboard.selected(), None);
    }

    #[test]
    fn start_with_empty_store_selects_nothing() {
        let mut dashboard = Dashboard::new(FarmStore::default());
        let mut surface = TestSurface::default();
        dashboard
            .start(&DashboardConfig::default(), &mut surface)
            .unwrap();
        assert_eq!(dashboard.selected(), None);
        assert!(surface.list.is_empty());
        assert!(surface.yield_chart.is_none());
    }

    #[test]
    fn select_updates_overview_for_every_farm() {
        let (mut dashboard, mut surface) = started();
        let store = FarmStore::sample().unwrap();
        for record in store.records() {
            dashboard.select_farm(&record.id, &mut surface).unwrap();
            let overview = surface.overview.as_ref().unwrap();
            assert_eq!(overview.farm_name, record.name);
            assert_eq!(overview.soil_type, record.soil_type);
            assert_eq!(overview.crop_type, record.crop_type);
            assert_eq!(overview.last_irrigation, format_date(&record.last_irrigation));
            assert_eq!(overview.fertilizer, record.fertilizer);
        }
    }

    #[test]
    fn select_marks_exactly_one_entry_for_every_farm() {
        let (mut dashboard, mut surface) = started();
        for id in ["1", "2", "3", "1"] {
            dashboard.select_farm(id, &mut surface).unwrap();
            assert_eq!(surface.selected_entries(), [id]);
            assert_eq!(surface.highlighted_regions(), [id]);
            assert_eq!(dashboard.selected(), Some(id));
        }
    }

    #[test]
    fn select_farm_two_scenario() {
        let (mut dashboard, mut surface) = started();
        dashboard.select_farm("2", &mut surface).unwrap();
        assert_eq!(surface.overview.as_ref().unwrap().crop_type, "Corn");
        let chart = surface.yield_chart.as_ref().unwrap();
        assert_eq!(chart.labels, ["2023", "2024", "2025 (Predicted)"]);
        assert_eq!(chart.historical.data, [Some(9.1), Some(8.9), None]);
        assert_eq!(chart.predicted.data, [None, None, Some(9.5)]);
        let damage = surface.damage_chart.as_ref().unwrap();
        assert_eq!(damage.dataset.data, [40.0, 15.0, 10.0]);
    }

    #[test]
    fn select_redraws_both_charts() {
        let (mut dashboard, mut surface) = started();
        let (yields, damages) = (surface.yield_redraws, surface.damage_redraws);
        dashboard.select_farm("3", &mut surface).unwrap();
        assert_eq!(surface.yield_redraws, yields + 1);
        assert_eq!(surface.damage_redraws, damages + 1);
    }

    #[test]
    fn select_unknown_farm_is_error_and_touches_nothing() {
        let (mut dashboard, mut surface) = started();
        let before = surface.clone();
        let err = dashboard.select_farm("42", &mut surface).unwrap_err();
        assert_eq!(err.to_string(), "unknown farm identifier: '42'");
        assert_eq!(surface, before);
        assert_eq!(dashboard.selected(), Some("1"));

        assert!(dashboard.select_farm("", &mut surface).is_err());
        assert_eq!(surface, before);
    }

    #[test]
    fn farm_without_boundary_has_no_highlight() {
        let store = FarmStore::from_csv(
            "ID,NAME,SOIL TYPE,CROP TYPE,LAST IRRIGATION,FERTILIZER\n\
             a,Alpha,Loam,Rye,2024-01-02,None\n\
             b,Beta,Loam,Rye,2024-01-03,None\n",
            "FARM ID,PERIOD,HISTORICAL,PREDICTED\n",
            "FARM ID,CATEGORY,VALUE\n",
            "FARM ID,X,Y,WIDTH,HEIGHT\nb,0,0,10,10\n",
        )
        .unwrap();
        let mut dashboard = Dashboard::new(store);
        let mut surface = TestSurface::default();
        dashboard
            .start(&DashboardConfig::default(), &mut surface)
            .unwrap();
        assert_eq!(surface.selected_entries(), ["a"]);
        assert!(surface.highlighted_regions().is_empty());

        dashboard.select_farm("b", &mut surface).unwrap();
        assert_eq!(surface.highlighted_regions(), ["b"]);
    }

    #[test]
    fn empty_filter_shows_all() {
        let (mut dashboard, mut surface) = started();
        dashboard.filter_list("river", &mut surface);
        dashboard.filter_list("", &mut surface);
        assert_eq!(surface.visible_names(), NAMES);
        assert_eq!(dashboard.visible_ids(), ["1", "2", "3"]);
    }

    #[test]
    fn filter_is_case_insensitive_substring() {
        let (mut dashboard, mut surface) = started();
        dashboard.filter_list("acre", &mut surface);
        assert_eq!(surface.visible_names(), ["Sunset Acres"]);
        assert_eq!(dashboard.visible_ids(), ["2"]);

        dashboard.filter_list("FARMS", &mut surface);
        assert_eq!(surface.visible_names(), ["Green Valley Farms"]);

        dashboard.filter_list("zzz", &mut surface);
        assert!(surface.visible_names().is_empty());
        assert_eq!(dashboard.search_term(), "zzz");
    }

    #[test]
    fn filter_keeps_selection() {
        let (mut dashboard, mut surface) = started();
        dashboard.filter_list("acre", &mut surface);
        assert_eq!(dashboard.selected(), Some("1"));
        assert_eq!(surface.selected_entries(), ["1"]);
    }

    #[test]
    fn populate_reapplies_filter_and_selection() {
        let (mut dashboard, mut surface) = started();
        dashboard.select_farm("3", &mut surface).unwrap();
        dashboard.filter_list("plots", &mut surface);

        let mut fresh = TestSurface::default();
        dashboard.populate(&mut fresh);
        assert_eq!(fresh.visible_names(), ["Riverbend Plots"]);
        assert_eq!(fresh.selected_entries(), ["3"]);
        assert_eq!(fresh.highlighted_regions(), ["3"]);
    }

    #[test]
    fn theme_toggle_twice_restores_surface() {
        let (mut dashboard, mut surface) = started();
        let before = surface.clone();
        assert_eq!(dashboard.toggle_theme(&mut surface), Theme::Dark);
        assert_eq!(surface.theme_attribute, Some("dark"));
        assert_eq!(surface.theme_icon, Some("fa-sun"));
        assert_eq!(dashboard.toggle_theme(&mut surface), Theme::Light);
        assert_eq!(surface, before);
        assert_eq!(dashboard.theme(), Theme::Light);
    }

    #[test]
    fn panel_toggle_twice_restores_and_is_independent() {
        let (mut dashboard, mut surface) = started();
        assert_eq!(
            dashboard.toggle_panel("farm-list-content", &mut surface),
            PanelState::Collapsed
        );
        assert!(surface.is_collapsed("farm-list-content"));
        assert!(!surface.is_collapsed("overview-content"));
        assert_eq!(surface.chevron("farm-list-content"), Some("fa-chevron-up"));

        assert_eq!(
            dashboard.toggle_panel("farm-list-content", &mut surface),
            PanelState::Expanded
        );
        assert!(!surface.is_collapsed("farm-list-content"));
        assert_eq!(surface.chevron("farm-list-content"), Some("fa-chevron-down"));
        assert_eq!(dashboard.panel_state("overview-content"), PanelState::Expanded);
    }
}
