//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with
//! `use_context::<AppState>()` and route user interactions through its
//! action methods, which run the [`Dashboard`] against a [`SignalPort`].

use crate::port::SignalPort;
use farm_dashboard::{Dashboard, DashboardConfig, DashboardError, Overview, PanelState, Theme};
use farm_store::MapBoundary;
use dioxus::prelude::*;
use std::collections::BTreeMap;

/// A rendered farm list row.
#[derive(Debug, Clone, PartialEq)]
pub struct FarmEntryView {
    pub farm_id: String,
    pub name: String,
    pub selected: bool,
    pub visible: bool,
}

/// A rendered farm boundary on the map placeholder.
#[derive(Debug, Clone, PartialEq)]
pub struct MapRegionView {
    pub boundary: MapBoundary,
    /// Farm name, used as the boundary's tooltip.
    pub label: String,
    pub highlighted: bool,
}

/// Shared application state for the farm monitor.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Dashboard controller (None until the store is loaded)
    pub dashboard: Signal<Option<Dashboard>>,
    /// Whether the app is still loading
    pub loading: Signal<bool>,
    /// Error message if something went wrong
    pub error_msg: Signal<Option<String>>,
    /// Farm list rows in store order
    pub entries: Signal<Vec<FarmEntryView>>,
    /// Map placeholder boundaries
    pub regions: Signal<Vec<MapRegionView>>,
    /// Overview card values of the selected farm
    pub overview: Signal<Option<Overview>>,
    /// Current search box contents
    pub search_term: Signal<String>,
    pub theme: Signal<Theme>,
    /// Panel states keyed by content id; absent means expanded
    pub panels: Signal<BTreeMap<String, PanelState>>,
}

impl AppState {
    /// Create a new AppState with default signal values.
    pub fn new() -> Self {
        Self {
            dashboard: Signal::new(None),
            loading: Signal::new(true),
            error_msg: Signal::new(None),
            entries: Signal::new(Vec::new()),
            regions: Signal::new(Vec::new()),
            overview: Signal::new(None),
            search_term: Signal::new(String::new()),
            theme: Signal::new(Theme::default()),
            panels: Signal::new(BTreeMap::new()),
        }
    }

    /// Install the controller and run its initial render.
    pub fn start(&mut self, dashboard: Dashboard, config: &DashboardConfig) {
        self.dashboard.set(Some(dashboard));
        let result = self.with_dashboard(|dashboard, port| dashboard.start(config, port));
        self.report(result);
        self.loading.set(false);
    }

    pub fn select_farm(&mut self, farm_id: &str) {
        let result = self.with_dashboard(|dashboard, port| dashboard.select_farm(farm_id, port));
        self.report(result);
    }

    pub fn filter_list(&mut self, term: String) {
        self.with_dashboard(|dashboard, port| dashboard.filter_list(&term, port));
        self.search_term.set(term);
    }

    pub fn toggle_theme(&mut self) {
        self.with_dashboard(|dashboard, port| dashboard.toggle_theme(port));
    }

    pub fn toggle_panel(&mut self, panel: &str) {
        self.with_dashboard(|dashboard, port| dashboard.toggle_panel(panel, port));
    }

    /// Run `f` against the controller and a port writing this state's signals.
    /// Returns `None` while no controller is installed.
    fn with_dashboard<R>(
        &mut self,
        f: impl FnOnce(&mut Dashboard, &mut SignalPort) -> R,
    ) -> Option<R> {
        let mut port = SignalPort::new(*self);
        let mut dashboard = self.dashboard.write();
        match &mut *dashboard {
            Some(d) => Some(f(d, &mut port)),
            None => None,
        }
    }

    fn report(&mut self, result: Option<Result<(), DashboardError>>) {
        match result {
            Some(Err(e)) => {
                log::error!("Dashboard error: {}", e);
                self.error_msg.set(Some(e.to_string()));
            }
            Some(Ok(())) => self.error_msg.set(None),
            None => {}
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
