//! Farm Monitor
//!
//! Single-page dashboard over the embedded sample farms: a searchable farm
//! list, an overview panel, a yield bar chart, a damage doughnut chart and a
//! map placeholder, with a theme toggle and collapsible side panels.
//!
//! Data flow:
//! 1. `farm-store` embeds the fixture CSVs and builds the `FarmStore`.
//! 2. On mount: the `Dashboard` controller is installed in `AppState` and
//!    started with the embedded `dashboard.json` config, which renders the
//!    list and selects the default farm.
//! 3. Clicks and keystrokes call `AppState` actions, which run the
//!    controller against a `SignalPort`: signal writes re-render the RSX,
//!    chart updates go to Chart.js.

use farm_chart_ui::components::{
    ChartContainer, ChartHeader, ErrorDisplay, FarmList, LoadingSpinner, MapPlaceholder,
    OverviewPanel, SearchBox, SidePanel, ThemeToggle,
};
use farm_chart_ui::js_bridge::{self, DAMAGE_CANVAS_ID, YIELD_CANVAS_ID};
use farm_chart_ui::state::AppState;
use farm_chart_ui::styles::PAGE_CSS;
use farm_dashboard::{Dashboard, DashboardConfig};
use farm_store::FarmStore;
use dioxus::prelude::*;

const DASHBOARD_JSON: &str = include_str!("../../fixtures/dashboard.json");

/// Content ids of the side panels, used as their collapse state keys.
const FARM_LIST_PANEL: &str = "farm-list-content";
const OVERVIEW_PANEL: &str = "overview-content";

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    let config = load_config();
    let root_name = match &config {
        Ok(config) => config.root_name.clone(),
        Err(_) => DashboardConfig::default().root_name,
    };
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname(root_name))
        .with_context(config)
        .launch(App);
}

/// Parse the embedded dashboard config. Runs once in `main`; the result is
/// handed to `App` as root context.
fn load_config() -> Result<DashboardConfig, String> {
    DashboardConfig::from_json(DASHBOARD_JSON).map_err(|e| {
        log::error!("Falling back to default dashboard config: {}", e);
        e.to_string()
    })
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);
    let config = use_context::<Result<DashboardConfig, String>>();

    // ─── Load the store and run the initial render once on mount ───
    use_effect(move || {
        js_bridge::init_charts();

        let store = match FarmStore::sample() {
            Ok(store) => store,
            Err(e) => {
                log::error!("Failed to load farm data: {:#}", e);
                state
                    .error_msg
                    .set(Some(format!("Failed to load farm data: {}", e)));
                state.loading.set(false);
                return;
            }
        };

        let dashboard_config = config.clone().unwrap_or_default();
        state.start(Dashboard::new(store), &dashboard_config);
        if let Err(e) = &config {
            state.error_msg.set(Some(e.clone()));
        }
    });

    rsx! {
        style { {PAGE_CSS} }

        header {
            class: "app-header",
            h1 { "Farm Monitor" }
            ThemeToggle {}
        }

        if let Some(err) = state.error_msg.read().as_ref() {
            ErrorDisplay { message: err.clone() }
        }

        if *state.loading.read() {
            LoadingSpinner {}
        } else {
            div {
                class: "layout",
                aside {
                    class: "sidebar",
                    SidePanel {
                        title: "Farms".to_string(),
                        content_id: FARM_LIST_PANEL.to_string(),
                        SearchBox {}
                        FarmList {}
                    }
                    SidePanel {
                        title: "Overview".to_string(),
                        content_id: OVERVIEW_PANEL.to_string(),
                        OverviewPanel {}
                    }
                }

                section {
                    class: "main",
                    div {
                        class: "charts",
                        div {
                            class: "panel chart-card",
                            ChartHeader {
                                title: "Crop Yield".to_string(),
                                unit_description: "Tonnes per hectare (t/ha), historical and predicted".to_string(),
                            }
                            ChartContainer { id: YIELD_CANVAS_ID.to_string() }
                        }
                        div {
                            class: "panel chart-card",
                            ChartHeader {
                                title: "Crop Damage".to_string(),
                                unit_description: "Share of damage by cause (%)".to_string(),
                            }
                            ChartContainer { id: DAMAGE_CANVAS_ID.to_string() }
                        }
                    }

                    div {
                        class: "panel",
                        style: "padding: 14px;",
                        ChartHeader { title: "Farm Map".to_string() }
                        MapPlaceholder {}
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_config_parses() {
        let config = load_config().unwrap();
        assert_eq!(config.root_name, "farm-monitor-root");
        assert_eq!(config.default_farm, None);
    }

    #[test]
    fn index_html_has_configured_root() {
        let config = load_config().unwrap();
        let html = include_str!("../index.html");
        assert!(html.contains(&format!("id=\"{}\"", config.root_name)));
    }
}
