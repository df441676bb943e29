//! Overview cards for the selected farm.

use crate::state::AppState;
use dioxus::prelude::*;

#[component]
pub fn OverviewPanel() -> Element {
    let state = use_context::<AppState>();
    let Some(overview) = state.overview.read().clone() else {
        return rsx! {
            p { style: "color: var(--text-muted); margin: 0;", "No farm selected." }
        };
    };

    rsx! {
        div {
            class: "overview-grid",
            OverviewCard { label: "Farm", id: "farm-name-overview", value: overview.farm_name }
            OverviewCard { label: "Soil Type", id: "soil-type-overview", value: overview.soil_type }
            OverviewCard { label: "Crop Type", id: "crop-type-overview", value: overview.crop_type }
            OverviewCard { label: "Last Irrigation", id: "irrigation-overview", value: overview.last_irrigation }
            OverviewCard { label: "Fertilizer", id: "fertilizer-overview", value: overview.fertilizer }
        }
    }
}

#[component]
fn OverviewCard(label: &'static str, id: &'static str, value: String) -> Element {
    rsx! {
        div {
            class: "overview-card",
            div { class: "label", "{label}" }
            div { class: "value", id: "{id}", "{value}" }
        }
    }
}
