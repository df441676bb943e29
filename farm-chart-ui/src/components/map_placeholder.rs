//! Map placeholder with clickable farm boundaries.

use crate::state::{AppState, MapRegionView};
use dioxus::prelude::*;

#[component]
pub fn MapPlaceholder() -> Element {
    let state = use_context::<AppState>();
    let regions = state.regions.read().clone();

    rsx! {
        div {
            id: "map-placeholder",
            for region in regions {
                FarmBoundary { key: "{region.boundary.farm_id}", region: region.clone() }
            }
        }
    }
}

#[component]
fn FarmBoundary(region: MapRegionView) -> Element {
    let mut state = use_context::<AppState>();
    let b = &region.boundary;
    let class = if region.highlighted {
        "farm-boundary highlighted"
    } else {
        "farm-boundary"
    };
    let style = format!(
        "left: {}%; top: {}%; width: {}%; height: {}%;",
        b.x, b.y, b.width, b.height
    );
    let farm_id = b.farm_id.clone();

    rsx! {
        div {
            "data-farmid": "{b.farm_id}",
            class: "{class}",
            style: "{style}",
            title: "{region.label}",
            onclick: move |_| state.select_farm(&farm_id),
            "{region.label}"
        }
    }
}
