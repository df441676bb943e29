//! Selectable farm list.

use crate::state::{AppState, FarmEntryView};
use dioxus::prelude::*;

/// Farm list rendered from AppState. Clicking a row selects that farm.
#[component]
pub fn FarmList() -> Element {
    let state = use_context::<AppState>();
    let entries = state.entries.read().clone();

    rsx! {
        ul {
            id: "farm-list",
            class: "farm-list",
            for entry in entries {
                FarmListItem { key: "{entry.farm_id}", entry: entry.clone() }
            }
        }
    }
}

#[component]
fn FarmListItem(entry: FarmEntryView) -> Element {
    let mut state = use_context::<AppState>();
    let class = if entry.selected { "selected" } else { "" };
    let style = if entry.visible { "" } else { "display: none;" };
    let farm_id = entry.farm_id.clone();

    rsx! {
        li {
            "data-farmid": "{entry.farm_id}",
            class: "{class}",
            style: "{style}",
            onclick: move |_| state.select_farm(&farm_id),
            "{entry.name}"
        }
    }
}
