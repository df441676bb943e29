//! Collapsible side panel.

use crate::state::AppState;
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct SidePanelProps {
    pub title: String,
    /// DOM id of the collapsible content; also the panel's state key
    pub content_id: String,
    pub children: Element,
}

/// Panel whose content collapses when the header is clicked.
#[component]
pub fn SidePanel(props: SidePanelProps) -> Element {
    let mut state = use_context::<AppState>();
    let panel_state = state
        .panels
        .read()
        .get(&props.content_id)
        .copied()
        .unwrap_or_default();
    let chevron = format!("fas {}", panel_state.chevron());
    let content_class = if panel_state.is_collapsed() {
        "panel-content collapsed"
    } else {
        "panel-content"
    };
    let panel = props.content_id.clone();

    rsx! {
        div {
            class: "panel",
            div {
                class: "panel-header",
                "data-toggle": "{props.content_id}",
                onclick: move |_| state.toggle_panel(&panel),
                h3 { "{props.title}" }
                i { class: "{chevron}" }
            }
            div {
                id: "{props.content_id}",
                class: "{content_class}",
                {props.children}
            }
        }
    }
}
