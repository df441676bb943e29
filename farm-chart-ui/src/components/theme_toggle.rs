//! Light/dark theme toggle button.

use crate::state::AppState;
use dioxus::prelude::*;

#[component]
pub fn ThemeToggle() -> Element {
    let mut state = use_context::<AppState>();
    let icon = format!("fas {}", (state.theme)().icon());

    rsx! {
        button {
            id: "theme-toggle",
            title: "Toggle theme",
            onclick: move |_| state.toggle_theme(),
            i { class: "{icon}" }
        }
    }
}
