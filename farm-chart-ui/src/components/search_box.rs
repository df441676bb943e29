//! Farm search input.

use crate::state::AppState;
use dioxus::prelude::*;

/// Text input that filters the farm list on every keystroke.
#[component]
pub fn SearchBox() -> Element {
    let mut state = use_context::<AppState>();
    let term = (state.search_term)();

    let on_input = move |evt: Event<FormData>| {
        state.filter_list(evt.value());
    };

    rsx! {
        input {
            id: "farm-search",
            r#type: "text",
            placeholder: "Search farms...",
            value: "{term}",
            oninput: on_input,
        }
    }
}
