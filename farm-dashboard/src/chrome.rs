//! Theme and panel collapse state machines.
//!
//! Both have two states and a single transition. The glyph helpers return
//! the Font Awesome class the toggle button/header should show.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Icon of the toggle button: a moon while light, a sun while dark.
    pub fn icon(self) -> &'static str {
        match self {
            Theme::Light => "fa-moon",
            Theme::Dark => "fa-sun",
        }
    }

    /// Value of the document's `data-theme` attribute. Light removes it.
    pub fn data_theme(self) -> Option<&'static str> {
        match self {
            Theme::Light => None,
            Theme::Dark => Some("dark"),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PanelState {
    #[default]
    Expanded,
    Collapsed,
}

impl PanelState {
    pub fn toggled(self) -> Self {
        match self {
            PanelState::Expanded => PanelState::Collapsed,
            PanelState::Collapsed => PanelState::Expanded,
        }
    }

    pub fn is_collapsed(self) -> bool {
        self == PanelState::Collapsed
    }

    /// Chevron of the panel header.
    pub fn chevron(self) -> &'static str {
        match self {
            PanelState::Expanded => "fa-chevron-down",
            PanelState::Collapsed => "fa-chevron-up",
        }
    }
}
