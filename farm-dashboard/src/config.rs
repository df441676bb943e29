//! Dashboard configuration, parsed from the embedded `dashboard.json`.

use crate::chrome::Theme;
use crate::error::DashboardError;
use serde::Deserialize;

fn default_root_name() -> String {
    "farm-monitor-root".to_string()
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DashboardConfig {
    /// Farm selected at start; the first farm in the store if `None`.
    pub default_farm: Option<String>,
    /// Initial theme.
    pub theme: Theme,
    /// Panel content ids that start collapsed.
    pub collapsed_panels: Vec<String>,
    /// DOM element the web app mounts into.
    pub root_name: String,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            default_farm: None,
            theme: Theme::Light,
            collapsed_panels: Vec::new(),
            root_name: default_root_name(),
        }
    }
}

impl DashboardConfig {
    pub fn from_json(json: &str) -> Result<Self, DashboardError> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_is_default() {
        let config = DashboardConfig::from_json("{}").unwrap();
        assert_eq!(config, DashboardConfig::default());
        assert_eq!(config.root_name, "farm-monitor-root");
    }

    #[test]
    fn parses_all_fields() {
        let config = DashboardConfig::from_json(
            r#"{"defaultFarm":"3","theme":"dark","collapsedPanels":["overview-content"],"rootName":"app"}"#,
        )
        .unwrap();
        assert_eq!(config.default_farm.as_deref(), Some("3"));
        assert_eq!(config.theme, Theme::Dark);
        assert_eq!(config.collapsed_panels, ["overview-content"]);
        assert_eq!(config.root_name, "app");
    }

    #[test]
    fn bad_json_is_config_error() {
        let err = DashboardConfig::from_json("{\"theme\": \"sepia\"}").unwrap_err();
        assert!(matches!(err, DashboardError::Config(_)));
    }
}
