//! Error types for the dashboard controller.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DashboardError {
    /// The requested farm id is not in the store.
    #[error("unknown farm identifier: '{0}'")]
    UnknownFarm(String),

    /// The dashboard configuration could not be parsed.
    #[error("invalid dashboard config: {0}")]
    Config(#[from] serde_json::Error),
}
