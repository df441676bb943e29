//! Dashboard controller for the farm monitor.
//!
//! This crate is independent of any UI toolkit:
//! - `controller`: [`Dashboard`], farm selection and list filtering
//! - `port`: the [`RenderPort`] trait a front end implements
//! - `charts`: yield/damage chart view-models in Chart.js shape
//! - `chrome`: theme and panel collapse state machines
//! - `config`: [`DashboardConfig`] parsed from JSON

pub mod charts;
pub mod chrome;
pub mod config;
mod controller;
mod error;
pub mod port;
pub mod state;
pub mod view;

#[cfg(test)]
mod test_surface;

pub use charts::{DamageChart, YieldChart};
pub use chrome::{PanelState, Theme};
pub use config::DashboardConfig;
pub use controller::Dashboard;
pub use error::DashboardError;
pub use port::RenderPort;
pub use state::DashboardState;
pub use view::{ListEntry, Overview};
