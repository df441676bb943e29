//! Shared Dioxus components and Chart.js bridge for the farm monitor.
//!
//! This crate provides:
//! - `js_bridge`: Rust wrappers for Chart.js calls via `js_sys::eval()`
//! - `dom`: the document `data-theme` attribute
//! - `state`: Reactive AppState with Dioxus Signals, driving the dashboard
//! - `port`: `SignalPort`, the `RenderPort` that writes those signals
//! - `components`: Reusable RSX components (farm list, panels, charts, map)
//! - `styles`: the page stylesheet with light and dark palettes

pub mod components;
pub mod dom;
pub mod js_bridge;
pub mod port;
pub mod state;
pub mod styles;
