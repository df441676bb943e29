//! The rendering surface the controller drives.
//!
//! Implementations own whatever toolkit they render with. The controller
//! only ever calls these methods, so its selection and filtering logic can
//! run against an in-memory surface in tests.

use crate::charts::{DamageChart, YieldChart};
use crate::chrome::{PanelState, Theme};
use crate::view::{ListEntry, Overview};
use farm_store::MapBoundary;

pub trait RenderPort {
    /// Replace the whole farm list. Every entry starts visible and unselected.
    fn render_list(&mut self, entries: &[ListEntry]);

    /// Show or hide the list entry of `farm_id`.
    fn set_list_visibility(&mut self, farm_id: &str, visible: bool);

    /// Replace the map placeholder's farm boundaries.
    fn render_map(&mut self, boundaries: &[MapBoundary]);

    fn render_overview(&mut self, overview: &Overview);

    /// Replace the yield chart's data wholesale and redraw.
    fn render_yield_chart(&mut self, chart: &YieldChart);

    /// Replace the damage chart's data wholesale and redraw.
    fn render_damage_chart(&mut self, chart: &DamageChart);

    /// Mark the list entry and map boundary of `farm_id` as selected and
    /// clear the marker from every other entry and boundary.
    fn set_selection_marker(&mut self, farm_id: &str);

    fn apply_theme(&mut self, theme: Theme);

    fn apply_panel(&mut self, panel: &str, state: PanelState);
}
