//! Reusable Dioxus RSX components for the farm monitor.

mod chart_container;
mod chart_header;
mod error_display;
mod farm_list;
mod loading_spinner;
mod map_placeholder;
mod overview_panel;
mod search_box;
mod side_panel;
mod theme_toggle;

pub use chart_container::ChartContainer;
pub use chart_header::ChartHeader;
pub use error_display::ErrorDisplay;
pub use farm_list::FarmList;
pub use loading_spinner::LoadingSpinner;
pub use map_placeholder::MapPlaceholder;
pub use overview_panel::OverviewPanel;
pub use search_box::SearchBox;
pub use side_panel::SidePanel;
pub use theme_toggle::ThemeToggle;
