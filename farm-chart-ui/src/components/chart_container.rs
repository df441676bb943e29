//! Chart container component holding a Chart.js canvas.

use crate::js_bridge;
use dioxus::prelude::*;

/// Props for ChartContainer
#[derive(Props, Clone, PartialEq)]
pub struct ChartContainerProps {
    /// The DOM id of the canvas (Chart.js will draw into this)
    pub id: String,
    /// Optional minimum height in pixels
    #[props(default = 260)]
    pub min_height: u32,
}

/// A container div for a Chart.js canvas.
/// The chart bound to the canvas is destroyed when the container unmounts.
#[component]
pub fn ChartContainer(props: ChartContainerProps) -> Element {
    let canvas_id = props.id.clone();
    use_drop(move || js_bridge::destroy_chart(&canvas_id));

    let style = format!(
        "min-height: {}px; position: relative; width: 100%;",
        props.min_height
    );

    rsx! {
        div {
            style: "{style}",
            canvas {
                id: "{props.id}",
            }
        }
    }
}
