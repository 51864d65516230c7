//! The two stacked drawing canvases.

use dioxus::prelude::*;

use crate::canvas::{BASE_CANVAS_ID, OVERLAY_CANVAS_ID};

/// Props for the [`CanvasStack`] component.
#[derive(Props, Clone, PartialEq)]
pub struct CanvasStackProps {
    /// Canvas width in pixels.
    width: u32,
    /// Canvas height in pixels.
    height: u32,
    /// Show the loading indicator over the canvases.
    busy: bool,
}

/// Base canvas with the overlay canvas positioned exactly on top.
///
/// The canvases are looked up by id when drawing, so their ids must not
/// change.
#[component]
pub fn CanvasStack(props: CanvasStackProps) -> Element {
    rsx! {
        div { class: "canvas-stack",
            style: "width: {props.width}px; height: {props.height}px;",
            canvas {
                id: BASE_CANVAS_ID,
                width: "{props.width}",
                height: "{props.height}",
            }
            canvas {
                id: OVERLAY_CANVAS_ID,
                class: "overlay",
                width: "{props.width}",
                height: "{props.height}",
            }
            if props.busy {
                div { class: "loading", role: "status", "Growing flowers..." }
            }
        }
    }
}
