//! Generate and export buttons.

use bloomline_shapes::DecorateError;
use dioxus::prelude::*;

use crate::canvas::{BASE_CANVAS_ID, OVERLAY_CANVAS_ID};
use crate::download::{self, EXPORT_FILENAME};
use crate::notify;

/// Props for the [`Actions`] component.
#[derive(Props, Clone, PartialEq)]
pub struct ActionsProps {
    /// A submission is in flight; both buttons are disabled.
    busy: bool,
    /// Fired when the user asks for a new decoration.
    on_generate: EventHandler<()>,
}

/// "Generate" and "Download PNG" buttons.
///
/// Export runs entirely here: it composites the canvases and downloads
/// the result, reporting failures like any other error.
#[component]
pub fn Actions(props: ActionsProps) -> Element {
    let on_generate = props.on_generate;
    let busy = props.busy;

    let export_click = move |_| {
        if let Err(e) = download::export_png(&[BASE_CANVAS_ID, OVERLAY_CANVAS_ID], EXPORT_FILENAME)
        {
            notify::report(&DecorateError::from(e));
        }
    };

    rsx! {
        div { class: "actions",
            button {
                id: "generate",
                disabled: busy,
                onclick: move |_| on_generate.call(()),
                if busy { "Generating..." } else { "Generate" }
            }
            button {
                id: "export",
                disabled: busy,
                onclick: export_click,
                "Download PNG"
            }
        }
    }
}
