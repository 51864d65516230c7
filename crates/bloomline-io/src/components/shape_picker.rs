//! Shape selection controls.
//!
//! A radio group with one entry per [`ShapeId`], plus a textarea for the
//! custom shape JSON that is only shown while `Custom` is selected.

use bloomline_shapes::ShapeId;
use dioxus::prelude::*;

/// Props for the [`ShapePicker`] component.
#[derive(Props, Clone, PartialEq)]
pub struct ShapePickerProps {
    /// Currently selected shape.
    selected: ShapeId,
    /// Current contents of the custom shape textarea.
    custom_text: String,
    /// Fired when a different shape is chosen.
    on_select: EventHandler<ShapeId>,
    /// Fired on every edit of the custom shape text.
    on_custom_change: EventHandler<String>,
}

/// Radio list of shapes with the custom JSON editor.
#[component]
pub fn ShapePicker(props: ShapePickerProps) -> Element {
    let on_select = props.on_select;
    let on_custom_change = props.on_custom_change;
    let show_custom = custom_visible(props.selected);

    rsx! {
        fieldset { class: "shape-picker",
            legend { "Shape" }
            for shape in ShapeId::ALL {
                label { key: "{shape.key()}", class: "shape-option",
                    input {
                        r#type: "radio",
                        name: "shape",
                        value: "{shape.key()}",
                        checked: shape == props.selected,
                        onchange: move |_| on_select.call(shape),
                    }
                    "{shape.label()}"
                }
            }
        }
        if show_custom {
            div { class: "custom-shape",
                label { r#for: "customShapeData", "Custom shape JSON" }
                textarea {
                    id: "customShapeData",
                    rows: "6",
                    spellcheck: "false",
                    value: "{props.custom_text}",
                    oninput: move |e| on_custom_change.call(e.value()),
                }
            }
        }
    }
}

/// Whether the custom JSON editor is shown for `selected`.
#[must_use]
pub const fn custom_visible(selected: ShapeId) -> bool {
    matches!(selected, ShapeId::Custom)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_custom_shows_editor() {
        for shape in ShapeId::ALL {
            assert_eq!(custom_visible(shape), shape == ShapeId::Custom, "{shape}");
        }
    }
}
