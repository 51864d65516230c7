//! Flower density slider.

use bloomline_shapes::DensityRange;
use dioxus::prelude::*;

/// Props for the [`DensitySlider`] component.
#[derive(Props, Clone, PartialEq)]
pub struct DensitySliderProps {
    /// Current density.
    value: u32,
    /// Slider bounds.
    range: DensityRange,
    /// Fired with the clamped value whenever the slider moves.
    on_change: EventHandler<u32>,
}

/// Labeled integer range input showing its current value.
#[component]
pub fn DensitySlider(props: DensitySliderProps) -> Element {
    let range = props.range;
    let on_change = props.on_change;

    rsx! {
        div { class: "density",
            div { class: "density-label",
                label { r#for: "density", "Density" }
                span { class: "density-value", "{props.value}" }
            }
            input {
                r#type: "range",
                id: "density",
                min: "{range.min}",
                max: "{range.max}",
                step: "1",
                value: "{props.value}",
                oninput: move |e| on_change.call(range.parse(&e.value())),
            }
        }
    }
}
