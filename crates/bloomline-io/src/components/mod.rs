//! Dioxus UI components for bloomline.
//!
//! Provides the shape picker with its custom JSON editor, the density
//! slider, the stacked drawing canvases, and the generate/export buttons.

mod actions;
mod canvas_stack;
mod density_slider;
mod shape_picker;

pub use actions::Actions;
pub use canvas_stack::CanvasStack;
pub use density_slider::DensitySlider;
pub use shape_picker::{ShapePicker, custom_visible};
