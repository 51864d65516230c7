//! bloomline-io: Browser I/O and Dioxus component library.
//!
//! Handles the decoration service round-trip, image loading, canvas
//! drawing, PNG export and error notification, and provides the UI
//! components for the bloomline web application.

pub mod canvas;
pub mod client;
pub mod components;
pub mod download;
pub mod image;
pub mod notify;

pub use canvas::{BASE_CANVAS_ID, CanvasError, CanvasSurface, OVERLAY_CANVAS_ID};
pub use client::HttpDecorator;
pub use components::{Actions, CanvasStack, DensitySlider, ShapePicker};
pub use download::DownloadError;
pub use image::{BrowserImages, ImageError, Sprite};
