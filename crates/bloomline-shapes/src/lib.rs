//! bloomline-shapes: Shape geometry and decoration logic (sans-IO).
//!
//! A decoration goes through:
//! form snapshot -> request -> decoration service -> base image ->
//! flower overlay.
//!
//! This crate has **no I/O dependencies**. The service call, image
//! loading and canvas drawing are reached through the [`Decorate`],
//! [`ImageLoader`] and [`Surface`] traits; their browser implementations
//! live in `bloomline-io`.

pub mod catalog;
pub mod config;
pub mod decorate;
pub mod generate;
pub mod render;
pub mod request;
pub mod session;
pub mod types;
pub mod wire;

pub use catalog::ShapeId;
pub use config::{ClientConfig, DensityRange};
pub use decorate::{Decorate, interpret_response};
pub use render::{ImageLoader, Renderer, Surface};
pub use request::{CUSTOM_SHAPE_EXAMPLE, FormSnapshot, build_request};
pub use session::{BusyGuard, Phase, PhaseCell, submit};
pub use types::{
    CATEGORY, DecorateError, DecorationRequest, DecorationResponse, FlowerPlacement,
    ImageLoadError, Point, ShapeDescriptor, ShapePayload,
};
