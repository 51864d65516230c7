//! Shared types for the bloomline decoration round-trip.

use serde::{Deserialize, Serialize};

use crate::wire;

/// Category tag sent with every decoration request.
///
/// Opaque classification understood by the generation service.
pub const CATEGORY: &str = "77";

/// A 2D point in canvas pixel space (y grows downward).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// Horizontal position (pixels from left edge).
    pub x: f64,
    /// Vertical position (pixels from top edge).
    pub y: f64,
}

impl Point {
    /// Create a new point.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point.
    #[must_use]
    pub fn distance(self, other: Self) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx.hypot(dy)
    }

    /// Angle of `self` as seen from `origin`, in radians.
    ///
    /// Screen space: 0 points right, positive angles turn clockwise.
    #[must_use]
    pub fn angle_from(self, origin: Self) -> f64 {
        (self.y - origin.y).atan2(self.x - origin.x)
    }
}

/// A shape the generation service knows how to decorate.
///
/// Serialized with a `type` tag. Coordinates go on the wire as `[x, y]`
/// arrays.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ShapeDescriptor {
    /// A circle; the service samples its outline itself.
    #[serde(rename = "circle")]
    Circle {
        /// Circle center.
        #[serde(with = "wire::point")]
        center: Point,
        /// Circle radius in pixels.
        #[serde(serialize_with = "wire::number")]
        radius: f64,
    },

    /// An implicitly closed polygon given by its vertices.
    #[serde(rename = "2d")]
    Polygon {
        /// Vertices in drawing order.
        #[serde(with = "wire::points")]
        points: Vec<Point>,
    },
}

/// The shape part of a request: a catalog shape, or whatever object the
/// user typed into the custom shape box.
#[derive(Debug, Clone, PartialEq)]
pub enum ShapePayload {
    /// Descriptor produced by the shape catalog.
    Catalog(ShapeDescriptor),
    /// User-supplied JSON object, forwarded without validation.
    Custom(serde_json::Map<String, serde_json::Value>),
}

/// Body of `POST /api/decorate`.
///
/// Serializes as one flat JSON object: the shape fields plus `density`
/// and `category`. Those two keys always win over same-named keys in a
/// custom payload.
#[derive(Debug, Clone, PartialEq)]
pub struct DecorationRequest {
    /// The shape to decorate.
    pub shape: ShapePayload,
    /// Spacing between flowers along the outline, from the density slider.
    pub density: u32,
    /// Category tag, always [`CATEGORY`].
    pub category: &'static str,
}

impl DecorationRequest {
    /// Flatten into the JSON object that goes on the wire.
    ///
    /// # Errors
    ///
    /// Returns a serialization error if a catalog descriptor cannot be
    /// represented as a JSON object (never happens for well-formed
    /// descriptors).
    pub fn to_json_object(
        &self,
    ) -> Result<serde_json::Map<String, serde_json::Value>, serde_json::Error> {
        let mut object = match &self.shape {
            ShapePayload::Catalog(descriptor) => match serde_json::to_value(descriptor)? {
                serde_json::Value::Object(map) => map,
                other => {
                    return Err(serde::ser::Error::custom(format!(
                        "shape descriptor is not an object: {other}"
                    )));
                }
            },
            ShapePayload::Custom(map) => map.clone(),
        };
        object.insert("density".into(), self.density.into());
        object.insert("category".into(), self.category.into());
        Ok(object)
    }
}

impl Serialize for DecorationRequest {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_json_object()
            .map_err(serde::ser::Error::custom)?
            .serialize(serializer)
    }
}

/// One flower sprite placed along the decorated outline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlowerPlacement {
    /// Opaque sprite identifier, resolved via the image endpoint.
    pub image_id: String,
    /// Sprite center in canvas pixel space.
    pub position: Point,
    /// Rotation in radians, clockwise in screen space.
    pub angle: f64,
    /// Category echoed back by the service, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

/// Successful response of `POST /api/decorate`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DecorationResponse {
    /// Base image as a `data:` URI.
    pub generated_image: String,
    /// Sprites in draw order; later entries paint over earlier ones.
    pub flower_path: Vec<FlowerPlacement>,
}

/// Errors that can end a submission.
///
/// Every variant is caught at the top of the submission flow and shown
/// to the user; none of them is fatal to the page.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecorateError {
    /// The custom shape text is not a JSON object. Raised before any
    /// network traffic.
    #[error("Invalid JSON in custom shape data")]
    InvalidCustomShape,

    /// The service answered with a non-success status. Carries the
    /// response body verbatim.
    #[error("{0}")]
    Remote(String),

    /// The service answered successfully but the body is not a valid
    /// decoration response.
    #[error("malformed decoration response: {0}")]
    ResponseFormat(String),

    /// The request never got a response (network failure, CORS, ...).
    #[error("request failed: {0}")]
    Transport(String),

    /// Drawing the result failed.
    #[error("render failed: {0}")]
    Render(String),
}

/// A single image failed to load.
///
/// Sprite failures are recovered locally with a fallback image and are
/// never shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("failed to load image {src}: {reason}")]
pub struct ImageLoadError {
    /// The image source that failed (URL or data URI prefix).
    pub src: String,
    /// Why it failed.
    pub reason: String,
}
