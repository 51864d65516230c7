//! Request building from a snapshot of the form.

use serde::{Deserialize, Serialize};

use crate::catalog::{self, ShapeId};
use crate::types::{CATEGORY, DecorateError, DecorationRequest, ShapePayload};

/// The form state at the moment the user asked for a decoration.
///
/// Taken once per submission so later edits to the form cannot leak
/// into a request that is already under way.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormSnapshot {
    /// Selected shape.
    pub shape: ShapeId,
    /// Contents of the custom shape text box. Only read for
    /// [`ShapeId::Custom`].
    pub custom_text: String,
    /// Density slider value.
    pub density: u32,
}

impl FormSnapshot {
    /// Build the decoration request for this snapshot.
    ///
    /// # Errors
    ///
    /// See [`build_request`].
    pub fn build(&self) -> Result<DecorationRequest, DecorateError> {
        build_request(self.shape, &self.custom_text, self.density)
    }
}

/// Assemble a decoration request.
///
/// Catalog shapes come from [`catalog::descriptor`]; `Custom` parses
/// `custom_text` as JSON and forwards the object as-is. `density` and
/// the fixed [`CATEGORY`] are merged in either way.
///
/// # Errors
///
/// Returns [`DecorateError::InvalidCustomShape`] if the shape is custom
/// and `custom_text` is not a JSON object.
pub fn build_request(
    shape: ShapeId,
    custom_text: &str,
    density: u32,
) -> Result<DecorationRequest, DecorateError> {
    let shape = match shape {
        ShapeId::Custom => ShapePayload::Custom(parse_custom(custom_text)?),
        catalog_shape => ShapePayload::Catalog(catalog::descriptor(catalog_shape)),
    };
    Ok(DecorationRequest {
        shape,
        density,
        category: CATEGORY,
    })
}

fn parse_custom(
    text: &str,
) -> Result<serde_json::Map<String, serde_json::Value>, DecorateError> {
    match serde_json::from_str(text) {
        Ok(serde_json::Value::Object(map)) => Ok(map),
        Ok(other) => {
            log::debug!("custom shape is JSON but not an object: {other}");
            Err(DecorateError::InvalidCustomShape)
        }
        Err(e) => {
            log::debug!("custom shape is not valid JSON: {e}");
            Err(DecorateError::InvalidCustomShape)
        }
    }
}

/// Starter text for the custom shape box: a small right triangle.
pub const CUSTOM_SHAPE_EXAMPLE: &str =
    r#"{"type": "2d", "points": [[250, 150], [550, 450], [250, 450]]}"#;
