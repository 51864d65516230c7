//! PNG export of the decorated canvases.
//!
//! The base canvas and the overlay canvas are composited onto an
//! offscreen canvas, encoded with `toDataURL`, and downloaded by
//! programmatically clicking a temporary `<a download>` element.
//!
//! All functions in this module require a browser environment
//! (`wasm32-unknown-unknown` target).

use bloomline_shapes::DecorateError;
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use web_sys::HtmlCanvasElement;

use crate::canvas::{self, CanvasError};

/// Default name of the exported file.
pub const EXPORT_FILENAME: &str = "bloomline.png";

/// Errors that can occur when exporting the canvases.
#[derive(Debug, thiserror::Error)]
pub enum DownloadError {
    /// A canvas could not be found or drawn.
    #[error(transparent)]
    Canvas(#[from] CanvasError),

    /// A browser API call returned an error.
    #[error("browser API error: {0}")]
    JsError(String),
}

impl From<JsValue> for DownloadError {
    fn from(value: JsValue) -> Self {
        Self::JsError(format!("{value:?}"))
    }
}

impl From<DownloadError> for DecorateError {
    fn from(err: DownloadError) -> Self {
        Self::Render(err.to_string())
    }
}

/// Composite the canvases with ids `layer_ids` (bottom first) and
/// download the result as `filename`.
///
/// # Errors
///
/// Returns [`DownloadError::Canvas`] if a canvas is missing and
/// [`DownloadError::JsError`] if any other browser API call fails.
pub fn export_png(layer_ids: &[&str], filename: &str) -> Result<(), DownloadError> {
    let layers = layer_ids
        .iter()
        .map(|id| canvas::canvas_by_id(id))
        .collect::<Result<Vec<_>, _>>()?;
    let data_url = composite(&layers)?;
    trigger_download(&data_url, filename)
}

/// Draw `layers` in order onto a fresh canvas sized like the first
/// layer and return it as a PNG data URL.
fn composite(layers: &[HtmlCanvasElement]) -> Result<String, DownloadError> {
    let (width, height) = layers
        .first()
        .map_or((0, 0), |c| (c.width(), c.height()));

    let document = document()?;
    let target: HtmlCanvasElement = document
        .create_element("canvas")?
        .dyn_into()
        .map_err(|e| DownloadError::JsError(format!("failed to cast element: {e:?}")))?;
    target.set_width(width);
    target.set_height(height);

    let ctx = canvas::context_2d(&target)?;
    for layer in layers {
        ctx.draw_image_with_html_canvas_element(layer, 0.0, 0.0)?;
    }

    Ok(target.to_data_url_with_type("image/png")?)
}

/// Trigger a download of `href` in the browser.
///
/// Creates a temporary `<a download="filename">` element, clicks it,
/// and removes it again.
fn trigger_download(href: &str, filename: &str) -> Result<(), DownloadError> {
    let document = document()?;

    let anchor: web_sys::HtmlAnchorElement = document
        .create_element("a")?
        .dyn_into::<web_sys::HtmlAnchorElement>()
        .map_err(|e| DownloadError::JsError(format!("failed to cast element: {e:?}")))?;

    anchor.set_href(href);
    anchor.set_download(filename);

    let body = document
        .body()
        .ok_or_else(|| DownloadError::JsError("no document body".into()))?;
    body.append_child(&anchor)?;
    anchor.click();

    // The download has already started; a failed removal is not an
    // export failure.
    let _ = body.remove_child(&anchor);

    log::info!("exported {filename}");
    Ok(())
}

fn document() -> Result<web_sys::Document, DownloadError> {
    web_sys::window()
        .ok_or_else(|| DownloadError::JsError("no global window".into()))?
        .document()
        .ok_or_else(|| DownloadError::JsError("no document".into()))
}
