//! `<canvas>` drawing surfaces.

use bloomline_shapes::{DecorateError, Surface};
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::image::Sprite;

/// Element id of the canvas holding the generated base image.
pub const BASE_CANVAS_ID: &str = "flowerCanvas";

/// Element id of the canvas holding the flower sprites.
pub const OVERLAY_CANVAS_ID: &str = "overlay";

/// Errors from canvas lookup and drawing.
#[derive(Debug, thiserror::Error)]
pub enum CanvasError {
    /// No element with the requested id, or it is not a canvas.
    #[error("canvas #{0} not found")]
    NotFound(String),

    /// The canvas refused to hand out a 2D context.
    #[error("canvas has no 2d context")]
    NoContext,

    /// A browser API call returned an error.
    #[error("browser API error: {0}")]
    JsError(String),
}

impl From<JsValue> for CanvasError {
    fn from(value: JsValue) -> Self {
        Self::JsError(format!("{value:?}"))
    }
}

impl From<CanvasError> for DecorateError {
    fn from(err: CanvasError) -> Self {
        Self::Render(err.to_string())
    }
}

/// Get the 2D context of a canvas.
///
/// # Errors
///
/// [`CanvasError::NoContext`] if the canvas has no 2D context.
pub fn context_2d(canvas: &HtmlCanvasElement) -> Result<CanvasRenderingContext2d, CanvasError> {
    canvas
        .get_context("2d")?
        .ok_or(CanvasError::NoContext)?
        .dyn_into::<CanvasRenderingContext2d>()
        .map_err(|_| CanvasError::NoContext)
}

/// Look up a canvas element by id.
///
/// # Errors
///
/// [`CanvasError::NotFound`] if there is no such element or it is not a
/// `<canvas>`.
pub fn canvas_by_id(id: &str) -> Result<HtmlCanvasElement, CanvasError> {
    web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id))
        .and_then(|e| e.dyn_into::<HtmlCanvasElement>().ok())
        .ok_or_else(|| CanvasError::NotFound(id.to_owned()))
}

/// A [`Surface`] drawing onto a `<canvas>` through its 2D context.
pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    /// Wrap a canvas element.
    ///
    /// # Errors
    ///
    /// [`CanvasError::NoContext`] if the canvas has no 2D context.
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self, CanvasError> {
        let ctx = context_2d(&canvas)?;
        Ok(Self { canvas, ctx })
    }

    /// Wrap the canvas with the given element id.
    ///
    /// # Errors
    ///
    /// See [`canvas_by_id`] and [`CanvasSurface::new`].
    pub fn by_id(id: &str) -> Result<Self, CanvasError> {
        Self::new(canvas_by_id(id)?)
    }
}

impl Surface for CanvasSurface {
    type Image = Sprite;
    type Error = CanvasError;

    fn clear(&mut self) {
        self.ctx.clear_rect(
            0.0,
            0.0,
            f64::from(self.canvas.width()),
            f64::from(self.canvas.height()),
        );
    }

    fn save(&mut self) {
        self.ctx.save();
    }

    fn restore(&mut self) {
        self.ctx.restore();
    }

    fn translate(&mut self, x: f64, y: f64) -> Result<(), CanvasError> {
        Ok(self.ctx.translate(x, y)?)
    }

    fn rotate(&mut self, angle: f64) -> Result<(), CanvasError> {
        Ok(self.ctx.rotate(angle)?)
    }

    fn draw_image(&mut self, image: &Sprite, x: f64, y: f64) -> Result<(), CanvasError> {
        match image {
            Sprite::Image(img) => self.ctx.draw_image_with_html_image_element(img, x, y)?,
            Sprite::Canvas(canvas) => self.ctx.draw_image_with_html_canvas_element(canvas, x, y)?,
        }
        Ok(())
    }

    fn draw_image_in(
        &mut self,
        image: &Sprite,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    ) -> Result<(), CanvasError> {
        match image {
            Sprite::Image(img) => self
                .ctx
                .draw_image_with_html_image_element_and_dw_and_dh(img, x, y, width, height)?,
            Sprite::Canvas(canvas) => self
                .ctx
                .draw_image_with_html_canvas_element_and_dw_and_dh(canvas, x, y, width, height)?,
        }
        Ok(())
    }
}
