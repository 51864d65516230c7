//! Browser image loading.
//!
//! Images are loaded through `HtmlImageElement`: set `src`, then wait for
//! `onload` or `onerror`. The wait is a JS `Promise` resolved from those
//! handlers and awaited with `wasm_bindgen_futures`, so many loads can be
//! in flight at once on the single browser thread.

use std::cell::RefCell;
use std::f64::consts::TAU;
use std::rc::Rc;

use bloomline_shapes::{ClientConfig, DecorateError, ImageLoadError, ImageLoader};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

/// Edge length of the generated fallback sprite in pixels.
const FALLBACK_SIZE: u32 = 100;

/// Fill color of the fallback sprite.
const FALLBACK_COLOR: &str = "red";

/// Errors from setting up image loading.
#[derive(Debug, thiserror::Error)]
pub enum ImageError {
    /// A browser API call returned an error.
    #[error("browser API error: {0}")]
    JsError(String),
}

impl From<JsValue> for ImageError {
    fn from(value: JsValue) -> Self {
        Self::JsError(format!("{value:?}"))
    }
}

impl From<ImageError> for DecorateError {
    fn from(err: ImageError) -> Self {
        Self::Render(err.to_string())
    }
}

/// Something that can be drawn onto a canvas.
#[derive(Debug, Clone)]
pub enum Sprite {
    /// A decoded image.
    Image(web_sys::HtmlImageElement),
    /// An offscreen canvas, used for the generated fallback.
    Canvas(web_sys::HtmlCanvasElement),
}

/// [`ImageLoader`] backed by `HtmlImageElement`.
pub struct BrowserImages {
    fallback: web_sys::HtmlCanvasElement,
}

impl BrowserImages {
    /// Create a loader, drawing the fallback sprite up front.
    ///
    /// # Errors
    ///
    /// Returns [`ImageError::JsError`] if the offscreen canvas cannot be
    /// created or drawn.
    pub fn new(config: &ClientConfig) -> Result<Self, ImageError> {
        Ok(Self {
            fallback: fallback_sprite(config.fallback_radius)?,
        })
    }
}

impl ImageLoader for BrowserImages {
    type Image = Sprite;

    #[allow(clippy::future_not_send)] // WASM is single-threaded; Send is not needed
    async fn load(&self, src: &str) -> Result<Sprite, ImageLoadError> {
        load_image(src)
            .await
            .map(Sprite::Image)
            .map_err(|reason| ImageLoadError {
                src: abbreviate(src),
                reason,
            })
    }

    fn fallback(&self) -> Sprite {
        Sprite::Canvas(self.fallback.clone())
    }
}

/// Load one image, resolving once it has decoded.
///
/// The error is a human-readable reason.
#[allow(clippy::future_not_send)] // WASM is single-threaded; Send is not needed
async fn load_image(src: &str) -> Result<web_sys::HtmlImageElement, String> {
    let image = web_sys::HtmlImageElement::new().map_err(|e| format!("{e:?}"))?;
    let (promise, resolve, reject) = new_promise();

    let onload = Closure::<dyn FnMut()>::new(move || {
        resolve.call0(&JsValue::NULL).ok();
    });
    let onerror = Closure::<dyn FnMut()>::new(move || {
        reject
            .call1(&JsValue::NULL, &JsValue::from_str("image failed to load"))
            .ok();
    });
    image.set_onload(Some(onload.as_ref().unchecked_ref()));
    image.set_onerror(Some(onerror.as_ref().unchecked_ref()));
    image.set_src(src);

    // Closures must outlive the await.
    let outcome = wasm_bindgen_futures::JsFuture::from(promise).await;

    image.set_onload(None);
    image.set_onerror(None);
    drop(onload);
    drop(onerror);

    match outcome {
        Ok(_) => Ok(image),
        Err(e) => Err(e.as_string().unwrap_or_else(|| "unknown error".into())),
    }
}

/// Draw the stand-in sprite: a filled red circle on a transparent
/// square canvas.
fn fallback_sprite(radius: f64) -> Result<web_sys::HtmlCanvasElement, ImageError> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| ImageError::JsError("no document".into()))?;
    let canvas: web_sys::HtmlCanvasElement = document
        .create_element("canvas")?
        .dyn_into()
        .map_err(|e| ImageError::JsError(format!("failed to cast element: {e:?}")))?;
    canvas.set_width(FALLBACK_SIZE);
    canvas.set_height(FALLBACK_SIZE);

    let ctx =
        crate::canvas::context_2d(&canvas).map_err(|e| ImageError::JsError(e.to_string()))?;
    let center = f64::from(FALLBACK_SIZE) / 2.0;
    ctx.begin_path();
    ctx.arc(center, center, radius, 0.0, TAU)?;
    ctx.set_fill_style_str(FALLBACK_COLOR);
    ctx.fill();

    Ok(canvas)
}

/// Shorten `data:` URIs for log and error messages.
fn abbreviate(src: &str) -> String {
    const KEEP: usize = 48;
    if src.starts_with("data:") && src.len() > KEEP {
        let cut = src
            .char_indices()
            .map(|(i, _)| i)
            .take_while(|&i| i <= KEEP)
            .last()
            .unwrap_or(0);
        format!("{}...", &src[..cut])
    } else {
        src.to_owned()
    }
}

/// Create a JS Promise along with its resolve and reject functions.
fn new_promise() -> (js_sys::Promise, js_sys::Function, js_sys::Function) {
    let resolve = Rc::new(RefCell::new(None::<js_sys::Function>));
    let reject = Rc::new(RefCell::new(None::<js_sys::Function>));
    let resolve_clone = Rc::clone(&resolve);
    let reject_clone = Rc::clone(&reject);

    let promise = js_sys::Promise::new(&mut move |res, rej| {
        *resolve_clone.borrow_mut() = Some(res);
        *reject_clone.borrow_mut() = Some(rej);
    });

    let resolve_fn = resolve
        .borrow_mut()
        .take()
        .expect_throw("resolve not captured");
    let reject_fn = reject
        .borrow_mut()
        .take()
        .expect_throw("reject not captured");

    (promise, resolve_fn, reject_fn)
}
