//! Drawing a decoration result.
//!
//! Two passes, run in order:
//!
//! 1. **Base pass**: the generated image goes onto the primary surface at
//!    the origin.
//! 2. **Overlay pass**: every sprite in the flower path is loaded
//!    concurrently, then drawn onto the overlay surface in path order.
//!    A sprite that fails to load is replaced by the loader's fallback
//!    image so one bad sprite never blanks the rest of the path.
//!
//! The browser canvas and image loading are behind the [`Surface`] and
//! [`ImageLoader`] traits; this module only decides what to draw and in
//! which order.

use std::fmt::Display;

use futures::future::join_all;

use crate::config::ClientConfig;
use crate::types::{DecorateError, DecorationResponse, FlowerPlacement, ImageLoadError};

/// A 2D drawing target with a transform stack, modeled on the canvas
/// 2D context.
pub trait Surface {
    /// Image type this surface can draw.
    type Image;
    /// Error reported by fallible drawing calls.
    type Error: Display;

    /// Erase the whole surface.
    fn clear(&mut self);

    /// Push the current transform.
    fn save(&mut self);

    /// Pop the transform pushed by the matching [`save`](Self::save).
    fn restore(&mut self);

    /// Move the origin.
    ///
    /// # Errors
    ///
    /// Backend-specific failure.
    fn translate(&mut self, x: f64, y: f64) -> Result<(), Self::Error>;

    /// Rotate around the current origin, clockwise in screen space.
    ///
    /// # Errors
    ///
    /// Backend-specific failure.
    fn rotate(&mut self, angle: f64) -> Result<(), Self::Error>;

    /// Draw `image` at its natural size with its top-left corner at
    /// `(x, y)`.
    ///
    /// # Errors
    ///
    /// Backend-specific failure.
    fn draw_image(&mut self, image: &Self::Image, x: f64, y: f64) -> Result<(), Self::Error>;

    /// Draw `image` scaled into the box `(x, y, width, height)`.
    ///
    /// # Errors
    ///
    /// Backend-specific failure.
    fn draw_image_in(
        &mut self,
        image: &Self::Image,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    ) -> Result<(), Self::Error>;
}

/// Loads images by URL (or `data:` URI).
#[allow(async_fn_in_trait)] // WASM is single-threaded; futures need not be Send
pub trait ImageLoader {
    /// Loaded image type.
    type Image;

    /// Load one image, resolving once it has decoded or failed.
    ///
    /// # Errors
    ///
    /// [`ImageLoadError`] when the image cannot be fetched or decoded.
    async fn load(&self, src: &str) -> Result<Self::Image, ImageLoadError>;

    /// Image drawn in place of a sprite that failed to load.
    fn fallback(&self) -> Self::Image;
}

/// Draws decoration responses using an [`ImageLoader`].
pub struct Renderer<'a, L> {
    loader: &'a L,
    config: &'a ClientConfig,
}

impl<'a, L: ImageLoader> Renderer<'a, L> {
    /// Create a renderer.
    #[must_use]
    pub const fn new(loader: &'a L, config: &'a ClientConfig) -> Self {
        Self { loader, config }
    }

    /// Run the base pass then the overlay pass.
    ///
    /// # Errors
    ///
    /// [`DecorateError::Render`] if the base image cannot be decoded or a
    /// surface call fails. Sprite load failures are not errors.
    pub async fn render<S>(
        &self,
        response: &DecorationResponse,
        base: &mut S,
        overlay: &mut S,
    ) -> Result<(), DecorateError>
    where
        S: Surface<Image = L::Image>,
    {
        self.draw_base(&response.generated_image, base).await?;
        self.draw_flower_path(&response.flower_path, overlay).await
    }

    /// Decode the generated image and paint it at the origin.
    ///
    /// The surface is cleared only once the image has decoded, so a
    /// failed decode leaves the previous picture in place.
    ///
    /// # Errors
    ///
    /// [`DecorateError::Render`] if decoding or drawing fails.
    pub async fn draw_base<S>(&self, data_uri: &str, surface: &mut S) -> Result<(), DecorateError>
    where
        S: Surface<Image = L::Image>,
    {
        let image = self.loader.load(data_uri).await.map_err(|e| {
            DecorateError::Render(format!("could not decode generated image: {}", e.reason))
        })?;
        surface.clear();
        surface.draw_image(&image, 0.0, 0.0).map_err(render_error)
    }

    /// Load every sprite concurrently, then draw them in path order.
    ///
    /// # Errors
    ///
    /// [`DecorateError::Render`] if a surface call fails.
    pub async fn draw_flower_path<S>(
        &self,
        path: &[FlowerPlacement],
        surface: &mut S,
    ) -> Result<(), DecorateError>
    where
        S: Surface<Image = L::Image>,
    {
        surface.clear();

        let images = join_all(path.iter().map(|placement| self.load_sprite(placement))).await;

        let fallbacks = images.iter().filter(|(_, fell_back)| *fell_back).count();
        if fallbacks > 0 {
            log::warn!("{fallbacks} of {} sprites replaced by fallback", path.len());
        }

        for (placement, (image, _)) in path.iter().zip(&images) {
            draw_placement(surface, image, placement, self.config.sprite_size)?;
        }
        Ok(())
    }

    /// Load one sprite, substituting the fallback on failure. The flag
    /// is `true` when the fallback was used.
    async fn load_sprite(&self, placement: &FlowerPlacement) -> (L::Image, bool) {
        let url = self.config.sprite_url(&placement.image_id);
        match self.loader.load(&url).await {
            Ok(image) => (image, false),
            Err(e) => {
                log::warn!("{e}");
                (self.loader.fallback(), true)
            }
        }
    }
}

/// Draw one sprite centered on its placement, rotated by its angle.
///
/// The transform is restored even if a drawing call fails.
///
/// # Errors
///
/// [`DecorateError::Render`] if a surface call fails.
pub fn draw_placement<S: Surface>(
    surface: &mut S,
    image: &S::Image,
    placement: &FlowerPlacement,
    size: f64,
) -> Result<(), DecorateError> {
    surface.save();
    let outcome = (|| -> Result<(), S::Error> {
        surface.translate(placement.position.x, placement.position.y)?;
        surface.rotate(placement.angle)?;
        let half = size / 2.0;
        surface.draw_image_in(image, -half, -half, size, size)
    })();
    surface.restore();
    outcome.map_err(render_error)
}

fn render_error(e: impl Display) -> DecorateError {
    DecorateError::Render(e.to_string())
}
