//! Client configuration.
//!
//! All values are compile-time defaults; there is no environment or
//! file loading.

use serde::{Deserialize, Serialize};

/// Bounds and initial value of the density slider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DensityRange {
    /// Smallest selectable density.
    pub min: u32,
    /// Largest selectable density.
    pub max: u32,
    /// Density selected on page load.
    pub default: u32,
}

impl DensityRange {
    /// Clamp a raw slider value into the range.
    #[must_use]
    pub fn clamp(self, value: u32) -> u32 {
        value.clamp(self.min, self.max)
    }

    /// Parse the string value of a range input, clamping into bounds.
    ///
    /// Unparseable input yields the default.
    #[must_use]
    pub fn parse(self, raw: &str) -> u32 {
        raw.trim()
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .map_or(self.default, |v| {
                let v = v.trunc().clamp(f64::from(self.min), f64::from(self.max));
                #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
                {
                    v as u32
                }
            })
    }
}

impl Default for DensityRange {
    fn default() -> Self {
        Self {
            min: 5,
            max: 100,
            default: 20,
        }
    }
}

/// Endpoints, canvas geometry and sprite sizing for the client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Path of the decoration endpoint (`POST`).
    pub decorate_endpoint: String,

    /// Path prefix of the sprite endpoint; sprites live at
    /// `{image_endpoint}/{image_id}`.
    pub image_endpoint: String,

    /// Width of both canvases in pixels.
    pub canvas_width: u32,

    /// Height of both canvases in pixels.
    pub canvas_height: u32,

    /// Edge length of the box each sprite is drawn into.
    pub sprite_size: f64,

    /// Radius of the filled circle drawn in place of a sprite that
    /// failed to load.
    pub fallback_radius: f64,

    /// Density slider bounds.
    pub density: DensityRange,
}

impl ClientConfig {
    /// URL of the sprite with the given identifier.
    #[must_use]
    pub fn sprite_url(&self, image_id: &str) -> String {
        format!("{}/{image_id}", self.image_endpoint.trim_end_matches('/'))
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            decorate_endpoint: "/api/decorate".into(),
            image_endpoint: "/images".into(),
            canvas_width: 800,
            canvas_height: 600,
            sprite_size: 40.0,
            fallback_radius: 40.0,
            density: DensityRange::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.decorate_endpoint, "/api/decorate");
        assert_eq!(config.canvas_width, 800);
        assert_eq!(config.canvas_height, 600);
        assert!((config.sprite_size - 40.0).abs() < f64::EPSILON);
        assert!((config.fallback_radius - 40.0).abs() < f64::EPSILON);
        assert_eq!(config.density.default, 20);
    }

    #[test]
    fn sprite_url_joins_endpoint_and_id() {
        let config = ClientConfig::default();
        assert_eq!(config.sprite_url("17"), "/images/17");

        let config = ClientConfig {
            image_endpoint: "https://cdn.example.com/images/".into(),
            ..ClientConfig::default()
        };
        assert_eq!(config.sprite_url("a"), "https://cdn.example.com/images/a");
    }

    #[test]
    fn density_parse_clamps_and_defaults() {
        let range = DensityRange::default();
        assert_eq!(range.parse("50"), 50);
        assert_eq!(range.parse(" 7 "), 7);
        assert_eq!(range.parse("1"), 5);
        assert_eq!(range.parse("1000"), 100);
        assert_eq!(range.parse("12.9"), 12);
        assert_eq!(range.parse("abc"), 20);
        assert_eq!(range.parse(""), 20);
    }

    #[test]
    fn density_clamp() {
        let range = DensityRange::default();
        assert_eq!(range.clamp(0), 5);
        assert_eq!(range.clamp(42), 42);
        assert_eq!(range.clamp(u32::MAX), 100);
    }
}
