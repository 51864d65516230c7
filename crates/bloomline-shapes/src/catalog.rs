//! The fixed catalog of predefined shapes.
//!
//! Every shape is centered on the 800×600 canvas. Lookup is total:
//! anything the catalog does not know resolves to the circle.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::generate;
use crate::types::{Point, ShapeDescriptor};

/// Canvas point every catalog shape is centered on.
pub const CENTER: Point = Point::new(400.0, 300.0);

/// Radius shared by the circle, the polygons and the star tips.
pub const RADIUS: f64 = 150.0;

/// Inner radius of the star.
pub const STAR_INNER_RADIUS: f64 = 60.0;

/// Number of tips on the star.
pub const STAR_POINTS: u32 = 5;

/// Size parameter of the heart curve.
pub const HEART_SIZE: f64 = 150.0;

const TRIANGLE: [Point; 3] = [
    Point::new(400.0, 150.0),
    Point::new(650.0, 450.0),
    Point::new(150.0, 450.0),
];

const SQUARE: [Point; 4] = [
    Point::new(300.0, 200.0),
    Point::new(500.0, 200.0),
    Point::new(500.0, 400.0),
    Point::new(300.0, 400.0),
];

const DIAMOND: [Point; 4] = [
    Point::new(400.0, 150.0),
    Point::new(550.0, 300.0),
    Point::new(400.0, 450.0),
    Point::new(250.0, 300.0),
];

/// Identifier of a selectable shape.
///
/// `Custom` means "use the JSON the user typed" and never reaches the
/// catalog proper.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeId {
    /// Circle around the canvas center.
    #[default]
    Circle,
    /// Parametric heart.
    Heart,
    /// Fixed triangle.
    Triangle,
    /// Fixed axis-aligned square.
    Square,
    /// Five-pointed star.
    Star,
    /// Regular pentagon.
    Pentagon,
    /// Regular hexagon.
    Hexagon,
    /// Square rotated by 45°.
    Diamond,
    /// User-supplied JSON.
    Custom,
}

impl ShapeId {
    /// All shapes in the order they are offered to the user.
    pub const ALL: [Self; 9] = [
        Self::Circle,
        Self::Heart,
        Self::Triangle,
        Self::Square,
        Self::Star,
        Self::Pentagon,
        Self::Hexagon,
        Self::Diamond,
        Self::Custom,
    ];

    /// Stable key used in form values and the wire vocabulary.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Circle => "circle",
            Self::Heart => "heart",
            Self::Triangle => "triangle",
            Self::Square => "square",
            Self::Star => "star",
            Self::Pentagon => "pentagon",
            Self::Hexagon => "hexagon",
            Self::Diamond => "diamond",
            Self::Custom => "custom",
        }
    }

    /// Display label for the shape picker.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Circle => "Circle",
            Self::Heart => "Heart",
            Self::Triangle => "Triangle",
            Self::Square => "Square",
            Self::Star => "Star",
            Self::Pentagon => "Pentagon",
            Self::Hexagon => "Hexagon",
            Self::Diamond => "Diamond",
            Self::Custom => "Custom",
        }
    }

    /// Parse a shape key. Unknown keys map to [`ShapeId::Circle`].
    #[must_use]
    pub fn from_key(key: &str) -> Self {
        match key {
            "heart" => Self::Heart,
            "triangle" => Self::Triangle,
            "square" => Self::Square,
            "star" => Self::Star,
            "pentagon" => Self::Pentagon,
            "hexagon" => Self::Hexagon,
            "diamond" => Self::Diamond,
            "custom" => Self::Custom,
            _ => Self::Circle,
        }
    }
}

impl fmt::Display for ShapeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Descriptor for a catalog shape.
///
/// `Custom` has no catalog entry and falls back to the circle like any
/// other unknown shape.
#[must_use]
pub fn descriptor(shape: ShapeId) -> ShapeDescriptor {
    match shape {
        ShapeId::Heart => polygon(generate::heart(CENTER, HEART_SIZE)),
        ShapeId::Triangle => polygon(TRIANGLE.to_vec()),
        ShapeId::Square => polygon(SQUARE.to_vec()),
        ShapeId::Star => polygon(generate::star(
            CENTER,
            RADIUS,
            STAR_INNER_RADIUS,
            STAR_POINTS,
        )),
        ShapeId::Pentagon => polygon(generate::regular_polygon(CENTER, RADIUS, 5)),
        ShapeId::Hexagon => polygon(generate::regular_polygon(CENTER, RADIUS, 6)),
        ShapeId::Diamond => polygon(DIAMOND.to_vec()),
        ShapeId::Circle | ShapeId::Custom => ShapeDescriptor::Circle {
            center: CENTER,
            radius: RADIUS,
        },
    }
}

/// Descriptor for a shape key; unknown keys yield the circle.
#[must_use]
pub fn lookup(key: &str) -> ShapeDescriptor {
    descriptor(ShapeId::from_key(key))
}

fn polygon(points: Vec<Point>) -> ShapeDescriptor {
    ShapeDescriptor::Polygon { points }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn circle() -> ShapeDescriptor {
        ShapeDescriptor::Circle {
            center: Point::new(400.0, 300.0),
            radius: 150.0,
        }
    }

    fn vertex_count(descriptor: &ShapeDescriptor) -> Option<usize> {
        match descriptor {
            ShapeDescriptor::Polygon { points } => Some(points.len()),
            ShapeDescriptor::Circle { .. } => None,
        }
    }

    #[test]
    fn keys_round_trip_through_from_key() {
        for shape in ShapeId::ALL {
            assert_eq!(ShapeId::from_key(shape.key()), shape);
        }
    }

    #[test]
    fn unknown_key_is_circle() {
        assert_eq!(ShapeId::from_key("dodecahedron"), ShapeId::Circle);
        assert_eq!(ShapeId::from_key(""), ShapeId::Circle);
        assert_eq!(ShapeId::from_key("Circle"), ShapeId::Circle);
        assert_eq!(lookup("dodecahedron"), circle());
    }

    #[test]
    fn circle_descriptor() {
        assert_eq!(lookup("circle"), circle());
    }

    #[test]
    fn custom_has_no_catalog_entry() {
        assert_eq!(descriptor(ShapeId::Custom), circle());
    }

    #[test]
    fn literal_shapes() {
        assert_eq!(
            lookup("square"),
            ShapeDescriptor::Polygon {
                points: vec![
                    Point::new(300.0, 200.0),
                    Point::new(500.0, 200.0),
                    Point::new(500.0, 400.0),
                    Point::new(300.0, 400.0),
                ],
            }
        );
        assert_eq!(vertex_count(&lookup("triangle")), Some(3));
        assert_eq!(vertex_count(&lookup("diamond")), Some(4));
    }

    #[test]
    fn generated_shapes_have_expected_vertex_counts() {
        assert_eq!(vertex_count(&lookup("star")), Some(10));
        assert_eq!(vertex_count(&lookup("pentagon")), Some(5));
        assert_eq!(vertex_count(&lookup("hexagon")), Some(6));
        assert_eq!(vertex_count(&lookup("heart")), Some(63));
    }

    #[test]
    fn every_polygon_has_at_least_three_vertices() {
        for shape in ShapeId::ALL {
            if let Some(n) = vertex_count(&descriptor(shape)) {
                assert!(n >= 3, "{shape} has only {n} vertices");
            }
        }
    }

    #[test]
    fn shape_id_serde_uses_lowercase_keys() {
        for shape in ShapeId::ALL {
            let json = serde_json::to_string(&shape).unwrap_or_default();
            assert_eq!(json, format!("\"{}\"", shape.key()));
        }
    }
}
