//! Serde helpers for the decoration wire format.
//!
//! The service reads shape coordinates as `[x, y]` pairs and is fed by
//! browsers, which print integral numbers without a fractional part.
//! These helpers emit the same text so a request body looks exactly like
//! one produced by `JSON.stringify`.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::types::Point;

/// Largest integer an `f64` represents exactly (2^53).
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_992.0;

/// Serialize an `f64`, using an integer when the value has no
/// fractional part (`400.0` becomes `400`).
///
/// # Errors
///
/// Propagates serializer errors.
#[allow(clippy::trivially_copy_pass_by_ref)] // signature required by `serialize_with`
pub fn number<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    let v = *value;
    if v.is_finite() && v.fract() == 0.0 && v.abs() < MAX_SAFE_INTEGER {
        #[allow(clippy::cast_possible_truncation)]
        serializer.serialize_i64(v as i64)
    } else {
        serializer.serialize_f64(v)
    }
}

/// A point borrowed for serialization as `[x, y]`.
struct Pair(Point);

impl Serialize for Pair {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeTuple;

        struct Num(f64);
        impl Serialize for Num {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                number(&self.0, serializer)
            }
        }

        let mut tuple = serializer.serialize_tuple(2)?;
        tuple.serialize_element(&Num(self.0.x))?;
        tuple.serialize_element(&Num(self.0.y))?;
        tuple.end()
    }
}

/// `#[serde(with = "wire::point")]`: a single point as `[x, y]`.
pub mod point {
    use super::{Deserialize, Deserializer, Pair, Point, Serialize, Serializer};

    /// Serialize a point as `[x, y]`.
    ///
    /// # Errors
    ///
    /// Propagates serializer errors.
    pub fn serialize<S: Serializer>(point: &Point, serializer: S) -> Result<S::Ok, S::Error> {
        Pair(*point).serialize(serializer)
    }

    /// Deserialize a point from `[x, y]`.
    ///
    /// # Errors
    ///
    /// Fails unless the input is a two-element numeric array.
    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Point, D::Error> {
        let [x, y] = <[f64; 2]>::deserialize(deserializer)?;
        Ok(Point::new(x, y))
    }
}

/// `#[serde(with = "wire::points")]`: a point list as `[[x, y], ...]`.
pub mod points {
    use super::{Deserialize, Deserializer, Pair, Point, Serializer};

    /// Serialize points as a list of `[x, y]` pairs.
    ///
    /// # Errors
    ///
    /// Propagates serializer errors.
    pub fn serialize<S: Serializer>(points: &[Point], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(points.iter().copied().map(Pair))
    }

    /// Deserialize a list of `[x, y]` pairs.
    ///
    /// # Errors
    ///
    /// Fails unless every element is a two-element numeric array.
    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<Point>, D::Error> {
        let pairs = Vec::<[f64; 2]>::deserialize(deserializer)?;
        Ok(pairs.into_iter().map(|[x, y]| Point::new(x, y)).collect())
    }
}
