//! Point generators for the predefined shapes.
//!
//! All angles are in screen space: y grows downward, so increasing the
//! angle walks clockwise and −90° points straight up.

use std::f64::consts::{FRAC_PI_2, PI, TAU};

use crate::types::Point;

/// Parameter step used when sampling the heart curve.
pub const HEART_STEP: f64 = 0.1;

/// Heart curve units per `size` unit (the raw curve spans about ±16).
const HEART_SCALE_DIVISOR: f64 = 20.0;

/// Vertices of a regular polygon inscribed in a circle.
///
/// The first vertex points up (−90°); each following vertex advances
/// clockwise by `360° / sides`. Meaningful for `sides >= 3`; zero sides
/// yields no points.
#[must_use = "returns the polygon vertices"]
pub fn regular_polygon(center: Point, radius: f64, sides: u32) -> Vec<Point> {
    let n = f64::from(sides);
    (0..sides)
        .map(|i| {
            let angle = TAU.mul_add(f64::from(i) / n, -FRAC_PI_2);
            on_circle(center, radius, angle)
        })
        .collect()
}

/// Vertices of a star, alternating between the outer and inner radius.
///
/// Produces `2 * num_points` vertices starting at the top with an outer
/// tip, stepping `180° / num_points` per vertex.
#[must_use = "returns the star vertices"]
pub fn star(center: Point, outer_radius: f64, inner_radius: f64, num_points: u32) -> Vec<Point> {
    let step = PI / f64::from(num_points);
    (0..2 * num_points)
        .map(|i| {
            let r = if i % 2 == 0 { outer_radius } else { inner_radius };
            let angle = f64::from(i).mul_add(step, -FRAC_PI_2);
            on_circle(center, r, angle)
        })
        .collect()
}

/// Samples of the classic parametric heart, right side up.
///
/// ```text
/// x(t) = 16 sin³ t
/// y(t) = 13 cos t − 5 cos 2t − 2 cos 3t − cos 4t
/// ```
///
/// `t` runs from 0 in steps of [`HEART_STEP`] while `t < 2π`, giving 63
/// samples. The last sample stops short of `2π`, so the outline is open;
/// consumers treat it as an implicitly closed polygon.
#[must_use = "returns the sampled heart outline"]
pub fn heart(center: Point, size: f64) -> Vec<Point> {
    let scale = size / HEART_SCALE_DIVISOR;
    (0u32..)
        .map(|i| f64::from(i) * HEART_STEP)
        .take_while(|t| *t < TAU)
        .map(|t| {
            let x = 16.0 * t.sin().powi(3);
            let y = 13.0 * t.cos()
                - 5.0 * (2.0 * t).cos()
                - 2.0 * (3.0 * t).cos()
                - (4.0 * t).cos();
            // Screen y grows downward; flip so the lobes end up on top.
            Point::new(x.mul_add(scale, center.x), y.mul_add(-scale, center.y))
        })
        .collect()
}

fn on_circle(center: Point, radius: f64, angle: f64) -> Point {
    Point::new(
        radius.mul_add(angle.cos(), center.x),
        radius.mul_add(angle.sin(), center.y),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-9;
    const CENTER: Point = Point::new(400.0, 300.0);

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < TOLERANCE,
            "expected {expected}, got {actual}"
        );
    }

    // --- regular_polygon ---

    #[test]
    fn polygon_has_requested_vertex_count() {
        for sides in 3..=12 {
            assert_eq!(regular_polygon(CENTER, 150.0, sides).len(), sides as usize);
        }
    }

    #[test]
    fn polygon_vertices_lie_on_circle() {
        for p in regular_polygon(CENTER, 150.0, 7) {
            assert_close(p.distance(CENTER), 150.0);
        }
    }

    #[test]
    fn polygon_first_vertex_points_up() {
        let points = regular_polygon(CENTER, 150.0, 5);
        assert_close(points[0].x, 400.0);
        assert_close(points[0].y, 150.0);
        assert_close(points[0].angle_from(CENTER), -FRAC_PI_2);
    }

    #[test]
    fn polygon_walks_clockwise() {
        // Second vertex of a square sits to the right of center.
        let points = regular_polygon(Point::new(0.0, 0.0), 10.0, 4);
        assert_close(points[1].x, 10.0);
        assert_close(points[1].y, 0.0);
    }

    #[test]
    fn polygon_adjacent_vertices_are_equidistant() {
        let points = regular_polygon(CENTER, 150.0, 6);
        let first = points[0].distance(points[1]);
        for pair in points.windows(2) {
            assert_close(pair[0].distance(pair[1]), first);
        }
        // Hexagon side equals the circumradius.
        assert_close(first, 150.0);
    }

    #[test]
    fn polygon_with_zero_sides_is_empty() {
        assert!(regular_polygon(CENTER, 150.0, 0).is_empty());
    }

    // --- star ---

    #[test]
    fn star_has_twice_the_point_count() {
        assert_eq!(star(CENTER, 150.0, 60.0, 5).len(), 10);
        assert_eq!(star(CENTER, 150.0, 60.0, 8).len(), 16);
    }

    #[test]
    fn star_alternates_outer_and_inner_radius() {
        for (i, p) in star(CENTER, 150.0, 60.0, 5).iter().enumerate() {
            let expected = if i % 2 == 0 { 150.0 } else { 60.0 };
            assert_close(p.distance(CENTER), expected);
        }
    }

    #[test]
    fn star_starts_with_top_tip() {
        let points = star(CENTER, 150.0, 60.0, 5);
        assert_close(points[0].x, 400.0);
        assert_close(points[0].y, 150.0);
    }

    #[test]
    fn star_steps_by_half_the_tip_angle() {
        let points = star(CENTER, 150.0, 60.0, 5);
        let step = PI / 5.0;
        for (i, p) in points.iter().enumerate() {
            #[allow(clippy::cast_precision_loss)]
            let expected = (i as f64).mul_add(step, -FRAC_PI_2);
            let actual = p.angle_from(CENTER);
            // Normalize the difference into (-π, π].
            let diff = (actual - expected + PI).rem_euclid(TAU) - PI;
            assert!(diff.abs() < TOLERANCE, "vertex {i}: angle off by {diff}");
        }
    }

    // --- heart ---

    #[test]
    fn heart_has_63_samples() {
        assert_eq!(heart(CENTER, 150.0).len(), 63);
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let expected = (TAU / HEART_STEP).ceil() as usize;
        assert_eq!(heart(CENTER, 150.0).len(), expected);
    }

    #[test]
    fn heart_first_sample_is_top_notch() {
        // t = 0: x = 0, y = 13 - 5 - 2 - 1 = 5 -> 5 units above center.
        let points = heart(CENTER, 150.0);
        assert_close(points[0].x, 400.0);
        assert_close(points[0].y, 5.0f64.mul_add(-7.5, 300.0));
    }

    #[test]
    fn heart_last_sample_stops_before_full_turn() {
        let points = heart(CENTER, 150.0);
        let last = points[points.len() - 1];
        let t: f64 = 6.2;
        let scale = 150.0 / 20.0;
        assert_close(last.x, (16.0 * t.sin().powi(3)).mul_add(scale, 400.0));
        // Not closed: last sample differs from the first.
        assert!(last.distance(points[0]) > 0.1);
    }

    #[test]
    fn heart_is_symmetric_and_right_side_up() {
        let points = heart(CENTER, 150.0);
        // t = π is the bottom tip: x = 0, y = -13 + -5 + 2 - 1 = -17 -> below center.
        let tip = points[31];
        assert!(tip.y > 300.0, "bottom tip should be below center");
        assert!((tip.x - 400.0).abs() < 2.0);
        // Lobes (around t = π/2) sit to the right of center.
        assert!(points[16].x > 400.0);
    }

    #[test]
    fn heart_scales_with_size() {
        let small = heart(Point::new(0.0, 0.0), 20.0);
        let large = heart(Point::new(0.0, 0.0), 40.0);
        for (a, b) in small.iter().zip(&large) {
            assert_close(b.x, a.x * 2.0);
            assert_close(b.y, a.y * 2.0);
        }
    }
}
