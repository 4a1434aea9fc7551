//! Polygon transforms and point tests
//!
//! Silhouettes are stored in model space and transformed every frame for
//! drawing and for the ship's collision probes.

use glam::Vec2;

/// Rotate, then uniformly scale, then translate every vertex of a polygon.
///
/// The input is left untouched and the output keeps vertex order.
pub fn transform_polygon(points: &[Vec2], position: Vec2, rotation: f32, scale: f32) -> Vec<Vec2> {
    let (sin, cos) = rotation.sin_cos();

    points
        .iter()
        .map(|p| {
            let rotated = Vec2::new(p.x * cos - p.y * sin, p.x * sin + p.y * cos);
            rotated * scale + position
        })
        .collect()
}

/// True if (x, y) lies strictly inside the circle.
#[inline]
pub fn point_in_circle(center: Vec2, radius: f32, point: Vec2) -> bool {
    center.distance(point) < radius
}

/// Clamp a coordinate into the finite f32 range. NaN maps to 0.
#[inline]
pub fn clamp_to_float_range(value: f32) -> f32 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(f32::MIN, f32::MAX)
    }
}

/// Clamp both components of a point with [`clamp_to_float_range`].
#[inline]
pub fn clamp_point(p: Vec2) -> Vec2 {
    Vec2::new(clamp_to_float_range(p.x), clamp_to_float_range(p.y))
}

/// Edges of a closed polygon: vertex i joined to vertex (i + 1) mod N.
pub fn closed_edges(points: &[Vec2]) -> impl Iterator<Item = (Vec2, Vec2)> + '_ {
    let n = points.len();
    (0..n).map(move |i| (points[i], points[(i + 1) % n]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn test_identity_transform() {
        let points = vec![Vec2::new(0.0, -25.0), Vec2::new(-12.5, 12.5), Vec2::new(12.5, 12.5)];
        let out = transform_polygon(&points, Vec2::ZERO, 0.0, 1.0);
        assert_eq!(out, points);
    }

    #[test]
    fn test_rotate_then_scale_then_translate() {
        // (1, 0) rotated 90° -> (0, 1), scaled by 2 -> (0, 2), moved by (10, 10)
        let out = transform_polygon(&[Vec2::new(1.0, 0.0)], Vec2::new(10.0, 10.0), FRAC_PI_2, 2.0);
        assert!((out[0].x - 10.0).abs() < 1e-5);
        assert!((out[0].y - 12.0).abs() < 1e-5);
    }

    #[test]
    fn test_point_in_circle_boundary() {
        assert!(!point_in_circle(Vec2::ZERO, 10.0, Vec2::new(10.0, 0.0)));
        assert!(point_in_circle(Vec2::ZERO, 10.0, Vec2::new(9.999, 0.0)));
    }

    #[test]
    fn test_clamp_to_float_range() {
        assert_eq!(clamp_to_float_range(f32::INFINITY), f32::MAX);
        assert_eq!(clamp_to_float_range(f32::NEG_INFINITY), f32::MIN);
        assert_eq!(clamp_to_float_range(f32::NAN), 0.0);
        assert_eq!(clamp_to_float_range(12.5), 12.5);
    }

    #[test]
    fn test_closed_edges_wrap_to_first_vertex() {
        let pts = [Vec2::new(0.0, 0.0), Vec2::new(1.0, 0.0), Vec2::new(0.0, 1.0)];
        let edges: Vec<_> = closed_edges(&pts).collect();
        assert_eq!(edges.len(), 3);
        assert_eq!(edges[2], (pts[2], pts[0]));
    }

    proptest! {
        #[test]
        fn prop_identity_transform_reproduces_polygon(
            coords in prop::collection::vec((-1000.0f32..1000.0, -1000.0f32..1000.0), 1..32)
        ) {
            let points: Vec<Vec2> = coords.iter().map(|&(x, y)| Vec2::new(x, y)).collect();
            let out = transform_polygon(&points, Vec2::ZERO, 0.0, 1.0);
            prop_assert_eq!(out, points);
        }
    }
}
