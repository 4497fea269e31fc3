//! 2D helpers for line and polygon building

use glam::{Vec2, Vec3};

use crate::config::{MIN_SEGMENT_LENGTH, MITER_LIMIT};

/// Perpendicular of the 2D projection of segment `a -> b`, not normalized.
/// For a segment heading along +x it points along -y.
#[inline]
pub fn perp2d(a: Vec3, b: Vec3) -> Vec2 {
    Vec2::new(b.y - a.y, a.x - b.x)
}

/// Unit offset direction of segment `a -> b`, or `None` when the segment has
/// no 2D length
pub fn segment_normal(a: Vec3, b: Vec3) -> Option<Vec2> {
    let perp = perp2d(a, b);
    if perp.length_squared() < MIN_SEGMENT_LENGTH * MIN_SEGMENT_LENGTH {
        return None;
    }
    Some(perp.normalize())
}

/// Offset direction at a corner between two unit segment normals.
///
/// The sum of the normals is rescaled so that offsetting both edges by the
/// same width meets at the corner. The scale is clamped to `MITER_LIMIT`,
/// which keeps the vector bounded as the turn approaches 180°.
pub fn miter_vector(norm_prev: Vec2, norm_next: Vec2) -> Vec2 {
    let miter = norm_prev + norm_next;
    let scale = (2.0 / (1.0 + norm_prev.dot(norm_next)) / miter.dot(miter)).sqrt();
    // f32::min ignores NaN, so a fully reversed corner collapses to the pivot
    miter * scale.min(MITER_LIMIT)
}

/// Linearly remap `value` from `[in_min, in_max]` to `[out_min, out_max]`.
/// An empty input range maps everything to `out_min`.
pub fn map_value(value: f32, in_min: f32, in_max: f32, out_min: f32, out_max: f32) -> f32 {
    if (in_max - in_min).abs() < f32::EPSILON {
        return out_min;
    }
    out_min + (value - in_min) / (in_max - in_min) * (out_max - out_min)
}
