//! Core geometry types for tile features

use glam::{Vec2, Vec3};
use serde::Deserialize;

/// A 2D point in tile-local coordinates
pub type Point2 = Vec2;

/// A 3D point in tile-local coordinates
pub type Point3 = Vec3;

/// An open polyline, conventionally inside the normalized tile `[-1, 1]²`
pub type Line = Vec<Point3>;

/// A polygon as a list of rings: the first is the outer boundary, the
/// rest are holes. Rings are not implicitly closed.
pub type Polygon = Vec<Line>;

/// Geometry added at the open ends of a line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineCap {
    /// No extra geometry
    #[default]
    Butt,
    /// Rectangle extended by the half-width past the end point
    Square,
    /// Half-disc made of the given number of fan triangles
    Round(u32),
}

/// Geometry added at interior corners of a line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineJoin {
    /// Both edges extended to their (clamped) intersection
    #[default]
    Miter,
    /// A single triangle closing the outer corner
    Bevel,
    /// Fan of the given number of triangles around the outer corner
    Round(u32),
}

impl LineJoin {
    /// Number of fan triangles on the outer side of a corner, 0 for a miter
    pub fn triangle_count(self) -> u32 {
        match self {
            LineJoin::Miter => 0,
            LineJoin::Bevel => 1,
            LineJoin::Round(n) => n,
        }
    }
}

/// Stroke styling for a polyline
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct PolyLineOptions {
    /// Distance from the centerline to each edge of the stroke
    pub half_width: f32,
    pub cap: LineCap,
    pub join: LineJoin,
}

impl Default for PolyLineOptions {
    fn default() -> Self {
        Self {
            half_width: 1.0,
            cap: LineCap::Butt,
            join: LineJoin::Miter,
        }
    }
}

impl PolyLineOptions {
    pub fn new(half_width: f32, cap: LineCap, join: LineJoin) -> Self {
        Self { half_width, cap, join }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_triangle_counts() {
        assert_eq!(LineJoin::Miter.triangle_count(), 0);
        assert_eq!(LineJoin::Bevel.triangle_count(), 1);
        assert_eq!(LineJoin::Round(0).triangle_count(), 0);
        assert_eq!(LineJoin::Round(5).triangle_count(), 5);
    }

    #[test]
    fn test_options_from_json() {
        let options: PolyLineOptions =
            serde_json::from_str(r#"{ "half_width": 0.5, "cap": { "round": 8 }, "join": "bevel" }"#)
                .unwrap();
        assert_eq!(options.half_width, 0.5);
        assert_eq!(options.cap, LineCap::Round(8));
        assert_eq!(options.join, LineJoin::Bevel);

        let defaults: PolyLineOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(defaults, PolyLineOptions::default());
    }
}
