//! Polygon tessellation
//!
//! Triangulates polygon rings (outer boundary plus holes) into a flat mesh
//! with an upward normal and optional bounding-box texture mapping.

use glam::{Vec2, Vec3};

use crate::error::BuildError;
use crate::geometry::{Polygon, Rectangle};
use crate::output::PolygonOutput;

use super::ensure_finite;

/// Triangles produced by a triangulation backend. `indices` refer to
/// `vertices`, three per triangle.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Triangulation {
    pub vertices: Vec<Vec3>,
    pub indices: Vec<u32>,
}

/// A triangulation backend for polygon rings
pub trait Triangulator {
    /// Triangulate `polygon`, treating every ring after the first as a hole.
    fn triangulate(&self, polygon: &Polygon) -> Result<Triangulation, BuildError>;
}

/// Ear-clipping triangulation using `earcutr`
#[derive(Debug, Clone, Copy, Default)]
pub struct EarcutTriangulator;

impl Triangulator for EarcutTriangulator {
    fn triangulate(&self, polygon: &Polygon) -> Result<Triangulation, BuildError> {
        let Some(outer) = polygon.first().filter(|ring| ring.len() >= 3) else {
            return Ok(Triangulation::default());
        };

        let mut vertices: Vec<Vec3> = outer.clone();
        let mut hole_indices: Vec<usize> = Vec::new();
        for hole in &polygon[1..] {
            if hole.len() < 3 {
                continue; // Skip degenerate holes
            }
            hole_indices.push(vertices.len());
            vertices.extend_from_slice(hole);
        }

        let flat_coords: Vec<f64> = vertices
            .iter()
            .flat_map(|p| [p.x as f64, p.y as f64])
            .collect();

        let indices = earcutr::earcut(&flat_coords, &hole_indices, 2)
            .map_err(|e| BuildError::not_tessellable(format!("{:?}", e)))?;
        if indices.is_empty() {
            return Err(BuildError::not_tessellable("no triangles produced"));
        }

        Ok(Triangulation {
            vertices,
            indices: indices.into_iter().map(|i| i as u32).collect(),
        })
    }
}

/// Triangulate `polygon` with earcut and append the result to `out`.
///
/// Every vertex gets the normal `(0, 0, 1)` and keeps its input z. When `out`
/// collects texcoords, each vertex's (x, y) is mapped into `[0, 1]²` over the
/// polygon's bounding box. On error nothing is appended.
pub fn build_polygon(polygon: &Polygon, out: &mut PolygonOutput) -> Result<(), BuildError> {
    build_polygon_with(&EarcutTriangulator, polygon, out)
}

/// Same as [`build_polygon`] with an explicit triangulation backend
pub fn build_polygon_with<T: Triangulator + ?Sized>(
    triangulator: &T,
    polygon: &Polygon,
    out: &mut PolygonOutput,
) -> Result<(), BuildError> {
    ensure_finite(polygon.iter().flatten())?;

    let triangulation = triangulator.triangulate(polygon).map_err(|e| {
        log::debug!("polygon with {} rings skipped: {}", polygon.len(), e);
        e
    })?;
    if triangulation.vertices.is_empty() {
        return Ok(());
    }
    if let Some(&bad) = triangulation
        .indices
        .iter()
        .find(|&&i| i as usize >= triangulation.vertices.len())
    {
        return Err(BuildError::not_tessellable(format!(
            "backend returned index {} for {} vertices",
            bad,
            triangulation.vertices.len()
        )));
    }

    let bounds = out
        .wants_texcoords()
        .then(|| Rectangle::from_rings(polygon))
        .flatten();

    let vertex_offset = out.vertex_count();
    out.reserve(triangulation.vertices.len(), triangulation.indices.len());

    for v in &triangulation.vertices {
        let uv = bounds.map_or(Vec2::ZERO, |b| b.map_to_unit(*v));
        out.push_vertex(*v, Vec3::Z, uv);
    }
    for tri in triangulation.indices.chunks_exact(3) {
        out.push_triangle(vertex_offset, tri[0], tri[1], tri[2]);
    }

    log::trace!(
        "polygon: {} vertices, {} triangles",
        triangulation.vertices.len(),
        triangulation.indices.len() / 3
    );
    Ok(())
}

/// Billboard quad for point features. Not generated: always returns
/// `BuildError::Unsupported` and appends nothing.
pub fn build_quad_at_point(
    _point: Vec3,
    _normal: Vec3,
    _half_width: f32,
    _height: f32,
    _out: &mut PolygonOutput,
) -> Result<(), BuildError> {
    Err(BuildError::Unsupported("quad at point"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> Polygon {
        vec![vec![
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(1.0, 1.0, 0.0),
            Vec3::new(0.0, 1.0, 0.0),
        ]]
    }

    #[test]
    fn test_square_gives_two_triangles() {
        let mut out = PolygonOutput::new();
        build_polygon(&square(), &mut out).unwrap();
        assert_eq!(out.vertex_count(), 4);
        assert_eq!(out.indices().len(), 6);
        assert!(out.normals().iter().all(|n| *n == Vec3::Z));
        assert!(out.texcoords().is_none());
    }

    #[test]
    fn test_texcoords_span_bounding_box() {
        let mut out = PolygonOutput::with_texcoords();
        build_polygon(&square(), &mut out).unwrap();
        let uvs = out.texcoords().unwrap();
        assert_eq!(uvs.len(), 4);
        assert_eq!(uvs[0], Vec2::new(0.0, 0.0));
        assert_eq!(uvs[2], Vec2::new(1.0, 1.0));
    }

    #[test]
    fn test_second_polygon_indices_are_offset() {
        let mut out = PolygonOutput::new();
        build_polygon(&square(), &mut out).unwrap();
        build_polygon(&square(), &mut out).unwrap();
        assert_eq!(out.vertex_count(), 8);
        assert!(out.indices()[6..].iter().all(|&i| (4..8).contains(&i)));
    }

    #[test]
    fn test_hole_is_respected() {
        let outer = vec![
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(4.0, 0.0, 0.0),
            Vec3::new(4.0, 4.0, 0.0),
            Vec3::new(0.0, 4.0, 0.0),
        ];
        let hole = vec![
            Vec3::new(1.0, 1.0, 0.0),
            Vec3::new(1.0, 3.0, 0.0),
            Vec3::new(3.0, 3.0, 0.0),
            Vec3::new(3.0, 1.0, 0.0),
        ];
        let mut out = PolygonOutput::new();
        build_polygon(&vec![outer, hole], &mut out).unwrap();
        assert_eq!(out.vertex_count(), 8);
        // A square with a square hole triangulates into 8 triangles
        assert_eq!(out.triangle_count(), 8);
    }

    #[test]
    fn test_collinear_ring_is_not_tessellable() {
        let line = vec![vec![
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(2.0, 0.0, 0.0),
        ]];
        let mut out = PolygonOutput::new();
        let err = build_polygon(&line, &mut out).unwrap_err();
        assert!(matches!(err, BuildError::NotTessellable { .. }));
        assert!(out.is_empty());
        assert!(out.indices().is_empty());
    }

    #[test]
    fn test_empty_polygon_is_a_no_op() {
        let mut out = PolygonOutput::new();
        build_polygon(&Vec::new(), &mut out).unwrap();
        build_polygon(&vec![vec![Vec3::ZERO, Vec3::X]], &mut out).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn test_non_finite_input_is_rejected() {
        let mut polygon = square();
        polygon[0][2].x = f32::NAN;
        let mut out = PolygonOutput::new();
        assert_eq!(
            build_polygon(&polygon, &mut out),
            Err(BuildError::NonFiniteCoordinate { index: 2 })
        );
        assert!(out.is_empty());
    }

    #[test]
    fn test_quad_at_point_is_unsupported() {
        let mut out = PolygonOutput::new();
        let result = build_quad_at_point(Vec3::ZERO, Vec3::Z, 1.0, 1.0, &mut out);
        assert!(matches!(result, Err(BuildError::Unsupported(_))));
        assert!(out.is_empty());
    }
}
