//! Accumulator for fill and extrusion meshes

use glam::{Vec2, Vec3};

/// Positions, normals, optional texcoords and triangle indices for
/// polygon fills and extruded walls
#[derive(Debug, Clone, Default)]
pub struct PolygonOutput {
    points: Vec<Vec3>,
    normals: Vec<Vec3>,
    texcoords: Option<Vec<Vec2>>,
    indices: Vec<u32>,
    num_vertices: u32,
}

impl PolygonOutput {
    /// Output without texture coordinates
    pub fn new() -> Self {
        Self::default()
    }

    /// Output that also collects one texcoord per vertex
    pub fn with_texcoords() -> Self {
        Self {
            texcoords: Some(Vec::new()),
            ..Self::default()
        }
    }

    pub fn points(&self) -> &[Vec3] {
        &self.points
    }

    pub fn normals(&self) -> &[Vec3] {
        &self.normals
    }

    /// `None` when texcoords were not requested
    pub fn texcoords(&self) -> Option<&[Vec2]> {
        self.texcoords.as_deref()
    }

    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    /// Number of vertices appended so far; new indices are offset by this
    #[inline]
    pub fn vertex_count(&self) -> u32 {
        self.num_vertices
    }

    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.num_vertices == 0
    }

    pub fn wants_texcoords(&self) -> bool {
        self.texcoords.is_some()
    }

    /// Reserve room for `vertices` more vertices and `indices` more indices
    pub(crate) fn reserve(&mut self, vertices: usize, indices: usize) {
        self.points.reserve(vertices);
        self.normals.reserve(vertices);
        if let Some(texcoords) = self.texcoords.as_mut() {
            texcoords.reserve(vertices);
        }
        self.indices.reserve(indices);
    }

    /// Append a vertex. `uv` is ignored when texcoords were not requested.
    pub(crate) fn push_vertex(&mut self, point: Vec3, normal: Vec3, uv: Vec2) {
        self.points.push(point);
        self.normals.push(normal);
        if let Some(texcoords) = self.texcoords.as_mut() {
            texcoords.push(uv);
        }
        self.num_vertices += 1;
    }

    /// Append a triangle whose corners are relative to `base`
    pub(crate) fn push_triangle(&mut self, base: u32, a: u32, b: u32, c: u32) {
        self.indices.extend_from_slice(&[base + a, base + b, base + c]);
    }

    /// Decompose into `(points, normals, texcoords, indices)`
    pub fn into_parts(self) -> (Vec<Vec3>, Vec<Vec3>, Option<Vec<Vec2>>, Vec<u32>) {
        (self.points, self.normals, self.texcoords, self.indices)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_follows_appends() {
        let mut out = PolygonOutput::new();
        assert!(out.is_empty());
        out.push_vertex(Vec3::ZERO, Vec3::Z, Vec2::ZERO);
        out.push_vertex(Vec3::X, Vec3::Z, Vec2::ZERO);
        out.push_vertex(Vec3::Y, Vec3::Z, Vec2::ZERO);
        out.push_triangle(0, 0, 1, 2);
        assert_eq!(out.vertex_count(), 3);
        assert_eq!(out.triangle_count(), 1);
        assert!(out.texcoords().is_none());
    }

    #[test]
    fn test_texcoords_only_when_requested() {
        let mut out = PolygonOutput::with_texcoords();
        out.push_vertex(Vec3::ZERO, Vec3::Z, Vec2::new(0.5, 0.5));
        assert_eq!(out.texcoords(), Some(&[Vec2::new(0.5, 0.5)][..]));
    }
}
