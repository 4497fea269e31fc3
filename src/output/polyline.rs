//! Accumulator for stroke meshes

use glam::{Vec2, Vec3};

/// How stroke vertices are emitted
#[derive(Debug, Clone, PartialEq)]
pub enum LineVertices {
    /// Positions already offset from the centerline by the half-width
    Displaced(Vec<Vec3>),
    /// Centerline positions plus the unscaled offset direction of each
    /// vertex, to be multiplied by a width later (e.g. per zoom in a shader)
    ScalingVector {
        points: Vec<Vec3>,
        scaling_vecs: Vec<Vec2>,
    },
}

/// Stroke vertices, optional texcoords and triangle indices
#[derive(Debug, Clone)]
pub struct PolyLineOutput {
    vertices: LineVertices,
    texcoords: Option<Vec<Vec2>>,
    indices: Vec<u32>,
    num_vertices: u32,
}

impl Default for PolyLineOutput {
    fn default() -> Self {
        Self::displaced()
    }
}

impl PolyLineOutput {
    /// Output whose positions are displaced by the half-width
    pub fn displaced() -> Self {
        Self::from_vertices(LineVertices::Displaced(Vec::new()))
    }

    /// Output that keeps centerline positions and records scaling vectors
    pub fn scaling_vectors() -> Self {
        Self::from_vertices(LineVertices::ScalingVector {
            points: Vec::new(),
            scaling_vecs: Vec::new(),
        })
    }

    fn from_vertices(vertices: LineVertices) -> Self {
        Self {
            vertices,
            texcoords: None,
            indices: Vec::new(),
            num_vertices: 0,
        }
    }

    /// Also collect one texcoord per vertex
    pub fn with_texcoords(mut self) -> Self {
        self.texcoords = Some(Vec::new());
        self
    }

    pub fn vertices(&self) -> &LineVertices {
        &self.vertices
    }

    pub fn points(&self) -> &[Vec3] {
        match &self.vertices {
            LineVertices::Displaced(points) => points,
            LineVertices::ScalingVector { points, .. } => points,
        }
    }

    /// `None` for displaced output
    pub fn scaling_vecs(&self) -> Option<&[Vec2]> {
        match &self.vertices {
            LineVertices::Displaced(_) => None,
            LineVertices::ScalingVector { scaling_vecs, .. } => Some(scaling_vecs),
        }
    }

    pub fn is_scaling_vector(&self) -> bool {
        matches!(self.vertices, LineVertices::ScalingVector { .. })
    }

    /// `None` when texcoords were not requested
    pub fn texcoords(&self) -> Option<&[Vec2]> {
        self.texcoords.as_deref()
    }

    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    /// Number of vertices appended so far
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

    /// Append a stroke vertex at `coord` offset along `normal`.
    pub(crate) fn push_vertex(&mut self, coord: Vec3, normal: Vec2, uv: Vec2, half_width: f32) {
        match &mut self.vertices {
            LineVertices::Displaced(points) => {
                let offset = normal * half_width;
                points.push(Vec3::new(coord.x + offset.x, coord.y + offset.y, coord.z));
            }
            LineVertices::ScalingVector { points, scaling_vecs } => {
                points.push(coord);
                scaling_vecs.push(normal);
            }
        }
        if let Some(texcoords) = self.texcoords.as_mut() {
            texcoords.push(uv);
        }
        self.num_vertices += 1;
    }

    pub(crate) fn push_index(&mut self, index: u32) {
        self.indices.push(index);
    }

    pub(crate) fn indices_mut(&mut self) -> &mut Vec<u32> {
        &mut self.indices
    }

    /// Decompose into `(vertices, texcoords, indices)`
    pub fn into_parts(self) -> (LineVertices, Option<Vec<Vec2>>, Vec<u32>) {
        (self.vertices, self.texcoords, self.indices)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_displaced_vertex_is_offset() {
        let mut out = PolyLineOutput::displaced();
        out.push_vertex(Vec3::new(1.0, 1.0, 0.5), Vec2::new(0.0, -1.0), Vec2::ZERO, 0.25);
        assert_eq!(out.points(), &[Vec3::new(1.0, 0.75, 0.5)]);
        assert!(out.scaling_vecs().is_none());
        assert!(out.texcoords().is_none());
        assert_eq!(out.vertex_count(), 1);
    }

    #[test]
    fn test_scaling_vector_keeps_centerline() {
        let mut out = PolyLineOutput::scaling_vectors().with_texcoords();
        out.push_vertex(Vec3::new(1.0, 1.0, 0.0), Vec2::new(0.0, -1.0), Vec2::new(1.0, 0.0), 0.25);
        assert_eq!(out.points(), &[Vec3::new(1.0, 1.0, 0.0)]);
        assert_eq!(out.scaling_vecs(), Some(&[Vec2::new(0.0, -1.0)][..]));
        assert_eq!(out.texcoords(), Some(&[Vec2::new(1.0, 0.0)][..]));
        assert!(out.is_scaling_vector());
    }
}
