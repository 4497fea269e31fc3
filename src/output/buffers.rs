//! GPU-ready packing of output meshes
//!
//! Vertex attributes are interleaved into little-endian f32 buffers, indices
//! into little-endian u32 buffers. `MeshJson` wraps both as base64 strings
//! for compact JSON transfer.
//!
//! Layouts (one row per vertex):
//! - polygon: `position(3) normal(3) [texcoord(2)]`
//! - polyline, displaced: `position(3) [texcoord(2)]`
//! - polyline, scaling vectors: `position(3) scaling(2) [texcoord(2)]`

use base64::{engine::general_purpose, Engine as _};
use byteorder::{ByteOrder, LittleEndian};
use serde::{Serialize, Serializer};

use super::{PolyLineOutput, PolygonOutput};

/// Serialize raw bytes as a base64-encoded string
pub fn serialize_bytes_base64<S>(data: &[u8], serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&general_purpose::STANDARD.encode(data))
}

/// Serializable mesh for JSON transfer
#[derive(Serialize, Clone, Debug)]
pub struct MeshJson {
    /// Base64-encoded interleaved Float32 vertex data
    #[serde(rename = "vertexData", serialize_with = "serialize_bytes_base64")]
    pub vertex_data: Vec<u8>,

    /// Number of vertices (not bytes)
    #[serde(rename = "vertexCount")]
    pub vertex_count: usize,

    /// Bytes per vertex
    #[serde(rename = "vertexStride")]
    pub vertex_stride: usize,

    /// Attribute names in interleaving order
    pub attributes: Vec<&'static str>,

    /// Base64-encoded Uint32 indices
    #[serde(rename = "indexData", serialize_with = "serialize_bytes_base64")]
    pub index_data: Vec<u8>,

    #[serde(rename = "indexCount")]
    pub index_count: usize,
}

fn pack_f32(values: &[f32]) -> Vec<u8> {
    let mut bytes = vec![0u8; values.len() * 4];
    LittleEndian::write_f32_into(values, &mut bytes);
    bytes
}

fn pack_u32(values: &[u32]) -> Vec<u8> {
    let mut bytes = vec![0u8; values.len() * 4];
    LittleEndian::write_u32_into(values, &mut bytes);
    bytes
}

impl PolygonOutput {
    /// Attribute names in interleaving order
    pub fn attributes(&self) -> Vec<&'static str> {
        let mut attributes = vec!["position", "normal"];
        if self.wants_texcoords() {
            attributes.push("texcoord");
        }
        attributes
    }

    /// Bytes per interleaved vertex
    pub fn vertex_stride(&self) -> usize {
        let floats = if self.wants_texcoords() { 8 } else { 6 };
        floats * 4
    }

    pub fn vertex_bytes(&self) -> Vec<u8> {
        let mut floats = Vec::with_capacity(self.points().len() * self.vertex_stride() / 4);
        for (i, (p, n)) in self.points().iter().zip(self.normals()).enumerate() {
            floats.extend_from_slice(&p.to_array());
            floats.extend_from_slice(&n.to_array());
            if let Some(uv) = self.texcoords().and_then(|t| t.get(i)) {
                floats.extend_from_slice(&uv.to_array());
            }
        }
        pack_f32(&floats)
    }

    pub fn index_bytes(&self) -> Vec<u8> {
        pack_u32(self.indices())
    }

    pub fn to_json(&self) -> MeshJson {
        MeshJson {
            vertex_data: self.vertex_bytes(),
            vertex_count: self.vertex_count() as usize,
            vertex_stride: self.vertex_stride(),
            attributes: self.attributes(),
            index_data: self.index_bytes(),
            index_count: self.indices().len(),
        }
    }
}

impl PolyLineOutput {
    /// Attribute names in interleaving order
    pub fn attributes(&self) -> Vec<&'static str> {
        let mut attributes = vec!["position"];
        if self.is_scaling_vector() {
            attributes.push("scaling");
        }
        if self.texcoords().is_some() {
            attributes.push("texcoord");
        }
        attributes
    }

    /// Bytes per interleaved vertex
    pub fn vertex_stride(&self) -> usize {
        let mut floats = 3;
        if self.is_scaling_vector() {
            floats += 2;
        }
        if self.texcoords().is_some() {
            floats += 2;
        }
        floats * 4
    }

    pub fn vertex_bytes(&self) -> Vec<u8> {
        let mut floats = Vec::with_capacity(self.points().len() * self.vertex_stride() / 4);
        for (i, p) in self.points().iter().enumerate() {
            floats.extend_from_slice(&p.to_array());
            if let Some(scaling) = self.scaling_vecs().and_then(|s| s.get(i)) {
                floats.extend_from_slice(&scaling.to_array());
            }
            if let Some(uv) = self.texcoords().and_then(|t| t.get(i)) {
                floats.extend_from_slice(&uv.to_array());
            }
        }
        pack_f32(&floats)
    }

    pub fn index_bytes(&self) -> Vec<u8> {
        pack_u32(self.indices())
    }

    pub fn to_json(&self) -> MeshJson {
        MeshJson {
            vertex_data: self.vertex_bytes(),
            vertex_count: self.vertex_count() as usize,
            vertex_stride: self.vertex_stride(),
            attributes: self.attributes(),
            index_data: self.index_bytes(),
            index_count: self.indices().len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::Engine as _;
    use glam::{Vec2, Vec3};

    #[test]
    fn test_polygon_vertex_layout() {
        let mut out = PolygonOutput::with_texcoords();
        out.push_vertex(Vec3::new(1.0, 2.0, 3.0), Vec3::Z, Vec2::new(0.25, 0.75));
        let bytes = out.vertex_bytes();
        assert_eq!(out.vertex_stride(), 32);
        assert_eq!(bytes.len(), 32);
        assert_eq!(LittleEndian::read_f32(&bytes[0..4]), 1.0);
        assert_eq!(LittleEndian::read_f32(&bytes[20..24]), 1.0);
        assert_eq!(LittleEndian::read_f32(&bytes[28..32]), 0.75);
    }

    #[test]
    fn test_polyline_scaling_layout() {
        let mut out = PolyLineOutput::scaling_vectors();
        out.push_vertex(Vec3::ZERO, Vec2::new(0.0, -1.0), Vec2::ZERO, 1.0);
        assert_eq!(out.attributes(), vec!["position", "scaling"]);
        assert_eq!(out.vertex_stride(), 20);
        let bytes = out.vertex_bytes();
        assert_eq!(LittleEndian::read_f32(&bytes[16..20]), -1.0);
    }

    #[test]
    fn test_json_encodes_base64() {
        let mut out = PolygonOutput::new();
        out.push_vertex(Vec3::ZERO, Vec3::Z, Vec2::ZERO);
        out.push_vertex(Vec3::X, Vec3::Z, Vec2::ZERO);
        out.push_vertex(Vec3::Y, Vec3::Z, Vec2::ZERO);
        out.push_triangle(0, 0, 1, 2);

        let json = serde_json::to_value(out.to_json()).unwrap();
        assert_eq!(json["vertexCount"], 3);
        assert_eq!(json["indexCount"], 3);
        let encoded = json["indexData"].as_str().unwrap();
        let decoded = general_purpose::STANDARD.decode(encoded).unwrap();
        assert_eq!(decoded, vec![0, 0, 0, 0, 1, 0, 0, 0, 2, 0, 0, 0]);
    }
}
