//! Output mesh accumulators
//!
//! Caller-owned, append-only buffers. Each accumulator tracks its own
//! running vertex count so successive builder calls can share one mesh:
//! every index appended by a call is offset by the count at the start of
//! that call.
//!
//! # Submodules
//! - `polygon` - Fill and extrusion meshes (positions, normals, texcoords)
//! - `polyline` - Stroke meshes (displaced positions or scaling vectors)
//! - `buffers` - GPU-ready byte packing and base64 JSON transfer format

mod polygon;
mod polyline;
mod buffers;

pub use polygon::PolygonOutput;

pub use polyline::{
    LineVertices,
    PolyLineOutput,
};

pub use buffers::{
    serialize_bytes_base64,
    MeshJson,
};
