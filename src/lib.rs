//! Mesh generation for vector tile features
//!
//! Converts tile geometry (polylines, polygons with holes) into triangle
//! meshes ready for a GPU rasterizer: positions, normals, texture
//! coordinates or width-scaling vectors, and index buffers.
//!
//! Builders are synchronous and stateless. They append into caller-owned
//! output accumulators, so several features can share one mesh, and a tile
//! pipeline can build tiles on separate threads with one output per tile.
//!
//! ```rust
//! use tile_mesh::{build_polyline, LineCap, LineJoin, PolyLineOptions, PolyLineOutput, Vec3};
//!
//! let line = vec![Vec3::new(0.0, 0.0, 0.0), Vec3::new(1.0, 0.0, 0.0), Vec3::new(1.0, 1.0, 0.0)];
//! let options = PolyLineOptions::new(1.0, LineCap::Butt, LineJoin::Miter);
//! let mut out = PolyLineOutput::displaced();
//! build_polyline(&line, &options, &mut out).unwrap();
//! assert_eq!(out.vertex_count(), 6);
//! assert_eq!(out.indices().len(), 12);
//! ```

pub mod config;
pub mod error;
pub mod geometry;
pub mod output;
pub mod tessellation;
pub mod generation;

pub use config::{BuildConfig, TileBounds};
pub use error::BuildError;
pub use geometry::*;
pub use output::*;
pub use tessellation::*;
pub use generation::*;
