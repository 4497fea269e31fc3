//! Tessellation module for tile features
//!
//! Builders that turn lines and polygons into triangle meshes, appending
//! into caller-owned output accumulators.
//!
//! # Submodules
//! - `polygon` - Polygon fills through a pluggable triangulator (earcut by default)
//! - `extrusion` - Vertical walls between polygon ring vertices
//! - `polyline` - Stroke ribbons with caps and joins
//! - `outline` - Polyline stroking that cuts lines along tile edges

mod polygon;
mod extrusion;
mod polyline;
mod outline;

pub use polygon::{
    Triangulation,
    Triangulator,
    EarcutTriangulator,
    build_polygon,
    build_polygon_with,
    build_quad_at_point,
};

pub use extrusion::build_polygon_extrusion;

pub use polyline::{
    build_polyline,
    index_pairs,
};

pub use outline::{
    build_outline,
    build_outline_with_bounds,
    is_on_tile_edge,
};

use glam::Vec3;

use crate::error::BuildError;

/// Reject coordinates that would poison the mesh with NaN
fn ensure_finite<'a>(points: impl IntoIterator<Item = &'a Vec3>) -> Result<(), BuildError> {
    match points.into_iter().position(|p| !p.is_finite()) {
        Some(index) => Err(BuildError::NonFiniteCoordinate { index }),
        None => Ok(()),
    }
}
