//! Tile mesh generation
//!
//! Runs the builders over every feature of a tile, accumulating into one
//! fill mesh and one stroke mesh per tile. Tiles are independent, so a batch
//! of tiles is built in parallel with rayon, each tile owning its outputs.
//!
//! # Submodules
//! - `features` - Deserializable tile sources and features

mod features;

pub use features::{
    Feature,
    TileSource,
    load_tiles,
};

use glam::Vec3;
use rayon::prelude::*;

use crate::config::BuildConfig;
use crate::error::BuildError;
use crate::geometry::Polygon;
use crate::output::{PolyLineOutput, PolygonOutput};
use crate::tessellation::{
    build_outline_with_bounds,
    build_polygon,
    build_polygon_extrusion,
    build_polyline,
};

/// Feature and triangle counts for one built tile
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuildStats {
    pub features: usize,
    pub skipped: usize,
    pub fill_triangles: usize,
    pub stroke_triangles: usize,
}

/// Meshes built for one tile
#[derive(Debug, Clone)]
pub struct TileMesh {
    pub tile_id: String,
    pub fills: PolygonOutput,
    pub strokes: PolyLineOutput,
    pub stats: BuildStats,
}

/// Copy of `ring` ending on its first point, so every edge gets a wall
fn closed_ring(ring: &[Vec3]) -> Vec<Vec3> {
    let mut closed = ring.to_vec();
    if let (Some(&first), Some(&last)) = (ring.first(), ring.last()) {
        if ring.len() > 2 && first != last {
            closed.push(first);
        }
    }
    closed
}

fn build_feature(
    feature: &Feature,
    config: &BuildConfig,
    fills: &mut PolygonOutput,
    strokes: &mut PolyLineOutput,
) -> Result<(), BuildError> {
    match feature {
        Feature::Fill { rings, height: None, .. } => build_polygon(rings, fills),
        Feature::Fill { rings, height: Some(height), min_height } => {
            // Walls are validated with the roof, so a failure appends neither
            if !min_height.is_finite() {
                return Err(BuildError::NonFiniteCoordinate { index: 0 });
            }

            // Roof at `height`, walls down to `min_height`
            let lifted: Polygon = rings
                .iter()
                .map(|ring| ring.iter().map(|p| p.truncate().extend(*height)).collect())
                .collect();
            let walls: Polygon = lifted.iter().map(|ring| closed_ring(ring)).collect();

            build_polygon(&lifted, fills)?;
            build_polygon_extrusion(&walls, *min_height, fills)
        }
        Feature::Stroke { points, style, outline: true } => {
            build_outline_with_bounds(points, style, &config.tile_bounds, strokes)
        }
        Feature::Stroke { points, style, outline: false } => build_polyline(points, style, strokes),
    }
}

/// Build every feature of `tile`. Features whose builder fails are logged
/// and skipped; the rest of the tile is still built.
pub fn build_tile(tile: &TileSource, config: &BuildConfig) -> TileMesh {
    let mut fills = if config.texcoords {
        PolygonOutput::with_texcoords()
    } else {
        PolygonOutput::new()
    };
    let mut strokes = if config.scaling_vectors {
        PolyLineOutput::scaling_vectors()
    } else {
        PolyLineOutput::displaced()
    };
    if config.texcoords {
        strokes = strokes.with_texcoords();
    }

    let mut stats = BuildStats {
        features: tile.features.len(),
        ..BuildStats::default()
    };

    for (index, feature) in tile.features.iter().enumerate() {
        if let Err(e) = build_feature(feature, config, &mut fills, &mut strokes) {
            log::warn!("[{}] skipping {} feature {}: {}", tile.id, feature.kind(), index, e);
            stats.skipped += 1;
        }
    }

    stats.fill_triangles = fills.triangle_count();
    stats.stroke_triangles = strokes.triangle_count();
    log::debug!(
        "[{}] built {} features ({} skipped): {} fill triangles, {} stroke triangles",
        tile.id,
        stats.features,
        stats.skipped,
        stats.fill_triangles,
        stats.stroke_triangles
    );

    TileMesh {
        tile_id: tile.id.clone(),
        fills,
        strokes,
        stats,
    }
}

/// Build a batch of tiles in parallel, one output mesh per tile, in input
/// order
pub fn build_tiles(tiles: &[TileSource], config: &BuildConfig) -> Vec<TileMesh> {
    tiles.par_iter().map(|tile| build_tile(tile, config)).collect()
}
