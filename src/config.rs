//! Build configuration and numeric constants
//!
//! Constants shared by the builders, plus the `BuildConfig` a tile pipeline
//! loads once and passes to every tile build.

use std::path::Path;

use anyhow::Context;
use glam::Vec2;
use serde::Deserialize;

/// Maximum scale factor applied to a miter vector at sharp corners
pub const MITER_LIMIT: f32 = 5.0;

/// Distance from a tile edge (in normalized tile units) under which a
/// segment is considered to lie on that edge
pub const TILE_EDGE_TOLERANCE: f32 = 2e-4;

/// Lower-left corner of a normalized tile
pub const TILE_MIN: Vec2 = Vec2::new(-1.0, -1.0);

/// Upper-right corner of a normalized tile
pub const TILE_MAX: Vec2 = Vec2::new(1.0, 1.0);

/// Consecutive line points closer than this (in 2D) are merged
pub const MIN_SEGMENT_LENGTH: f32 = 1e-6;

/// Extent of a tile and the tolerance used to detect segments on its edges
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct TileBounds {
    pub min: Vec2,
    pub max: Vec2,
    pub tolerance: f32,
}

impl Default for TileBounds {
    fn default() -> Self {
        Self {
            min: TILE_MIN,
            max: TILE_MAX,
            tolerance: TILE_EDGE_TOLERANCE,
        }
    }
}

/// Output options shared by all features of a tile build
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct BuildConfig {
    /// Generate texture coordinates for fills and strokes
    pub texcoords: bool,
    /// Emit stroke vertices as raw positions plus scaling vectors instead
    /// of displacing them by the half-width
    pub scaling_vectors: bool,
    pub tile_bounds: TileBounds,
}

impl BuildConfig {
    /// Load a configuration from a JSON file. Missing keys take defaults.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        serde_json::from_str(&text)
            .with_context(|| format!("invalid config {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_bounds_are_unit_tile() {
        let bounds = TileBounds::default();
        assert_eq!(bounds.min, Vec2::new(-1.0, -1.0));
        assert_eq!(bounds.max, Vec2::new(1.0, 1.0));
        assert_eq!(bounds.tolerance, TILE_EDGE_TOLERANCE);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: BuildConfig =
            serde_json::from_str(r#"{ "texcoords": true, "tile_bounds": { "tolerance": 0.01 } }"#)
                .unwrap();
        assert!(config.texcoords);
        assert!(!config.scaling_vectors);
        assert_eq!(config.tile_bounds.tolerance, 0.01);
        assert_eq!(config.tile_bounds.max, TILE_MAX);
    }
}
