//! Tile sources as delivered by the data source
//!
//! ```json
//! [{ "id": "14/8192/5461",
//!    "features": [
//!      { "type": "fill", "rings": [[[0, 0, 0], [0.5, 0, 0], [0.5, 0.5, 0]]], "height": 0.1 },
//!      { "type": "stroke", "points": [[-1, 0, 0], [1, 0, 0]],
//!        "style": { "half_width": 0.01, "cap": "square" }, "outline": true }
//!    ] }]
//! ```

use std::path::Path;

use anyhow::Context;
use serde::Deserialize;

use crate::geometry::{Line, PolyLineOptions, Polygon};

/// A drawable feature of a tile
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Feature {
    /// Filled polygon, extruded from `min_height` to `height` when a height
    /// is given
    Fill {
        rings: Polygon,
        #[serde(default)]
        height: Option<f32>,
        #[serde(default)]
        min_height: f32,
    },
    /// Stroked line; `outline` strokes skip segments on tile edges
    Stroke {
        points: Line,
        #[serde(default)]
        style: PolyLineOptions,
        #[serde(default)]
        outline: bool,
    },
}

impl Feature {
    pub fn kind(&self) -> &'static str {
        match self {
            Feature::Fill { .. } => "fill",
            Feature::Stroke { .. } => "stroke",
        }
    }
}

/// Geometry and styling for one tile
#[derive(Debug, Clone, Deserialize)]
pub struct TileSource {
    pub id: String,
    #[serde(default)]
    pub features: Vec<Feature>,
}

/// Load a JSON array of tiles
pub fn load_tiles<P: AsRef<Path>>(path: P) -> anyhow::Result<Vec<TileSource>> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read tiles from {}", path.display()))?;
    let tiles: Vec<TileSource> = serde_json::from_str(&text)
        .with_context(|| format!("invalid tile JSON in {}", path.display()))?;
    Ok(tiles)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{LineCap, LineJoin};

    #[test]
    fn test_parse_features() {
        let json = r#"{
            "id": "t",
            "features": [
                { "type": "fill", "rings": [[[0, 0, 0], [1, 0, 0], [1, 1, 0]]] },
                { "type": "stroke", "points": [[0, 0, 0], [1, 0, 0]],
                  "style": { "half_width": 0.5, "cap": "square", "join": { "round": 4 } } }
            ]
        }"#;
        let tile: TileSource = serde_json::from_str(json).unwrap();
        assert_eq!(tile.features.len(), 2);
        match &tile.features[0] {
            Feature::Fill { rings, height, min_height } => {
                assert_eq!(rings[0].len(), 3);
                assert_eq!(*height, None);
                assert_eq!(*min_height, 0.0);
            }
            other => panic!("expected fill, got {:?}", other),
        }
        match &tile.features[1] {
            Feature::Stroke { style, outline, .. } => {
                assert_eq!(style.cap, LineCap::Square);
                assert_eq!(style.join, LineJoin::Round(4));
                assert!(!outline);
            }
            other => panic!("expected stroke, got {:?}", other),
        }
    }
}
