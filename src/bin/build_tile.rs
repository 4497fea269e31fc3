//! CLI tool for building tile meshes from a JSON tile file
//!
//! Usage:
//!   cargo run --release --bin build_tile -- <tiles.json> [options]
//!
//! Options:
//!   --config <file>     Build configuration (JSON)
//!   --summary           Show totals only
//!   --json <out>        Write meshes as base64 JSON

use std::env;
use std::time::Instant;

use anyhow::Context;
use serde::Serialize;

use tile_mesh::{build_tiles, load_tiles, BuildConfig, MeshJson};

#[derive(Serialize)]
struct TileJson {
    id: String,
    fills: MeshJson,
    strokes: MeshJson,
}

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: {} <tiles.json> [options]", args[0]);
        eprintln!();
        eprintln!("Options:");
        eprintln!("  --config <file>   Build configuration (JSON)");
        eprintln!("  --summary         Show totals only");
        eprintln!("  --json <out>      Write meshes as base64 JSON");
        return Ok(());
    }

    let tiles_path = &args[1];

    let mut config_path: Option<String> = None;
    let mut json_path: Option<String> = None;
    let mut summary_only = false;

    let mut i = 2;
    while i < args.len() {
        match args[i].as_str() {
            "--config" => {
                i += 1;
                config_path = args.get(i).cloned();
            }
            "--json" => {
                i += 1;
                json_path = args.get(i).cloned();
            }
            "--summary" => summary_only = true,
            other => eprintln!("Ignoring unknown option: {}", other),
        }
        i += 1;
    }

    let config = match &config_path {
        Some(path) => BuildConfig::from_json_file(path)?,
        None => BuildConfig::default(),
    };

    eprintln!("Loading: {}", tiles_path);
    let start = Instant::now();
    let tiles = load_tiles(tiles_path)?;
    eprintln!("{} tiles loaded in {:.2}ms", tiles.len(), start.elapsed().as_secs_f64() * 1000.0);

    let start = Instant::now();
    let meshes = build_tiles(&tiles, &config);
    eprintln!("Tiles built in {:.2}ms", start.elapsed().as_secs_f64() * 1000.0);
    eprintln!();

    let mut total_features = 0usize;
    let mut total_skipped = 0usize;
    let mut total_triangles = 0usize;

    for mesh in &meshes {
        let stats = &mesh.stats;
        total_features += stats.features;
        total_skipped += stats.skipped;
        total_triangles += stats.fill_triangles + stats.stroke_triangles;

        if !summary_only {
            println!(
                "{}: {} features ({} skipped), fills {} verts / {} tris, strokes {} verts / {} tris",
                mesh.tile_id,
                stats.features,
                stats.skipped,
                mesh.fills.vertex_count(),
                stats.fill_triangles,
                mesh.strokes.vertex_count(),
                stats.stroke_triangles,
            );
        }
    }

    println!("=== Summary ===");
    println!("Tiles:     {}", meshes.len());
    println!("Features:  {} ({} skipped)", total_features, total_skipped);
    println!("Triangles: {}", total_triangles);

    if let Some(path) = json_path {
        let out: Vec<TileJson> = meshes
            .iter()
            .map(|mesh| TileJson {
                id: mesh.tile_id.clone(),
                fills: mesh.fills.to_json(),
                strokes: mesh.strokes.to_json(),
            })
            .collect();
        let text = serde_json::to_string(&out)?;
        std::fs::write(&path, text).with_context(|| format!("failed to write {}", path))?;
        eprintln!("Wrote {}", path);
    }

    Ok(())
}
