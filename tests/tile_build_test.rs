// End-to-end tile builds from the JSON fixture
use tile_mesh::{build_tile, build_tiles, load_tiles, BuildConfig};

const FIXTURE: &str = "tests/fixtures/sample_tiles.json";

#[test]
fn test_fixture_builds_with_one_skip() {
    let tiles = load_tiles(FIXTURE).expect("Failed to load tiles");
    assert_eq!(tiles.len(), 2);

    let mesh = build_tile(&tiles[0], &BuildConfig::default());
    println!("{}: {:?}", mesh.tile_id, mesh.stats);

    assert_eq!(mesh.stats.features, 5);
    // The collinear fill cannot be tessellated
    assert_eq!(mesh.stats.skipped, 1);
    assert!(mesh.stats.fill_triangles > 0);
    assert!(mesh.stats.stroke_triangles > 0);
    assert!(mesh.fills.indices().iter().all(|&i| i < mesh.fills.vertex_count()));
    assert!(mesh.strokes.indices().iter().all(|&i| i < mesh.strokes.vertex_count()));
}

#[test]
fn test_parallel_build_matches_sequential() {
    let tiles = load_tiles(FIXTURE).expect("Failed to load tiles");
    let config = BuildConfig {
        texcoords: true,
        ..BuildConfig::default()
    };

    let parallel = build_tiles(&tiles, &config);
    for (tile, mesh) in tiles.iter().zip(&parallel) {
        let sequential = build_tile(tile, &config);
        assert_eq!(mesh.tile_id, sequential.tile_id);
        assert_eq!(mesh.stats, sequential.stats);
        assert_eq!(mesh.fills.vertex_bytes(), sequential.fills.vertex_bytes());
        assert_eq!(mesh.strokes.index_bytes(), sequential.strokes.index_bytes());
    }
}

#[test]
fn test_mesh_json_round_trips_counts() {
    let tiles = load_tiles(FIXTURE).expect("Failed to load tiles");
    let mesh = build_tile(&tiles[1], &BuildConfig::default());
    let json = serde_json::to_value(mesh.strokes.to_json()).unwrap();
    assert_eq!(json["vertexCount"], mesh.strokes.vertex_count());
    assert_eq!(json["indexCount"], mesh.strokes.indices().len());
    assert_eq!(json["vertexStride"], 12);
}

#[test]
fn test_missing_file_is_an_error() {
    let err = load_tiles("tests/fixtures/does_not_exist.json").unwrap_err();
    assert!(err.to_string().contains("does_not_exist.json"));
}
