//! Tile-aware polyline stroking
//!
//! Tiles are clipped to their bounds, so a feature crossing a tile edge
//! carries segments lying exactly on that edge. Stroking them would draw
//! the seam twice (once per neighboring tile). The outline builder cuts
//! such segments out and strokes the remaining pieces separately.

use glam::Vec3;

use crate::config::TileBounds;
use crate::error::BuildError;
use crate::geometry::PolyLineOptions;
use crate::output::PolyLineOutput;

use super::polyline::build_polyline;

fn within_tolerance(a: f32, b: f32, tolerance: f32) -> bool {
    (a - b).abs() < tolerance
}

/// True if segment `a -> b` lies along one of the edges of `bounds`
pub fn is_on_tile_edge(a: Vec3, b: Vec3, bounds: &TileBounds) -> bool {
    let tol = bounds.tolerance;
    let on = |pa: f32, pb: f32, edge: f32| {
        within_tolerance(pa, edge, tol) && within_tolerance(pb, edge, tol)
    };

    on(a.x, b.x, bounds.min.x)
        || on(a.x, b.x, bounds.max.x)
        || on(a.y, b.y, bounds.min.y)
        || on(a.y, b.y, bounds.max.y)
}

/// Stroke `line`, skipping segments that lie on the edges of the default
/// normalized tile `[-1, 1]²`.
pub fn build_outline(
    line: &[Vec3],
    options: &PolyLineOptions,
    out: &mut PolyLineOutput,
) -> Result<(), BuildError> {
    build_outline_with_bounds(line, options, &TileBounds::default(), out)
}

/// Stroke `line`, skipping segments that lie on the edges of `bounds`.
///
/// Each run of points between edge segments is stroked as its own
/// polyline, with caps at both of its ends.
pub fn build_outline_with_bounds(
    line: &[Vec3],
    options: &PolyLineOptions,
    bounds: &TileBounds,
    out: &mut PolyLineOutput,
) -> Result<(), BuildError> {
    // Validate up front so a bad point never leaves earlier pieces behind
    super::ensure_finite(line)?;

    let mut cut = 0;
    for (i, segment) in line.windows(2).enumerate() {
        if is_on_tile_edge(segment[0], segment[1], bounds) {
            build_polyline(&line[cut..=i], options, out)?;
            cut = i + 1;
        }
    }

    if cut < line.len() {
        build_polyline(&line[cut..], options, out)?;
    }
    Ok(())
}
