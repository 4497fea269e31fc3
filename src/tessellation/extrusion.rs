//! Wall extrusion for polygon rings

use glam::{Vec2, Vec3};

use crate::error::BuildError;
use crate::geometry::Polygon;
use crate::output::PolygonOutput;

use super::ensure_finite;

/// Texcoords of a wall quad, in vertex order: top start, top end,
/// bottom start, bottom end
const WALL_UVS: [Vec2; 4] = [
    Vec2::new(1.0, 0.0),
    Vec2::new(0.0, 0.0),
    Vec2::new(1.0, 1.0),
    Vec2::new(0.0, 1.0),
];

/// Append a vertical quad for every edge of every ring of `polygon`, from the
/// ring points' own height down to `min_height`.
///
/// Each quad is flat shaded with the normal `normalize(up × edge)`. Rings are
/// not closed implicitly: repeat the first point at the end for a sealed
/// wall. Edges without 2D length have no face normal and are skipped.
pub fn build_polygon_extrusion(
    polygon: &Polygon,
    min_height: f32,
    out: &mut PolygonOutput,
) -> Result<(), BuildError> {
    ensure_finite(polygon.iter().flatten())?;
    if !min_height.is_finite() {
        return Err(BuildError::NonFiniteCoordinate { index: 0 });
    }

    for ring in polygon {
        if ring.len() < 2 {
            continue;
        }
        out.reserve((ring.len() - 1) * 4, (ring.len() - 1) * 6);

        for edge in ring.windows(2) {
            let (start, end) = (edge[0], edge[1]);
            let Some(normal) = Vec3::Z.cross(end - start).try_normalize() else {
                log::debug!("skipping vertical or zero-length wall edge at {:?}", start);
                continue;
            };

            let base = out.vertex_count();
            let corners = [
                start,
                end,
                Vec3::new(start.x, start.y, min_height),
                Vec3::new(end.x, end.y, min_height),
            ];
            for (corner, uv) in corners.into_iter().zip(WALL_UVS) {
                out.push_vertex(corner, normal, uv);
            }

            out.push_triangle(base, 0, 1, 2);
            out.push_triangle(base, 1, 3, 2);
        }
    }
    Ok(())
}
