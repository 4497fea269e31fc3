//! Polyline stroking
//!
//! Builds a ribbon of triangles around a polyline's centerline. Vertices are
//! emitted in pairs, right edge then left edge, and consecutive pairs are
//! stitched with [`index_pairs`]. Caps and fan joins add triangle fans around
//! a pivot point between pairs.

use std::borrow::Cow;

use glam::{Vec2, Vec3};

use crate::config::MIN_SEGMENT_LENGTH;
use crate::error::BuildError;
use crate::geometry::{miter_vector, perp2d, LineCap, PolyLineOptions};
use crate::output::PolyLineOutput;

use super::ensure_finite;

/// Emit `n_pairs` quad-strip segments ending at the newest vertex.
///
/// With `n_vertices` vertices appended so far, pair `i` stitches vertices
/// `n_vertices - 2i - 4 ..= n_vertices - 2i - 1`: the older right/left pair
/// to the newer one, as two triangles.
///
/// # Panics
///
/// Debug builds panic when `n_vertices` is less than `2 * n_pairs + 2`.
pub fn index_pairs(n_pairs: u32, n_vertices: u32, indices: &mut Vec<u32>) {
    debug_assert!(
        u64::from(n_vertices) >= 2 * u64::from(n_pairs) + 2,
        "index_pairs: {} pairs need at least {} vertices, got {}",
        n_pairs,
        2 * u64::from(n_pairs) + 2,
        n_vertices
    );
    for i in 0..n_pairs {
        let newest = n_vertices - 2 * i;
        indices.extend_from_slice(&[
            newest - 4,
            newest - 2,
            newest - 3,
            newest - 3,
            newest - 2,
            newest - 1,
        ]);
    }
}

/// Offset direction and texcoord for one spoke of a fan
#[derive(Debug, Clone, Copy)]
struct Spoke {
    normal: Vec2,
    uv: Vec2,
}

impl Spoke {
    fn new(normal: Vec2, uv: Vec2) -> Self {
        Self { normal, uv }
    }
}

//  Tessellate a fan around `center` between    A       B
//  spokes A and B, interpolating their UVs      \ . . /
//  and rotating A's normal towards B's           \ p /
//                                                 \./
//                                                  C
fn add_fan(
    center: Vec3,
    a: Spoke,
    b: Spoke,
    c: Spoke,
    num_triangles: u32,
    half_width: f32,
    out: &mut PolyLineOutput,
) {
    if num_triangles == 0 {
        return;
    }

    let angle = a.normal.perp_dot(b.normal).atan2(a.normal.dot(b.normal));
    let start = out.vertex_count();

    out.push_vertex(center, c.normal, c.uv, half_width);
    out.push_vertex(center, a.normal, a.uv, half_width);

    // The sign of the sweep decides the winding of each triangle
    let (first, second) = if angle > 0.0 { (1, 2) } else { (2, 1) };

    for i in 0..num_triangles {
        let frac = (i + 1) as f32 / num_triangles as f32;
        let radial = Vec2::from_angle(angle * frac).rotate(a.normal);
        let uv = a.uv.lerp(b.uv, frac);
        out.push_vertex(center, radial, uv, half_width);

        out.push_index(start);
        out.push_index(start + i + first);
        out.push_index(start + i + second);
    }
}

/// Append the cap geometry for one end of a line.
///
/// `normal` is the unit offset direction of the end segment. A square cap
/// extends the stroke by the half-width past the end point; at the beginning
/// it is stitched to the first ribbon pair by the caller, since that pair
/// does not exist yet. A round cap sweeps a half-disc fan from `+normal` to
/// `-normal`, reversed at the beginning so texture direction stays
/// consistent along the line.
fn add_cap(
    coord: Vec3,
    normal: Vec2,
    cap: LineCap,
    is_beginning: bool,
    half_width: f32,
    out: &mut PolyLineOutput,
) {
    let v = if is_beginning { 0.0 } else { 1.0 }; // length-wise tex coord

    match cap {
        LineCap::Butt | LineCap::Round(0) => {}
        LineCap::Square => {
            let forward = Vec2::new(-normal.y, normal.x);
            let tangent = if is_beginning { -forward } else { forward };
            out.push_vertex(coord, normal + tangent, Vec2::new(1.0, v), half_width);
            out.push_vertex(coord, -normal + tangent, Vec2::new(0.0, v), half_width);
            if !is_beginning {
                index_pairs(1, out.vertex_count(), out.indices_mut());
            }
        }
        LineCap::Round(corners) => {
            let (a, b) = if is_beginning {
                (
                    Spoke::new(-normal, Vec2::new(0.0, v)),
                    Spoke::new(normal, Vec2::new(1.0, v)),
                )
            } else {
                (
                    Spoke::new(normal, Vec2::new(1.0, v)),
                    Spoke::new(-normal, Vec2::new(0.0, v)),
                )
            };
            let c = Spoke::new(Vec2::ZERO, Vec2::new(0.5, v));
            add_fan(coord, a, b, c, corners, half_width, out);
        }
    }
}

/// Drop consecutive points that coincide in 2D, borrowing when none do
fn distinct_points(line: &[Vec3]) -> Cow<'_, [Vec3]> {
    let min_sq = MIN_SEGMENT_LENGTH * MIN_SEGMENT_LENGTH;
    let is_repeat = |a: &Vec3, b: &Vec3| a.truncate().distance_squared(b.truncate()) < min_sq;

    if !line.windows(2).any(|w| is_repeat(&w[0], &w[1])) {
        return Cow::Borrowed(line);
    }

    let mut points = line.to_vec();
    points.dedup_by(|b, a| is_repeat(a, b));
    log::debug!(
        "merged {} repeated points in a {} point line",
        line.len() - points.len(),
        line.len()
    );
    Cow::Owned(points)
}

fn unit_normal(a: Vec3, b: Vec3) -> Vec2 {
    perp2d(a, b).normalize()
}

/// Stroke `line` into a ribbon mesh appended to `out`.
///
/// Lines with fewer than two distinct points produce nothing. Points that
/// repeat their predecessor in 2D are merged first, so every segment has a
/// well-defined normal. Non-finite coordinates are rejected before anything
/// is appended.
pub fn build_polyline(
    line: &[Vec3],
    options: &PolyLineOptions,
    out: &mut PolyLineOutput,
) -> Result<(), BuildError> {
    ensure_finite(line)?;

    let line = distinct_points(line);
    let line_size = line.len();
    if line_size < 2 {
        return Ok(());
    }

    let half_width = options.half_width;
    let triangles_on_join = options.join.triangle_count();

    let mut coord_curr = line[0];
    let mut coord_next = line[1];
    let mut norm_next = unit_normal(coord_curr, coord_next);

    // First point, preceded by its cap
    add_cap(coord_curr, norm_next, options.cap, true, half_width, out);
    out.push_vertex(coord_curr, norm_next, Vec2::new(1.0, 0.0), half_width); // right corner
    out.push_vertex(coord_curr, -norm_next, Vec2::new(0.0, 0.0), half_width); // left corner
    if options.cap == LineCap::Square {
        index_pairs(1, out.vertex_count(), out.indices_mut());
    }

    for i in 1..line_size - 1 {
        coord_curr = coord_next;
        coord_next = line[i + 1];

        let norm_prev = norm_next;
        norm_next = unit_normal(coord_curr, coord_next);
        let miter = miter_vector(norm_prev, norm_next);

        let v = i as f32 / line_size as f32;

        if triangles_on_join == 0 {
            out.push_vertex(coord_curr, miter, Vec2::new(1.0, v), half_width); // right corner
            out.push_vertex(coord_curr, -miter, Vec2::new(0.0, v), half_width); // left corner
            index_pairs(1, out.vertex_count(), out.indices_mut());
            continue;
        }

        // z component of cross(norm_next, norm_prev)
        let is_right_turn = norm_next.perp_dot(norm_prev) > 0.0;

        if is_right_turn {
            // Right side is inner: pin it to the miter, fan around the left
            out.push_vertex(coord_curr, miter, Vec2::new(1.0, v), half_width);
            out.push_vertex(coord_curr, -norm_prev, Vec2::new(0.0, v), half_width);
            index_pairs(1, out.vertex_count(), out.indices_mut());

            add_fan(
                coord_curr,
                Spoke::new(-norm_prev, Vec2::new(0.0, v)),
                Spoke::new(-norm_next, Vec2::new(0.0, v)),
                Spoke::new(miter, Vec2::new(1.0, v)),
                triangles_on_join,
                half_width,
                out,
            );

            out.push_vertex(coord_curr, miter, Vec2::new(1.0, v), half_width);
            out.push_vertex(coord_curr, -norm_next, Vec2::new(0.0, v), half_width);
        } else {
            // Left side is inner: pin it to the miter, fan around the right
            out.push_vertex(coord_curr, norm_prev, Vec2::new(1.0, v), half_width);
            out.push_vertex(coord_curr, -miter, Vec2::new(0.0, v), half_width);
            index_pairs(1, out.vertex_count(), out.indices_mut());

            add_fan(
                coord_curr,
                Spoke::new(norm_prev, Vec2::new(1.0, v)),
                Spoke::new(norm_next, Vec2::new(1.0, v)),
                Spoke::new(-miter, Vec2::new(0.0, v)),
                triangles_on_join,
                half_width,
                out,
            );

            out.push_vertex(coord_curr, norm_next, Vec2::new(1.0, v), half_width);
            out.push_vertex(coord_curr, -miter, Vec2::new(0.0, v), half_width);
        }
    }

    // Last point, closing the final segment, followed by its cap
    out.push_vertex(coord_next, norm_next, Vec2::new(1.0, 1.0), half_width); // right corner
    out.push_vertex(coord_next, -norm_next, Vec2::new(0.0, 1.0), half_width); // left corner
    index_pairs(1, out.vertex_count(), out.indices_mut());
    add_cap(coord_next, norm_next, options.cap, false, half_width, out);

    log::trace!(
        "polyline: {} points -> {} vertices, {} indices",
        line_size,
        out.vertex_count(),
        out.indices().len()
    );
    Ok(())
}
