//! Free-standing planar helpers used by the shape constructors.
//!
//! Purpose
//! - Side-length validity predicates, the law of cosines, the closed-form
//!   circumcenter, feet of perpendiculars and bisector rays.
//! - Everything here is pure and stateless; shapes call in, never the reverse.
//!
//! Code cross-refs: `shape::triangle`, `shape::quad`, `circle`.

use crate::angle::Angle;
use crate::error::{GeomError, GeomResult};
use crate::kernel::{cross, distance, Point, Segment};
use crate::types::GeomCfg;
use std::f64::consts::PI;

/// All sides positive and each strictly shorter than the sum of the other two.
pub fn is_valid_triangle(a: f64, b: f64, c: f64) -> bool {
    a > 0.0 && b > 0.0 && c > 0.0 && a + b > c && a + c > b && b + c > a
}

/// Necessary bound for four lengths: all positive and `|a − b| <= c + d`.
///
/// Used before deriving a trapezoid height, where `a`, `b` are the parallel sides.
pub fn is_valid_quadrilateral(a: f64, b: f64, c: f64, d: f64) -> bool {
    a > 0.0 && b > 0.0 && c > 0.0 && d > 0.0 && (a - b).abs() <= c + d
}

/// Side opposite to `angle` in a triangle with adjacent sides `a` and `b`.
pub fn third_side_by_cosine_law(a: f64, b: f64, angle: f64) -> GeomResult<f64> {
    if !a.is_finite() || !b.is_finite() || a < 0.0 || b < 0.0 {
        return Err(GeomError::invalid(format!(
            "sides must be non-negative finite numbers, got {a} and {b}"
        )));
    }
    if !angle.is_finite() || !(0.0..=PI).contains(&angle) {
        return Err(GeomError::invalid(format!(
            "angle must lie in [0, π], got {angle}"
        )));
    }
    Ok((a * a + b * b - 2.0 * a * b * angle.cos()).max(0.0).sqrt())
}

/// Circumcenter of three points (closed form).
pub fn circumcenter(a: Point, b: Point, c: Point) -> GeomResult<Point> {
    circumcenter_with(a, b, c, &GeomCfg::default())
}

pub fn circumcenter_with(a: Point, b: Point, c: Point, cfg: &GeomCfg) -> GeomResult<Point> {
    let (ab, ac) = (b - a, c - a);
    if cfg.is_collinear(cross(&ab, &ac), ab.norm(), ac.norm()) {
        return Err(GeomError::degenerate(format!(
            "points ({}, {}), ({}, {}), ({}, {}) are collinear",
            a.x, a.y, b.x, b.y, c.x, c.y
        )));
    }
    let d = 2.0 * (a.x * (b.y - c.y) + b.x * (c.y - a.y) + c.x * (a.y - b.y));
    let (sa, sb, sc) = (a.coords.norm_squared(), b.coords.norm_squared(), c.coords.norm_squared());
    let ux = (sa * (b.y - c.y) + sb * (c.y - a.y) + sc * (a.y - b.y)) / d;
    let uy = (sa * (c.x - b.x) + sb * (a.x - c.x) + sc * (b.x - a.x)) / d;
    Ok(Point::new(ux, uy))
}

/// Expresses `p` in a frame whose origin sits at `origin`.
#[inline]
pub fn shift_coordinate(p: Point, origin: Point) -> Point {
    Point::from(p - origin)
}

/// Foot of the perpendicular from `p` onto the infinite line through `seg`.
pub fn foot_of_perpendicular(p: Point, seg: &Segment) -> GeomResult<Point> {
    seg.line()
        .project(&p)
        .ok_or_else(|| GeomError::degenerate("segment has zero length"))
}

/// Distance from `p` to the line through `seg`, and the segment `p → foot`.
pub fn perpendicular(p: Point, seg: &Segment) -> GeomResult<(f64, Segment)> {
    perpendicular_with(p, seg, &GeomCfg::default())
}

pub fn perpendicular_with(p: Point, seg: &Segment, cfg: &GeomCfg) -> GeomResult<(f64, Segment)> {
    let foot = foot_of_perpendicular(p, seg)?;
    let d = distance(&p, &foot);
    let (u, v) = (seg.vector(), p - seg.start);
    if cfg.is_collinear(cross(&u, &v), u.norm(), v.norm()) {
        return Err(GeomError::degenerate(format!(
            "point ({}, {}) lies on the line of the segment",
            p.x, p.y
        )));
    }
    Ok((d, Segment::new(p, foot)))
}

/// Intersects the interior bisector ray of angle `first–vertex–third` with each
/// of `segments` and returns `vertex → hit` for every segment the ray reaches.
///
/// A segment lying along the ray reports the far end of the overlap.
pub fn bisector_intersection(
    first: Point,
    vertex: Point,
    third: Point,
    segments: &[Segment],
) -> GeomResult<Vec<Segment>> {
    let cfg = GeomCfg::default();
    let dir = Angle::from_points(first, vertex, third)?.bisector_vector();
    let mut out = Vec::new();
    for seg in segments {
        let along = seg.vector();
        let offset = seg.start - vertex;
        if cfg.is_collinear(cross(&dir, &along), 1.0, along.norm())
            && cfg.is_collinear(cross(&dir, &offset), 1.0, offset.norm())
        {
            // Segment on the bisector's line: take the farthest endpoint ahead of the vertex.
            let t = (seg.start - vertex).dot(&dir).max((seg.end - vertex).dot(&dir));
            if t >= 0.0 {
                out.push(Segment::new(vertex, vertex + dir * t));
            }
            continue;
        }
        // Long enough to cover the whole segment from the vertex.
        let reach = distance(&vertex, &seg.start).max(distance(&vertex, &seg.end)) * 2.0 + 1.0;
        let ray = Segment::new(vertex, vertex + dir * reach);
        if let Some(common) = ray.intersection(seg) {
            let hit = if distance(&vertex, &common.start) >= distance(&vertex, &common.end) {
                common.start
            } else {
                common.end
            };
            out.push(Segment::new(vertex, hit));
        }
    }
    Ok(out)
}
