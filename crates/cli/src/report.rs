//! Serializable summaries of constructed shapes.

use std::collections::BTreeMap;

use anyhow::Result;
use planimetry::prelude::*;
use planimetry::shape::Quadrilateral;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct TriangleReport {
    pub vertices: [[f64; 2]; 3],
    /// AB, BC, CA.
    pub sides: [f64; 3],
    pub angles_deg: [f64; 3],
    pub perimeter: f64,
    pub area: f64,
    pub circumradius: f64,
    pub inradius: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub medians: Option<[f64; 3]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heights: Option<[f64; 3]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bisectors: Option<[f64; 3]>,
    /// Midlines parallel to AB, BC, CA.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub midlines: Option<[f64; 3]>,
}

#[derive(Debug, Serialize)]
pub struct QuadReport {
    pub kind: &'static str,
    pub vertices: [[f64; 2]; 4],
    /// AB, BC, CD, DA.
    pub sides: [f64; 4],
    pub angles_deg: [f64; 4],
    pub perimeter: f64,
    pub area: f64,
    pub diagonal_intersection: [f64; 2],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diagonals: Option<DiagonalLengths>,
    /// Keyed `"A->BC"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heights: Option<BTreeMap<String, f64>>,
}

#[derive(Debug, Serialize)]
pub struct DiagonalLengths {
    pub ac: f64,
    pub bd: f64,
}

#[derive(Debug, Serialize)]
pub struct TangentReport {
    pub point_of_tangency: [f64; 2],
    pub start: [f64; 2],
    pub end: [f64; 2],
    pub length: f64,
}

fn xy(p: Point) -> [f64; 2] {
    [p.x, p.y]
}

fn family(f: impl Fn(TriVertex) -> GeomResult<f64>) -> Option<[f64; 3]> {
    let [a, b, c] = TriVertex::ALL.map(f);
    Some([a.ok()?, b.ok()?, c.ok()?])
}

pub fn triangle(t: &Triangle) -> Result<TriangleReport> {
    Ok(TriangleReport {
        vertices: TriVertex::ALL.map(|v| xy(t.point(v))),
        sides: TriSide::ALL.map(|s| t.length(s)),
        angles_deg: TriVertex::ALL.map(|v| t.angle_degrees(v)),
        perimeter: t.perimeter(),
        area: t.area(),
        circumradius: t.circumradius()?,
        inradius: t.inradius(),
        medians: family(|v| t.median_length(v)),
        heights: family(|v| t.height_length(v)),
        bisectors: family(|v| t.bisector_length(v)),
        midlines: {
            let [ab, bc, ca] = TriSide::ALL.map(|s| t.midline_length(s));
            ab.and_then(|ab| Ok([ab, bc?, ca?])).ok()
        },
    })
}

pub fn quadrilateral(q: &Quadrilateral) -> QuadReport {
    let diagonals = match (q.length_diagonal_ac(), q.length_diagonal_bd()) {
        (Ok(ac), Ok(bd)) => Some(DiagonalLengths { ac, bd }),
        _ => None,
    };
    let heights = q.heights().ok().map(|hs| {
        hs.iter()
            .map(|h| (format!("{:?}->{:?}", h.from, h.to), h.length()))
            .collect()
    });
    QuadReport {
        kind: q.kind().name(),
        vertices: QuadVertex::ALL.map(|v| xy(q.point(v))),
        sides: q.lengths(),
        angles_deg: QuadVertex::ALL.map(|v| q.angle_degrees(v)),
        perimeter: q.perimeter(),
        area: q.area(),
        diagonal_intersection: xy(q.diagonal_intersection_point()),
        diagonals,
        heights,
    }
}

pub fn tangents(ts: &[Tangent]) -> Vec<TangentReport> {
    ts.iter()
        .map(|t| TangentReport {
            point_of_tangency: xy(t.point_of_tangency),
            start: xy(t.segment.start),
            end: xy(t.segment.end),
            length: t.segment.length(),
        })
        .collect()
}
