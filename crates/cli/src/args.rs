//! Parsers for the compact command-line notations.
//!
//! - points: `"x,y x,y x,y"` (whitespace or `;` between points)
//! - lists: `"3,4,5"`
//! - labeled sides: `"AB=8"`
//! - vertices: `A`..`D`, case-insensitive

use anyhow::{anyhow, bail, Context, Result};
use planimetry::prelude::{point, Point, QuadSide, QuadVertex, SideLength};

pub fn parse_point(s: &str) -> Result<Point> {
    let xy = parse_list(s)?;
    match xy.as_slice() {
        [x, y] => Ok(point(*x, *y)),
        _ => bail!("expected `x,y`, got `{s}`"),
    }
}

pub fn parse_points(s: &str) -> Result<Vec<Point>> {
    s.split(|c: char| c.is_whitespace() || c == ';')
        .filter(|t| !t.is_empty())
        .map(parse_point)
        .collect()
}

pub fn parse_list(s: &str) -> Result<Vec<f64>> {
    s.split(',')
        .map(|t| {
            let t = t.trim();
            t.parse::<f64>()
                .with_context(|| format!("`{t}` is not a number"))
        })
        .collect()
}

/// Exactly `N` comma-separated numbers.
pub fn parse_fixed<const N: usize>(s: &str) -> Result<[f64; N]> {
    let v = parse_list(s)?;
    let n = v.len();
    v.try_into()
        .map_err(|_| anyhow!("expected {N} comma-separated numbers, got {n}"))
}

/// Exactly `N` points.
pub fn parse_fixed_points<const N: usize>(s: &str) -> Result<[Point; N]> {
    let v = parse_points(s)?;
    let n = v.len();
    v.try_into()
        .map_err(|_| anyhow!("expected {N} points, got {n}"))
}

pub fn parse_vertex(s: &str) -> Result<QuadVertex> {
    match s.trim().to_ascii_uppercase().as_str() {
        "A" => Ok(QuadVertex::A),
        "B" => Ok(QuadVertex::B),
        "C" => Ok(QuadVertex::C),
        "D" => Ok(QuadVertex::D),
        other => bail!("unknown vertex `{other}`; use A, B, C or D"),
    }
}

pub fn parse_side(s: &str) -> Result<QuadSide> {
    match s.trim().to_ascii_uppercase().as_str() {
        "AB" => Ok(QuadSide::AB),
        "BC" => Ok(QuadSide::BC),
        "CD" => Ok(QuadSide::CD),
        "DA" => Ok(QuadSide::DA),
        other => bail!("unknown side `{other}`; use AB, BC, CD or DA"),
    }
}

/// `"AB=8"` → side AB with length 8.
pub fn parse_side_length(s: &str) -> Result<SideLength> {
    let (side, len) = s
        .split_once('=')
        .ok_or_else(|| anyhow!("expected `SIDE=LENGTH`, got `{s}`"))?;
    let length = len
        .trim()
        .parse::<f64>()
        .with_context(|| format!("`{len}` is not a number"))?;
    Ok(SideLength::new(parse_side(side)?, length))
}
