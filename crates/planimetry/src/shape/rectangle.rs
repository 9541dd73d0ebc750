use std::f64::consts::FRAC_PI_2;

use crate::error::{ensure_positive, GeomError, GeomResult};
use crate::kernel::{point, Point};

use super::quad::{
    adjacent_pair, quad_newtype, side_vectors, Assembly, QuadKind, QuadOptions, Quadrilateral,
    SideLength, CORNERS,
};

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RectangleSpec {
    /// `width` runs along AB, `height` along BC.
    Size { width: f64, height: f64 },
    /// One of AB/CD and one of BC/DA.
    Sides(SideLength, SideLength),
    Points([Point; 4]),
}

#[derive(Clone, Debug, PartialEq)]
pub struct Rectangle(Quadrilateral);

quad_newtype!(Rectangle);

const KIND: QuadKind = QuadKind::Rectangle;

impl Rectangle {
    pub fn new(spec: RectangleSpec, opts: QuadOptions) -> GeomResult<Self> {
        let (w, h) = match spec {
            RectangleSpec::Size { width, height } => {
                (ensure_positive("width", width)?, ensure_positive("height", height)?)
            }
            RectangleSpec::Sides(first, second) => adjacent_pair(first, second, KIND)?,
            RectangleSpec::Points(raw) => {
                validate(&raw, &opts)?;
                return Quadrilateral::assemble(raw, Assembly::points(KIND, &opts), &opts.cfg)
                    .map(Self);
            }
        };
        let (x, y) = (w / 2.0, h / 2.0);
        let raw = [point(-x, -y), point(x, -y), point(x, y), point(-x, y)];
        let how = Assembly::parametric(KIND, &opts).with_angles([FRAC_PI_2; 4]);
        Quadrilateral::assemble(raw, how, &opts.cfg).map(Self)
    }
}

fn validate(raw: &[Point; 4], opts: &QuadOptions) -> GeomResult<()> {
    let cfg = &opts.cfg;
    let sides = side_vectors(raw);
    let len = sides.map(|s| s.norm());
    if len[0] <= cfg.eps_shape || len[1] <= cfg.eps_shape {
        return Err(GeomError::shape(
            KIND.name(),
            "points do not form a rectangle: coincident vertices",
        ));
    }
    if !(cfg.shape_eq(len[0], len[2]) && cfg.shape_eq(len[1], len[3])) {
        return Err(GeomError::shape(
            KIND.name(),
            format!(
                "points do not form a rectangle: opposite sides differ ({}, {}, {}, {})",
                len[0], len[1], len[2], len[3]
            ),
        ));
    }
    if let Some(i) = (0..4).find(|&i| !cfg.shape_eq(sides[i].dot(&sides[(i + 1) % 4]), 0.0)) {
        return Err(GeomError::shape(
            KIND.name(),
            format!("points do not form a rectangle: angle at {} is not right", CORNERS[i]),
        ));
    }
    Ok(())
}
