use std::f64::consts::FRAC_PI_2;

use crate::error::{GeomError, GeomResult};
use crate::kernel::{point, Point};

use super::quad::{
    quad_newtype, side_vectors, Assembly, QuadKind, QuadOptions, Quadrilateral, CORNERS,
};

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SquareSpec {
    Length(f64),
    Points([Point; 4]),
}

/// Axis-aligned when built from a length: A(−l/2, −l/2), B(l/2, −l/2), C(l/2, l/2), D(−l/2, l/2).
#[derive(Clone, Debug, PartialEq)]
pub struct Square(Quadrilateral);

quad_newtype!(Square);

const KIND: QuadKind = QuadKind::Square;

impl Square {
    pub fn new(spec: SquareSpec, opts: QuadOptions) -> GeomResult<Self> {
        match spec {
            SquareSpec::Length(l) => {
                if !(l.is_finite() && l > 0.0) {
                    return Err(GeomError::invalid(format!("invalid length: {l}")));
                }
                let h = l / 2.0;
                let raw = [point(-h, -h), point(h, -h), point(h, h), point(-h, h)];
                let how = Assembly::parametric(KIND, &opts).with_angles([FRAC_PI_2; 4]);
                Quadrilateral::assemble(raw, how, &opts.cfg).map(Self)
            }
            SquareSpec::Points(raw) => {
                validate(&raw, &opts)?;
                Quadrilateral::assemble(raw, Assembly::points(KIND, &opts), &opts.cfg).map(Self)
            }
        }
    }
}

fn validate(raw: &[Point; 4], opts: &QuadOptions) -> GeomResult<()> {
    let cfg = &opts.cfg;
    let sides = side_vectors(raw);
    let len = sides.map(|s| s.norm());
    let equal = (0..3).all(|i| cfg.shape_eq(len[i], len[i + 1]));
    if len[0] <= cfg.eps_shape || !equal {
        return Err(GeomError::shape(
            KIND.name(),
            format!(
                "points do not form a square: side lengths {}, {}, {}, {}",
                len[0], len[1], len[2], len[3]
            ),
        ));
    }
    for i in 0..4 {
        let dot = sides[i].dot(&sides[(i + 1) % 4]);
        if !cfg.shape_eq(dot, 0.0) {
            return Err(GeomError::shape(
                KIND.name(),
                format!(
                    "points do not form a square: angle at {} is not right (dot {dot})",
                    CORNERS[i]
                ),
            ));
        }
    }
    Ok(())
}
