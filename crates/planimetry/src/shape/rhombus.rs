//! Rhombus from a side length and one named angle.
//!
//! Diagonals lie on the axes: AC = 2l·cos(A/2) along x, BD = 2l·sin(A/2) along y.
//! Diagonals are always computed for a rhombus.

use std::f64::consts::PI;

use crate::error::{ensure_positive, GeomError, GeomResult};
use crate::kernel::{point, Point};

use super::quad::{
    measured_angles, quad_newtype, side_vectors, AngleAt, Assembly, QuadKind, QuadOptions,
    Quadrilateral,
};

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RhombusSpec {
    LengthAndAngle { length: f64, angle: AngleAt },
    Points([Point; 4]),
}

#[derive(Clone, Debug, PartialEq)]
pub struct Rhombus(Quadrilateral);

quad_newtype!(Rhombus);

const KIND: QuadKind = QuadKind::Rhombus;

impl Rhombus {
    pub fn new(spec: RhombusSpec, opts: QuadOptions) -> GeomResult<Self> {
        match spec {
            RhombusSpec::LengthAndAngle { length, angle } => {
                let l = ensure_positive("length", length)?;
                let a = angle.angle_a()?;
                let (d1, d2) = (2.0 * l * (a / 2.0).cos(), 2.0 * l * (a / 2.0).sin());
                let raw = [
                    point(-d1 / 2.0, 0.0),
                    point(0.0, -d2 / 2.0),
                    point(d1 / 2.0, 0.0),
                    point(0.0, d2 / 2.0),
                ];
                let mut how = Assembly::parametric(KIND, &opts).with_angles([a, PI - a, a, PI - a]);
                how.diagonals = true;
                Quadrilateral::assemble(raw, how, &opts.cfg).map(Self)
            }
            RhombusSpec::Points(raw) => {
                validate(&raw, &opts)?;
                let mut how = Assembly::points(KIND, &opts);
                how.diagonals = true;
                Quadrilateral::assemble(raw, how, &opts.cfg).map(Self)
            }
        }
    }
}

fn validate(raw: &[Point; 4], opts: &QuadOptions) -> GeomResult<()> {
    let cfg = &opts.cfg;
    let len = side_vectors(raw).map(|s| s.norm());
    let equal = (0..3).all(|i| cfg.shape_eq(len[i], len[i + 1]));
    if len[0] <= cfg.eps_shape || !equal {
        return Err(GeomError::shape(
            KIND.name(),
            format!(
                "points do not form a rhombus: side lengths {}, {}, {}, {}",
                len[0], len[1], len[2], len[3]
            ),
        ));
    }
    let angles = measured_angles(raw, cfg)?;
    if !(cfg.shape_eq(angles[0], angles[2]) && cfg.shape_eq(angles[1], angles[3])) {
        return Err(GeomError::shape(
            KIND.name(),
            "points do not form a rhombus: opposite angles differ",
        ));
    }
    Ok(())
}
