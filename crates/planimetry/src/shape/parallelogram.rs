//! Parallelogram from one side of each parallel class and one named angle.
//!
//! Placement: A at the origin, B on +x, D = DA·(cos A, sin A), C = B + (D − A);
//! then recentered on the diagonal intersection.

use std::f64::consts::PI;

use crate::error::{GeomError, GeomResult};
use crate::kernel::{point, unit, Point};

use super::quad::{
    adjacent_pair, measured_angles, quad_newtype, side_vectors, AngleAt, Assembly, QuadKind,
    QuadOptions, Quadrilateral, SideLength,
};

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ParallelogramSpec {
    SidesAndAngle {
        first: SideLength,
        second: SideLength,
        angle: AngleAt,
    },
    Points([Point; 4]),
}

#[derive(Clone, Debug, PartialEq)]
pub struct Parallelogram(Quadrilateral);

quad_newtype!(Parallelogram);

const KIND: QuadKind = QuadKind::Parallelogram;

impl Parallelogram {
    pub fn new(spec: ParallelogramSpec, opts: QuadOptions) -> GeomResult<Self> {
        match spec {
            ParallelogramSpec::SidesAndAngle {
                first,
                second,
                angle,
            } => {
                let (ab, da) = adjacent_pair(first, second, KIND)?;
                let a = angle.angle_a()?;
                let (a0, b0) = (point(0.0, 0.0), point(ab, 0.0));
                let d0 = a0 + unit(a) * da;
                let c0 = b0 + (d0 - a0);
                let how = Assembly::parametric(KIND, &opts).with_angles([a, PI - a, a, PI - a]);
                Quadrilateral::assemble([a0, b0, c0, d0], how, &opts.cfg).map(Self)
            }
            ParallelogramSpec::Points(raw) => {
                validate(&raw, &opts)?;
                Quadrilateral::assemble(raw, Assembly::points(KIND, &opts), &opts.cfg).map(Self)
            }
        }
    }
}

fn validate(raw: &[Point; 4], opts: &QuadOptions) -> GeomResult<()> {
    let cfg = &opts.cfg;
    let len = side_vectors(raw).map(|s| s.norm());
    if !(cfg.shape_eq(len[0], len[2]) && cfg.shape_eq(len[1], len[3])) {
        return Err(GeomError::shape(
            KIND.name(),
            format!(
                "points do not form a parallelogram: opposite sides differ ({}, {}, {}, {})",
                len[0], len[1], len[2], len[3]
            ),
        ));
    }
    let angles = measured_angles(raw, cfg)?;
    if !(cfg.shape_eq(angles[0], angles[2]) && cfg.shape_eq(angles[1], angles[3])) {
        return Err(GeomError::shape(
            KIND.name(),
            "points do not form a parallelogram: opposite angles differ",
        ));
    }
    Ok(())
}
