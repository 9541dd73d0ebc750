//! Trapezoid with AB ∥ CD as the bases.
//!
//! Placement: A at the origin, B = (AB, 0), D = (x, h), C = (x + CD, h), then
//! recentered on the diagonal intersection. Angles are always measured from
//! the final vertices.

use std::f64::consts::PI;

use crate::error::{ensure_positive, GeomError, GeomResult};
use crate::general::is_valid_quadrilateral;
use crate::kernel::{cross, point, Point};

use super::quad::{
    quad_newtype, side_vectors, AngleAt, Assembly, QuadKind, QuadOptions, QuadVertex,
    Quadrilateral,
};

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TrapezoidSpec {
    FourSides { ab: f64, bc: f64, cd: f64, da: f64 },
    /// Bases AB and CD, the distance between them, and one angle.
    BasesHeightAngle {
        ab: f64,
        cd: f64,
        height: f64,
        angle: AngleAt,
    },
    Points([Point; 4]),
}

#[derive(Clone, Debug, PartialEq)]
pub struct Trapezoid(Quadrilateral);

quad_newtype!(Trapezoid);

const KIND: QuadKind = QuadKind::Trapezoid;

impl Trapezoid {
    pub fn new(spec: TrapezoidSpec, opts: QuadOptions) -> GeomResult<Self> {
        let raw = match spec {
            TrapezoidSpec::FourSides { ab, bc, cd, da } => from_sides(ab, bc, cd, da)?,
            TrapezoidSpec::BasesHeightAngle {
                ab,
                cd,
                height,
                angle,
            } => from_bases(ab, cd, height, angle)?,
            TrapezoidSpec::Points(raw) => {
                validate(&raw, &opts)?;
                return Quadrilateral::assemble(raw, Assembly::points(KIND, &opts), &opts.cfg)
                    .map(Self);
            }
        };
        Quadrilateral::assemble(raw, Assembly::parametric(KIND, &opts), &opts.cfg).map(Self)
    }

    /// Distance between the bases AB and CD.
    pub fn height_between_bases(&self) -> f64 {
        let ab = self.point_b() - self.point_a();
        cross(&ab, &(self.point_d() - self.point_a())).abs() / ab.norm()
    }
}

fn from_sides(ab: f64, bc: f64, cd: f64, da: f64) -> GeomResult<[Point; 4]> {
    for (name, v) in [("AB", ab), ("BC", bc), ("CD", cd), ("DA", da)] {
        ensure_positive(name, v)?;
    }
    let k = ab - cd;
    if (da - bc).abs() > k.abs() || !is_valid_quadrilateral(ab, cd, bc, da) {
        tracing::trace!(ab, bc, cd, da, "trapezoid side check failed");
        return Err(GeomError::shape(
            KIND.name(),
            format!("sides {ab}, {bc}, {cd}, {da} do not form a trapezoid"),
        ));
    }
    if k == 0.0 {
        return Err(GeomError::shape(
            KIND.name(),
            "equal bases leave the legs' slant undetermined",
        ));
    }
    let x = (k * k - bc * bc + da * da) / (2.0 * k);
    let h2 = da * da - x * x;
    if h2.is_nan() || h2 <= 0.0 {
        return Err(GeomError::shape(
            KIND.name(),
            format!("sides {ab}, {bc}, {cd}, {da} give no positive height"),
        ));
    }
    let h = h2.sqrt();
    Ok([point(0.0, 0.0), point(ab, 0.0), point(x + cd, h), point(x, h)])
}

fn from_bases(ab: f64, cd: f64, height: f64, angle: AngleAt) -> GeomResult<[Point; 4]> {
    let ab = ensure_positive("AB", ab)?;
    let cd = ensure_positive("CD", cd)?;
    let h = ensure_positive("height", height)?;
    let r = angle.radians()?;
    // Angles at A and B sit on the lower base; C and D are their supplements.
    let (dx, cx) = match angle.vertex {
        QuadVertex::A => {
            let dx = h / r.tan();
            (dx, dx + cd)
        }
        QuadVertex::D => {
            let dx = h / (PI - r).tan();
            (dx, dx + cd)
        }
        QuadVertex::B => {
            let cx = ab - h / r.tan();
            (cx - cd, cx)
        }
        QuadVertex::C => {
            let cx = ab - h / (PI - r).tan();
            (cx - cd, cx)
        }
    };
    Ok([point(0.0, 0.0), point(ab, 0.0), point(cx, h), point(dx, h)])
}

fn validate(raw: &[Point; 4], opts: &QuadOptions) -> GeomResult<()> {
    let cfg = &opts.cfg;
    let s = side_vectors(raw);
    let parallel = |u: usize, v: usize| cfg.shape_eq(cross(&s[u], &s[v]), 0.0);
    if !(parallel(0, 2) || parallel(1, 3)) {
        return Err(GeomError::shape(
            KIND.name(),
            "points do not form a trapezoid: no pair of opposite sides is parallel",
        ));
    }
    Ok(())
}
