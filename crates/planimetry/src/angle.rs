//! Angle value object and angle inputs.
//!
//! - `Angle` keeps both arms and reports the counterclockwise sweep from
//!   `vector1` to `vector2` in `[0, 2π)`, plus the unsigned interior value.
//! - `AngleValue` tags user input with its unit; everything internal is radians.

use crate::error::{ensure_positive, GeomError, GeomResult};
use crate::kernel::{angle_to, cross, rotate, unit, Point, Segment, Vector};
use crate::types::GeomCfg;
use std::f64::consts::TAU;

/// Angle supplied by a caller, in the unit they chose.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum AngleValue {
    Radians(f64),
    Degrees(f64),
}

impl AngleValue {
    #[inline]
    pub fn radians(self) -> f64 {
        match self {
            AngleValue::Radians(r) => r,
            AngleValue::Degrees(d) => d.to_radians(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Angle {
    vector1: Vector,
    vector2: Vector,
    radians: f64,
}

impl Angle {
    /// Angle at `vertex` between the rays towards `p1` and `p2`.
    pub fn from_points(p1: Point, vertex: Point, p2: Point) -> GeomResult<Self> {
        Self::from_vectors(p1 - vertex, p2 - vertex)
    }

    pub fn from_segments(s1: &Segment, s2: &Segment) -> GeomResult<Self> {
        Self::from_vectors(s1.vector(), s2.vector())
    }

    pub fn from_vectors(v1: Vector, v2: Vector) -> GeomResult<Self> {
        Self::from_vectors_with(v1, v2, &GeomCfg::default())
    }

    pub fn from_vectors_with(v1: Vector, v2: Vector, cfg: &GeomCfg) -> GeomResult<Self> {
        if cfg.is_collinear(cross(&v1, &v2), v1.norm(), v2.norm()) {
            return Err(GeomError::degenerate(format!(
                "vectors ({}, {}) and ({}, {}) are collinear",
                v1.x, v1.y, v2.x, v2.y
            )));
        }
        Ok(Self {
            vector1: v1,
            vector2: v2,
            radians: angle_to(&v1, &v2),
        })
    }

    /// Arms of the given lengths: the first along +x, the second at `angle`.
    ///
    /// Unlike the other constructors this accepts straight and full angles.
    pub fn from_lengths_and_angle(len1: f64, len2: f64, angle: f64) -> GeomResult<Self> {
        ensure_positive("first arm length", len1)?;
        ensure_positive("second arm length", len2)?;
        if !angle.is_finite() || !(0.0..=TAU).contains(&angle) {
            return Err(GeomError::invalid(format!(
                "angle must lie in [0, 2π], got {angle}"
            )));
        }
        let vector1 = Vector::new(len1, 0.0);
        let vector2 = unit(angle) * len2;
        Ok(Self {
            vector1,
            vector2,
            radians: angle_to(&vector1, &vector2),
        })
    }

    #[inline]
    pub fn vector1(&self) -> Vector {
        self.vector1
    }
    #[inline]
    pub fn vector2(&self) -> Vector {
        self.vector2
    }

    /// Counterclockwise sweep from `vector1` to `vector2`, in `[0, 2π)`.
    #[inline]
    pub fn radians(&self) -> f64 {
        self.radians
    }
    #[inline]
    pub fn degrees(&self) -> f64 {
        self.radians.to_degrees()
    }

    /// Unsigned angle between the arms, in `[0, π]`.
    #[inline]
    pub fn interior_radians(&self) -> f64 {
        self.radians.min(TAU - self.radians)
    }
    #[inline]
    pub fn interior_degrees(&self) -> f64 {
        self.interior_radians().to_degrees()
    }

    /// Unit vector halving the interior angle.
    pub fn bisector_vector(&self) -> Vector {
        let theta = self.interior_radians();
        let start = if self.radians <= TAU - self.radians {
            self.vector1
        } else {
            self.vector2
        };
        rotate(&start.normalize(), theta / 2.0)
    }
}
