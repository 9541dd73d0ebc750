//! Constructions on a circle: points by angle, radius/diameter/chord segments,
//! tangents from an external point, and circles through given points.
//!
//! Provided as the `CircleConstructions` extension trait on `kernel::Circle`.

use std::f64::consts::TAU;

use crate::error::{GeomError, GeomResult};
use crate::general::circumcenter;
use crate::kernel::{distance, rotate, unit, Circle, Point, Segment};

/// How an angle on the circle is read.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ArcOptions {
    pub angle_in_degrees: bool,
    /// Negates the angle before placing the point.
    pub counterclockwise: bool,
}

impl ArcOptions {
    pub fn degrees() -> Self {
        Self {
            angle_in_degrees: true,
            ..Self::default()
        }
    }
}

/// Tangent segment ending at the external point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tangent {
    pub point_of_tangency: Point,
    pub segment: Segment,
}

pub trait CircleConstructions {
    fn point_on_circle(&self, angle: f64, opts: ArcOptions) -> GeomResult<Point>;
    fn radius_at(&self, angle: f64, opts: ArcOptions) -> GeomResult<Segment>;
    fn diameter_at(&self, angle: f64, opts: ArcOptions) -> GeomResult<Segment>;
    fn chord_by_angles(&self, a1: f64, a2: f64, opts: ArcOptions) -> GeomResult<Segment>;
    /// Both tangents from `p`; `segment_length > 0` re-anchors each start at
    /// that distance from `p`.
    fn tangents_from_point(&self, p: Point, segment_length: Option<f64>)
        -> GeomResult<[Tangent; 2]>;
}

impl CircleConstructions for Circle {
    fn point_on_circle(&self, angle: f64, opts: ArcOptions) -> GeomResult<Point> {
        if !angle.is_finite() {
            return Err(GeomError::invalid(format!("angle must be a number, got {angle}")));
        }
        let theta = if opts.angle_in_degrees {
            angle.to_radians()
        } else {
            angle
        };
        if theta.abs() > TAU {
            return Err(GeomError::invalid(format!(
                "angle {angle} exceeds a full turn"
            )));
        }
        let theta = if opts.counterclockwise { -theta } else { theta };
        Ok(self.center + unit(theta) * self.r)
    }

    fn radius_at(&self, angle: f64, opts: ArcOptions) -> GeomResult<Segment> {
        Ok(Segment::new(self.center, self.point_on_circle(angle, opts)?))
    }

    fn diameter_at(&self, angle: f64, opts: ArcOptions) -> GeomResult<Segment> {
        let start = self.point_on_circle(angle, opts)?;
        let end = self.center - (start - self.center);
        Ok(Segment::new(start, end))
    }

    fn chord_by_angles(&self, a1: f64, a2: f64, opts: ArcOptions) -> GeomResult<Segment> {
        if a1 == a2 {
            return Err(GeomError::invalid(format!(
                "chord needs two different angles, got {a1} twice"
            )));
        }
        Ok(Segment::new(
            self.point_on_circle(a1, opts)?,
            self.point_on_circle(a2, opts)?,
        ))
    }

    fn tangents_from_point(
        &self,
        p: Point,
        segment_length: Option<f64>,
    ) -> GeomResult<[Tangent; 2]> {
        let len = match segment_length {
            None => 0.0,
            Some(l) if l.is_finite() && l >= 0.0 => l,
            Some(l) => {
                return Err(GeomError::invalid(format!(
                    "segment length must be a non-negative number, got {l}"
                )))
            }
        };
        if self.contains(&p) {
            return Err(GeomError::invalid(format!(
                "point ({}, {}) must be outside the circle",
                p.x, p.y
            )));
        }
        let d = distance(&self.center, &p);
        let alpha = (self.r / d).acos();
        let toward = (p - self.center) / d;
        let make = |sign: f64| {
            let touch = self.center + rotate(&toward, sign * alpha) * self.r;
            let start = if len > 0.0 {
                p + (touch - p).normalize() * len
            } else {
                touch
            };
            Tangent {
                point_of_tangency: touch,
                segment: Segment::new(start, p),
            }
        };
        Ok([make(1.0), make(-1.0)])
    }
}

/// Circle centered at `center` passing through `p`.
pub fn circle_from_center_and_point(center: Point, p: Point) -> GeomResult<Circle> {
    Circle::new(center, distance(&center, &p))
}

/// Circumscribed circle of three points.
pub fn circle_through_points(p1: Point, p2: Point, p3: Point) -> GeomResult<Circle> {
    let center = circumcenter(p1, p2, p3)?;
    Circle::new(center, distance(&center, &p1))
}
