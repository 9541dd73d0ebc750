//! Planar kernel adapter.
//!
//! Purpose
//! - Give the shape constructors one small vocabulary (`Point`, `Vector`,
//!   `Segment`, `Line`, `Circle`, `Polygon`) backed by `nalgebra` for point and
//!   vector algebra and by `geo` for polygon area and segment intersection.
//! - Nothing above this module touches `geo` types directly.
//!
//! Conventions
//! - Angles are radians, measured counterclockwise from +x.
//! - `angle_to(u, v)` is the counterclockwise sweep from `u` to `v` in `[0, 2π)`.

mod circle;
mod polygon;
mod segment;

pub use circle::Circle;
pub use polygon::Polygon;
pub use segment::{Line, Segment};

use std::f64::consts::TAU;

pub type Point = nalgebra::Point2<f64>;
pub type Vector = nalgebra::Vector2<f64>;

#[inline]
pub fn point(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

#[inline]
pub fn vector(x: f64, y: f64) -> Vector {
    Vector::new(x, y)
}

/// z-component of `u × v`. Positive when `v` lies counterclockwise of `u`.
#[inline]
pub fn cross(u: &Vector, v: &Vector) -> f64 {
    u.x * v.y - u.y * v.x
}

#[inline]
pub fn distance(a: &Point, b: &Point) -> f64 {
    nalgebra::distance(a, b)
}

/// Counterclockwise angle from `u` to `v`, normalized to `[0, 2π)`.
pub fn angle_to(u: &Vector, v: &Vector) -> f64 {
    let theta = cross(u, v).atan2(u.dot(v));
    let theta = if theta < 0.0 { theta + TAU } else { theta };
    // atan2 of (-0.0, positive) lands here as exactly TAU after the shift.
    if theta >= TAU {
        0.0
    } else {
        theta
    }
}

/// Rotates `v` counterclockwise by `theta`.
#[inline]
pub fn rotate(v: &Vector, theta: f64) -> Vector {
    nalgebra::Rotation2::new(theta) * v
}

/// Unit vector at angle `theta`.
#[inline]
pub fn unit(theta: f64) -> Vector {
    vector(theta.cos(), theta.sin())
}

pub(crate) fn to_geo(p: &Point) -> geo::Coord<f64> {
    geo::coord! { x: p.x, y: p.y }
}

pub(crate) fn from_geo(c: geo::Coord<f64>) -> Point {
    point(c.x, c.y)
}
