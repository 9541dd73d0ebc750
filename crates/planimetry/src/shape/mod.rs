//! Polygon shapes with connectivity.
//!
//! Purpose
//! - `Shape` is the common carrier: face vertices, every registered point
//!   (face plus auxiliary midpoints/feet), the connection matrix and the face
//!   polygon. Each concrete shape owns one and exposes it via `PlanarShape`.
//! - Constructors take a tagged parameter enum (`TriangleSpec`, `SquareSpec`, …)
//!   and either return a fully derived shape or a `GeomError`.
//!
//! Conventions
//! - Vertices are labeled A, B, C(, D) in loop order; index 0 is A.
//! - Parametric shapes are recentered on their significant center (circumcenter
//!   for triangles, diagonal intersection for quadrilaterals).
//!
//! Code cross-refs: `connection::ShapeBuilder`, `quad::Quadrilateral`.

pub mod connection;
mod parallelogram;
mod quad;
mod rectangle;
mod rhombus;
mod square;
mod trapezoid;
mod triangle;

pub use connection::{ConnectionMatrix, ShapeBuilder};
pub use parallelogram::{Parallelogram, ParallelogramSpec};
pub use quad::{
    AngleAt, Diagonals, QuadHeight, QuadKind, QuadOptions, QuadSide, QuadVertex, Quadrilateral,
    SideLength,
};
pub use rectangle::{Rectangle, RectangleSpec};
pub use rhombus::{Rhombus, RhombusSpec};
pub use square::{Square, SquareSpec};
pub use trapezoid::{Trapezoid, TrapezoidSpec};
pub use triangle::{TriSide, TriVertex, Triangle, TriangleOptions, TriangleSpec};

use crate::kernel::{Point, Polygon};

#[derive(Clone, Debug, PartialEq)]
pub struct Shape {
    points: Vec<Point>,
    face: Polygon,
    matrix: ConnectionMatrix,
}

impl Shape {
    /// Face vertices in loop order.
    #[inline]
    pub fn vertices(&self) -> &[Point] {
        self.face.vertices()
    }
    /// Face vertices followed by auxiliary points, in registration order.
    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.points
    }
    #[inline]
    pub fn face(&self) -> &Polygon {
        &self.face
    }
    #[inline]
    pub fn connection_matrix(&self) -> &ConnectionMatrix {
        &self.matrix
    }
}

/// Read access shared by every shape family.
pub trait PlanarShape {
    fn shape(&self) -> &Shape;

    fn vertices(&self) -> &[Point] {
        self.shape().vertices()
    }
    fn connection_matrix(&self) -> &ConnectionMatrix {
        self.shape().connection_matrix()
    }
    fn perimeter(&self) -> f64 {
        self.shape().face().perimeter()
    }
    fn semiperimeter(&self) -> f64 {
        self.perimeter() / 2.0
    }
    fn area(&self) -> f64 {
        self.shape().face().area()
    }
    /// Positive when the vertices run counterclockwise.
    fn signed_area(&self) -> f64 {
        self.shape().face().signed_area()
    }
}

#[cfg(test)]
mod tests;
