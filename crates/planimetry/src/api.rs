//! Curated flat surface over the crate modules.
//!
//! Prefer `prelude` for everyday shape work; this module additionally exposes the
//! free helpers, the builder and the polygon kernel under one path.

// Free helpers
pub use crate::general::{
    bisector_intersection, circumcenter, foot_of_perpendicular, is_valid_quadrilateral,
    is_valid_triangle, perpendicular, shift_coordinate, third_side_by_cosine_law,
};
// Circles
pub use crate::circle::{
    circle_from_center_and_point, circle_through_points, ArcOptions, CircleConstructions, Tangent,
};
// Kernel
pub use crate::kernel::{angle_to, cross, Circle, Line, Point, Polygon, Segment, Vector};
// Shapes
pub use crate::angle::{Angle, AngleValue};
pub use crate::shape::{
    AngleAt, ConnectionMatrix, Diagonals, Parallelogram, ParallelogramSpec, PlanarShape,
    QuadHeight, QuadKind, QuadOptions, QuadSide, QuadVertex, Quadrilateral, Rectangle,
    RectangleSpec, Rhombus, RhombusSpec, Shape, ShapeBuilder, SideLength, Square, SquareSpec,
    Trapezoid, TrapezoidSpec, TriSide, TriVertex, Triangle, TriangleOptions, TriangleSpec,
};
pub use crate::{GeomCfg, GeomError, GeomResult};
