//! Planar shape modeling: triangles, the quadrilateral family and circle constructions.
//!
//! Every shape accepts one of several mutually exclusive parameter sets (sides,
//! sides with an angle, or raw vertices), validates them, synthesizes vertices in
//! a centered frame and exposes the derived metric structure (angles, diagonals,
//! heights, medians, bisectors, midlines, radii).
//!
//! Units
//! - Radians everywhere; degree input goes through `AngleValue::Degrees` or
//!   `ArcOptions::angle_in_degrees` and is converted at the boundary.
//!
//! Layout
//! - `kernel`: points, vectors, segments, lines, circles, polygons (nalgebra + geo).
//! - `general`: free helpers (law of cosines, circumcenter, perpendiculars).
//! - `angle`: the `Angle` value object.
//! - `shape`: connection matrix, `Triangle`, `Quadrilateral` and its families.
//! - `circle`: `CircleConstructions` extension trait.

pub mod angle;
pub mod api;
pub mod circle;
pub mod error;
pub mod general;
pub mod kernel;
pub mod shape;
mod types;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use error::{GeomError, GeomResult};
pub use types::GeomCfg;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::angle::{Angle, AngleValue};
    pub use crate::circle::{ArcOptions, CircleConstructions, Tangent};
    pub use crate::error::{GeomError, GeomResult};
    pub use crate::kernel::{point, vector, Circle, Point, Segment, Vector};
    pub use crate::shape::{
        AngleAt, Parallelogram, ParallelogramSpec, PlanarShape, QuadOptions, QuadSide, QuadVertex,
        Rectangle, RectangleSpec, Rhombus, RhombusSpec, SideLength, Square, SquareSpec, Trapezoid,
        TrapezoidSpec, TriSide, TriVertex, Triangle, TriangleOptions, TriangleSpec,
    };
    pub use crate::types::GeomCfg;
}
