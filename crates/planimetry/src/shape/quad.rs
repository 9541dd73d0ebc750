//! Quadrilateral base shared by square, rectangle, rhombus, parallelogram and trapezoid.
//!
//! Purpose
//! - Hold the four vertices (A, B, C, D in loop order), interior angles, the
//!   diagonal intersection point and the opt-in diagonals and heights.
//! - Family constructors only synthesize raw vertices (and validate them);
//!   `Quadrilateral::assemble` does recentering and every derived quantity.
//!
//! Heights are the eight perpendiculars from each vertex to the two sides not
//! touching it: A→BC, A→CD, B→CD, B→DA, C→DA, C→AB, D→AB, D→BC.

use std::f64::consts::PI;

use crate::angle::{Angle, AngleValue};
use crate::error::{ensure_positive, GeomError, GeomResult};
use crate::general::{perpendicular_with, shift_coordinate};
use crate::kernel::{distance, Point, Segment, Vector};
use crate::types::GeomCfg;

use super::{PlanarShape, Shape, ShapeBuilder};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum QuadVertex {
    A,
    B,
    C,
    D,
}

impl QuadVertex {
    pub const ALL: [QuadVertex; 4] = [QuadVertex::A, QuadVertex::B, QuadVertex::C, QuadVertex::D];

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// The two sides that do not touch this vertex.
    pub fn opposite_sides(self) -> [QuadSide; 2] {
        match self {
            QuadVertex::A => [QuadSide::BC, QuadSide::CD],
            QuadVertex::B => [QuadSide::CD, QuadSide::DA],
            QuadVertex::C => [QuadSide::DA, QuadSide::AB],
            QuadVertex::D => [QuadSide::AB, QuadSide::BC],
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum QuadSide {
    AB,
    BC,
    CD,
    DA,
}

impl QuadSide {
    pub const ALL: [QuadSide; 4] = [QuadSide::AB, QuadSide::BC, QuadSide::CD, QuadSide::DA];

    #[inline]
    pub fn ends(self) -> (usize, usize) {
        let i = self as usize;
        (i, (i + 1) % 4)
    }

    /// AB and CD form one parallel class, BC and DA the other.
    #[inline]
    pub fn is_base(self) -> bool {
        matches!(self, QuadSide::AB | QuadSide::CD)
    }
}

/// A side label with its length.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SideLength {
    pub side: QuadSide,
    pub length: f64,
}

impl SideLength {
    pub fn new(side: QuadSide, length: f64) -> Self {
        Self { side, length }
    }
}

/// An angle attached to a named vertex.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AngleAt {
    pub vertex: QuadVertex,
    pub value: AngleValue,
}

impl AngleAt {
    pub fn new(vertex: QuadVertex, value: AngleValue) -> Self {
        Self { vertex, value }
    }

    /// Radians, checked to lie strictly between 0 and π.
    pub fn radians(self) -> GeomResult<f64> {
        let r = self.value.radians();
        if r.is_finite() && r > 0.0 && r < PI {
            Ok(r)
        } else {
            Err(GeomError::invalid(format!(
                "angle at {:?} must lie in (0, π), got {r}",
                self.vertex
            )))
        }
    }

    /// Angle at A for a figure whose opposite angles match and adjacent ones
    /// are supplementary.
    pub(super) fn angle_a(self) -> GeomResult<f64> {
        let r = self.radians()?;
        Ok(match self.vertex {
            QuadVertex::A | QuadVertex::C => r,
            QuadVertex::B | QuadVertex::D => PI - r,
        })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum QuadKind {
    Square,
    Rectangle,
    Rhombus,
    Parallelogram,
    Trapezoid,
}

impl QuadKind {
    pub fn name(self) -> &'static str {
        match self {
            QuadKind::Square => "square",
            QuadKind::Rectangle => "rectangle",
            QuadKind::Rhombus => "rhombus",
            QuadKind::Parallelogram => "parallelogram",
            QuadKind::Trapezoid => "trapezoid",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct QuadOptions {
    pub diagonals: bool,
    pub heights: bool,
    /// Recenter point input on the diagonal intersection. Parametric input is
    /// always recentered.
    pub shift_coordinate: bool,
    pub cfg: GeomCfg,
}

impl Default for QuadOptions {
    fn default() -> Self {
        Self {
            diagonals: false,
            heights: false,
            shift_coordinate: true,
            cfg: GeomCfg::default(),
        }
    }
}

impl QuadOptions {
    pub fn all() -> Self {
        Self {
            diagonals: true,
            heights: true,
            ..Self::default()
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Diagonals {
    pub ac: Segment,
    pub bd: Segment,
}

/// Perpendicular from `from` to the line of side `to`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct QuadHeight {
    pub from: QuadVertex,
    pub to: QuadSide,
    pub segment: Segment,
}

impl QuadHeight {
    #[inline]
    pub fn length(&self) -> f64 {
        self.segment.length()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Quadrilateral {
    kind: QuadKind,
    shape: Shape,
    angles: [f64; 4],
    center: Point,
    diagonals: Option<Diagonals>,
    heights: Option<Vec<QuadHeight>>,
}

/// How `assemble` should treat the raw vertices.
pub(super) struct Assembly {
    pub kind: QuadKind,
    pub shift: bool,
    pub diagonals: bool,
    pub heights: bool,
    /// Exact angles known from the parameters; measured from the vertices otherwise.
    pub angles: Option<[f64; 4]>,
}

impl Assembly {
    /// Parametric input: always recentered, options decide the rest.
    pub fn parametric(kind: QuadKind, opts: &QuadOptions) -> Self {
        Self {
            kind,
            shift: true,
            diagonals: opts.diagonals,
            heights: opts.heights,
            angles: None,
        }
    }

    pub fn points(kind: QuadKind, opts: &QuadOptions) -> Self {
        Self {
            shift: opts.shift_coordinate,
            ..Self::parametric(kind, opts)
        }
    }

    pub fn with_angles(mut self, angles: [f64; 4]) -> Self {
        self.angles = Some(angles);
        self
    }
}

/// Vertex between edge `i` and edge `i + 1` of `side_vectors`.
pub(super) const CORNERS: [&str; 4] = ["B", "C", "D", "A"];

/// `[AB, BC, CD, DA]` edge vectors.
pub(super) fn side_vectors(p: &[Point; 4]) -> [Vector; 4] {
    [p[1] - p[0], p[2] - p[1], p[3] - p[2], p[0] - p[3]]
}

/// Interior angles measured at each vertex.
pub(super) fn measured_angles(p: &[Point; 4], cfg: &GeomCfg) -> GeomResult<[f64; 4]> {
    let mut out = [0.0; 4];
    for i in 0..4 {
        let (prev, next) = (p[(i + 3) % 4], p[(i + 1) % 4]);
        out[i] = Angle::from_vectors_with(prev - p[i], next - p[i], cfg)?.interior_radians();
    }
    Ok(out)
}

/// Splits two labeled lengths into `(AB-class, BC-class)`.
pub(super) fn adjacent_pair(
    first: SideLength,
    second: SideLength,
    kind: QuadKind,
) -> GeomResult<(f64, f64)> {
    let first_len = ensure_positive("side length", first.length)?;
    let second_len = ensure_positive("side length", second.length)?;
    match (first.side.is_base(), second.side.is_base()) {
        (true, false) => Ok((first_len, second_len)),
        (false, true) => Ok((second_len, first_len)),
        _ => Err(GeomError::invalid(format!(
            "{:?} and {:?} are parallel sides of a {}; give one of AB/CD and one of BC/DA",
            first.side,
            second.side,
            kind.name()
        ))),
    }
}

impl Quadrilateral {
    pub(super) fn assemble(raw: [Point; 4], how: Assembly, cfg: &GeomCfg) -> GeomResult<Self> {
        let name = how.kind.name();
        let crossing = Segment::new(raw[0], raw[2])
            .intersect(&Segment::new(raw[1], raw[3]))
            .ok_or_else(|| {
                GeomError::shape(name, "diagonals do not cross; vertices are not a convex loop")
            })?;
        let (pts, center) = if how.shift {
            (raw.map(|p| shift_coordinate(p, crossing)), Point::origin())
        } else {
            (raw, crossing)
        };
        let angles = match how.angles {
            Some(a) => a,
            None => measured_angles(&pts, cfg)?,
        };

        let mut builder = ShapeBuilder::with_face(&pts);
        let diagonals = if how.diagonals {
            builder.connect(0, 2)?;
            builder.connect(1, 3)?;
            Some(Diagonals {
                ac: Segment::new(pts[0], pts[2]),
                bd: Segment::new(pts[1], pts[3]),
            })
        } else {
            None
        };
        let heights = if how.heights {
            let mut out = Vec::with_capacity(8);
            for from in QuadVertex::ALL {
                for to in from.opposite_sides() {
                    let (i, j) = to.ends();
                    let (_, segment) =
                        perpendicular_with(pts[from.index()], &Segment::new(pts[i], pts[j]), cfg)?;
                    builder.attach_to_vertex(segment.end, from.index())?;
                    out.push(QuadHeight { from, to, segment });
                }
            }
            Some(out)
        } else {
            None
        };

        tracing::debug!(
            kind = name,
            shifted = how.shift,
            cx = crossing.x,
            cy = crossing.y,
            "quadrilateral"
        );
        Ok(Self {
            kind: how.kind,
            shape: builder.build(),
            angles,
            center,
            diagonals,
            heights,
        })
    }

    #[inline]
    pub fn kind(&self) -> QuadKind {
        self.kind
    }

    #[inline]
    pub fn point(&self, v: QuadVertex) -> Point {
        self.shape.vertices()[v.index()]
    }
    pub fn point_a(&self) -> Point {
        self.point(QuadVertex::A)
    }
    pub fn point_b(&self) -> Point {
        self.point(QuadVertex::B)
    }
    pub fn point_c(&self) -> Point {
        self.point(QuadVertex::C)
    }
    pub fn point_d(&self) -> Point {
        self.point(QuadVertex::D)
    }

    pub fn length(&self, side: QuadSide) -> f64 {
        let (i, j) = side.ends();
        let v = self.shape.vertices();
        distance(&v[i], &v[j])
    }
    pub fn length_ab(&self) -> f64 {
        self.length(QuadSide::AB)
    }
    pub fn length_bc(&self) -> f64 {
        self.length(QuadSide::BC)
    }
    pub fn length_cd(&self) -> f64 {
        self.length(QuadSide::CD)
    }
    pub fn length_da(&self) -> f64 {
        self.length(QuadSide::DA)
    }
    pub fn lengths(&self) -> [f64; 4] {
        QuadSide::ALL.map(|s| self.length(s))
    }

    /// Interior angles at A, B, C, D in radians.
    #[inline]
    pub fn angles(&self) -> [f64; 4] {
        self.angles
    }
    #[inline]
    pub fn angle_radians(&self, v: QuadVertex) -> f64 {
        self.angles[v.index()]
    }
    #[inline]
    pub fn angle_degrees(&self, v: QuadVertex) -> f64 {
        self.angle_radians(v).to_degrees()
    }

    /// Crossing point of AC and BD; the origin for recentered shapes.
    #[inline]
    pub fn diagonal_intersection_point(&self) -> Point {
        self.center
    }

    pub fn diagonals(&self) -> GeomResult<Diagonals> {
        self.diagonals
            .ok_or_else(|| GeomError::not_computed("diagonals", "diagonals"))
    }
    pub fn diagonal_ac(&self) -> GeomResult<Segment> {
        Ok(self.diagonals()?.ac)
    }
    pub fn diagonal_bd(&self) -> GeomResult<Segment> {
        Ok(self.diagonals()?.bd)
    }
    pub fn length_diagonal_ac(&self) -> GeomResult<f64> {
        Ok(self.diagonal_ac()?.length())
    }
    pub fn length_diagonal_bd(&self) -> GeomResult<f64> {
        Ok(self.diagonal_bd()?.length())
    }

    /// All eight heights in A→BC, A→CD, B→CD, …, D→BC order.
    pub fn heights(&self) -> GeomResult<&[QuadHeight]> {
        self.heights
            .as_deref()
            .ok_or_else(|| GeomError::not_computed("heights", "heights"))
    }

    pub fn height(&self, from: QuadVertex, to: QuadSide) -> GeomResult<Segment> {
        let heights = self.heights()?;
        heights
            .iter()
            .find(|h| h.from == from && h.to == to)
            .map(|h| h.segment)
            .ok_or_else(|| {
                GeomError::invalid(format!("side {to:?} is adjacent to vertex {from:?}"))
            })
    }
    pub fn height_length(&self, from: QuadVertex, to: QuadSide) -> GeomResult<f64> {
        Ok(self.height(from, to)?.length())
    }
}

impl PlanarShape for Quadrilateral {
    fn shape(&self) -> &Shape {
        &self.shape
    }
}

/// Wraps `Quadrilateral` in a family newtype with `Deref` and `PlanarShape`.
macro_rules! quad_newtype {
    ($name:ident) => {
        impl std::ops::Deref for $name {
            type Target = $crate::shape::Quadrilateral;
            fn deref(&self) -> &Self::Target {
                &self.0
            }
        }

        impl $crate::shape::PlanarShape for $name {
            fn shape(&self) -> &$crate::shape::Shape {
                $crate::shape::PlanarShape::shape(&self.0)
            }
        }

        impl $name {
            pub fn into_quadrilateral(self) -> $crate::shape::Quadrilateral {
                self.0
            }
        }
    };
}
pub(super) use quad_newtype;
