//! Triangle from points, three sides, or two sides with their included angle.
//!
//! Placement for side-based input: A at the origin, B on +x, C above the x-axis
//! via the law of cosines; the result is then recentered on the circumcenter.
//! Optional families (medians, heights, bisectors, midlines) are built once at
//! construction and registered in the connection matrix.

use std::f64::consts::PI;

use crate::angle::{Angle, AngleValue};
use crate::error::{ensure_positive, GeomError, GeomResult};
use crate::general::{
    circumcenter_with, is_valid_triangle, perpendicular_with, shift_coordinate,
    third_side_by_cosine_law,
};
use crate::kernel::{distance, point, Point, Segment};
use crate::types::GeomCfg;

use super::{PlanarShape, Shape, ShapeBuilder};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TriVertex {
    A,
    B,
    C,
}

impl TriVertex {
    pub const ALL: [TriVertex; 3] = [TriVertex::A, TriVertex::B, TriVertex::C];

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TriSide {
    AB,
    BC,
    CA,
}

impl TriSide {
    pub const ALL: [TriSide; 3] = [TriSide::AB, TriSide::BC, TriSide::CA];

    #[inline]
    fn ends(self) -> (usize, usize) {
        match self {
            TriSide::AB => (0, 1),
            TriSide::BC => (1, 2),
            TriSide::CA => (2, 0),
        }
    }
}

/// Mutually exclusive ways to describe a triangle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TriangleSpec {
    Points([Point; 3]),
    Sides { ab: f64, bc: f64, ca: f64 },
    /// Exactly two sides; `angle` is the one between them (at their shared vertex).
    SidesAndAngle {
        ab: Option<f64>,
        bc: Option<f64>,
        ca: Option<f64>,
        angle: AngleValue,
    },
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TriangleOptions {
    pub medians: bool,
    pub heights: bool,
    pub bisectors: bool,
    pub midlines: bool,
    /// Recenter point input on the circumcenter. Side input is always recentered.
    pub shift_coordinate: bool,
    pub cfg: GeomCfg,
}

impl Default for TriangleOptions {
    fn default() -> Self {
        Self {
            medians: false,
            heights: false,
            bisectors: false,
            midlines: false,
            shift_coordinate: true,
            cfg: GeomCfg::default(),
        }
    }
}

impl TriangleOptions {
    /// Every optional family enabled.
    pub fn all() -> Self {
        Self {
            medians: true,
            heights: true,
            bisectors: true,
            midlines: true,
            ..Self::default()
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Triangle {
    shape: Shape,
    angles: [f64; 3],
    medians: Option<[Segment; 3]>,
    heights: Option<[Segment; 3]>,
    bisectors: Option<[Segment; 3]>,
    midlines: Option<[Segment; 3]>,
    cfg: GeomCfg,
}

const SHAPE: &str = "triangle";

impl Triangle {
    pub fn new(spec: TriangleSpec, opts: TriangleOptions) -> GeomResult<Self> {
        match spec {
            TriangleSpec::Points(pts) => Self::from_points(pts, &opts),
            TriangleSpec::Sides { ab, bc, ca } => Self::from_sides(ab, bc, ca, &opts),
            TriangleSpec::SidesAndAngle { ab, bc, ca, angle } => {
                Self::from_two_sides(ab, bc, ca, angle.radians(), &opts)
            }
        }
    }

    fn from_points(pts: [Point; 3], opts: &TriangleOptions) -> GeomResult<Self> {
        let center = circumcenter_with(pts[0], pts[1], pts[2], &opts.cfg)?;
        let pts = if opts.shift_coordinate {
            pts.map(|p| shift_coordinate(p, center))
        } else {
            pts
        };
        tracing::debug!(mode = "points", shifted = opts.shift_coordinate, "triangle");
        Self::assemble(pts, opts)
    }

    fn from_sides(ab: f64, bc: f64, ca: f64, opts: &TriangleOptions) -> GeomResult<Self> {
        if !(ab.is_finite() && bc.is_finite() && ca.is_finite()) {
            return Err(GeomError::shape(
                SHAPE,
                format!("side lengths must be finite, got {ab}, {bc}, {ca}"),
            ));
        }
        if !is_valid_triangle(ab, bc, ca) {
            tracing::trace!(ab, bc, ca, "triangle inequality violated");
            return Err(GeomError::shape(
                SHAPE,
                format!("sides {ab}, {bc}, {ca} violate the triangle inequality"),
            ));
        }
        let cos_a = (ab * ab + ca * ca - bc * bc) / (2.0 * ab * ca);
        if !(-1.0..=1.0).contains(&cos_a) {
            return Err(GeomError::shape(
                SHAPE,
                format!("cosine of angle A out of range: {cos_a}"),
            ));
        }
        let sin_a = (1.0 - cos_a * cos_a).max(0.0).sqrt();
        let raw = [
            point(0.0, 0.0),
            point(ab, 0.0),
            point(ca * cos_a, ca * sin_a),
        ];
        let center = circumcenter_with(raw[0], raw[1], raw[2], &opts.cfg)?;
        tracing::debug!(mode = "sides", ab, bc, ca, "triangle");
        Self::assemble(raw.map(|p| shift_coordinate(p, center)), opts)
    }

    fn from_two_sides(
        ab: Option<f64>,
        bc: Option<f64>,
        ca: Option<f64>,
        angle: f64,
        opts: &TriangleOptions,
    ) -> GeomResult<Self> {
        if !(angle.is_finite() && angle > 0.0 && angle < PI) {
            return Err(GeomError::invalid(format!(
                "included angle must lie in (0, π), got {angle}"
            )));
        }
        let (ab, bc, ca) = match (ab, bc, ca) {
            (Some(ab), Some(bc), None) => {
                let (ab, bc) = (ensure_positive("AB", ab)?, ensure_positive("BC", bc)?);
                (ab, bc, third_side_by_cosine_law(ab, bc, angle)?)
            }
            (None, Some(bc), Some(ca)) => {
                let (bc, ca) = (ensure_positive("BC", bc)?, ensure_positive("CA", ca)?);
                (third_side_by_cosine_law(bc, ca, angle)?, bc, ca)
            }
            (Some(ab), None, Some(ca)) => {
                let (ab, ca) = (ensure_positive("AB", ab)?, ensure_positive("CA", ca)?);
                (ab, third_side_by_cosine_law(ca, ab, angle)?, ca)
            }
            _ => return Err(GeomError::invalid("exactly two sides must be provided")),
        };
        Self::from_sides(ab, bc, ca, opts)
    }

    fn assemble(pts: [Point; 3], opts: &TriangleOptions) -> GeomResult<Self> {
        let [a, b, c] = pts;
        let cfg = &opts.cfg;
        let angles = [
            Angle::from_vectors_with(b - a, c - a, cfg)?.interior_radians(),
            Angle::from_vectors_with(a - b, c - b, cfg)?.interior_radians(),
            Angle::from_vectors_with(a - c, b - c, cfg)?.interior_radians(),
        ];
        // Side opposite each vertex, oriented along the loop.
        let opposite = [Segment::new(b, c), Segment::new(c, a), Segment::new(a, b)];
        let mut builder = ShapeBuilder::with_face(&pts);

        let mut attach_family = |feet: [Point; 3]| -> GeomResult<[Segment; 3]> {
            for (i, foot) in feet.iter().enumerate() {
                builder.attach_to_vertex(*foot, i)?;
            }
            Ok([0, 1, 2].map(|i| Segment::new(pts[i], feet[i])))
        };

        let medians = if opts.medians {
            Some(attach_family(opposite.map(|s| s.middle()))?)
        } else {
            None
        };
        let heights = if opts.heights {
            let mut feet = pts;
            for i in 0..3 {
                feet[i] = perpendicular_with(pts[i], &opposite[i], &opts.cfg)?.1.end;
            }
            Some(attach_family(feet)?)
        } else {
            None
        };
        let bisectors = if opts.bisectors {
            let mut feet = pts;
            for i in 0..3 {
                let (near, far) = (opposite[i].start, opposite[i].end);
                let (ln, lf) = (distance(&pts[i], &near), distance(&pts[i], &far));
                feet[i] = Point::from((far.coords * ln + near.coords * lf) / (ln + lf));
            }
            Some(attach_family(feet)?)
        } else {
            None
        };
        let midlines = if opts.midlines {
            let [m_bc, m_ca, m_ab] = opposite.map(|s| s.middle());
            let first = builder.register_only(m_bc);
            let second = builder.chain_from_previous(m_ca)?;
            let third = builder.chain_from_previous(m_ab)?;
            builder.connect_cyclic(&[first, second, third])?;
            Some([
                Segment::new(m_bc, m_ca),
                Segment::new(m_ca, m_ab),
                Segment::new(m_ab, m_bc),
            ])
        } else {
            None
        };

        Ok(Self {
            shape: builder.build(),
            angles,
            medians,
            heights,
            bisectors,
            midlines,
            cfg: opts.cfg,
        })
    }

    /// Tolerances the triangle was built with.
    #[inline]
    pub fn cfg(&self) -> &GeomCfg {
        &self.cfg
    }

    #[inline]
    pub fn point(&self, v: TriVertex) -> Point {
        self.shape.vertices()[v.index()]
    }
    pub fn point_a(&self) -> Point {
        self.point(TriVertex::A)
    }
    pub fn point_b(&self) -> Point {
        self.point(TriVertex::B)
    }
    pub fn point_c(&self) -> Point {
        self.point(TriVertex::C)
    }

    pub fn length(&self, side: TriSide) -> f64 {
        let (i, j) = side.ends();
        let v = self.shape.vertices();
        distance(&v[i], &v[j])
    }
    pub fn length_ab(&self) -> f64 {
        self.length(TriSide::AB)
    }
    pub fn length_bc(&self) -> f64 {
        self.length(TriSide::BC)
    }
    pub fn length_ca(&self) -> f64 {
        self.length(TriSide::CA)
    }

    /// Interior angles at A, B, C in radians.
    #[inline]
    pub fn angles(&self) -> [f64; 3] {
        self.angles
    }
    #[inline]
    pub fn angle_radians(&self, v: TriVertex) -> f64 {
        self.angles[v.index()]
    }
    #[inline]
    pub fn angle_degrees(&self, v: TriVertex) -> f64 {
        self.angle_radians(v).to_degrees()
    }

    pub fn sin(&self, v: TriVertex) -> f64 {
        self.angle_radians(v).sin()
    }
    pub fn cos(&self, v: TriVertex) -> f64 {
        self.angle_radians(v).cos()
    }
    pub fn tan(&self, v: TriVertex) -> f64 {
        self.angle_radians(v).tan()
    }
    pub fn cot(&self, v: TriVertex) -> f64 {
        self.cos(v) / self.sin(v)
    }

    pub fn median(&self, v: TriVertex) -> GeomResult<Segment> {
        self.medians
            .map(|m| m[v.index()])
            .ok_or_else(|| GeomError::not_computed("medians", "medians"))
    }
    pub fn median_length(&self, v: TriVertex) -> GeomResult<f64> {
        Ok(self.median(v)?.length())
    }

    /// Segment from `v` to the foot of the perpendicular on the opposite side.
    pub fn height(&self, v: TriVertex) -> GeomResult<Segment> {
        self.heights
            .map(|h| h[v.index()])
            .ok_or_else(|| GeomError::not_computed("heights", "heights"))
    }
    pub fn height_length(&self, v: TriVertex) -> GeomResult<f64> {
        Ok(self.height(v)?.length())
    }

    pub fn bisector(&self, v: TriVertex) -> GeomResult<Segment> {
        self.bisectors
            .map(|b| b[v.index()])
            .ok_or_else(|| GeomError::not_computed("bisectors", "bisectors"))
    }
    pub fn bisector_length(&self, v: TriVertex) -> GeomResult<f64> {
        Ok(self.bisector(v)?.length())
    }

    /// Midline parallel to `side`.
    pub fn midline(&self, side: TriSide) -> GeomResult<Segment> {
        self.midlines
            .map(|m| m[side as usize])
            .ok_or_else(|| GeomError::not_computed("midlines", "midlines"))
    }
    pub fn midline_length(&self, side: TriSide) -> GeomResult<f64> {
        Ok(self.midline(side)?.length())
    }

    pub fn circumcenter(&self) -> GeomResult<Point> {
        circumcenter_with(self.point_a(), self.point_b(), self.point_c(), &self.cfg)
    }

    /// `abc / (4·area)`.
    pub fn circumradius(&self) -> GeomResult<f64> {
        let area = self.area();
        if area == 0.0 {
            return Err(GeomError::degenerate("triangle has zero area"));
        }
        Ok(self.length_ab() * self.length_bc() * self.length_ca() / (4.0 * area))
    }

    /// `area / s`.
    pub fn inradius(&self) -> f64 {
        self.area() / self.semiperimeter()
    }
}

impl PlanarShape for Triangle {
    fn shape(&self) -> &Shape {
        &self.shape
    }
}
