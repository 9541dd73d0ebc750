//! Segments and infinite lines.

use geo::algorithm::line_intersection::{line_intersection, LineIntersection};

use super::{cross, distance, from_geo, to_geo, Point, Vector};

/// Ordered segment `start → end`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    pub start: Point,
    pub end: Point,
}

impl Segment {
    #[inline]
    pub fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }
    #[inline]
    pub fn length(&self) -> f64 {
        distance(&self.start, &self.end)
    }
    #[inline]
    pub fn middle(&self) -> Point {
        nalgebra::center(&self.start, &self.end)
    }
    #[inline]
    pub fn vector(&self) -> Vector {
        self.end - self.start
    }
    #[inline]
    pub fn line(&self) -> Line {
        Line::through(self.start, self.end)
    }

    fn to_geo(self) -> geo::Line<f64> {
        geo::Line::new(to_geo(&self.start), to_geo(&self.end))
    }

    /// Unique crossing point, if the segments meet in exactly one point.
    pub fn intersect(&self, other: &Segment) -> Option<Point> {
        match line_intersection(self.to_geo(), other.to_geo())? {
            LineIntersection::SinglePoint { intersection, .. } => Some(from_geo(intersection)),
            LineIntersection::Collinear { .. } => None,
        }
    }

    /// Common part of two segments: a zero-length segment for a single
    /// crossing, the shared piece for collinear overlaps.
    pub fn intersection(&self, other: &Segment) -> Option<Segment> {
        match line_intersection(self.to_geo(), other.to_geo())? {
            LineIntersection::SinglePoint { intersection, .. } => {
                let p = from_geo(intersection);
                Some(Segment::new(p, p))
            }
            LineIntersection::Collinear { intersection } => Some(Segment::new(
                from_geo(intersection.start),
                from_geo(intersection.end),
            )),
        }
    }
}

/// Infinite line through `origin` with direction `dir` (not normalized).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Line {
    pub origin: Point,
    pub dir: Vector,
}

impl Line {
    #[inline]
    pub fn through(a: Point, b: Point) -> Self {
        Self {
            origin: a,
            dir: b - a,
        }
    }

    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.dir.norm_squared() == 0.0
    }

    /// Orthogonal projection of `p`; `None` for a degenerate line.
    pub fn project(&self, p: &Point) -> Option<Point> {
        let dd = self.dir.norm_squared();
        if dd == 0.0 {
            return None;
        }
        let t = (p - self.origin).dot(&self.dir) / dd;
        Some(self.origin + self.dir * t)
    }

    /// Unsigned distance from `p`; `None` for a degenerate line.
    pub fn distance_to(&self, p: &Point) -> Option<f64> {
        let n = self.dir.norm();
        if n == 0.0 {
            return None;
        }
        Some(cross(&self.dir, &(p - self.origin)).abs() / n)
    }
}
