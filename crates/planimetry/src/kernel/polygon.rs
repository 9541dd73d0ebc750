//! Single-loop polygon used as the face of every shape.

use geo::{Area, LineString};

use super::{distance, to_geo, Point, Segment};

#[derive(Clone, Debug, PartialEq)]
pub struct Polygon {
    vertices: Vec<Point>,
}

impl Polygon {
    pub fn new(vertices: Vec<Point>) -> Self {
        Self { vertices }
    }

    #[inline]
    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    /// Boundary edges in loop order, closing edge last.
    pub fn edges(&self) -> impl Iterator<Item = Segment> + '_ {
        let n = self.vertices.len();
        (0..n).map(move |i| Segment::new(self.vertices[i], self.vertices[(i + 1) % n]))
    }

    pub fn perimeter(&self) -> f64 {
        let n = self.vertices.len();
        (0..n)
            .map(|i| distance(&self.vertices[i], &self.vertices[(i + 1) % n]))
            .sum()
    }

    fn to_geo(&self) -> geo::Polygon<f64> {
        let ring: Vec<geo::Coord<f64>> = self.vertices.iter().map(to_geo).collect();
        geo::Polygon::new(LineString::from(ring), vec![])
    }

    /// Positive for counterclockwise vertex order.
    pub fn signed_area(&self) -> f64 {
        self.to_geo().signed_area()
    }

    pub fn area(&self) -> f64 {
        self.to_geo().unsigned_area()
    }
}
