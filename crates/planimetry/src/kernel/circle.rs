use crate::error::{ensure_positive, GeomResult};

use super::{distance, Point};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Circle {
    pub center: Point,
    pub r: f64,
}

impl Circle {
    pub fn new(center: Point, r: f64) -> GeomResult<Self> {
        let r = ensure_positive("radius", r)?;
        Ok(Self { center, r })
    }

    /// Closed disk membership.
    #[inline]
    pub fn contains(&self, p: &Point) -> bool {
        distance(&self.center, p) <= self.r
    }
}
