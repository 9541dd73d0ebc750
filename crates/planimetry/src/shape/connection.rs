//! Connection matrix and the builder that fills it.
//!
//! The matrix is lower-triangular: row `i` stores columns `0..i`, and entry
//! `(i, j)` with `i > j` is true iff a drawn segment joins vertices `i` and `j`.
//! Face vertices come first; auxiliary points (midpoints, feet, …) are appended
//! after them by the builder.

use crate::error::{GeomError, GeomResult};
use crate::kernel::{Point, Polygon};

use super::Shape;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ConnectionMatrix {
    rows: Vec<Vec<bool>>,
}

impl ConnectionMatrix {
    /// Number of registered vertices.
    #[inline]
    pub fn len(&self) -> usize {
        self.rows.len()
    }
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    fn push_vertex(&mut self) -> usize {
        let i = self.rows.len();
        self.rows.push(vec![false; i]);
        i
    }

    fn check(&self, index: usize) -> GeomResult<()> {
        if index < self.len() {
            Ok(())
        } else {
            Err(GeomError::IndexOutOfRange {
                index,
                len: self.len(),
            })
        }
    }

    /// Marks `i`–`j` as connected. Order does not matter; `i == j` is a no-op.
    pub fn connect(&mut self, i: usize, j: usize) -> GeomResult<()> {
        self.check(i)?;
        self.check(j)?;
        let (hi, lo) = if i >= j { (i, j) } else { (j, i) };
        if hi != lo {
            self.rows[hi][lo] = true;
        }
        Ok(())
    }

    /// Connects every pair in `group`.
    pub fn connect_cyclic(&mut self, group: &[usize]) -> GeomResult<()> {
        if group.len() < 2 {
            return Err(GeomError::invalid(format!(
                "a connection group needs at least two vertices, got {}",
                group.len()
            )));
        }
        for (k, &i) in group.iter().enumerate() {
            for &j in &group[k + 1..] {
                self.connect(i, j)?;
            }
        }
        Ok(())
    }

    pub fn is_connected(&self, i: usize, j: usize) -> bool {
        let (hi, lo) = if i >= j { (i, j) } else { (j, i) };
        hi != lo && hi < self.len() && self.rows[hi][lo]
    }

    /// Connected pairs as `(larger, smaller)`, row by row.
    pub fn edges(&self) -> Vec<(usize, usize)> {
        self.rows
            .iter()
            .enumerate()
            .flat_map(|(i, row)| {
                row.iter()
                    .enumerate()
                    .filter(|(_, c)| **c)
                    .map(move |(j, _)| (i, j))
            })
            .collect()
    }

    pub fn row(&self, i: usize) -> Option<&[bool]> {
        self.rows.get(i).map(Vec::as_slice)
    }
}

/// Registers points and segments while a shape is being assembled.
#[derive(Clone, Debug)]
pub struct ShapeBuilder {
    points: Vec<Point>,
    face_len: usize,
    matrix: ConnectionMatrix,
}

impl ShapeBuilder {
    /// Starts from a face loop; consecutive vertices (and last–first) are joined.
    pub fn with_face(face: &[Point]) -> Self {
        let mut b = Self {
            points: Vec::with_capacity(face.len() * 3),
            face_len: face.len(),
            matrix: ConnectionMatrix::default(),
        };
        for p in face {
            b.register_only(*p);
        }
        let n = face.len();
        if n >= 2 {
            for i in 0..n {
                b.matrix.rows[i.max((i + 1) % n)][i.min((i + 1) % n)] = true;
            }
        }
        b
    }

    /// Adds `p` without any segment.
    pub fn register_only(&mut self, p: Point) -> usize {
        self.points.push(p);
        self.matrix.push_vertex()
    }

    /// Adds `p` joined to face vertex `face_index`.
    pub fn attach_to_vertex(&mut self, p: Point, face_index: usize) -> GeomResult<usize> {
        if face_index >= self.face_len {
            return Err(GeomError::IndexOutOfRange {
                index: face_index,
                len: self.face_len,
            });
        }
        let i = self.register_only(p);
        self.matrix.connect(i, face_index)?;
        Ok(i)
    }

    /// Adds `p` joined to the most recently registered point.
    pub fn chain_from_previous(&mut self, p: Point) -> GeomResult<usize> {
        let prev = self
            .matrix
            .len()
            .checked_sub(1)
            .ok_or(GeomError::IndexOutOfRange { index: 0, len: 0 })?;
        let i = self.register_only(p);
        self.matrix.connect(i, prev)?;
        Ok(i)
    }

    pub fn connect(&mut self, i: usize, j: usize) -> GeomResult<()> {
        self.matrix.connect(i, j)
    }

    pub fn connect_cyclic(&mut self, group: &[usize]) -> GeomResult<()> {
        self.matrix.connect_cyclic(group)
    }

    pub fn build(self) -> Shape {
        let face = Polygon::new(self.points[..self.face_len].to_vec());
        Shape {
            points: self.points,
            face,
            matrix: self.matrix,
        }
    }
}
