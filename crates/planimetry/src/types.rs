//! Numeric tolerances.
//!
//! - `GeomCfg::eps_det`: relative threshold for cross products and determinants
//!   (collinearity, circumcenter degeneracy). Scaled by the magnitudes involved.
//! - `GeomCfg::eps_shape`: absolute threshold used when checking that raw points
//!   form a given quadrilateral (equal lengths, right angles, parallel sides).

/// Geometry configuration (tolerances).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeomCfg {
    pub eps_det: f64,
    pub eps_shape: f64,
}

impl Default for GeomCfg {
    fn default() -> Self {
        Self {
            eps_det: 1e-12,
            eps_shape: 1e-9,
        }
    }
}

impl GeomCfg {
    /// `|cross| <= eps_det * |u| * |v|`, i.e. the sine of the enclosed angle vanishes.
    #[inline]
    pub fn is_collinear(&self, cross: f64, norm_u: f64, norm_v: f64) -> bool {
        cross.abs() <= self.eps_det * norm_u * norm_v
    }

    #[inline]
    pub fn shape_eq(&self, a: f64, b: f64) -> bool {
        (a - b).abs() <= self.eps_shape
    }
}
