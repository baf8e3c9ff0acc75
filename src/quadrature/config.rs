//! Shared configuration for quadrature construction.
//!
//! [`QuadratureCfg`] : root polishing of orthogonal-polynomial nodes
//! ├ `eps`      : stop once the Newton step `|Δz|` falls below it
//! └ `max_iter` : iteration cap per node
//!
//! [`QuadratureCfg::new`] initializes configuration with default values.

use crate::quadrature::errors::QuadratureError;

pub const DEFAULT_EPS: f64 = 1e-12;
pub const DEFAULT_MAX_ITER: usize = 100;


#[derive(Debug, Copy, Clone)]
pub struct QuadratureCfg {
    eps: f64,
    max_iter: usize,
}

impl Default for QuadratureCfg {
    fn default() -> Self {
        Self::new()
    }
}

impl QuadratureCfg {
    pub fn new() -> Self {
        Self { eps: DEFAULT_EPS, max_iter: DEFAULT_MAX_ITER }
    }

    // getters
    pub fn eps(&self) -> f64 { self.eps }
    pub fn max_iter(&self) -> usize { self.max_iter }

    pub fn set_eps(mut self, v: f64) -> Result<Self, QuadratureError> {
        if !v.is_finite() || v <= 0.0 {
            return Err(QuadratureError::InvalidTolerance { got: v });
        }
        self.eps = v;
        Ok(self)
    }

    pub fn set_max_iter(mut self, v: usize) -> Result<Self, QuadratureError> {
        if v == 0 {
            return Err(QuadratureError::InvalidMaxIter { got: v });
        }
        self.max_iter = v;
        Ok(self)
    }
}
