//! Validated shape parameters for the strip.

use config::constants::ShapeConfig;
use serde::Serialize;

use crate::error::MobiusResult;

/// Center radius, width and resolution of a Möbius strip.
///
/// Values can only be obtained through validation, so every consumer may
/// assume `R > 0`, `w > 0` and `n >= 2`.
///
/// # Examples
/// ```
/// use mobius_mesh::ShapeParameters;
///
/// let params = ShapeParameters::new(1.0, 0.4, 300).expect("valid parameters");
/// assert_eq!(params.resolution(), 300);
/// assert!(ShapeParameters::new(1.0, 0.4, 1).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ShapeParameters {
    center_radius: f64,
    strip_width: f64,
    resolution: usize,
}

impl ShapeParameters {
    /// Validates and builds a parameter set.
    ///
    /// Fails with [`MobiusError::InvalidParameter`](crate::MobiusError::InvalidParameter)
    /// for non-positive or non-finite `R`/`w` and for `n < 2`.
    pub fn new(center_radius: f64, strip_width: f64, resolution: usize) -> MobiusResult<Self> {
        let cfg = ShapeConfig::new(center_radius, strip_width, resolution)?;
        Ok(Self::from_config(cfg))
    }

    /// Builds parameters from an already validated configuration snapshot.
    ///
    /// # Examples
    /// ```
    /// use config::constants::ShapeConfig;
    /// use mobius_mesh::ShapeParameters;
    ///
    /// let params = ShapeParameters::from_config(ShapeConfig::demo());
    /// assert_eq!(params.strip_width(), 0.4);
    /// ```
    pub fn from_config(cfg: ShapeConfig) -> Self {
        Self {
            center_radius: cfg.center_radius,
            strip_width: cfg.strip_width,
            resolution: cfg.resolution,
        }
    }

    /// Center-line radius `R`.
    pub fn center_radius(&self) -> f64 {
        self.center_radius
    }

    /// Strip width `w`.
    pub fn strip_width(&self) -> f64 {
        self.strip_width
    }

    /// Half of the strip width, the `v` value of the boundary.
    pub fn half_width(&self) -> f64 {
        self.strip_width / 2.0
    }

    /// Samples per parameter axis `n`.
    pub fn resolution(&self) -> usize {
        self.resolution
    }
}

impl Default for ShapeParameters {
    fn default() -> Self {
        Self::from_config(ShapeConfig::default())
    }
}
