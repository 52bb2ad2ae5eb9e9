//! Centralized configuration values shared across the Möbius strip workspace.
//!
//! Each public item in this module documents its purpose and provides a minimal
//! usage example so that downstream crates can remain declarative and avoid
//! scattering literals.

use std::fmt;

// =============================================================================
// SHAPE DEFAULTS
// =============================================================================

/// Default center-line radius `R` of the strip.
///
/// # Examples
/// ```
/// use config::constants::DEFAULT_CENTER_RADIUS;
/// assert_eq!(DEFAULT_CENTER_RADIUS, 1.0);
/// ```
pub const DEFAULT_CENTER_RADIUS: f64 = 1.0;

/// Default strip width `w`, measured across the strip.
///
/// # Examples
/// ```
/// use config::constants::DEFAULT_STRIP_WIDTH;
/// assert!(DEFAULT_STRIP_WIDTH > 0.0);
/// ```
pub const DEFAULT_STRIP_WIDTH: f64 = 0.2;

/// Default sample count `n` along each parameter axis.
///
/// # Examples
/// ```
/// use config::constants::DEFAULT_RESOLUTION;
/// assert_eq!(DEFAULT_RESOLUTION, 200);
/// ```
pub const DEFAULT_RESOLUTION: usize = 200;

/// Smallest resolution that still yields a defined sample spacing.
///
/// # Examples
/// ```
/// use config::constants::MIN_RESOLUTION;
/// let requested = 1;
/// assert!(requested < MIN_RESOLUTION);
/// ```
pub const MIN_RESOLUTION: usize = 2;

// =============================================================================
// DEMO PROGRAM
// =============================================================================

/// Center radius used by the `mobius-strip` program.
pub const DEMO_CENTER_RADIUS: f64 = 1.0;

/// Strip width used by the `mobius-strip` program.
pub const DEMO_STRIP_WIDTH: f64 = 0.4;

/// Resolution used by the `mobius-strip` program.
pub const DEMO_RESOLUTION: usize = 300;

/// Decimal places used when printing derived scalars.
///
/// # Examples
/// ```
/// use config::constants::OUTPUT_PRECISION;
/// let line = format!("{:.*}", OUTPUT_PRECISION, std::f64::consts::PI);
/// assert_eq!(line, "3.1416");
/// ```
pub const OUTPUT_PRECISION: usize = 4;

// =============================================================================
// PLOT SETTINGS
// =============================================================================

/// File the program writes the rendered surface plot to.
pub const DEFAULT_PLOT_PATH: &str = "mobius_strip.svg";

/// Plot canvas width in pixels.
pub const PLOT_WIDTH: u32 = 800;

/// Plot canvas height in pixels.
pub const PLOT_HEIGHT: u32 = 600;

/// Camera elevation in degrees above the XY plane.
pub const PLOT_ELEVATION_DEG: f64 = 30.0;

/// Camera azimuth in degrees, measured from the +X axis.
pub const PLOT_AZIMUTH_DEG: f64 = -60.0;

/// Stroke width of the wire edges drawn around every plotted cell.
///
/// # Examples
/// ```
/// use config::constants::PLOT_WIRE_WIDTH;
/// assert!(PLOT_WIRE_WIDTH > 0.0 && PLOT_WIRE_WIDTH < 1.0);
/// ```
pub const PLOT_WIRE_WIDTH: f64 = 0.1;

/// Largest number of grid cells drawn per axis; denser meshes are strided.
///
/// # Examples
/// ```
/// use config::constants::PLOT_MAX_CELLS_PER_AXIS;
/// let stride = 300usize.div_ceil(PLOT_MAX_CELLS_PER_AXIS);
/// assert_eq!(stride, 3);
/// ```
pub const PLOT_MAX_CELLS_PER_AXIS: usize = 100;

// =============================================================================
// PRECISION
// =============================================================================

/// Numerical tolerance for comparing derived geometry.
///
/// # Examples
/// ```
/// use config::constants::EPSILON_TOLERANCE;
/// assert!(EPSILON_TOLERANCE < 1.0e-6);
/// ```
pub const EPSILON_TOLERANCE: f64 = 1.0e-9;

// =============================================================================
// SHAPE CONFIG
// =============================================================================

/// Immutable snapshot of validated shape settings that can be shared
/// between crates.
///
/// # Examples
/// ```
/// use config::constants::ShapeConfig;
/// let config = ShapeConfig::default();
/// assert!(config.strip_width > 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShapeConfig {
    /// Center-line radius `R`.
    pub center_radius: f64,
    /// Strip width `w`.
    pub strip_width: f64,
    /// Samples per parameter axis `n`.
    pub resolution: usize,
}

impl ShapeConfig {
    /// Builds a configuration enforcing strict validation of every value.
    ///
    /// # Examples
    /// ```
    /// use config::constants::ShapeConfig;
    /// let cfg = ShapeConfig::new(2.0, 0.5, 64).expect("valid config");
    /// assert_eq!(cfg.resolution, 64);
    /// assert!(ShapeConfig::new(1.0, 0.2, 1).is_err());
    /// ```
    pub fn new(center_radius: f64, strip_width: f64, resolution: usize) -> Result<Self, ConfigError> {
        if !(center_radius.is_finite() && center_radius > 0.0) {
            return Err(ConfigError::InvalidCenterRadius(center_radius));
        }
        if !(strip_width.is_finite() && strip_width > 0.0) {
            return Err(ConfigError::InvalidStripWidth(strip_width));
        }
        if resolution < MIN_RESOLUTION {
            return Err(ConfigError::InvalidResolution(resolution));
        }
        Ok(Self {
            center_radius,
            strip_width,
            resolution,
        })
    }

    /// Settings used by the `mobius-strip` program.
    ///
    /// # Examples
    /// ```
    /// use config::constants::ShapeConfig;
    /// assert_eq!(ShapeConfig::demo().resolution, 300);
    /// ```
    pub fn demo() -> Self {
        Self {
            center_radius: DEMO_CENTER_RADIUS,
            strip_width: DEMO_STRIP_WIDTH,
            resolution: DEMO_RESOLUTION,
        }
    }
}

impl Default for ShapeConfig {
    fn default() -> Self {
        Self {
            center_radius: DEFAULT_CENTER_RADIUS,
            strip_width: DEFAULT_STRIP_WIDTH,
            resolution: DEFAULT_RESOLUTION,
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    /// Raised when the center radius is zero, negative or not finite.
    InvalidCenterRadius(f64),
    /// Raised when the strip width is zero, negative or not finite.
    InvalidStripWidth(f64),
    /// Raised when the resolution is too small to define a sample spacing.
    InvalidResolution(usize),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidCenterRadius(value) => {
                write!(f, "center radius must be positive: {value}")
            }
            ConfigError::InvalidStripWidth(value) => {
                write!(f, "strip width must be positive: {value}")
            }
            ConfigError::InvalidResolution(value) => {
                write!(f, "resolution must be >= {MIN_RESOLUTION}: {value}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
