//! # Config Crate
//!
//! Centralized configuration constants for the Möbius strip mesh workspace.
//! Shape defaults, sampling limits, output formatting and plot settings are
//! defined here so the geometry and rendering code never scatters literals.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{ShapeConfig, DEFAULT_CENTER_RADIUS, MIN_RESOLUTION};
//!
//! let cfg = ShapeConfig::default();
//! assert_eq!(cfg.center_radius, DEFAULT_CENTER_RADIUS);
//! assert!(cfg.resolution >= MIN_RESOLUTION);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Validated Snapshots**: `ShapeConfig` can only be built from valid values
//! - **Well-Documented**: Every constant has clear documentation

pub mod constants;
