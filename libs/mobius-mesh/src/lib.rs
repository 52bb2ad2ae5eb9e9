//! # Möbius Mesh
//!
//! Discretized parametric surface of a Möbius strip, with discrete estimates
//! of its surface area and boundary length.
//!
//! ## Architecture
//!
//! ```text
//! ShapeParameters → MeshGenerator → SurfaceMesh ─┬→ SurfaceAreaEstimator → area
//!                                                ├→ EdgeLengthEstimator  → edge length
//!                                                └→ Renderer (SVG plot)
//! ```
//!
//! All computation is synchronous and free of side effects. Rendering is the
//! only part that touches the filesystem.
//!
//! ## Usage
//!
//! ```rust
//! use mobius_mesh::MobiusStrip;
//!
//! let strip = MobiusStrip::new(1.0, 0.4, 300)?;
//! println!("{}", strip.summary());
//! # Ok::<(), mobius_mesh::MobiusError>(())
//! ```

pub mod area;
pub mod diff;
pub mod edge;
pub mod error;
pub mod export;
pub mod grid;
pub mod mesh;
pub mod params;
pub mod render;
pub mod strip;

pub use area::SurfaceAreaEstimator;
pub use edge::EdgeLengthEstimator;
pub use error::{MobiusError, MobiusResult};
pub use export::MeshBuffers;
pub use grid::ParameterGrid;
pub use mesh::{MeshGenerator, SurfaceMesh};
pub use params::ShapeParameters;
pub use render::{Renderer, SvgRenderer};
pub use strip::{MobiusStrip, StripSummary};
