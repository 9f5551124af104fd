//! Core simulation module - pure, deterministic, and testable
//!
//! This crate owns the 3D point grid behind the synthwave horizon and advances it
//! frame by frame. It has **zero dependencies** on rendering or terminal I/O:
//!
//! - **Deterministic**: the random source is injected, so a seeded generator
//!   reproduces the same terrain
//! - **Allocation-free ticks**: recycling reuses row storage in a ring
//! - **Pull-based**: callers read the grid after `update` and compare versions
//!
//! # Module Structure
//!
//! - [`grid`]: ring of depth-slices, nearest first
//! - [`simulation`]: construction, per-tick depth update and row recycling
//! - [`terrain`]: distance-biased height sampling
//! - [`clock`]: host timestamps to deltas, with a first-tick baseline
//!
//! # Example
//!
//! ```
//! use synthwave_core::GridSimulation;
//! use synthwave_types::GridConfig;
//!
//! let mut sim = GridSimulation::from_seed(GridConfig::default(), 7).unwrap();
//! let report = sim.update(1.0 / 60.0);
//!
//! assert!(report.advanced);
//! assert_eq!(sim.grid().row_count(), 30);
//! assert_eq!(sim.grid().columns(), 60);
//! ```

pub mod clock;
pub mod grid;
pub mod simulation;
pub mod terrain;

pub use synthwave_types as types;

pub use clock::FrameClock;
pub use grid::Grid;
pub use simulation::{GridSimulation, UpdateReport};
pub use terrain::{center_distance, height_bounds, sample_height};
