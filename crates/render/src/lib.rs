//! Perspective rendering module.
//!
//! Maps the simulated grid onto any immediate-mode 2D [`Surface`]. Nothing here
//! performs I/O; backends (the terminal pixel canvas, or the recording surface used
//! in tests) decide what a polygon or ellipse becomes.
//!
//! # Module Structure
//!
//! - [`surface`]: the drawing-surface trait, paints and glow scopes
//! - [`projection`]: perspective divide, bounds, cover-fit transform
//! - [`shading`]: depth-driven quad colors
//! - [`perspective`]: per-frame grid pass, sun and backdrop
//! - [`recording`]: a surface that records draw calls
//!
//! # Example
//!
//! ```
//! use synthwave_core::GridSimulation;
//! use synthwave_render::{PerspectiveRenderer, RecordingSurface};
//! use synthwave_types::{GridConfig, Size};
//!
//! let mut sim = GridSimulation::from_seed(GridConfig::default(), 3).unwrap();
//! sim.update(0.016);
//!
//! let mut renderer = PerspectiveRenderer::new();
//! let mut surface = RecordingSurface::new();
//! let drawn = renderer.draw_frame(&sim, Size::new(640.0, 360.0), &mut surface);
//!
//! // 29 row gaps x 59 column gaps
//! assert_eq!(drawn.quads(), 29 * 59);
//! ```

pub mod perspective;
pub mod projection;
pub mod recording;
pub mod shading;
pub mod surface;

pub use synthwave_core as core;
pub use synthwave_types as types;

pub use perspective::{draw_backdrop, draw_sun, sun_rect, GridDraw, PerspectiveRenderer, SkipReason};
pub use projection::{project_point, Bounds, FitTransform, Projection};
pub use recording::{DrawCommand, RecordingSurface};
pub use shading::QuadShade;
pub use surface::{ColorStop, Glow, LinearGradient, Paint, Surface};
