//! Terminal output for the synthwave scene.
//!
//! The scene is rasterized by a small software canvas, folded into half-block
//! glyphs in a framebuffer, and flushed to the terminal with diff encoding.
//! No widget toolkit is involved.
//!
//! - [`canvas`]: RGB pixel buffer implementing the render crate's `Surface`
//! - [`fb`]: styled character cells
//! - [`scene_view`]: simulation + renderer + canvas into a framebuffer
//! - [`redraw`]: decides when a new frame is worth flushing
//! - [`renderer`]: crossterm output

pub mod canvas;
pub mod fb;
pub mod redraw;
pub mod renderer;
pub mod scene_view;

pub use synthwave_core as core;
pub use synthwave_render as render;
pub use synthwave_types as types;

pub use canvas::PixelCanvas;
pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use redraw::{FrameKey, RedrawGate};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
pub use scene_view::{SceneView, Viewport};
