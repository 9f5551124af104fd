//! Synthwave grid (workspace facade crate).
//!
//! Re-exports the workspace crates under one roof so the binary, integration tests
//! and benches can use `synthwave_grid::{core,render,term,input,types}`.

pub mod config;

pub use synthwave_core as core;
pub use synthwave_input as input;
pub use synthwave_render as render;
pub use synthwave_term as term;
pub use synthwave_types as types;
