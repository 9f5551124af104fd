//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the scene.
//! All types are plain data with no rendering or I/O behavior, making them
//! usable in any context (simulation, projection, terminal output, config loading).
//!
//! # Grid Defaults
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_COLUMNS` | 60 | Points per depth-slice |
//! | `DEFAULT_ROWS` | 30 | Depth-slices in the ring |
//! | `DEFAULT_SPACING` | 40.0 | Lateral distance between points |
//! | `DEFAULT_DEPTH_SPACING` | 10.0 | Initial depth distance between rows |
//! | `DEFAULT_FOCAL_LENGTH` | 300.0 | Perspective focal length |
//! | `DEFAULT_Z_SPEED` | 30.0 | Depth units per second |
//! | `DEFAULT_MAX_DEPTH` | -300.0 | Rows beyond this depth are recycled |
//! | `Y_BASE` | 30.0 | Height ceiling of the terrain |
//!
//! # Shading
//!
//! Quads are shaded from the depth of their first corner:
//!
//! - fill: black, opacity `clamp(-z / 100, 0, 0.85)`
//! - stroke: `(red, 0, blue, alpha)` derived from `clamp(300 + z, 0, 300)`
//!
//! # Examples
//!
//! ```
//! use synthwave_types::{GridConfig, DEFAULT_COLUMNS};
//!
//! let config = GridConfig::default();
//! assert_eq!(config.columns, DEFAULT_COLUMNS);
//! assert!(config.validate().is_ok());
//! assert_eq!(config.offset(), 60.0 * 40.0 / 2.0);
//!
//! let broken = GridConfig { rows: 0, ..GridConfig::default() };
//! assert!(broken.validate().is_err());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default number of points per row (lateral resolution).
pub const DEFAULT_COLUMNS: usize = 60;

/// Default number of depth-slices.
pub const DEFAULT_ROWS: usize = 30;

/// Default lateral spacing between points.
pub const DEFAULT_SPACING: f64 = 40.0;

/// Default depth spacing between rows at construction.
pub const DEFAULT_DEPTH_SPACING: f64 = 10.0;

/// Default focal length of the perspective divide.
pub const DEFAULT_FOCAL_LENGTH: f64 = 300.0;

/// Default forward speed in depth units per second.
pub const DEFAULT_Z_SPEED: f64 = 30.0;

/// Default recycle threshold.
pub const DEFAULT_MAX_DEPTH: f64 = -300.0;

/// Height ceiling; terrain dips below it away from the center column.
pub const Y_BASE: f64 = 30.0;

/// Default frame interval in milliseconds (16ms ≈ 60 FPS).
pub const FRAME_INTERVAL_MS: u64 = 16;

/// Upper bound on quad fill opacity.
pub const MAX_FILL_OPACITY: f64 = 0.85;

/// Range of the stroke color ramp (`300 + z` is clamped into `0..=COLOR_RAMP`).
pub const COLOR_RAMP: f64 = 300.0;

/// A single point of the 3D grid.
///
/// `z` is negative away from the camera and grows toward 0 as the grid scrolls.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GridPoint {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl GridPoint {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

/// A point in 2D screen (or projected) space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point2 {
    pub x: f64,
    pub y: f64,
}

impl Point2 {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Viewport size in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// True when either dimension is zero, negative or NaN.
    pub fn is_empty(&self) -> bool {
        !(self.width > 0.0 && self.height > 0.0)
    }
}

/// Axis-aligned rectangle (origin at top-left, y grows downward).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn from_size(size: Size) -> Self {
        Self::new(0.0, 0.0, size.width, size.height)
    }

    pub fn min_y(&self) -> f64 {
        self.y
    }

    pub fn max_y(&self) -> f64 {
        self.y + self.height
    }

    pub fn mid_x(&self) -> f64 {
        self.x + self.width / 2.0
    }

    pub fn mid_y(&self) -> f64 {
        self.y + self.height / 2.0
    }
}

/// Color with straight (non-premultiplied) alpha, channels in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rgba {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl Rgba {
    pub const BLACK: Rgba = Rgba::new(0.0, 0.0, 0.0, 1.0);
    pub const YELLOW: Rgba = Rgba::new(1.0, 1.0, 0.0, 1.0);
    pub const ORANGE: Rgba = Rgba::new(1.0, 0.647, 0.0, 1.0);

    pub const fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    pub const fn opaque(r: f64, g: f64, b: f64) -> Self {
        Self::new(r, g, b, 1.0)
    }

    pub const fn with_alpha(self, a: f64) -> Self {
        Self { a, ..self }
    }

    /// Linear interpolation between two colors (`t` clamped to `0..=1`).
    pub fn lerp(self, other: Rgba, t: f64) -> Rgba {
        let t = t.clamp(0.0, 1.0);
        Rgba {
            r: self.r + (other.r - self.r) * t,
            g: self.g + (other.g - self.g) * t,
            b: self.b + (other.b - self.b) * t,
            a: self.a + (other.a - self.a) * t,
        }
    }
}

/// Construction-time configuration of the grid simulation.
///
/// Missing fields take their defaults when deserialized, so a config file only
/// needs to name what it overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    pub columns: usize,
    pub rows: usize,
    pub spacing: f64,
    pub depth_spacing: f64,
    pub focal_length: f64,
    pub z_speed: f64,
    pub max_depth: f64,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            columns: DEFAULT_COLUMNS,
            rows: DEFAULT_ROWS,
            spacing: DEFAULT_SPACING,
            depth_spacing: DEFAULT_DEPTH_SPACING,
            focal_length: DEFAULT_FOCAL_LENGTH,
            z_speed: DEFAULT_Z_SPEED,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl GridConfig {
    /// Check the construction contract.
    ///
    /// `max_depth` must be negative: a recycled row restarts at `z = 0`, so a
    /// non-negative threshold would recycle the same rows forever.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.columns == 0 {
            return Err(ConfigError::InvalidColumns(self.columns));
        }
        if self.rows == 0 {
            return Err(ConfigError::InvalidRows(self.rows));
        }
        if !(self.spacing.is_finite() && self.spacing > 0.0) {
            return Err(ConfigError::InvalidSpacing(self.spacing));
        }
        if !(self.depth_spacing.is_finite() && self.depth_spacing > 0.0) {
            return Err(ConfigError::InvalidDepthSpacing(self.depth_spacing));
        }
        if !(self.focal_length.is_finite() && self.focal_length > 0.0) {
            return Err(ConfigError::InvalidFocalLength(self.focal_length));
        }
        if !self.z_speed.is_finite() {
            return Err(ConfigError::NonFiniteSpeed(self.z_speed));
        }
        if !(self.max_depth.is_finite() && self.max_depth < 0.0) {
            return Err(ConfigError::InvalidMaxDepth(self.max_depth));
        }
        Ok(())
    }

    /// Lateral offset that centers the grid before projection.
    pub fn offset(&self) -> f64 {
        self.columns as f64 * self.spacing / 2.0
    }

    /// Parse a (possibly partial) JSON config.
    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(s).map_err(|e| ConfigError::Parse(e.to_string()))
    }
}

/// Rejected grid configuration.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("columns must be greater than zero (got {0})")]
    InvalidColumns(usize),

    #[error("rows must be greater than zero (got {0})")]
    InvalidRows(usize),

    #[error("spacing must be a positive finite number (got {0})")]
    InvalidSpacing(f64),

    #[error("depth spacing must be a positive finite number (got {0})")]
    InvalidDepthSpacing(f64),

    #[error("focal length must be a positive finite number (got {0})")]
    InvalidFocalLength(f64),

    #[error("z speed must be finite (got {0})")]
    NonFiniteSpeed(f64),

    #[error("max depth must be a negative finite number (got {0})")]
    InvalidMaxDepth(f64),

    /// JSON decode failure, kept as its rendered message so the error stays
    /// `Clone + PartialEq`; the `serde_json::Error` source chain is not preserved.
    #[error("malformed grid config: {0}")]
    Parse(String),
}

/// Scene actions produced by the key map.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneAction {
    /// Freeze or resume the scroll
    TogglePause,
    /// Rebuild the simulation with a fresh seed
    Restart,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let c = GridConfig::default();
        assert_eq!(c.columns, 60);
        assert_eq!(c.rows, 30);
        assert_eq!(c.spacing, 40.0);
        assert_eq!(c.depth_spacing, 10.0);
        assert_eq!(c.focal_length, 300.0);
        assert_eq!(c.z_speed, 30.0);
        assert_eq!(c.max_depth, -300.0);
        assert_eq!(Y_BASE, 30.0);
    }

    #[test]
    fn validate_rejects_each_broken_field() {
        let base = GridConfig::default();
        assert_eq!(
            GridConfig { columns: 0, ..base.clone() }.validate(),
            Err(ConfigError::InvalidColumns(0))
        );
        assert_eq!(
            GridConfig { rows: 0, ..base.clone() }.validate(),
            Err(ConfigError::InvalidRows(0))
        );
        assert!(matches!(
            GridConfig { spacing: -1.0, ..base.clone() }.validate(),
            Err(ConfigError::InvalidSpacing(_))
        ));
        assert!(matches!(
            GridConfig { depth_spacing: 0.0, ..base.clone() }.validate(),
            Err(ConfigError::InvalidDepthSpacing(_))
        ));
        assert!(matches!(
            GridConfig { focal_length: f64::NAN, ..base.clone() }.validate(),
            Err(ConfigError::InvalidFocalLength(_))
        ));
        assert!(matches!(
            GridConfig { z_speed: f64::INFINITY, ..base.clone() }.validate(),
            Err(ConfigError::NonFiniteSpeed(_))
        ));
        assert!(matches!(
            GridConfig { max_depth: 0.0, ..base }.validate(),
            Err(ConfigError::InvalidMaxDepth(_))
        ));
    }

    #[test]
    fn negative_speed_is_allowed() {
        let c = GridConfig {
            z_speed: -10.0,
            ..GridConfig::default()
        };
        assert!(c.validate().is_ok());
    }

    #[test]
    fn partial_json_fills_defaults() {
        let c = GridConfig::from_json_str(r#"{"columns": 8, "z_speed": 12.5}"#).unwrap();
        assert_eq!(c.columns, 8);
        assert_eq!(c.z_speed, 12.5);
        assert_eq!(c.rows, DEFAULT_ROWS);
        assert_eq!(c.max_depth, DEFAULT_MAX_DEPTH);
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = GridConfig::from_json_str("{columns: }").unwrap_err();
        let ConfigError::Parse(message) = &err else {
            panic!("expected a parse error, got {err:?}");
        };
        assert!(!message.is_empty());
        assert!(err.to_string().starts_with("malformed grid config: "));
    }

    #[test]
    fn rgba_lerp_clamps_t() {
        let a = Rgba::opaque(0.0, 0.0, 0.0);
        let b = Rgba::opaque(1.0, 0.5, 0.0);
        assert_eq!(a.lerp(b, 2.0), b);
        assert_eq!(a.lerp(b, -1.0), a);
        assert_eq!(a.lerp(b, 0.5).g, 0.25);
    }

    #[test]
    fn empty_size_detection() {
        assert!(Size::new(0.0, 10.0).is_empty());
        assert!(Size::new(10.0, -1.0).is_empty());
        assert!(Size::new(f64::NAN, 10.0).is_empty());
        assert!(!Size::new(1.0, 1.0).is_empty());
    }
}
