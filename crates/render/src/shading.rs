//! Depth-based quad shading.
//!
//! Color is driven by the simulation depth of a quad's first corner, not by its
//! projected or fitted position, so the fog falloff is the same at any viewport size.

use crate::types::{Rgba, COLOR_RAMP, MAX_FILL_OPACITY};

/// Stroke width of grid lines in pixels.
pub const GRID_LINE_WIDTH: f64 = 1.0;

/// Fill and outline colors of one grid quad.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuadShade {
    pub fill: Rgba,
    pub stroke: Rgba,
    pub line_width: f64,
}

impl QuadShade {
    pub fn for_depth(z: f64) -> Self {
        let fill_opacity = (-z / 100.0).clamp(0.0, MAX_FILL_OPACITY);
        let color_value = (COLOR_RAMP + z).clamp(0.0, COLOR_RAMP);

        let red = ((250.0 - color_value) / 255.0).clamp(0.0, 1.0);
        let blue = ((50.0 + color_value) / 255.0).clamp(0.0, 1.0);
        let alpha = (1.0 - color_value / COLOR_RAMP).clamp(0.0, 1.0);

        Self {
            fill: Rgba::BLACK.with_alpha(fill_opacity),
            stroke: Rgba::new(red, 0.0, blue, alpha),
            line_width: GRID_LINE_WIDTH,
        }
    }
}
