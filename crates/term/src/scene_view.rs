//! SceneView: composites the synthwave scene into a terminal framebuffer.
//!
//! The scene is rasterized into a [`PixelCanvas`] twice as tall as the terminal,
//! then folded into upper-half-block glyphs (`▀`): the glyph's foreground is the
//! top pixel and its background the bottom one, which keeps pixels roughly square.
//!
//! Apart from the rasterization itself this module is pure (no I/O).

use synthwave_core::GridSimulation;
use synthwave_render::{GridDraw, PerspectiveRenderer};

use crate::canvas::PixelCanvas;
use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};
use crate::types::{Rgba, Size};

const HALF_BLOCK: char = '▀';

/// Terminal viewport dimensions in cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    /// Pixel size of the scene canvas (two pixels per cell vertically).
    pub fn pixel_size(&self) -> Size {
        Size::new(self.width as f64, self.height as f64 * 2.0)
    }
}

/// Renders simulation frames into terminal cells, reusing its buffers.
#[derive(Debug)]
pub struct SceneView {
    renderer: PerspectiveRenderer,
    canvas: PixelCanvas,
}

impl Default for SceneView {
    fn default() -> Self {
        Self::new()
    }
}

impl SceneView {
    pub fn new() -> Self {
        Self {
            renderer: PerspectiveRenderer::new(),
            canvas: PixelCanvas::new(0, 0),
        }
    }

    pub fn canvas(&self) -> &PixelCanvas {
        &self.canvas
    }

    /// Render the current grid into an existing framebuffer.
    ///
    /// `overlay` is drawn centered on top of the scene (e.g. `"PAUSED"`).
    pub fn render_into<R>(
        &mut self,
        sim: &GridSimulation<R>,
        viewport: Viewport,
        overlay: Option<&str>,
        fb: &mut FrameBuffer,
    ) -> GridDraw {
        fb.resize(viewport.width, viewport.height);

        let size = viewport.pixel_size();
        self.canvas
            .resize(viewport.width as usize, viewport.height as usize * 2);
        self.canvas.clear(Rgba::BLACK);
        let drawn = self.renderer.draw_frame(sim, size, &mut self.canvas);

        self.fold_half_blocks(fb);
        if let Some(text) = overlay {
            draw_overlay_text(fb, text);
        }
        drawn
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render<R>(
        &mut self,
        sim: &GridSimulation<R>,
        viewport: Viewport,
        overlay: Option<&str>,
    ) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(sim, viewport, overlay, &mut fb);
        fb
    }

    fn fold_half_blocks(&self, fb: &mut FrameBuffer) {
        for y in 0..fb.height() {
            for x in 0..fb.width() {
                let top = self
                    .canvas
                    .pixel(x as usize, y as usize * 2)
                    .unwrap_or_default();
                let bottom = self
                    .canvas
                    .pixel(x as usize, y as usize * 2 + 1)
                    .unwrap_or_default();
                let ch = if top == bottom { ' ' } else { HALF_BLOCK };
                fb.set(
                    x,
                    y,
                    Cell {
                        ch,
                        style: CellStyle {
                            fg: top,
                            bg: bottom,
                            bold: false,
                        },
                    },
                );
            }
        }
    }
}

fn draw_overlay_text(fb: &mut FrameBuffer, text: &str) {
    let text_w = text.chars().count() as u16;
    let x = fb.width().saturating_sub(text_w) / 2;
    let y = fb.height() / 2;
    let style = CellStyle {
        fg: Rgb::WHITE,
        bg: Rgb::BLACK,
        bold: true,
    };
    fb.put_str(x, y, text, style);
}
