//! PerspectiveRenderer: turns the simulated grid into shaded quads.
//!
//! Per frame:
//!
//! 1. project every grid point with the perspective divide
//! 2. fit the projected bounds to the viewport ("cover", bottom-anchored)
//! 3. emit one filled and stroked quad per grid cell, row-major, shaded by depth
//!
//! The renderer keeps a scratch buffer of projected points so steady-state frames
//! do not allocate.

use tracing::debug;

use synthwave_core::{Grid, GridSimulation};

use crate::projection::{Bounds, FitTransform, Projection};
use crate::shading::QuadShade;
use crate::surface::{Glow, LinearGradient, Paint, Surface};
use crate::types::{Point2, Rect, Rgba, Size};

/// Sun diameter as a fraction of the smaller viewport dimension.
pub const SUN_DIAMETER_RATIO: f64 = 0.5;
/// Vertical center of the sun as a fraction of viewport height.
pub const SUN_CENTER_Y_RATIO: f64 = 0.35;
/// Glow radius as a fraction of the sun diameter.
pub const SUN_GLOW_RATIO: f64 = 0.25;

pub const SUN_BOTTOM: Rgba = Rgba::opaque(0.8, 0.0, 0.45);
pub const SUN_GLOW: Rgba = Rgba::ORANGE.with_alpha(0.8);
pub const BACKDROP_MID: Rgba = Rgba::opaque(0.35, 0.0, 0.2);

/// Why a grid pass drew nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    TooFewRows,
    EmptyViewport,
    DegenerateBounds,
}

/// Outcome of a grid pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridDraw {
    Drawn { quads: usize },
    Skipped(SkipReason),
}

impl GridDraw {
    pub fn quads(&self) -> usize {
        match self {
            GridDraw::Drawn { quads } => *quads,
            GridDraw::Skipped(_) => 0,
        }
    }
}

/// Projects, fits and shades the grid onto a [`Surface`].
#[derive(Debug, Default)]
pub struct PerspectiveRenderer {
    /// Row-major screen positions of the last frame.
    screen: Vec<Point2>,
    last_fit: Option<FitTransform>,
}

impl PerspectiveRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fit transform used by the most recent successful grid pass.
    pub fn last_fit(&self) -> Option<FitTransform> {
        self.last_fit
    }

    /// Full scene: backdrop, sun, then grid.
    pub fn draw_frame<R, S: Surface>(
        &mut self,
        sim: &GridSimulation<R>,
        viewport: Size,
        surface: &mut S,
    ) -> GridDraw {
        if !viewport.is_empty() {
            draw_backdrop(viewport, surface);
            draw_sun(viewport, surface);
        }
        self.draw_grid(sim.grid(), Projection::for_simulation(sim), viewport, surface)
    }

    /// Draw the grid as shaded quads; nothing reaches `surface` when skipped.
    pub fn draw_grid<S: Surface>(
        &mut self,
        grid: &Grid,
        projection: Projection,
        viewport: Size,
        surface: &mut S,
    ) -> GridDraw {
        let outcome = self.draw_grid_inner(grid, projection, viewport, surface);
        if let GridDraw::Skipped(reason) = outcome {
            self.last_fit = None;
            debug!(?reason, "grid pass skipped");
        }
        outcome
    }

    fn draw_grid_inner<S: Surface>(
        &mut self,
        grid: &Grid,
        projection: Projection,
        viewport: Size,
        surface: &mut S,
    ) -> GridDraw {
        if grid.row_count() < 2 {
            return GridDraw::Skipped(SkipReason::TooFewRows);
        }
        if viewport.is_empty() {
            return GridDraw::Skipped(SkipReason::EmptyViewport);
        }

        self.screen.clear();
        let mut bounds = Bounds::empty();
        for point in grid.points() {
            let p = projection.project(point);
            bounds.include(p);
            self.screen.push(p);
        }

        let Some(fit) = FitTransform::cover(&bounds, viewport) else {
            return GridDraw::Skipped(SkipReason::DegenerateBounds);
        };
        for p in self.screen.iter_mut() {
            *p = fit.apply(*p);
        }
        self.last_fit = Some(fit);

        let columns = grid.columns();
        let mut quads = 0;
        for (row_index, row) in grid.rows().enumerate().take(grid.row_count() - 1) {
            let near = row_index * columns;
            let far = near + columns;
            for column in 0..columns.saturating_sub(1) {
                let quad = [
                    self.screen[near + column],
                    self.screen[near + column + 1],
                    self.screen[far + column + 1],
                    self.screen[far + column],
                ];
                let shade = QuadShade::for_depth(row[column].z);
                surface.fill_polygon(&quad, shade.fill);
                surface.stroke_polygon(&quad, shade.stroke, shade.line_width);
                quads += 1;
            }
        }

        GridDraw::Drawn { quads }
    }
}

/// Bounding box of the sun disc for `viewport`.
pub fn sun_rect(viewport: Size) -> Rect {
    let diameter = viewport.width.min(viewport.height) * SUN_DIAMETER_RATIO;
    let center_y = viewport.height * SUN_CENTER_Y_RATIO;
    Rect::new(
        (viewport.width - diameter) / 2.0,
        center_y - diameter / 2.0,
        diameter,
        diameter,
    )
}

/// Gradient-filled sun with an orange glow. Stateless.
pub fn draw_sun<S: Surface>(viewport: Size, surface: &mut S) {
    if viewport.is_empty() {
        return;
    }
    let rect = sun_rect(viewport);
    let paint = Paint::Linear(LinearGradient::vertical(rect, &[Rgba::YELLOW, SUN_BOTTOM]));
    let glow = Glow {
        color: SUN_GLOW,
        radius: rect.width * SUN_GLOW_RATIO,
    };
    surface.with_glow(glow, |s| s.fill_ellipse(rect, &paint));
}

/// Full-viewport vertical gradient behind everything else.
pub fn draw_backdrop<S: Surface>(viewport: Size, surface: &mut S) {
    if viewport.is_empty() {
        return;
    }
    let rect = Rect::from_size(viewport);
    let paint = Paint::Linear(LinearGradient::vertical(
        rect,
        &[Rgba::BLACK, BACKDROP_MID, Rgba::BLACK],
    ));
    surface.fill_rect(rect, &paint);
}
