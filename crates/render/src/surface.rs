//! Drawing-surface abstraction.
//!
//! The renderer only needs an immediate-mode 2D target in viewport pixel space
//! (origin top-left, y down). Backends implement [`Surface`]; the surface handle is
//! passed explicitly to every draw call and carries no state between frames other
//! than what the backend itself owns.

use arrayvec::ArrayVec;

use crate::types::{Point2, Rect, Rgba};

/// Maximum number of stops a gradient can carry.
pub const MAX_STOPS: usize = 4;

/// A color at a normalized position along a gradient axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorStop {
    pub offset: f64,
    pub color: Rgba,
}

/// Linear gradient between two points.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearGradient {
    pub start: Point2,
    pub end: Point2,
    stops: ArrayVec<ColorStop, MAX_STOPS>,
}

impl LinearGradient {
    /// Spread `colors` evenly from `start` to `end`.
    ///
    /// Colors beyond [`MAX_STOPS`] are dropped.
    pub fn evenly(start: Point2, end: Point2, colors: &[Rgba]) -> Self {
        let mut stops = ArrayVec::new();
        let n = colors.len().min(MAX_STOPS);
        for (i, &color) in colors.iter().take(n).enumerate() {
            let offset = if n > 1 {
                i as f64 / (n - 1) as f64
            } else {
                0.0
            };
            stops.push(ColorStop { offset, color });
        }
        Self { start, end, stops }
    }

    /// Vertical gradient across `rect`, top to bottom.
    pub fn vertical(rect: Rect, colors: &[Rgba]) -> Self {
        Self::evenly(
            Point2::new(rect.mid_x(), rect.min_y()),
            Point2::new(rect.mid_x(), rect.max_y()),
            colors,
        )
    }

    pub fn stops(&self) -> &[ColorStop] {
        &self.stops
    }

    /// Color at `p`, projected onto the gradient axis and clamped to its ends.
    pub fn color_at(&self, p: Point2) -> Rgba {
        let (first, last) = match (self.stops.first(), self.stops.last()) {
            (Some(f), Some(l)) => (*f, *l),
            _ => return Rgba::default(),
        };

        let dx = self.end.x - self.start.x;
        let dy = self.end.y - self.start.y;
        let len2 = dx * dx + dy * dy;
        if len2 <= f64::EPSILON {
            return first.color;
        }
        let t = ((p.x - self.start.x) * dx + (p.y - self.start.y) * dy) / len2;

        if t <= first.offset {
            return first.color;
        }
        for pair in self.stops.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            if t <= b.offset {
                let span = b.offset - a.offset;
                let local = if span > 0.0 { (t - a.offset) / span } else { 1.0 };
                return a.color.lerp(b.color, local);
            }
        }
        last.color
    }
}

/// How a filled shape is colored.
#[derive(Debug, Clone, PartialEq)]
pub enum Paint {
    Solid(Rgba),
    Linear(LinearGradient),
}

impl Paint {
    pub fn color_at(&self, p: Point2) -> Rgba {
        match self {
            Paint::Solid(c) => *c,
            Paint::Linear(g) => g.color_at(p),
        }
    }
}

/// Soft blurred halo drawn behind shapes filled inside a glow scope.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Glow {
    pub color: Rgba,
    pub radius: f64,
}

/// Immediate-mode 2D drawing target.
pub trait Surface {
    fn fill_rect(&mut self, rect: Rect, paint: &Paint);

    /// Fill a closed polygon (even-odd rule).
    fn fill_polygon(&mut self, points: &[Point2], color: Rgba);

    /// Stroke the outline of a closed polygon.
    fn stroke_polygon(&mut self, points: &[Point2], color: Rgba, line_width: f64);

    fn fill_ellipse(&mut self, bounds: Rect, paint: &Paint);

    /// Shapes filled until the matching [`Surface::end_glow`] get `glow` behind them.
    fn begin_glow(&mut self, glow: Glow);

    fn end_glow(&mut self);

    /// Run `draw` inside a begin/end glow scope.
    fn with_glow<F>(&mut self, glow: Glow, draw: F)
    where
        Self: Sized,
        F: FnOnce(&mut Self),
    {
        self.begin_glow(glow);
        draw(self);
        self.end_glow();
    }
}
