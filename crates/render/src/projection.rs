//! Perspective projection and screen-space fitting.

use synthwave_core::GridSimulation;

use crate::types::{GridConfig, GridPoint, Point2, Size};

/// Parameters of the perspective divide.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    /// Lateral offset subtracted before the divide (`columns * spacing / 2`).
    pub offset: f64,
    pub focal_length: f64,
}

impl Projection {
    pub fn new(offset: f64, focal_length: f64) -> Self {
        Self {
            offset,
            focal_length,
        }
    }

    pub fn from_config(config: &GridConfig) -> Self {
        Self::new(config.offset(), config.focal_length)
    }

    pub fn for_simulation<R>(sim: &GridSimulation<R>) -> Self {
        Self::new(sim.offset(), sim.focal_length())
    }

    #[inline]
    pub fn project(&self, point: &GridPoint) -> Point2 {
        project_point(point, self.offset, self.focal_length)
    }
}

/// `scale = f / (f + z)`; x is centered by `offset` first.
///
/// Diverges as `z` approaches `-focal_length` and flips sign beyond it.
#[inline]
pub fn project_point(point: &GridPoint, offset: f64, focal_length: f64) -> Point2 {
    let scale = focal_length / (focal_length + point.z);
    Point2::new((point.x - offset) * scale, point.y * scale)
}

/// Axis-aligned bounds of projected points.
///
/// Any non-finite point poisons the bounds so the frame can be skipped.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
    finite: bool,
}

impl Default for Bounds {
    fn default() -> Self {
        Self::empty()
    }
}

impl Bounds {
    pub fn empty() -> Self {
        Self {
            min_x: f64::INFINITY,
            max_x: f64::NEG_INFINITY,
            min_y: f64::INFINITY,
            max_y: f64::NEG_INFINITY,
            finite: true,
        }
    }

    pub fn of<'a>(points: impl IntoIterator<Item = &'a Point2>) -> Self {
        let mut b = Self::empty();
        for p in points {
            b.include(*p);
        }
        b
    }

    pub fn include(&mut self, p: Point2) {
        if !p.is_finite() {
            self.finite = false;
            return;
        }
        self.min_x = self.min_x.min(p.x);
        self.max_x = self.max_x.max(p.x);
        self.min_y = self.min_y.min(p.y);
        self.max_y = self.max_y.max(p.y);
    }

    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    pub fn center_x(&self) -> f64 {
        (self.min_x + self.max_x) / 2.0
    }

    /// Non-finite, empty, or zero-extent on either axis.
    pub fn is_degenerate(&self) -> bool {
        let all_finite = self.finite
            && self.min_x.is_finite()
            && self.max_x.is_finite()
            && self.min_y.is_finite()
            && self.max_y.is_finite();
        !(all_finite && self.width() > 0.0 && self.height() > 0.0)
    }
}

/// Uniform scale plus offset mapping projected space onto the viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FitTransform {
    pub scale: f64,
    pub x_offset: f64,
    pub y_offset: f64,
}

impl FitTransform {
    /// "Cover" fit: the larger of the two axis scales, centered horizontally and
    /// anchored to the viewport's bottom edge. The other axis may overflow.
    pub fn cover(bounds: &Bounds, viewport: Size) -> Option<Self> {
        if bounds.is_degenerate() || viewport.is_empty() {
            return None;
        }
        let scale = (viewport.width / bounds.width()).max(viewport.height / bounds.height());
        Some(Self {
            scale,
            x_offset: viewport.width / 2.0 - bounds.center_x() * scale,
            y_offset: viewport.height - bounds.max_y * scale,
        })
    }

    #[inline]
    pub fn apply(&self, p: Point2) -> Point2 {
        Point2::new(p.x * self.scale + self.x_offset, p.y * self.scale + self.y_offset)
    }
}
