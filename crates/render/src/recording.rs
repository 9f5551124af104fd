//! A surface that records draw calls instead of rasterizing them.
//!
//! Useful for tests and for inspecting what a frame would draw.

use crate::surface::{Glow, Paint, Surface};
use crate::types::{Point2, Rect, Rgba};

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    FillRect {
        rect: Rect,
        paint: Paint,
    },
    FillPolygon {
        points: Vec<Point2>,
        color: Rgba,
    },
    StrokePolygon {
        points: Vec<Point2>,
        color: Rgba,
        line_width: f64,
    },
    FillEllipse {
        bounds: Rect,
        paint: Paint,
    },
    BeginGlow(Glow),
    EndGlow,
}

#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// Points of every filled polygon, in draw order.
    pub fn filled_polygons(&self) -> impl Iterator<Item = (&[Point2], Rgba)> + '_ {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::FillPolygon { points, color } => Some((points.as_slice(), *color)),
            _ => None,
        })
    }

    /// Every point handed to polygon fills or strokes.
    pub fn polygon_points(&self) -> impl Iterator<Item = Point2> + '_ {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::FillPolygon { points, .. }
                | DrawCommand::StrokePolygon { points, .. } => Some(points.iter().copied()),
                _ => None,
            })
            .flatten()
    }
}

impl Surface for RecordingSurface {
    fn fill_rect(&mut self, rect: Rect, paint: &Paint) {
        self.commands.push(DrawCommand::FillRect {
            rect,
            paint: paint.clone(),
        });
    }

    fn fill_polygon(&mut self, points: &[Point2], color: Rgba) {
        self.commands.push(DrawCommand::FillPolygon {
            points: points.to_vec(),
            color,
        });
    }

    fn stroke_polygon(&mut self, points: &[Point2], color: Rgba, line_width: f64) {
        self.commands.push(DrawCommand::StrokePolygon {
            points: points.to_vec(),
            color,
            line_width,
        });
    }

    fn fill_ellipse(&mut self, bounds: Rect, paint: &Paint) {
        self.commands.push(DrawCommand::FillEllipse {
            bounds,
            paint: paint.clone(),
        });
    }

    fn begin_glow(&mut self, glow: Glow) {
        self.commands.push(DrawCommand::BeginGlow(glow));
    }

    fn end_glow(&mut self) {
        self.commands.push(DrawCommand::EndGlow);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn with_glow_brackets_inner_draws() {
        let mut s = RecordingSurface::new();
        let glow = Glow {
            color: Rgba::ORANGE,
            radius: 4.0,
        };
        s.with_glow(glow, |s| {
            s.fill_ellipse(Rect::new(0.0, 0.0, 2.0, 2.0), &Paint::Solid(Rgba::BLACK))
        });

        assert_eq!(s.len(), 3);
        assert_eq!(s.commands()[0], DrawCommand::BeginGlow(glow));
        assert!(matches!(s.commands()[1], DrawCommand::FillEllipse { .. }));
        assert_eq!(s.commands()[2], DrawCommand::EndGlow);
    }

    #[test]
    fn filled_polygons_skips_strokes() {
        let mut s = RecordingSurface::new();
        let quad = [Point2::new(0.0, 0.0); 4];
        s.fill_polygon(&quad, Rgba::BLACK);
        s.stroke_polygon(&quad, Rgba::ORANGE, 1.0);

        assert_eq!(s.filled_polygons().count(), 1);
        assert_eq!(s.polygon_points().count(), 8);
    }
}
