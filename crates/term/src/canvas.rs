//! PixelCanvas: a small software rasterizer implementing [`Surface`].
//!
//! Pixels are straight RGB in `0.0..=1.0`; every draw blends source-over with the
//! paint's alpha. Coordinates are sampled at pixel centers. Geometry far outside
//! the canvas is clipped before rasterization, so runaway projections cost nothing.

use arrayvec::ArrayVec;

use synthwave_render::{Glow, Paint, Surface};

use crate::fb::Rgb;
use crate::types::{Point2, Rect, Rgba};

/// Nested glow scopes tracked by the canvas; deeper scopes are ignored.
pub const MAX_GLOW_DEPTH: usize = 4;

/// Scanline crossings kept per row; enough for any polygon of up to this many edges.
const MAX_CROSSINGS: usize = 16;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
struct Px {
    r: f64,
    g: f64,
    b: f64,
}

/// Owned RGB pixel buffer.
#[derive(Debug, Clone)]
pub struct PixelCanvas {
    width: usize,
    height: usize,
    pixels: Vec<Px>,
    glows: ArrayVec<Glow, MAX_GLOW_DEPTH>,
    glow_overflow: usize,
}

impl PixelCanvas {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            pixels: vec![Px::default(); width * height],
            glows: ArrayVec::new(),
            glow_overflow: 0,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn resize(&mut self, width: usize, height: usize) {
        if self.width == width && self.height == height {
            return;
        }
        self.width = width;
        self.height = height;
        self.pixels.resize(width * height, Px::default());
    }

    /// Fill every pixel with `color` (alpha ignored) and drop open glow scopes.
    pub fn clear(&mut self, color: Rgba) {
        self.pixels.fill(Px {
            r: color.r,
            g: color.g,
            b: color.b,
        });
        self.glows.clear();
        self.glow_overflow = 0;
    }

    pub fn pixel(&self, x: usize, y: usize) -> Option<Rgb> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let p = self.pixels[y * self.width + x];
        Some(Rgb::from_rgba(Rgba::opaque(p.r, p.g, p.b)))
    }

    #[inline]
    fn blend(&mut self, x: usize, y: usize, c: Rgba) {
        let a = c.a.clamp(0.0, 1.0);
        if a <= 0.0 || x >= self.width || y >= self.height {
            return;
        }
        let p = &mut self.pixels[y * self.width + x];
        p.r += (c.r - p.r) * a;
        p.g += (c.g - p.g) * a;
        p.b += (c.b - p.b) * a;
    }

    #[inline]
    fn blend_signed(&mut self, x: isize, y: isize, c: Rgba) {
        if x >= 0 && y >= 0 {
            self.blend(x as usize, y as usize, c);
        }
    }

    /// Pixel index range whose centers fall in `[lo, hi)`, clipped to `0..limit`.
    fn center_span(lo: f64, hi: f64, limit: usize) -> (usize, usize) {
        let start = (lo - 0.5).ceil().max(0.0);
        let end = (hi - 0.5).ceil().min(limit as f64);
        if !(start < end) {
            return (0, 0);
        }
        (start as usize, end as usize)
    }

    fn draw_line(&mut self, a: Point2, b: Point2, color: Rgba, line_width: f64) {
        let pad = line_width.max(1.0);
        let Some((a, b)) = clip_segment(
            a,
            b,
            -pad,
            -pad,
            self.width as f64 + pad,
            self.height as f64 + pad,
        ) else {
            return;
        };

        let half = ((line_width - 1.0) / 2.0).round().max(0.0) as isize;
        let dx = b.x - a.x;
        let dy = b.y - a.y;
        let steps = dx.abs().max(dy.abs()).ceil().max(1.0) as usize;

        let mut last: Option<(isize, isize)> = None;
        for i in 0..=steps {
            let t = i as f64 / steps as f64;
            let px = (a.x + dx * t).floor() as isize;
            let py = (a.y + dy * t).floor() as isize;
            if last == Some((px, py)) {
                continue;
            }
            last = Some((px, py));
            for oy in -half..=half {
                for ox in -half..=half {
                    self.blend_signed(px + ox, py + oy, color);
                }
            }
        }
    }
}

impl Surface for PixelCanvas {
    fn fill_rect(&mut self, rect: Rect, paint: &Paint) {
        let (x0, x1) = Self::center_span(rect.x, rect.x + rect.width, self.width);
        let (y0, y1) = Self::center_span(rect.y, rect.y + rect.height, self.height);
        for y in y0..y1 {
            for x in x0..x1 {
                let c = paint.color_at(Point2::new(x as f64 + 0.5, y as f64 + 0.5));
                self.blend(x, y, c);
            }
        }
    }

    fn fill_polygon(&mut self, points: &[Point2], color: Rgba) {
        if points.len() < 3 || color.a <= 0.0 || !points.iter().all(Point2::is_finite) {
            return;
        }

        let (min_y, max_y) = points
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), p| {
                (lo.min(p.y), hi.max(p.y))
            });
        let (y0, y1) = Self::center_span(min_y, max_y, self.height);

        let n = points.len();
        for y in y0..y1 {
            let yc = y as f64 + 0.5;
            let mut crossings: ArrayVec<f64, MAX_CROSSINGS> = ArrayVec::new();
            for i in 0..n {
                let a = points[i];
                let b = points[(i + 1) % n];
                if (a.y <= yc) != (b.y <= yc) {
                    let x = a.x + (yc - a.y) * (b.x - a.x) / (b.y - a.y);
                    if crossings.try_push(x).is_err() {
                        break;
                    }
                }
            }
            crossings.sort_unstable_by(f64::total_cmp);

            for pair in crossings.chunks_exact(2) {
                let (x0, x1) = Self::center_span(pair[0], pair[1], self.width);
                for x in x0..x1 {
                    self.blend(x, y, color);
                }
            }
        }
    }

    fn stroke_polygon(&mut self, points: &[Point2], color: Rgba, line_width: f64) {
        if points.len() < 2 || color.a <= 0.0 || !points.iter().all(Point2::is_finite) {
            return;
        }
        let n = points.len();
        for i in 0..n {
            self.draw_line(points[i], points[(i + 1) % n], color, line_width);
        }
    }

    /// Fills the ellipse; an open glow scope adds a halo fading out over `glow.radius`.
    fn fill_ellipse(&mut self, bounds: Rect, paint: &Paint) {
        let rx = bounds.width / 2.0;
        let ry = bounds.height / 2.0;
        if !(rx > 0.0 && ry > 0.0) {
            return;
        }
        let cx = bounds.mid_x();
        let cy = bounds.mid_y();
        let glow = self.glows.last().copied().filter(|g| g.radius > 0.0);
        let reach = glow.map_or(0.0, |g| g.radius);
        let edge = rx.min(ry);

        let (x0, x1) = Self::center_span(bounds.x - reach, bounds.x + bounds.width + reach, self.width);
        let (y0, y1) = Self::center_span(bounds.y - reach, bounds.max_y() + reach, self.height);

        for y in y0..y1 {
            for x in x0..x1 {
                let p = Point2::new(x as f64 + 0.5, y as f64 + 0.5);
                let nx = (p.x - cx) / rx;
                let ny = (p.y - cy) / ry;
                let d = (nx * nx + ny * ny).sqrt();
                if d <= 1.0 {
                    let c = paint.color_at(p);
                    self.blend(x, y, c);
                } else if let Some(g) = glow {
                    let outside = (d - 1.0) * edge;
                    if outside < g.radius {
                        let falloff = 1.0 - outside / g.radius;
                        self.blend(x, y, g.color.with_alpha(g.color.a * falloff * falloff));
                    }
                }
            }
        }
    }

    fn begin_glow(&mut self, glow: Glow) {
        if self.glows.try_push(glow).is_err() {
            self.glow_overflow += 1;
        }
    }

    fn end_glow(&mut self) {
        if self.glow_overflow > 0 {
            self.glow_overflow -= 1;
        } else {
            self.glows.pop();
        }
    }
}

/// Liang–Barsky clip of segment `a`–`b` to the given box.
fn clip_segment(
    a: Point2,
    b: Point2,
    min_x: f64,
    min_y: f64,
    max_x: f64,
    max_y: f64,
) -> Option<(Point2, Point2)> {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    let mut t0 = 0.0f64;
    let mut t1 = 1.0f64;

    for (p, q) in [
        (-dx, a.x - min_x),
        (dx, max_x - a.x),
        (-dy, a.y - min_y),
        (dy, max_y - a.y),
    ] {
        if p == 0.0 {
            if q < 0.0 {
                return None;
            }
            continue;
        }
        let r = q / p;
        if p < 0.0 {
            if r > t1 {
                return None;
            }
            t0 = t0.max(r);
        } else {
            if r < t0 {
                return None;
            }
            t1 = t1.min(r);
        }
    }

    Some((
        Point2::new(a.x + t0 * dx, a.y + t0 * dy),
        Point2::new(a.x + t1 * dx, a.y + t1 * dy),
    ))
}
