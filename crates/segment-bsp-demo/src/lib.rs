//! Sample data and drawing utilities for the segment BSP demos.

use std::hash::{Hash, Hasher};

use macroquad::prelude::*;
use segment_bsp::{Line, Point};

pub mod navigator;
pub use navigator::TreeNavigator;

/// The fixed demo scene: nine segments, none of them vertical.
pub fn sample_segments() -> Vec<Line> {
    [
        [1.0, 1.0, 2.0, 2.0],
        [4.0, 4.0, 7.0, 4.0],
        [0.0, 10.0, 3.0, 8.0],
        [7.0, 4.0, 9.0, 5.0],
        [4.0, 5.0, 7.0, 8.0],
        [2.0, 5.0, 4.0, 2.0],
        [2.0, 5.0, 3.0, 8.0],
        [7.0, 4.0, 8.0, 0.0],
        [6.0, 7.0, 9.0, 7.0],
    ]
    .iter()
    .map(|[x1, y1, x2, y2]| Line::from_coords(*x1, *y1, *x2, *y2))
    .collect()
}

/// Generates a deterministic color from a segment's endpoints using hashing.
/// Split pieces get their own colors, stable across frames.
pub fn segment_color(line: &Line) -> Color {
    let mut hasher = std::collections::hash_map::DefaultHasher::new();
    for p in [line.p1(), line.p2()] {
        p.x.to_bits().hash(&mut hasher);
        p.y.to_bits().hash(&mut hasher);
    }
    let hash = hasher.finish();

    // Keep colors readable on a dark background
    let r = (((hash >> 16) & 0xFF) as u8).max(60);
    let g = (((hash >> 8) & 0xFF) as u8).max(60);
    let b = ((hash & 0xFF) as u8).max(60);

    Color::from_rgba(r, g, b, 255)
}

/// Maps scene coordinates onto the screen, keeping the aspect ratio and
/// flipping y so that "up" in the scene is up on screen.
#[derive(Debug, Clone, Copy)]
pub struct Viewport {
    min: Point,
    scale: f32,
    offset: Vec2,
    height: f32,
}

impl Viewport {
    /// Fits all segments into a screen area of `size`, leaving `margin`
    /// pixels on every side.
    pub fn fit(segments: &[Line], size: Vec2, margin: f32) -> Self {
        let mut min = Point::new(f64::INFINITY, f64::INFINITY);
        let mut max = Point::new(f64::NEG_INFINITY, f64::NEG_INFINITY);
        for p in segments.iter().flat_map(|l| [l.p1(), l.p2()]) {
            min = min.inf(&p);
            max = max.sup(&p);
        }
        if segments.is_empty() {
            min = Point::origin();
            max = Point::new(1.0, 1.0);
        }

        let extent = (max - min).map(|v| v.max(f64::EPSILON));
        let available = size - Vec2::splat(2.0 * margin);
        let scale = (available.x / extent.x as f32).min(available.y / extent.y as f32);
        let used = vec2(extent.x as f32, extent.y as f32) * scale;

        Self {
            min,
            scale,
            offset: Vec2::splat(margin) + (available - used) * 0.5,
            height: size.y,
        }
    }

    /// Converts a scene point to screen coordinates.
    pub fn to_screen(&self, p: Point) -> Vec2 {
        let x = (p.x - self.min.x) as f32 * self.scale + self.offset.x;
        let y = (p.y - self.min.y) as f32 * self.scale + self.offset.y;
        vec2(x, self.height - y)
    }
}

/// Draws a single segment with a marker at its start point.
pub fn draw_segment(line: &Line, viewport: &Viewport, thickness: f32, color: Color) {
    let a = viewport.to_screen(line.p1());
    let b = viewport.to_screen(line.p2());
    draw_line(a.x, a.y, b.x, b.y, thickness, color);
    draw_circle(a.x, a.y, thickness * 1.5, color);
}

/// Draws the infinite line through `line`, clipped to the screen.
///
/// Vertical segments are drawn as a vertical guide.
pub fn draw_splitting_line(line: &Line, viewport: &Viewport, color: Color) {
    let (w, h) = (screen_width(), screen_height());
    let a = viewport.to_screen(line.p1());
    let b = viewport.to_screen(line.p2());

    if (b.x - a.x).abs() < f32::EPSILON {
        draw_line(a.x, 0.0, a.x, h, 1.0, color);
        return;
    }

    let slope = (b.y - a.y) / (b.x - a.x);
    let y_at = |x: f32| a.y + slope * (x - a.x);
    draw_line(0.0, y_at(0.0), w, y_at(w), 1.0, color);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_has_nine_non_vertical_segments() {
        let segments = sample_segments();
        assert_eq!(segments.len(), 9);
        assert!(segments.iter().all(|l| !l.is_vertical()));
    }

    #[test]
    fn segment_color_is_deterministic() {
        let line = Line::from_coords(1.0, 1.0, 2.0, 2.0);
        assert_eq!(segment_color(&line), segment_color(&line.clone()));
    }

    #[test]
    fn viewport_flips_y_and_keeps_margin() {
        let segments = vec![Line::from_coords(0.0, 0.0, 10.0, 10.0)];
        let viewport = Viewport::fit(&segments, vec2(120.0, 120.0), 10.0);

        let bottom_left = viewport.to_screen(Point::new(0.0, 0.0));
        let top_right = viewport.to_screen(Point::new(10.0, 10.0));
        assert!((bottom_left - vec2(10.0, 110.0)).length() < 1e-3);
        assert!((top_right - vec2(110.0, 10.0)).length() < 1e-3);
    }
}
