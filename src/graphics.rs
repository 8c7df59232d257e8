use crate::geometry::Quad;
use crate::math::{edge_function, Point2};
use crossterm::style::Color;

pub const BACKGROUND: Color = Color::Rgb { r: 50, g: 50, b: 50 };
pub const OUTLINE: Color = Color::Rgb { r: 0, g: 0, b: 0 };

/// Software framebuffer of RGB pixels
#[derive(Debug, Clone, PartialEq)]
pub struct Canvas {
    width: usize,
    height: usize,
    pixels: Vec<Color>,
}

impl Canvas {
    pub fn new(width: usize, height: usize) -> Self {
        Canvas {
            width,
            height,
            pixels: vec![BACKGROUND; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn clear(&mut self) {
        self.pixels.fill(BACKGROUND);
    }

    pub fn get(&self, x: usize, y: usize) -> Option<Color> {
        (x < self.width && y < self.height).then(|| self.pixels[y * self.width + x])
    }

    /// Sets a pixel, ignoring coordinates outside the canvas
    pub fn set(&mut self, x: isize, y: isize, color: Color) {
        if x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height {
            self.pixels[y as usize * self.width + x as usize] = color;
        }
    }

    /// Fills an axis-aligned rectangle, clipped to the canvas
    pub fn fill_rect(&mut self, x: usize, y: usize, width: usize, height: usize, color: Color) {
        for row in y..(y + height).min(self.height) {
            for col in x..(x + width).min(self.width) {
                self.pixels[row * self.width + col] = color;
            }
        }
    }

    /// Rows of pixels, top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Color]> {
        self.pixels.chunks(self.width.max(1))
    }
}

/// Fills a triangle in either winding order
pub fn draw_triangle(canvas: &mut Canvas, v0: &Point2, v1: &Point2, v2: &Point2, color: Color) {
    if canvas.width == 0 || canvas.height == 0 {
        return;
    }
    // Precompute area of the triangle
    let area = edge_function(v0, v1, v2);
    if area == 0.0 {
        return;
    }

    // Compute bounding box of the triangle
    let min_x = v0[0].min(v1[0]).min(v2[0]).floor().max(0.0) as usize;
    let max_x = v0[0]
        .max(v1[0])
        .max(v2[0])
        .ceil()
        .min(canvas.width as f64 - 1.0);
    let min_y = v0[1].min(v1[1]).min(v2[1]).floor().max(0.0) as usize;
    let max_y = v0[1]
        .max(v1[1])
        .max(v2[1])
        .ceil()
        .min(canvas.height as f64 - 1.0);
    if max_x < 0.0 || max_y < 0.0 {
        return;
    }

    // For each pixel in the bounding box
    for y in min_y..=max_y as usize {
        for x in min_x..=max_x as usize {
            let p = [x as f64 + 0.5, y as f64 + 0.5];

            // Normalized barycentric weights are all non-negative inside, whatever the winding
            let w0 = edge_function(v1, v2, &p) / area;
            let w1 = edge_function(v2, v0, &p) / area;
            let w2 = edge_function(v0, v1, &p) / area;

            if w0 >= 0.0 && w1 >= 0.0 && w2 >= 0.0 {
                canvas.pixels[y * canvas.width + x] = color;
            }
        }
    }
}

/// Clips a segment to the pixel centers of a `width`×`height` canvas (Liang-Barsky).
/// Returns `None` when nothing of it is visible.
pub fn clip_segment(
    from: &Point2,
    to: &Point2,
    width: usize,
    height: usize,
) -> Option<(Point2, Point2)> {
    if !from.iter().chain(to).all(|v| v.is_finite()) {
        return None;
    }
    let (dx, dy) = (to[0] - from[0], to[1] - from[1]);
    let max_x = width as f64 - 1.0;
    let max_y = height as f64 - 1.0;
    let (mut enter, mut exit) = (0.0_f64, 1.0_f64);
    for (p, q) in [
        (-dx, from[0]),
        (dx, max_x - from[0]),
        (-dy, from[1]),
        (dy, max_y - from[1]),
    ] {
        if p == 0.0 {
            // Parallel to this border
            if q < 0.0 {
                return None;
            }
            continue;
        }
        let t = q / p;
        if p < 0.0 {
            enter = enter.max(t);
        } else {
            exit = exit.min(t);
        }
        if enter > exit {
            return None;
        }
    }
    Some((
        [from[0] + enter * dx, from[1] + enter * dy],
        [from[0] + exit * dx, from[1] + exit * dy],
    ))
}

/// Draws a line between two points using Bresenham's algorithm
pub fn draw_line(canvas: &mut Canvas, from: &Point2, to: &Point2, color: Color) {
    let Some((from, to)) = clip_segment(from, to, canvas.width, canvas.height) else {
        return;
    };
    let (mut x0, mut y0, x1, y1) = (
        from[0].round() as isize,
        from[1].round() as isize,
        to[0].round() as isize,
        to[1].round() as isize,
    );
    let dx = (x1 - x0).abs();
    let dy = -(y1 - y0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy; // error value e_xy

    loop {
        canvas.set(x0, y0, color);

        if x0 == x1 && y0 == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x0 += sx;
        }
        if e2 <= dx {
            err += dx;
            y0 += sy;
        }
    }
}

/// Fills a convex quad as two triangles
pub fn fill_quad(canvas: &mut Canvas, corners: &[Point2; 4], color: Color) {
    let [a, b, c, d] = corners;
    draw_triangle(canvas, a, b, c, color);
    draw_triangle(canvas, a, c, d, color);
}

/// Draws the closed outline of a quad
pub fn outline_quad(canvas: &mut Canvas, corners: &[Point2; 4], color: Color) {
    for k in 0..4 {
        draw_line(canvas, &corners[k], &corners[(k + 1) % 4], color);
    }
}

/// Orders quads back to front. Ties keep their build order.
pub fn depth_sort(quads: &mut [Quad]) {
    quads.sort_by(|a, b| b.depth.total_cmp(&a.depth));
}

/// Painter's algorithm: draws every quad farthest first, filled then outlined
pub fn composite(canvas: &mut Canvas, mut quads: Vec<Quad>) {
    depth_sort(&mut quads);
    for quad in &quads {
        fill_quad(canvas, &quad.corners, quad.color);
        outline_quad(canvas, &quad.corners, OUTLINE);
    }
}
