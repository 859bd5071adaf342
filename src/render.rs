//! Pixel buffer and triangle rasterization
//!
//! All drawing is best-effort: writes outside the buffer are dropped by
//! `set_pixel`, degenerate triangles paint nothing, and nothing here
//! panics or allocates per pixel. Triangles are painted in submission
//! order (painter's algorithm, no z-buffer), so draw order is part of the
//! caller-visible contract.

#![allow(clippy::too_many_arguments)]

use crate::math::Vec3;
use crate::types::{Color, Triangle3D};

/// Signed area below which a triangle is treated as degenerate and skipped.
const DEGENERATE_AREA: f32 = 1e-3;

/// Signed edge function: positive when `(ax, ay)` is on one side of the
/// directed edge through `(bx, by)` and `(cx, cy)`, negative on the other.
/// Doubles as twice the signed triangle area. Computed in f32 so vertices
/// far outside the buffer cannot overflow integer arithmetic.
fn edge(ax: i32, ay: i32, bx: i32, by: i32, cx: i32, cy: i32) -> f32 {
    (ax as f32 - cx as f32) * (by as f32 - cy as f32)
        - (bx as f32 - cx as f32) * (ay as f32 - cy as f32)
}

fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + t * (b - a)
}

/// Scale the RGB channels of a packed ARGB color by `intensity`, leaving
/// alpha untouched. Channels truncate to 8 bits.
fn apply_light(color: u32, intensity: f32) -> u32 {
    let a = (color >> 24) & 0xFF;
    let r = (((color >> 16) & 0xFF) as f32 * intensity) as u8;
    let g = (((color >> 8) & 0xFF) as f32 * intensity) as u8;
    let b = ((color & 0xFF) as f32 * intensity) as u8;
    (a << 24) | ((r as u32) << 16) | ((g as u32) << 8) | b as u32
}

/// Owned width x height grid of packed ARGB pixels, row-major, no padding.
///
/// Origin is top-left, x grows right, y grows down. The presentation layer
/// reads the raw pixel slice via [`PixelBuffer::data`] once per frame.
pub struct PixelBuffer {
    pixels: Vec<u32>,
    pub width: usize,
    pub height: usize,
}

impl PixelBuffer {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            pixels: vec![0; width * height],
            width,
            height,
        }
    }

    /// Reallocate for a new resolution. Old contents are discarded, not
    /// preserved. Must not race an in-flight render pass; the whole
    /// pipeline is single-threaded by contract.
    pub fn resize(&mut self, width: usize, height: usize) {
        self.width = width;
        self.height = height;
        self.pixels = vec![0; width * height];
    }

    /// Read-only view of the packed pixel array for presentation.
    pub fn data(&self) -> &[u32] {
        &self.pixels
    }

    pub fn clear(&mut self, color: u32) {
        self.pixels.fill(color);
    }

    /// Write a pixel. Out-of-bounds coordinates are silently dropped;
    /// every draw routine in this module relies on that instead of
    /// clipping up front.
    pub fn set_pixel(&mut self, x: i32, y: i32, color: u32) {
        if x >= 0 && (x as usize) < self.width && y >= 0 && (y as usize) < self.height {
            self.pixels[y as usize * self.width + x as usize] = color;
        }
    }

    /// Read a pixel, or 0 outside the buffer.
    pub fn get_pixel(&self, x: i32, y: i32) -> u32 {
        if x >= 0 && (x as usize) < self.width && y >= 0 && (y as usize) < self.height {
            self.pixels[y as usize * self.width + x as usize]
        } else {
            0
        }
    }

    /// Bresenham line, no anti-aliasing.
    pub fn draw_line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: u32) {
        let dx = (x1 - x0).abs();
        let dy = (y1 - y0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let sy = if y0 < y1 { 1 } else { -1 };
        let mut err = dx - dy;
        let mut x = x0;
        let mut y = y0;

        loop {
            self.set_pixel(x, y, color);

            if x == x1 && y == y1 {
                break;
            }

            let e2 = 2 * err;
            if e2 > -dy {
                err -= dy;
                x += sx;
            }
            if e2 < dx {
                err += dx;
                y += sy;
            }
        }
    }

    /// Triangle outline: three Bresenham edges.
    pub fn draw_triangle(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, x2: i32, y2: i32, color: u32) {
        self.draw_line(x0, y0, x1, y1, color);
        self.draw_line(x1, y1, x2, y2, color);
        self.draw_line(x2, y2, x0, y0, color);
    }

    /// Unclipped rectangle fill; `set_pixel` drops anything out of bounds.
    pub fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: u32) {
        for py in y..y + h {
            for px in x..x + w {
                self.set_pixel(px, py, color);
            }
        }
    }

    /// Flat-color scanline fill.
    pub fn fill_triangle(
        &mut self,
        mut x0: i32,
        mut y0: i32,
        mut x1: i32,
        mut y1: i32,
        mut x2: i32,
        mut y2: i32,
        color: u32,
    ) {
        // Sort vertices top to bottom
        if y0 > y1 {
            std::mem::swap(&mut x0, &mut x1);
            std::mem::swap(&mut y0, &mut y1);
        }
        if y0 > y2 {
            std::mem::swap(&mut x0, &mut x2);
            std::mem::swap(&mut y0, &mut y2);
        }
        if y1 > y2 {
            std::mem::swap(&mut x1, &mut x2);
            std::mem::swap(&mut y1, &mut y2);
        }

        // All vertices on one horizontal line
        if y0 == y2 {
            return;
        }

        for y in y0..=y2 {
            // Long edge v0 -> v2
            let x_left = lerp(x0 as f32, x2 as f32, (y - y0) as f32 / (y2 - y0) as f32);

            // Short edge: v0 -> v1 in the upper half, v1 -> v2 below
            let x_right = if y <= y1 {
                if y1 != y0 {
                    lerp(x0 as f32, x1 as f32, (y - y0) as f32 / (y1 - y0) as f32)
                } else {
                    x0 as f32
                }
            } else if y2 != y1 {
                lerp(x1 as f32, x2 as f32, (y - y1) as f32 / (y2 - y1) as f32)
            } else {
                x1 as f32
            };

            let (mut x_start, mut x_end) = (x_left as i32, x_right as i32);
            if x_start > x_end {
                std::mem::swap(&mut x_start, &mut x_end);
            }
            for x in x_start..=x_end {
                self.set_pixel(x, y, color);
            }
        }
    }

    /// Flat-color fill via the edge-function test over the bounding box.
    /// The reference rasterizer: handles every orientation uniformly.
    pub fn fill_triangle_barycentric(
        &mut self,
        x0: i32,
        y0: i32,
        x1: i32,
        y1: i32,
        x2: i32,
        y2: i32,
        color: u32,
    ) {
        let min_x = x0.min(x1).min(x2).max(0);
        let max_x = x0.max(x1).max(x2).min(self.width as i32 - 1);
        let min_y = y0.min(y1).min(y2).max(0);
        let max_y = y0.max(y1).max(y2).min(self.height as i32 - 1);

        let area = edge(x0, y0, x1, y1, x2, y2);
        if area.abs() < DEGENERATE_AREA {
            return;
        }

        for y in min_y..=max_y {
            for x in min_x..=max_x {
                let w0 = edge(x, y, x1, y1, x2, y2) / area;
                let w1 = edge(x0, y0, x, y, x2, y2) / area;
                let w2 = edge(x0, y0, x1, y1, x, y) / area;
                if w0 >= 0.0 && w1 >= 0.0 && w2 >= 0.0 {
                    self.set_pixel(x, y, color);
                }
            }
        }
    }

    /// Optional barycentric fill with the outline drawn on top.
    pub fn draw_triangle_wireframe(
        &mut self,
        x0: i32,
        y0: i32,
        x1: i32,
        y1: i32,
        x2: i32,
        y2: i32,
        wire_color: u32,
        fill_color: u32,
        filled: bool,
    ) {
        if filled {
            self.fill_triangle_barycentric(x0, y0, x1, y1, x2, y2, fill_color);
        }
        self.draw_triangle(x0, y0, x1, y1, x2, y2, wire_color);
    }

    /// Gradient fill: barycentric weights interpolate one color per vertex.
    pub fn fill_triangle_gradient(
        &mut self,
        x0: i32,
        y0: i32,
        color0: u32,
        x1: i32,
        y1: i32,
        color1: u32,
        x2: i32,
        y2: i32,
        color2: u32,
    ) {
        let min_x = x0.min(x1).min(x2).max(0);
        let max_x = x0.max(x1).max(x2).min(self.width as i32 - 1);
        let min_y = y0.min(y1).min(y2).max(0);
        let max_y = y0.max(y1).max(y2).min(self.height as i32 - 1);

        let area = edge(x0, y0, x1, y1, x2, y2);
        if area.abs() < DEGENERATE_AREA {
            return;
        }

        let c0 = Color::from_argb(color0);
        let c1 = Color::from_argb(color1);
        let c2 = Color::from_argb(color2);

        for y in min_y..=max_y {
            for x in min_x..=max_x {
                let w0 = edge(x, y, x1, y1, x2, y2) / area;
                let w1 = edge(x0, y0, x, y, x2, y2) / area;
                let w2 = edge(x0, y0, x1, y1, x, y) / area;
                if w0 >= 0.0 && w1 >= 0.0 && w2 >= 0.0 {
                    let color = c0 * w0 + c1 * w1 + c2 * w2;
                    self.set_pixel(x, y, color.to_argb());
                }
            }
        }
    }

    /// Gradient fill via scanline spans: the fast path for large triangles.
    /// Edge colors interpolate down the two active edges, then across each
    /// span. Agrees with [`PixelBuffer::fill_triangle_gradient`] up to
    /// one edge pixel and per-channel rounding.
    pub fn fill_triangle_gradient_scanline(
        &mut self,
        mut x0: i32,
        mut y0: i32,
        color0: u32,
        mut x1: i32,
        mut y1: i32,
        color1: u32,
        mut x2: i32,
        mut y2: i32,
        color2: u32,
    ) {
        let mut c0 = Color::from_argb(color0);
        let mut c1 = Color::from_argb(color1);
        let mut c2 = Color::from_argb(color2);

        // Sort by y, colors travel with their vertices
        if y0 > y1 {
            std::mem::swap(&mut x0, &mut x1);
            std::mem::swap(&mut y0, &mut y1);
            std::mem::swap(&mut c0, &mut c1);
        }
        if y0 > y2 {
            std::mem::swap(&mut x0, &mut x2);
            std::mem::swap(&mut y0, &mut y2);
            std::mem::swap(&mut c0, &mut c2);
        }
        if y1 > y2 {
            std::mem::swap(&mut x1, &mut x2);
            std::mem::swap(&mut y1, &mut y2);
            std::mem::swap(&mut c1, &mut c2);
        }

        if y0 == y2 {
            return;
        }

        for y in y0..=y2 {
            let t_main = (y - y0) as f32 / (y2 - y0) as f32;
            let mut x_left = lerp(x0 as f32, x2 as f32, t_main);
            let mut color_left = c0.lerp(c2, t_main);

            let (mut x_right, mut color_right) = if y <= y1 {
                if y1 != y0 {
                    let t = (y - y0) as f32 / (y1 - y0) as f32;
                    (lerp(x0 as f32, x1 as f32, t), c0.lerp(c1, t))
                } else {
                    (x0 as f32, c0)
                }
            } else if y2 != y1 {
                let t = (y - y1) as f32 / (y2 - y1) as f32;
                (lerp(x1 as f32, x2 as f32, t), c1.lerp(c2, t))
            } else {
                (x1 as f32, c1)
            };

            if x_left > x_right {
                std::mem::swap(&mut x_left, &mut x_right);
                std::mem::swap(&mut color_left, &mut color_right);
            }

            let x_start = x_left as i32;
            let x_end = x_right as i32;

            for x in x_start..=x_end {
                if x_end != x_start {
                    let t = (x - x_start) as f32 / (x_end - x_start) as f32;
                    self.set_pixel(x, y, color_left.lerp(color_right, t).to_argb());
                } else {
                    self.set_pixel(x, y, color_left.to_argb());
                }
            }
        }
    }

    /// Gradient fill with fixed red/green/blue vertex colors.
    pub fn fill_triangle_rainbow(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, x2: i32, y2: i32) {
        self.fill_triangle_gradient(
            x0, y0, 0xFFFF0000, x1, y1, 0xFF00FF00, x2, y2, 0xFF0000FF,
        );
    }

    /// Map a point in normalized device coordinates to screen pixels.
    /// The y axis flips because screen rows grow downward. Assumes the
    /// point already went through projection and the perspective divide.
    pub fn project_to_screen(&self, point: Vec3) -> (i32, i32) {
        let x = ((point.x + 1.0) * 0.5 * self.width as f32) as i32;
        let y = ((1.0 - point.y) * 0.5 * self.height as f32) as i32;
        (x, y)
    }

    /// Draw a lit 3D triangle: project, shade with a fixed directional
    /// light (0.2 ambient floor), gradient-fill.
    ///
    /// No back-face culling happens here. Callers check
    /// `triangle.normal().z > 0` first and skip the call otherwise;
    /// omitting the check renders the face double-sided.
    pub fn render_triangle(&mut self, triangle: &Triangle3D) {
        let (px0, py0) = self.project_to_screen(triangle.vertices[0]);
        let (px1, py1) = self.project_to_screen(triangle.vertices[1]);
        let (px2, py2) = self.project_to_screen(triangle.vertices[2]);

        let light_dir = Vec3::new(0.3, -0.5, -0.7).normalize();
        let normal = triangle.normal();
        let intensity = (-normal.dot(light_dir)).max(0.2);

        self.fill_triangle_gradient(
            px0,
            py0,
            apply_light(triangle.colors[0], intensity),
            px1,
            py1,
            apply_light(triangle.colors[1], intensity),
            px2,
            py2,
            apply_light(triangle.colors[2], intensity),
        );
    }
}
