//! Drawing primitives over a [`PixelBuffer`].
//!
//! Coordinates are signed so callers can draw shapes that run off the edge;
//! anything outside the buffer is clipped per pixel.

use crate::buffer::PixelBuffer;
use crate::pixel::Pixel;

/// Mutable drawing handle borrowed from a buffer.
pub struct ImageEditor<'a> {
    buffer: &'a mut PixelBuffer,
}

impl<'a> ImageEditor<'a> {
    pub fn new(buffer: &'a mut PixelBuffer) -> Self {
        Self { buffer }
    }

    /// Set column `x` of row `y`. Out-of-bounds coordinates are ignored.
    pub fn set_pixel(&mut self, x: i32, y: i32, color: Pixel) {
        if x < 0 || y < 0 {
            return;
        }
        let (col, row) = (x as usize, y as usize);
        if col < self.buffer.width() as usize && row < self.buffer.height() as usize {
            if let Some(line) = self.buffer.row_mut(row) {
                line[col] = color;
            }
        }
    }

    /// Bresenham line from (`x0`, `y0`) to (`x1`, `y1`), both ends inclusive.
    pub fn draw_line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: Pixel) {
        // i64 keeps 2 * err from overflowing for extreme i32 endpoints.
        let (mut x, mut y) = (i64::from(x0), i64::from(y0));
        let (x1, y1) = (i64::from(x1), i64::from(y1));
        let dx = (x1 - x).abs();
        let dy = -(y1 - y).abs();
        let sx = if x < x1 { 1 } else { -1 };
        let sy = if y < y1 { 1 } else { -1 };
        let mut err = dx + dy;

        loop {
            self.plot(x, y, color);
            if x == x1 && y == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                if x == x1 {
                    break;
                }
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                if y == y1 {
                    break;
                }
                err += dx;
                y += sy;
            }
        }
    }

    /// Both diagonals of the rectangle spanned by the two corners.
    pub fn draw_diagonal_cross(&mut self, x1: i32, y1: i32, x2: i32, y2: i32, color: Pixel) {
        self.draw_line(x1, y1, x2, y2, color);
        self.draw_line(x1, y2, x2, y1, color);
    }

    fn plot(&mut self, x: i64, y: i64, color: Pixel) {
        // Points on a line between two i32 endpoints always fit in i32.
        if let (Ok(x), Ok(y)) = (i32::try_from(x), i32::try_from(y)) {
            self.set_pixel(x, y, color);
        }
    }
}
