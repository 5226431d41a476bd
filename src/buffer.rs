use alloc::vec;
use alloc::vec::Vec;

use crate::error::BmpError;
use crate::pixel::Pixel;

/// Fixed-size grid of pixels, row-major, row 0 at the visual top.
///
/// The dimensions are set at construction and never change.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    pixels: Vec<Pixel>,
}

impl PixelBuffer {
    /// Allocate a `width` x `height` buffer of zeroed pixels.
    pub fn new(width: u32, height: u32) -> Result<Self, BmpError> {
        Self::filled(width, height, Pixel::default())
    }

    /// Allocate a `width` x `height` buffer with every pixel set to `fill`.
    pub fn filled(width: u32, height: u32, fill: Pixel) -> Result<Self, BmpError> {
        let len = (width as usize)
            .checked_mul(height as usize)
            .ok_or(BmpError::DimensionsTooLarge { width, height })?;
        Ok(Self {
            width,
            height,
            pixels: vec![fill; len],
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    fn index(&self, row: usize, col: usize) -> Result<usize, BmpError> {
        if row >= self.height as usize || col >= self.width as usize {
            return Err(BmpError::OutOfBounds {
                row,
                col,
                width: self.width,
                height: self.height,
            });
        }
        Ok(row * self.width as usize + col)
    }

    /// Read the pixel at (`row`, `col`).
    pub fn get(&self, row: usize, col: usize) -> Result<Pixel, BmpError> {
        let idx = self.index(row, col)?;
        Ok(self.pixels[idx])
    }

    /// Overwrite the pixel at (`row`, `col`).
    pub fn set(&mut self, row: usize, col: usize, pixel: Pixel) -> Result<(), BmpError> {
        let idx = self.index(row, col)?;
        self.pixels[idx] = pixel;
        Ok(())
    }

    /// One logical row, or `None` past the bottom.
    pub fn row(&self, row: usize) -> Option<&[Pixel]> {
        if row >= self.height as usize {
            return None;
        }
        let w = self.width as usize;
        Some(&self.pixels[row * w..(row + 1) * w])
    }

    pub(crate) fn row_mut(&mut self, row: usize) -> Option<&mut [Pixel]> {
        if row >= self.height as usize {
            return None;
        }
        let w = self.width as usize;
        Some(&mut self.pixels[row * w..(row + 1) * w])
    }

    /// Rows from top to bottom.
    pub fn rows(&self) -> impl DoubleEndedIterator<Item = &[Pixel]> + ExactSizeIterator {
        // chunks_exact(0) panics; an empty buffer has no rows either way.
        let w = (self.width as usize).max(1);
        self.pixels.chunks_exact(w)
    }

    pub fn as_slice(&self) -> &[Pixel] {
        &self.pixels
    }

    /// Zero-copy view as an [`imgref::ImgRef`].
    #[cfg(feature = "imgref")]
    pub fn as_imgref(&self) -> imgref::ImgRef<'_, Pixel> {
        imgref::ImgRef::new(&self.pixels, self.width as usize, self.height as usize)
    }

    /// Mutable view as an [`imgref::ImgRefMut`]. The dimensions stay fixed.
    #[cfg(feature = "imgref")]
    pub fn as_imgref_mut(&mut self) -> imgref::ImgRefMut<'_, Pixel> {
        imgref::ImgRefMut::new(&mut self.pixels, self.width as usize, self.height as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_and_set_in_range() {
        let mut buf = PixelBuffer::new(3, 2).unwrap();
        let red = Pixel::rgb(255, 0, 0);
        buf.set(1, 2, red).unwrap();
        assert_eq!(buf.get(1, 2).unwrap(), red);
        assert_eq!(buf.get(0, 0).unwrap(), Pixel::default());
        assert_eq!(buf.row(1).unwrap()[2], red);
    }

    #[test]
    fn out_of_range_is_an_error() {
        let mut buf = PixelBuffer::new(3, 2).unwrap();
        match buf.get(2, 0) {
            Err(BmpError::OutOfBounds {
                row: 2,
                col: 0,
                width: 3,
                height: 2,
            }) => {}
            other => panic!("expected OutOfBounds, got {other:?}"),
        }
        assert!(buf.set(0, 3, Pixel::WHITE).is_err());
        assert!(buf.as_slice().iter().all(|p| *p == Pixel::default()));
    }

    #[test]
    fn rows_are_top_to_bottom() {
        let mut buf = PixelBuffer::new(2, 3).unwrap();
        for r in 0..3 {
            buf.set(r, 0, Pixel::rgb(r as u8, 0, 0)).unwrap();
        }
        let firsts: Vec<u8> = buf.rows().map(|row| row[0].r).collect();
        assert_eq!(firsts, [0, 1, 2]);
        assert_eq!(buf.rows().len(), 3);
        assert!(buf.row(3).is_none());
    }

    #[cfg(feature = "imgref")]
    #[test]
    fn imgref_views_share_pixels() {
        let mut buf = PixelBuffer::filled(3, 2, Pixel::WHITE).unwrap();
        buf.set(0, 1, Pixel::BLACK).unwrap();

        let view = buf.as_imgref();
        assert_eq!((view.width(), view.height()), (3, 2));
        assert_eq!(view.rows().next().unwrap(), buf.row(0).unwrap());

        let mut view = buf.as_imgref_mut();
        view.rows_mut().nth(1).unwrap()[2] = Pixel::rgb(9, 9, 9);
        assert_eq!(buf.get(1, 2).unwrap(), Pixel::rgb(9, 9, 9));
    }
}
