//! BMP decoder for uncompressed 24-bit and 32-bit pixel data.
//!
//! Only the fields needed to locate and interpret the pixel array are parsed.
//! Everything before the pixel data is kept verbatim in a [`RawHeader`].

use enough::Stop;

use crate::buffer::PixelBuffer;
use crate::error::BmpError;
use crate::image::{BitmapMetadata, Image, MIN_HEADER_SIZE, RawHeader, RowOrder};
use crate::pixel::{BitDepth, Pixel};

// ── Cursor for reading from &[u8] ───────────────────────────────────

struct Cursor<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    fn skip(&mut self, n: usize) -> Result<(), BmpError> {
        let new_pos = self.pos.checked_add(n).ok_or(BmpError::UnexpectedEof)?;
        if new_pos > self.data.len() {
            return Err(BmpError::UnexpectedEof);
        }
        self.pos = new_pos;
        Ok(())
    }

    fn read_u8(&mut self) -> Result<u8, BmpError> {
        let b = *self.data.get(self.pos).ok_or(BmpError::UnexpectedEof)?;
        self.pos += 1;
        Ok(b)
    }

    fn read_fixed_bytes<const N: usize>(&mut self) -> Result<[u8; N], BmpError> {
        let end = self.pos.checked_add(N).ok_or(BmpError::UnexpectedEof)?;
        let src = self
            .data
            .get(self.pos..end)
            .ok_or(BmpError::UnexpectedEof)?;
        let mut buf = [0u8; N];
        buf.copy_from_slice(src);
        self.pos = end;
        Ok(buf)
    }

    fn get_u16_le(&mut self) -> Result<u16, BmpError> {
        self.read_fixed_bytes().map(u16::from_le_bytes)
    }

    fn get_u32_le(&mut self) -> Result<u32, BmpError> {
        self.read_fixed_bytes().map(u32::from_le_bytes)
    }

    fn get_i32_le(&mut self) -> Result<i32, BmpError> {
        self.read_fixed_bytes().map(i32::from_le_bytes)
    }
}

// ── Header ──────────────────────────────────────────────────────────

/// Parse the fixed-position header fields.
///
/// Fails with [`BmpError::UnrecognizedFormat`] on a bad signature before any
/// other field is read.
pub(crate) fn parse_bmp_header(data: &[u8]) -> Result<BitmapMetadata, BmpError> {
    let mut bytes = Cursor::new(data);

    if bytes.read_u8()? != b'B' || bytes.read_u8()? != b'M' {
        return Err(BmpError::UnrecognizedFormat);
    }

    // File size (4) + reserved (4)
    bytes.skip(8)?;
    let pixel_data_offset = bytes.get_u32_le()?;
    // DIB header size
    bytes.skip(4)?;
    let width = bytes.get_i32_le()?;
    let height = bytes.get_i32_le()?;
    // Color planes
    bytes.skip(2)?;
    let bits = bytes.get_u16_le()?;

    let bit_depth = BitDepth::from_bits(bits).ok_or(BmpError::UnsupportedBitDepth(bits))?;

    let row_order = if height < 0 {
        RowOrder::TopDown
    } else {
        RowOrder::BottomUp
    };

    if width <= 0 {
        return Err(BmpError::InvalidHeader(alloc::format!(
            "BMP width must be positive, got {width}"
        )));
    }
    if height == 0 {
        return Err(BmpError::InvalidHeader("BMP height is zero".into()));
    }
    let width = width as u32;
    let height = height.unsigned_abs();
    // i32::MIN has no positive i32 counterpart to write back.
    if height > i32::MAX as u32 {
        return Err(BmpError::DimensionsTooLarge { width, height });
    }

    if pixel_data_offset < MIN_HEADER_SIZE {
        return Err(BmpError::InvalidHeader(alloc::format!(
            "pixel data offset {pixel_data_offset} is inside the {MIN_HEADER_SIZE}-byte header"
        )));
    }
    if pixel_data_offset as usize > data.len() {
        return Err(BmpError::InvalidHeader(alloc::format!(
            "pixel data offset {pixel_data_offset} is past end of file ({} bytes)",
            data.len()
        )));
    }

    Ok(BitmapMetadata {
        width,
        height,
        bit_depth,
        pixel_data_offset,
        row_order,
    })
}

// ── Pixels ──────────────────────────────────────────────────────────

/// Decode the pixel array described by `meta` and capture the raw header.
///
/// Logical row 0 of the result is the visual top whatever the file order.
pub(crate) fn decode_bmp_pixels(
    data: &[u8],
    meta: &BitmapMetadata,
    stop: &dyn Stop,
) -> Result<Image, BmpError> {
    let (width, height) = (meta.width, meta.height);
    let w = width as usize;
    let h = height as usize;
    let bpp = meta.bit_depth.bytes_per_pixel();
    let row_bytes = w
        .checked_mul(bpp)
        .ok_or(BmpError::DimensionsTooLarge { width, height })?;
    let stride = row_bytes + meta.row_padding();

    // The last row's padding may be missing without losing any pixels.
    let needed = stride
        .checked_mul(h - 1)
        .and_then(|n| n.checked_add(row_bytes))
        .ok_or(BmpError::DimensionsTooLarge { width, height })?;
    let offset = meta.pixel_data_offset as usize;
    let pixel_data = &data[offset..];
    if pixel_data.len() < needed {
        return Err(BmpError::UnexpectedEof);
    }

    let mut pixels = PixelBuffer::new(width, height)?;

    for file_row in 0..h {
        if file_row % 16 == 0 {
            stop.check()?;
        }
        let start = file_row * stride;
        let src = pixel_data
            .get(start..start + row_bytes)
            .ok_or(BmpError::UnexpectedEof)?;
        let logical_row = match meta.row_order {
            RowOrder::BottomUp => h - 1 - file_row,
            RowOrder::TopDown => file_row,
        };
        let dst = pixels.row_mut(logical_row).ok_or(BmpError::OutOfBounds {
            row: logical_row,
            col: 0,
            width,
            height,
        })?;

        match meta.bit_depth {
            BitDepth::Bgr24 => {
                for (p, s) in dst.iter_mut().zip(src.chunks_exact(3)) {
                    *p = Pixel {
                        b: s[0],
                        g: s[1],
                        r: s[2],
                        a: 0,
                    };
                }
            }
            BitDepth::Bgra32 => {
                for (p, s) in dst.iter_mut().zip(src.chunks_exact(4)) {
                    *p = Pixel {
                        b: s[0],
                        g: s[1],
                        r: s[2],
                        a: s[3],
                    };
                }
            }
        }
    }

    let header = RawHeader::new(&data[..offset]);
    Ok(Image::new(pixels, *meta, header))
}
