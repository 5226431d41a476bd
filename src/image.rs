use alloc::boxed::Box;

use crate::buffer::PixelBuffer;
use crate::editor::ImageEditor;
use crate::pixel::BitDepth;

/// Size of the 14-byte file header plus the 40-byte `BITMAPINFOHEADER`.
pub const MIN_HEADER_SIZE: u32 = 54;

/// Byte offset of the signed height field within the header.
pub(crate) const HEIGHT_FIELD_OFFSET: usize = 22;

/// Row storage order in the file.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RowOrder {
    /// Positive height: the visual last row is stored first.
    BottomUp,
    /// Negative height: rows are stored top to bottom.
    TopDown,
}

/// Geometry decoded from the header.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BitmapMetadata {
    pub width: u32,
    /// Magnitude of the on-disk height; the sign lives in `row_order`.
    pub height: u32,
    pub bit_depth: BitDepth,
    /// Offset from the start of the file to the first pixel byte.
    pub pixel_data_offset: u32,
    pub row_order: RowOrder,
}

impl BitmapMetadata {
    /// Zero bytes appended to every row so its length is a multiple of 4.
    ///
    /// 32-bit rows are already aligned and never pad.
    pub fn row_padding(&self) -> usize {
        row_padding(self.width as usize, self.bit_depth)
    }
}

/// `(4 - (width * bytes_per_pixel) mod 4) mod 4`.
pub(crate) fn row_padding(width: usize, depth: BitDepth) -> usize {
    (4 - (width * depth.bytes_per_pixel()) % 4) % 4
}

/// The file bytes from offset 0 up to the pixel data, kept unparsed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawHeader(Box<[u8]>);

impl RawHeader {
    pub(crate) fn new(bytes: &[u8]) -> Self {
        Self(bytes.into())
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// A decoded bitmap. Only the decoder creates these.
///
/// Pixels may be edited in place; dimensions, metadata and header bytes are
/// fixed for the life of the image.
#[derive(Clone, Debug)]
pub struct Image {
    pixels: PixelBuffer,
    metadata: BitmapMetadata,
    header: RawHeader,
}

impl Image {
    pub(crate) fn new(pixels: PixelBuffer, metadata: BitmapMetadata, header: RawHeader) -> Self {
        debug_assert_eq!(pixels.width(), metadata.width);
        debug_assert_eq!(pixels.height(), metadata.height);
        debug_assert_eq!(header.len(), metadata.pixel_data_offset as usize);
        Self {
            pixels,
            metadata,
            header,
        }
    }

    pub fn width(&self) -> u32 {
        self.metadata.width
    }

    pub fn height(&self) -> u32 {
        self.metadata.height
    }

    pub fn metadata(&self) -> &BitmapMetadata {
        &self.metadata
    }

    pub fn header(&self) -> &RawHeader {
        &self.header
    }

    pub fn pixels(&self) -> &PixelBuffer {
        &self.pixels
    }

    pub fn pixels_mut(&mut self) -> &mut PixelBuffer {
        &mut self.pixels
    }

    /// Drawing access to the pixel buffer.
    pub fn editor(&mut self) -> ImageEditor<'_> {
        ImageEditor::new(&mut self.pixels)
    }
}
