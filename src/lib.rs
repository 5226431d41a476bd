//! # bmpedit
//!
//! Lossless Windows Bitmap (BMP) codec for uncompressed 24-bit and 32-bit
//! images, plus a small set of drawing primitives.
//!
//! ## Round-trip model
//!
//! Decoding parses only what is needed to find and read the pixel array
//! (signature, pixel data offset, width, signed height, bits per pixel). All
//! bytes before the pixel data are kept verbatim in a [`RawHeader`] and written
//! back unchanged on encode, so resolution, compression and palette-size fields
//! survive without being modelled. Pixel rows are normalized on decode so that
//! row 0 is always the visual top; the encoder always writes rows bottom-up.
//!
//! ## Supported Formats
//!
//! - 24-bit BGR and 32-bit BGRA, uncompressed, any row order
//!
//! ## Non-Goals
//!
//! - RLE compression, bitfields, palettes (1/4/8-bit), 16-bit
//! - ICC profiles and header versions beyond `BITMAPINFOHEADER`
//! - Writing BMPs from scratch (an [`Image`] always comes from a decode)
//!
//! ## Usage
//!
//! ```no_run
//! use bmpedit::{DecodeRequest, EncodeRequest, Pixel, Unstoppable};
//!
//! let data: &[u8] = &[]; // your BMP bytes
//!
//! let mut image = DecodeRequest::new(data).decode(Unstoppable)?;
//! image.editor().draw_line(0, 0, 10, 10, Pixel::BLACK);
//! print!("{}", bmpedit::ascii_preview(image.pixels()));
//!
//! let encoded = EncodeRequest::new().encode(&image, Unstoppable)?;
//! # Ok::<(), bmpedit::BmpError>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

mod bmp;
mod buffer;
mod decode;
mod editor;
mod encode;
mod error;
mod image;
mod limits;
mod pixel;
mod preview;

#[cfg(feature = "std")]
mod io;

use alloc::vec::Vec;

// Re-exports
pub use buffer::PixelBuffer;
pub use decode::DecodeRequest;
pub use editor::ImageEditor;
pub use encode::EncodeRequest;
pub use enough::{Stop, StopReason, Unstoppable};
pub use error::BmpError;
pub use image::{BitmapMetadata, Image, MIN_HEADER_SIZE, RawHeader, RowOrder};
pub use limits::Limits;
pub use pixel::{BitDepth, Pixel};
pub use preview::ascii_preview;

#[cfg(feature = "std")]
pub use io::{read_bmp, read_bmp_file, write_bmp, write_bmp_file};

/// Decode BMP bytes with no resource limits.
pub fn decode_bmp(data: &[u8], stop: impl Stop) -> Result<Image, BmpError> {
    DecodeRequest::new(data).decode(stop)
}

/// Encode with default options (original orientation flag preserved).
pub fn encode_bmp(image: &Image, stop: impl Stop) -> Result<Vec<u8>, BmpError> {
    EncodeRequest::new().encode(image, stop)
}
