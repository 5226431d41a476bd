//! BMP codec internals.
//!
//! Use the top-level [`crate::decode_bmp`], [`crate::encode_bmp`], or the
//! request builders.

mod decode;
mod encode;

use crate::error::BmpError;
use crate::image::{BitmapMetadata, Image};
use crate::limits::Limits;
use alloc::vec::Vec;
use enough::Stop;

/// Decode BMP data into an [`Image`].
pub(crate) fn decode(
    data: &[u8],
    limits: Option<&Limits>,
    stop: &dyn Stop,
) -> Result<Image, BmpError> {
    let metadata = decode::parse_bmp_header(data)?;
    log::debug!(
        "BMP {}x{} {}bpp {:?}, pixel data at {}",
        metadata.width,
        metadata.height,
        metadata.bit_depth.bits(),
        metadata.row_order,
        metadata.pixel_data_offset
    );
    if let Some(limits) = limits {
        limits.check(&metadata, data.len())?;
    }
    stop.check()?;
    decode::decode_bmp_pixels(data, &metadata, stop)
}

/// Parse only the header.
pub(crate) fn probe(data: &[u8]) -> Result<BitmapMetadata, BmpError> {
    decode::parse_bmp_header(data)
}

/// Encode an [`Image`] to BMP bytes.
pub(crate) fn encode(
    image: &Image,
    preserve_orientation_flag: bool,
    stop: &dyn Stop,
) -> Result<Vec<u8>, BmpError> {
    encode::encode_bmp(image, preserve_orientation_flag, stop)
}
