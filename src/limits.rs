use crate::error::BmpError;
use crate::image::BitmapMetadata;
use crate::pixel::Pixel;

/// Resource limits for decoding.
///
/// All fields default to `None` (no limit). Everything is checked after the
/// header is parsed and before the pixel buffer is allocated.
#[derive(Clone, Debug, Default)]
pub struct Limits {
    pub max_width: Option<u64>,
    pub max_height: Option<u64>,
    /// Maximum pixel count (width * height).
    pub max_pixels: Option<u64>,
    /// Maximum size of the decoded [`crate::PixelBuffer`] in bytes.
    pub max_memory_bytes: Option<u64>,
    /// Maximum length of the encoded input, header included.
    pub max_input_bytes: Option<u64>,
}

fn exceeds(what: &str, value: u64, limit: Option<u64>) -> Result<(), BmpError> {
    match limit {
        Some(max) if value > max => Err(BmpError::LimitExceeded(alloc::format!(
            "{what} {value} exceeds limit {max}"
        ))),
        _ => Ok(()),
    }
}

impl Limits {
    /// Check a parsed header and the input length against every limit.
    pub(crate) fn check(&self, meta: &BitmapMetadata, input_len: usize) -> Result<(), BmpError> {
        let (width, height) = (u64::from(meta.width), u64::from(meta.height));
        exceeds("input length", input_len as u64, self.max_input_bytes)?;
        exceeds("width", width, self.max_width)?;
        exceeds("height", height, self.max_height)?;

        let pixels = width * height;
        exceeds("pixel count", pixels, self.max_pixels)?;
        let bytes = pixels.saturating_mul(core::mem::size_of::<Pixel>() as u64);
        exceeds("buffer size", bytes, self.max_memory_bytes)
    }
}
