use alloc::vec::Vec;
use enough::Stop;

use crate::error::BmpError;
use crate::image::Image;

/// Builder for serializing an [`Image`] back to BMP.
///
/// The header captured at decode time is written verbatim and rows are always
/// emitted bottom-up.
#[derive(Clone, Copy, Debug)]
pub struct EncodeRequest {
    preserve_original_orientation_flag: bool,
}

impl Default for EncodeRequest {
    fn default() -> Self {
        Self {
            preserve_original_orientation_flag: true,
        }
    }
}

impl EncodeRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether to keep a top-down source's negative height field as-is.
    ///
    /// Defaults to `true`, which leaves the header claiming top-down order
    /// while the rows are written bottom-up. Set to `false` to rewrite the
    /// height as positive so the header matches the emitted rows.
    pub fn with_original_orientation_flag(mut self, preserve: bool) -> Self {
        self.preserve_original_orientation_flag = preserve;
        self
    }

    pub fn encode(&self, image: &Image, stop: impl Stop) -> Result<Vec<u8>, BmpError> {
        crate::bmp::encode(image, self.preserve_original_orientation_flag, &stop)
    }

    /// Encode and write the whole file to `sink`.
    ///
    /// Fails only if writing fails; the sink may hold a partial file then.
    #[cfg(feature = "std")]
    pub fn encode_to<W: std::io::Write>(
        &self,
        image: &Image,
        mut sink: W,
        stop: impl Stop,
    ) -> Result<(), BmpError> {
        let bytes = self.encode(image, stop)?;
        sink.write_all(&bytes)?;
        sink.flush()?;
        Ok(())
    }
}
