use enough::Stop;

use crate::error::BmpError;
use crate::image::{BitmapMetadata, Image};
use crate::limits::Limits;

/// Builder for decoding a BMP held in memory.
///
/// ```no_run
/// use bmpedit::{DecodeRequest, Limits, Unstoppable};
///
/// let data: &[u8] = &[]; // your BMP bytes
/// let limits = Limits { max_pixels: Some(1 << 24), ..Default::default() };
/// let image = DecodeRequest::new(data).with_limits(&limits).decode(Unstoppable)?;
/// println!("{}x{}", image.width(), image.height());
/// # Ok::<(), bmpedit::BmpError>(())
/// ```
#[derive(Clone, Debug)]
pub struct DecodeRequest<'a> {
    data: &'a [u8],
    limits: Option<&'a Limits>,
}

impl<'a> DecodeRequest<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, limits: None }
    }

    /// Reject images whose dimensions or buffer size exceed `limits`.
    pub fn with_limits(mut self, limits: &'a Limits) -> Self {
        self.limits = Some(limits);
        self
    }

    pub fn decode(self, stop: impl Stop) -> Result<Image, BmpError> {
        crate::bmp::decode(self.data, self.limits, &stop)
    }
}

impl BitmapMetadata {
    /// Read the header fields without decoding any pixels.
    pub fn from_bytes(data: &[u8]) -> Result<Self, BmpError> {
        crate::bmp::probe(data)
    }
}
