use alloc::string::String;
use enough::StopReason;

/// Errors from BMP decoding, encoding, and pixel access.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum BmpError {
    #[cfg(feature = "std")]
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("unrecognized format magic bytes")]
    UnrecognizedFormat,

    #[error("unsupported bits per pixel: {0} (expected 24 or 32)")]
    UnsupportedBitDepth(u16),

    #[error("invalid header: {0}")]
    InvalidHeader(String),

    #[error("pixel ({row}, {col}) outside {width}x{height} buffer")]
    OutOfBounds {
        row: usize,
        col: usize,
        width: u32,
        height: u32,
    },

    #[error("dimensions too large: {width}x{height}")]
    DimensionsTooLarge { width: u32, height: u32 },

    #[error("limit exceeded: {0}")]
    LimitExceeded(String),

    #[error("unexpected end of input")]
    UnexpectedEof,

    #[error("operation cancelled")]
    Cancelled(StopReason),
}

impl From<StopReason> for BmpError {
    fn from(r: StopReason) -> Self {
        BmpError::Cancelled(r)
    }
}
