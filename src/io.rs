//! Stream and file entry points.

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;
use std::vec::Vec;

use enough::{Stop, Unstoppable};

use crate::encode::EncodeRequest;
use crate::error::BmpError;
use crate::image::Image;

/// Decode a BMP from a reader.
///
/// The two signature bytes are read and checked before anything else, so a
/// non-BMP stream is rejected after consuming exactly two bytes.
pub fn read_bmp<R: Read>(mut reader: R, stop: impl Stop) -> Result<Image, BmpError> {
    let mut magic = [0u8; 2];
    reader.read_exact(&mut magic)?;
    if magic != *b"BM" {
        return Err(BmpError::UnrecognizedFormat);
    }
    let mut data = Vec::from(magic);
    reader.read_to_end(&mut data)?;
    crate::decode_bmp(&data, stop)
}

/// Encode `image` with default options and write it to `writer`.
pub fn write_bmp<W: Write>(image: &Image, writer: W, stop: impl Stop) -> Result<(), BmpError> {
    EncodeRequest::new().encode_to(image, writer, stop)
}

/// Open and decode the BMP file at `path`.
pub fn read_bmp_file(path: impl AsRef<Path>) -> Result<Image, BmpError> {
    let file = File::open(path.as_ref())?;
    read_bmp(BufReader::new(file), Unstoppable)
}

/// Create (or truncate) `path` and write `image` to it.
pub fn write_bmp_file(path: impl AsRef<Path>, image: &Image) -> Result<(), BmpError> {
    let file = File::create(path.as_ref())?;
    write_bmp(image, BufWriter::new(file), Unstoppable)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn signature_rejected_after_two_bytes() {
        let mut src = Cursor::new(b"PNG and the rest of the file".to_vec());
        assert!(matches!(
            read_bmp(&mut src, Unstoppable),
            Err(BmpError::UnrecognizedFormat)
        ));
        assert_eq!(src.position(), 2);
    }

    #[test]
    fn empty_stream_is_an_io_error() {
        let err = read_bmp(Cursor::new(Vec::new()), Unstoppable).unwrap_err();
        match err {
            BmpError::Io(e) => assert_eq!(e.kind(), std::io::ErrorKind::UnexpectedEof),
            other => panic!("expected Io, got {other:?}"),
        }
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = read_bmp_file("/nonexistent/definitely/missing.bmp").unwrap_err();
        assert!(matches!(err, BmpError::Io(_)));
    }
}
