//! BMP encoder: verbatim header followed by bottom-up padded rows.

use alloc::vec::Vec;
use enough::Stop;

use crate::error::BmpError;
use crate::image::{HEIGHT_FIELD_OFFSET, Image, RowOrder};
use crate::pixel::BitDepth;

/// Serialize `image`.
///
/// The raw header is copied as-is. Rows are always written bottom-up, so for
/// a top-down source the copied (negative) height no longer matches the row
/// order unless `preserve_orientation_flag` is false, in which case the height
/// field is rewritten as positive.
pub(crate) fn encode_bmp(
    image: &Image,
    preserve_orientation_flag: bool,
    stop: &dyn Stop,
) -> Result<Vec<u8>, BmpError> {
    let meta = image.metadata();
    let (width, height) = (meta.width, meta.height);
    let w = width as usize;
    let h = height as usize;
    let pad_bytes = meta.row_padding();
    let row_stride = w
        .checked_mul(meta.bit_depth.bytes_per_pixel())
        .and_then(|r| r.checked_add(pad_bytes))
        .ok_or(BmpError::DimensionsTooLarge { width, height })?;
    let file_size = row_stride
        .checked_mul(h)
        .and_then(|n| n.checked_add(image.header().len()))
        .ok_or(BmpError::DimensionsTooLarge { width, height })?;

    stop.check()?;

    let mut out = Vec::with_capacity(file_size);
    out.extend_from_slice(image.header().as_bytes());

    if meta.row_order == RowOrder::TopDown {
        if preserve_orientation_flag {
            log::warn!(
                "re-encoding top-down {width}x{height} BMP bottom-up with its original negative height field"
            );
        } else {
            let positive = i32::try_from(height)
                .map_err(|_| BmpError::DimensionsTooLarge { width, height })?;
            out[HEIGHT_FIELD_OFFSET..HEIGHT_FIELD_OFFSET + 4]
                .copy_from_slice(&positive.to_le_bytes());
        }
    }

    for (i, row) in image.pixels().rows().rev().enumerate() {
        if i % 16 == 0 {
            stop.check()?;
        }
        match meta.bit_depth {
            BitDepth::Bgr24 => {
                for p in row {
                    out.extend_from_slice(&[p.b, p.g, p.r]);
                }
            }
            BitDepth::Bgra32 => {
                for p in row {
                    out.extend_from_slice(&[p.b, p.g, p.r, p.a]);
                }
            }
        }
        out.extend(core::iter::repeat_n(0u8, pad_bytes));
    }

    log::trace!("encoded {width}x{height} BMP into {} bytes", out.len());
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bmp::decode::{decode_bmp_pixels, parse_bmp_header};
    use crate::pixel::Pixel;
    use alloc::vec;
    use enough::Unstoppable;

    fn top_down_2x2() -> Vec<u8> {
        let mut data = vec![0u8; 54];
        data[0] = b'B';
        data[1] = b'M';
        data[10..14].copy_from_slice(&54u32.to_le_bytes());
        data[14..18].copy_from_slice(&40u32.to_le_bytes());
        data[18..22].copy_from_slice(&2i32.to_le_bytes());
        data[22..26].copy_from_slice(&(-2i32).to_le_bytes());
        data[28..30].copy_from_slice(&24u16.to_le_bytes());
        // top row: red, green; bottom row: blue, white
        data.extend_from_slice(&[0, 0, 255, 0, 255, 0, 0, 0]);
        data.extend_from_slice(&[255, 0, 0, 255, 255, 255, 0, 0]);
        data
    }

    fn decode(data: &[u8]) -> Image {
        let meta = parse_bmp_header(data).unwrap();
        decode_bmp_pixels(data, &meta, &Unstoppable).unwrap()
    }

    #[test]
    fn rows_are_emitted_bottom_up() {
        let img = decode(&top_down_2x2());
        let out = encode_bmp(&img, true, &Unstoppable).unwrap();
        assert_eq!(out.len(), 54 + 2 * 8);
        // first file row is the visual bottom: blue, white
        assert_eq!(&out[54..62], &[255, 0, 0, 255, 255, 255, 0, 0]);
        assert_eq!(&out[62..70], &[0, 0, 255, 0, 255, 0, 0, 0]);
    }

    #[test]
    fn orientation_flag_kept_by_default() {
        let data = top_down_2x2();
        let img = decode(&data);
        let out = encode_bmp(&img, true, &Unstoppable).unwrap();
        assert_eq!(&out[..54], &data[..54]);
        assert_eq!(&out[22..26], &(-2i32).to_le_bytes());
    }

    #[test]
    fn orientation_flag_rewritten_when_not_preserved() {
        let data = top_down_2x2();
        let img = decode(&data);
        let out = encode_bmp(&img, false, &Unstoppable).unwrap();
        assert_eq!(&out[22..26], &2i32.to_le_bytes());
        assert_eq!(&out[..22], &data[..22]);
        assert_eq!(&out[26..54], &data[26..54]);

        // Header and rows now agree, so the visual content is unchanged.
        let again = decode(&out);
        assert_eq!(again.pixels(), img.pixels());
        assert_eq!(again.pixels().get(0, 0).unwrap(), Pixel::rgb(255, 0, 0));
    }
}
