//! Shared fixtures for integration tests.

use bmpedit::Pixel;

/// Build a BMP with a 54-byte header from top-to-bottom rows.
pub fn build_bmp(rows: &[Vec<Pixel>], bits: u16, top_down: bool) -> Vec<u8> {
    let h = rows.len();
    let w = rows[0].len();
    let bpp = usize::from(bits / 8);
    let pad = (4 - (w * bpp) % 4) % 4;
    let file_size = 54 + (w * bpp + pad) * h;

    let mut out = Vec::with_capacity(file_size);
    out.extend_from_slice(b"BM");
    out.extend_from_slice(&(file_size as u32).to_le_bytes());
    out.extend_from_slice(&[0u8; 4]);
    out.extend_from_slice(&54u32.to_le_bytes());
    out.extend_from_slice(&40u32.to_le_bytes());
    out.extend_from_slice(&(w as i32).to_le_bytes());
    let height = if top_down { -(h as i32) } else { h as i32 };
    out.extend_from_slice(&height.to_le_bytes());
    out.extend_from_slice(&1u16.to_le_bytes());
    out.extend_from_slice(&bits.to_le_bytes());
    out.extend_from_slice(&0u32.to_le_bytes()); // compression
    out.extend_from_slice(&0u32.to_le_bytes()); // image size
    out.extend_from_slice(&2835u32.to_le_bytes());
    out.extend_from_slice(&2835u32.to_le_bytes());
    out.extend_from_slice(&0u32.to_le_bytes());
    out.extend_from_slice(&0u32.to_le_bytes());

    let ordered: Vec<&Vec<Pixel>> = if top_down {
        rows.iter().collect()
    } else {
        rows.iter().rev().collect()
    };
    for row in ordered {
        for p in row {
            out.extend_from_slice(&[p.b, p.g, p.r]);
            if bits == 32 {
                out.push(p.a);
            }
        }
        out.extend(std::iter::repeat_n(0u8, pad));
    }
    out
}
