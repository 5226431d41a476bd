//! ASCII rendering for eyeballing small bitmaps in a terminal.

use alloc::string::String;

use crate::buffer::PixelBuffer;

/// Render one text line per row: `@` for black, `*` for white, a space otherwise.
///
/// Alpha is ignored. Every line, including the last, ends in `\n`.
pub fn ascii_preview(buffer: &PixelBuffer) -> String {
    let w = buffer.width() as usize;
    let mut out = String::with_capacity((w + 1) * buffer.height() as usize);
    for row in buffer.rows() {
        for p in row {
            out.push(if p.is_gray_level(0) {
                '@'
            } else if p.is_gray_level(255) {
                '*'
            } else {
                ' '
            });
        }
        out.push('\n');
    }
    out
}
