#!/usr/bin/env -S cargo +nightly -Zscript
//! Generate seed corpus files for fuzzing.
//! Run: cargo +nightly -Zscript fuzz/generate_seeds.rs

fn bmp(width: i32, height: i32, bits: u16, pixel_bytes: &[u8]) -> Vec<u8> {
    let mut bmp = vec![0u8; 54];
    bmp[0] = b'B'; bmp[1] = b'M';
    bmp[2..6].copy_from_slice(&((54 + pixel_bytes.len()) as u32).to_le_bytes()); // file size
    bmp[10..14].copy_from_slice(&54u32.to_le_bytes()); // data offset
    bmp[14..18].copy_from_slice(&40u32.to_le_bytes()); // DIB header size
    bmp[18..22].copy_from_slice(&width.to_le_bytes());
    bmp[22..26].copy_from_slice(&height.to_le_bytes());
    bmp[26..28].copy_from_slice(&1u16.to_le_bytes()); // planes
    bmp[28..30].copy_from_slice(&bits.to_le_bytes());
    bmp.extend_from_slice(pixel_bytes);
    bmp
}

fn main() {
    use std::fs;
    let dir = "fuzz/corpus/fuzz_decode";
    fs::create_dir_all(dir).unwrap();

    // 24-bit 1x1, bottom-up (3 pixel bytes + 1 padding)
    fs::write(format!("{dir}/bmp24_1x1.bmp"), bmp(1, 1, 24, &[0xff, 0x00, 0x00, 0x00])).unwrap();

    // 24-bit 2x2, top-down
    let rows = [0, 0, 255, 255, 255, 255, 0, 0, 0, 0, 0, 0, 255, 0, 0, 0];
    fs::write(format!("{dir}/bmp24_2x2_topdown.bmp"), bmp(2, -2, 24, &rows)).unwrap();

    // 32-bit 1x2 with alpha
    fs::write(format!("{dir}/bmp32_1x2.bmp"), bmp(1, 2, 32, &[1, 2, 3, 128, 4, 5, 6, 255])).unwrap();

    // Truncated/malformed seeds for edge coverage
    fs::write(format!("{dir}/empty.bin"), b"").unwrap();
    fs::write(format!("{dir}/bm_short.bin"), b"BM\x00\x00").unwrap();
    fs::write(format!("{dir}/bmp16.bin"), bmp(1, 1, 16, &[0, 0, 0, 0])).unwrap();
    fs::write(format!("{dir}/bmp24_truncated.bin"), bmp(4, 4, 24, &[0; 20])).unwrap();

    println!("Generated seed corpus in {dir}/");
}
