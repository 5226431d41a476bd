#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Must never panic, whatever the input
    let _ = bmpedit::BitmapMetadata::from_bytes(data);
    let _ = bmpedit::decode_bmp(data, enough::Unstoppable);
});
