#![no_main]
use libfuzzer_sys::fuzz_target;
use bmpedit::*;

fuzz_target!(|data: &[u8]| {
    // If we can decode it, re-encoding and decoding again must produce identical pixels
    let Ok(decoded) = decode_bmp(data, enough::Unstoppable) else {
        return;
    };

    // Rewriting the height sign keeps header and rows in agreement.
    let Ok(reencoded) = EncodeRequest::new()
        .with_original_orientation_flag(false)
        .encode(&decoded, enough::Unstoppable)
    else {
        panic!("encoding a decoded image failed");
    };
    let Ok(decoded2) = decode_bmp(&reencoded, enough::Unstoppable) else {
        panic!("re-encoded data failed to decode");
    };

    assert_eq!(decoded.pixels(), decoded2.pixels(), "roundtrip pixel mismatch");
    assert_eq!(decoded.header().len(), decoded2.header().len());
    assert_eq!(decoded.metadata().bit_depth, decoded2.metadata().bit_depth);
});
