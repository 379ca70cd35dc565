#![no_main]
use libfuzzer_sys::fuzz_target;
use zencrop::*;

fuzz_target!(|data: &[u8]| {
    // If we can decode it, re-encoding and decoding again must give the same image
    let Ok(decoded) = DecodeRequest::new(data)
        .with_permissiveness(BmpPermissiveness::Permissive)
        .decode(enough::Unstoppable)
    else {
        return;
    };

    let reencoded = encode_bmp8(&decoded, enough::Unstoppable).expect("encode failed");
    let Ok(decoded2) = DecodeRequest::new(&reencoded)
        .with_permissiveness(BmpPermissiveness::Permissive)
        .decode(enough::Unstoppable)
    else {
        panic!("re-encoded data failed to decode");
    };

    assert_eq!(decoded, decoded2, "roundtrip mismatch");
});
