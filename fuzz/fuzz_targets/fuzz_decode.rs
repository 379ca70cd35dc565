#![no_main]
use libfuzzer_sys::fuzz_target;
use zencrop::{BmpPermissiveness, DecodeRequest, ImageInfo};

fuzz_target!(|data: &[u8]| {
    // Probing, decoding, and cropping must never panic
    let _ = ImageInfo::from_bytes(data);

    let Ok(image) = DecodeRequest::new(data)
        .with_permissiveness(BmpPermissiveness::Permissive)
        .decode(enough::Unstoppable)
    else {
        return;
    };
    if let Ok(bounds) = zencrop::find_bounds(&image, enough::Unstoppable) {
        let cropped = zencrop::crop_to_content(&image, enough::Unstoppable)
            .expect("bounds were found, crop must succeed");
        assert_eq!(Some(cropped.width()), bounds.width());
        assert_eq!(Some(cropped.height()), bounds.height());
    }
});
