#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Re-encoding a decoded image must reproduce the header and the pixel span it came from.
    let Ok(img) = monocrop::decode_bmp(data) else {
        return;
    };
    let encoded = img.encode();
    assert_eq!(&encoded[..54], &data[..54], "header mismatch");
    assert_eq!(&encoded[54..], &img.pixels[..], "pixel mismatch");

    let again = monocrop::decode_bmp(&encoded).map(|i| i.pixels);
    if img.header.data_offset == 54 {
        assert_eq!(again.ok().as_deref(), Some(&img.pixels[..]));
    }
});
