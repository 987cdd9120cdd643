#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Decode and every downstream step must never panic, whatever the header claims.
    let Ok(img) = monocrop::decode_bmp(data) else {
        return;
    };
    let _ = img.to_grayscale();

    // Derive crop origin and threshold from the input so odd headers get exercised.
    let seed = data.get(54..58).unwrap_or(&[0; 4]);
    let x = i32::from(seed[0]) - 8;
    let y = i32::from(seed[1]) - 8;
    let threshold = i32::from(seed[2]);
    let _ = img.crop_binarize(monocrop::CropRegion::new(x, y), threshold);
    let _ = monocrop::emit_array(&img.pixels, threshold);
});
