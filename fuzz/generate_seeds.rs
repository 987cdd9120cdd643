#!/usr/bin/env -S cargo +nightly -Zscript
//! Generate seed corpus files for fuzzing.
//! Run: cargo +nightly -Zscript fuzz/generate_seeds.rs

fn bmp(width: u32, height: u32, bgr: [u8; 3]) -> Vec<u8> {
    let image_size = width * height * 3;
    let mut out = vec![0u8; 54];
    out[0] = b'B'; out[1] = b'M';
    out[2..6].copy_from_slice(&(54 + image_size).to_le_bytes()); // file size
    out[10..14].copy_from_slice(&54u32.to_le_bytes()); // data offset
    out[14..18].copy_from_slice(&40u32.to_le_bytes()); // DIB header size
    out[18..22].copy_from_slice(&width.to_le_bytes());
    out[22..26].copy_from_slice(&height.to_le_bytes());
    out[26..28].copy_from_slice(&1u16.to_le_bytes()); // planes
    out[28..30].copy_from_slice(&24u16.to_le_bytes()); // bpp
    out[34..38].copy_from_slice(&image_size.to_le_bytes());
    for _ in 0..width * height {
        out.extend_from_slice(&bgr);
    }
    out
}

fn main() {
    use std::fs;
    let dir = "fuzz/corpus/fuzz_decode";
    fs::create_dir_all(dir).unwrap();

    fs::write(format!("{dir}/bmp_1x1.bmp"), bmp(1, 1, [0xff, 0x00, 0x00])).unwrap();
    fs::write(format!("{dir}/bmp_84x48.bmp"), bmp(84, 48, [0x40, 0x80, 0xc0])).unwrap();
    fs::write(format!("{dir}/bmp_100x60.bmp"), bmp(100, 60, [0x00, 0x00, 0xff])).unwrap();

    // Truncated/malformed seeds for edge coverage
    fs::write(format!("{dir}/empty.bin"), b"").unwrap();
    fs::write(format!("{dir}/bm_short.bin"), b"BM\x00\x00").unwrap();
    let mut huge = bmp(1, 1, [0, 0, 0]);
    huge[34..38].copy_from_slice(&u32::MAX.to_le_bytes()); // image size past EOF
    fs::write(format!("{dir}/bmp_huge_size.bin"), huge).unwrap();

    println!("Generated seed corpus in {dir}/");
}
