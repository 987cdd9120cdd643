//! Synthetic 24-bit BMP builders.
#![allow(dead_code)]

/// Build a 24-bit BMP with unpadded rows. `pixel(col, stored_row)` returns
/// `[blue, green, red]`; stored row 0 is the first row in the file.
pub fn bmp_bytes(width: usize, height: usize, pixel: impl Fn(usize, usize) -> [u8; 3]) -> Vec<u8> {
    let image_size = width * height * 3;
    let mut out = Vec::with_capacity(54 + image_size);
    out.extend_from_slice(b"BM");
    out.extend_from_slice(&((54 + image_size) as u32).to_le_bytes());
    out.extend_from_slice(&[0u8; 4]); // reserved
    out.extend_from_slice(&54u32.to_le_bytes());
    out.extend_from_slice(&40u32.to_le_bytes());
    out.extend_from_slice(&(width as i32).to_le_bytes());
    out.extend_from_slice(&(height as i32).to_le_bytes());
    out.extend_from_slice(&1u16.to_le_bytes());
    out.extend_from_slice(&24u16.to_le_bytes());
    out.extend_from_slice(&0u32.to_le_bytes());
    out.extend_from_slice(&(image_size as u32).to_le_bytes());
    out.extend_from_slice(&2835i32.to_le_bytes());
    out.extend_from_slice(&2835i32.to_le_bytes());
    out.extend_from_slice(&0u32.to_le_bytes());
    out.extend_from_slice(&0u32.to_le_bytes());
    for row in 0..height {
        for col in 0..width {
            out.extend_from_slice(&pixel(col, row));
        }
    }
    out
}

/// Solid colour image.
pub fn solid(width: usize, height: usize, bgr: [u8; 3]) -> Vec<u8> {
    bmp_bytes(width, height, |_, _| bgr)
}

/// Gray ramp: stored pixel `(col, row)` has B=G=R=`(col + row) % 256`.
pub fn ramp(width: usize, height: usize) -> Vec<u8> {
    bmp_bytes(width, height, |col, row| {
        let v = ((col + row) % 256) as u8;
        [v, v, v]
    })
}

/// Xorshift noise, deterministic.
pub fn noise(width: usize, height: usize) -> Vec<u8> {
    let mut state: u32 = 0xDEAD_BEEF;
    let mut px = Vec::with_capacity(width * height);
    for _ in 0..width * height {
        let mut bgr = [0u8; 3];
        for c in bgr.iter_mut() {
            state ^= state << 13;
            state ^= state >> 17;
            state ^= state << 5;
            *c = state as u8;
        }
        px.push(bgr);
    }
    bmp_bytes(width, height, |col, row| px[row * width + col])
}

/// Scratch directory, removed when the returned guard drops.
pub fn scratch_dir(name: &str) -> tempfile::TempDir {
    tempfile::Builder::new()
        .prefix(&format!("monocrop_{name}_"))
        .tempdir()
        .unwrap()
}
