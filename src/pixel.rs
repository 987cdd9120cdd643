//! Per-pixel math shared by the grayscale and crop transforms.

/// Bytes per stored pixel (24-bit, blue-green-red order).
pub const BYTES_PER_PIXEL: usize = 3;

/// Weighted luminance `0.30 R + 0.59 G + 0.11 B`, narrowed to a byte.
///
/// The sum is taken in `f64` in red, green, blue order and then truncated,
/// never rounded. Truncation is not stable on gray input: levels such as
/// 1, 128 and 253 come back one lower (`luma(128, 128, 128) == 127`).
#[inline]
pub fn luma(blue: u8, green: u8, red: u8) -> u8 {
    (0.3 * f64::from(red) + 0.59 * f64::from(green) + 0.11 * f64::from(blue)) as u8
}

/// Luminance of one stored B,G,R stride.
#[inline]
pub(crate) fn stride_luma(stride: &[u8]) -> u8 {
    luma(stride[0], stride[1], stride[2])
}

/// White (255) when `grey` is strictly above `threshold`, black (0) otherwise.
#[inline]
pub fn binarize(grey: u8, threshold: i32) -> u8 {
    if i32::from(grey) > threshold { 255 } else { 0 }
}

/// 8-bit BGR pixel, the in-memory order of 24-bit BMP data.
#[cfg(feature = "rgb")]
pub type Bgr8 = rgb::alt::BGR8;
