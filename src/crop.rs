//! Fixed 84x48 crop with threshold binarization.

use alloc::vec;

use crate::bmp::{BmpHeader, BmpImage};
use crate::error::MonocropError;
use crate::pixel::{BYTES_PER_PIXEL, binarize, stride_luma};

/// Crop width in pixels.
pub const CROP_WIDTH: i32 = 84;
/// Crop height in pixels.
pub const CROP_HEIGHT: i32 = 48;

/// Crop origin: the bottom-left corner offset into the source image.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CropRegion {
    pub x: i32,
    pub y: i32,
}

impl CropRegion {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Check that the whole 84x48 window lies inside a `width` x `height` image.
    pub fn validate(&self, width: i32, height: i32) -> Result<(), MonocropError> {
        let (x, y) = (i64::from(self.x), i64::from(self.y));
        if x < 0
            || y < 0
            || x + i64::from(CROP_WIDTH) > i64::from(width)
            || y + i64::from(CROP_HEIGHT) > i64::from(height)
        {
            return Err(MonocropError::CropOutOfBounds {
                x: self.x,
                y: self.y,
                width,
                height,
            });
        }
        Ok(())
    }
}

/// Cut an 84x48 window out of `pixels` and binarize it against `threshold`.
///
/// Destination row `i` is read from source row `height - 1 - (y + i)` of the
/// stored buffer, starting at column `x`. Each pixel's luminance is computed
/// from the source B,G,R values and mapped to 255 if it is strictly above
/// `threshold`, 0 otherwise. The result carries a copy of `header` with the
/// crop dimensions and recomputed `image_size`/`file_size`.
///
/// `pixels` should be the original colour buffer, not a grayscaled one.
pub fn crop_binarize(
    header: &BmpHeader,
    pixels: &[u8],
    region: CropRegion,
    threshold: i32,
) -> Result<BmpImage, MonocropError> {
    region.validate(header.width, header.height)?;
    if header.bits_per_pixel != 24 {
        return Err(MonocropError::UnsupportedVariant(alloc::format!(
            "cannot crop {}-bit image (only 24-bit)",
            header.bits_per_pixel
        )));
    }

    let crop_w = CROP_WIDTH as usize;
    let crop_h = CROP_HEIGHT as usize;
    let bytes_pp = usize::from(header.bits_per_pixel / 8);
    let image_size = crop_w * crop_h * bytes_pp;

    let mut crop_header = *header;
    crop_header.width = CROP_WIDTH;
    crop_header.height = CROP_HEIGHT;
    crop_header.image_size = image_size as u32;
    crop_header.file_size = (image_size + BmpHeader::SIZE) as u32;

    // Validation above guarantees these are non-negative.
    let width = header.width as usize;
    let height = header.height as usize;
    let (x, y) = (region.x as usize, region.y as usize);
    let row_bytes = crop_w * BYTES_PER_PIXEL;

    let mut out = vec![0u8; image_size];
    for (i, dst_row) in out.chunks_exact_mut(row_bytes).enumerate() {
        let src_row = height - 1 - (y + i);
        let start = src_row
            .checked_mul(width)
            .and_then(|p| p.checked_add(x))
            .and_then(|p| p.checked_mul(BYTES_PER_PIXEL))
            .ok_or(MonocropError::OffsetOutOfRange {
                offset: usize::MAX,
                len: pixels.len(),
            })?;
        let end = start + row_bytes;
        let src = pixels
            .get(start..end)
            .ok_or(MonocropError::OffsetOutOfRange {
                offset: end,
                len: pixels.len(),
            })?;

        for (dst, px) in dst_row
            .chunks_exact_mut(BYTES_PER_PIXEL)
            .zip(src.chunks_exact(BYTES_PER_PIXEL))
        {
            dst.fill(binarize(stride_luma(px), threshold));
        }
    }

    Ok(BmpImage {
        header: crop_header,
        pixels: out,
    })
}

impl BmpImage {
    /// Binarized 84x48 crop of this image. See [`crop_binarize`].
    pub fn crop_binarize(&self, region: CropRegion, threshold: i32) -> Result<BmpImage, MonocropError> {
        crop_binarize(&self.header, &self.pixels, region, threshold)
    }
}
