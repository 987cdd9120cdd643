//! In-place grayscale conversion over a whole 24-bit pixel buffer.

use crate::bmp::{BmpHeader, BmpImage};
use crate::error::MonocropError;
use crate::pixel::{BYTES_PER_PIXEL, stride_luma};

/// Replace every B,G,R stride in the first `header.image_size` bytes with its
/// luminance, written to all three channels.
///
/// Strides start at offset 0 and advance by 3. A trailing remainder of one or
/// two bytes (when `image_size` is not a multiple of 3) is left untouched, as
/// is anything in `pixels` past `image_size`.
pub fn apply_grayscale(header: &BmpHeader, pixels: &mut [u8]) -> Result<(), MonocropError> {
    let len = header.image_size as usize;
    let Some(data) = pixels.get_mut(..len) else {
        return Err(MonocropError::BufferTooSmall {
            needed: len,
            actual: pixels.len(),
        });
    };
    for stride in data.chunks_exact_mut(BYTES_PER_PIXEL) {
        let grey = stride_luma(stride);
        stride.fill(grey);
    }
    Ok(())
}

impl BmpImage {
    /// Grayscale copy of this image; the header is unchanged.
    pub fn to_grayscale(&self) -> Result<BmpImage, MonocropError> {
        let mut out = self.clone();
        apply_grayscale(&out.header, &mut out.pixels)?;
        Ok(out)
    }
}
