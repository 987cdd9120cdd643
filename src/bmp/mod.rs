//! 24-bit uncompressed BMP codec.
//!
//! Use top-level [`crate::decode_bmp`], [`crate::encode_bmp`], etc.

mod decode;
mod encode;
mod header;

pub use header::BmpHeader;

use crate::error::MonocropError;
use crate::limits::Limits;
use alloc::vec::Vec;

/// A BMP header together with its pixel buffer.
///
/// The buffer holds rows of `width` B,G,R pixels, bottom row first, exactly
/// as they sit in the file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BmpImage {
    pub header: BmpHeader,
    pub pixels: Vec<u8>,
}

impl BmpImage {
    /// Image width in pixels, as stored in the header.
    pub fn width(&self) -> i32 {
        self.header.width
    }

    /// Image height in pixels, as stored in the header.
    pub fn height(&self) -> i32 {
        self.header.height
    }

    /// Serialize header and pixels to BMP file bytes.
    pub fn encode(&self) -> Vec<u8> {
        encode::encode_bmp(&self.header, &self.pixels)
    }

    /// View the pixel buffer as BGR pixels. A trailing partial stride is left out.
    #[cfg(feature = "rgb")]
    pub fn bgr_pixels(&self) -> &[crate::pixel::Bgr8] {
        use rgb::FromSlice as _;
        let whole = self.pixels.len() / crate::pixel::BYTES_PER_PIXEL * crate::pixel::BYTES_PER_PIXEL;
        self.pixels[..whole].as_bgr()
    }

    /// 2D view in stored (bottom-up) row order.
    ///
    /// Returns [`MonocropError::BufferTooSmall`] if the buffer does not hold
    /// `width * height` pixels, or [`MonocropError::UnsupportedVariant`] for
    /// negative dimensions.
    #[cfg(feature = "imgref")]
    pub fn as_imgref(&self) -> Result<imgref::ImgRef<'_, crate::pixel::Bgr8>, MonocropError> {
        let (Ok(w), Ok(h)) = (usize::try_from(self.width()), usize::try_from(self.height())) else {
            return Err(MonocropError::UnsupportedVariant(alloc::format!(
                "cannot view {}x{} image as 2D",
                self.width(),
                self.height()
            )));
        };
        let pixels = self.bgr_pixels();
        let needed = w.saturating_mul(h);
        if pixels.len() < needed {
            return Err(MonocropError::BufferTooSmall {
                needed: needed.saturating_mul(crate::pixel::BYTES_PER_PIXEL),
                actual: self.pixels.len(),
            });
        }
        Ok(imgref::ImgRef::new(&pixels[..needed], w, h))
    }
}

/// Decode BMP data into header and raw pixel buffer.
pub(crate) fn decode(data: &[u8], limits: Option<&Limits>) -> Result<BmpImage, MonocropError> {
    decode::decode_bmp(data, limits)
}

/// Encode header and pixel buffer to BMP bytes.
pub(crate) fn encode(header: &BmpHeader, pixels: &[u8]) -> Vec<u8> {
    encode::encode_bmp(header, pixels)
}
