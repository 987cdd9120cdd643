//! BMP encoder: header fields as given, then the pixel buffer.

use alloc::vec::Vec;

use super::header::BmpHeader;

/// Serialize `header` followed by `pixels`.
///
/// `file_size` and `image_size` are written as stored in `header`; callers
/// that derive a new image must set them first.
pub(crate) fn encode_bmp(header: &BmpHeader, pixels: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(BmpHeader::SIZE + pixels.len());
    header.write_to(&mut out);
    out.extend_from_slice(pixels);
    out
}
