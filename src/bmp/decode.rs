//! BMP decoder: header plus the raw pixel buffer at `data_offset`.

use alloc::vec::Vec;

use super::BmpImage;
use super::header::BmpHeader;
use crate::error::MonocropError;
use crate::limits::Limits;

/// Decode the header, then copy exactly `image_size` bytes from `data_offset`.
///
/// Rows are returned as stored (bottom-up, no padding removed).
pub(crate) fn decode_bmp(data: &[u8], limits: Option<&Limits>) -> Result<BmpImage, MonocropError> {
    let header = BmpHeader::parse(data)?;
    let len = header.image_size as usize;
    if let Some(limits) = limits {
        limits.check(header.width, header.height)?;
        limits.check_memory(len)?;
    }

    let start = header.data_offset as usize;
    let end = start.checked_add(len).ok_or(MonocropError::UnexpectedEof {
        needed: usize::MAX,
        actual: data.len(),
    })?;
    let pixels: Vec<u8> = data
        .get(start..end)
        .ok_or(MonocropError::UnexpectedEof {
            needed: end,
            actual: data.len(),
        })?
        .to_vec();

    Ok(BmpImage { header, pixels })
}
