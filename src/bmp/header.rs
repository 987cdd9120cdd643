//! The fixed 54-byte BMP file + info header.

use alloc::vec::Vec;

use crate::error::MonocropError;

// ── Cursor for reading from &[u8] ───────────────────────────────────

struct Cursor<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    fn read_fixed_bytes<const N: usize>(&mut self) -> Result<[u8; N], MonocropError> {
        let end = self.pos + N;
        let bytes = self
            .data
            .get(self.pos..end)
            .ok_or(MonocropError::UnexpectedEof {
                needed: end,
                actual: self.data.len(),
            })?;
        let mut buf = [0u8; N];
        buf.copy_from_slice(bytes);
        self.pos = end;
        Ok(buf)
    }

    fn get_u16_le(&mut self) -> Result<u16, MonocropError> {
        self.read_fixed_bytes().map(u16::from_le_bytes)
    }

    fn get_u32_le(&mut self) -> Result<u32, MonocropError> {
        self.read_fixed_bytes().map(u32::from_le_bytes)
    }

    fn get_i32_le(&mut self) -> Result<i32, MonocropError> {
        self.read_fixed_bytes().map(i32::from_le_bytes)
    }
}

// ── Header record ───────────────────────────────────────────────────

/// BMP header, field for field as stored on disk (little-endian, no padding).
///
/// Only the signature is validated. Everything else is carried through
/// as read, so a decoded header re-encodes to the same 54 bytes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BmpHeader {
    pub signature: [u8; 2],
    pub file_size: u32,
    pub reserved1: u16,
    pub reserved2: u16,
    /// Offset of the pixel data from the start of the file.
    pub data_offset: u32,
    /// Size of the info header (40 for BITMAPINFOHEADER).
    pub header_size: u32,
    pub width: i32,
    /// Positive for bottom-up row order.
    pub height: i32,
    pub planes: u16,
    pub bits_per_pixel: u16,
    pub compression: u32,
    /// Length of the pixel buffer in bytes.
    pub image_size: u32,
    pub x_pixels_per_meter: i32,
    pub y_pixels_per_meter: i32,
    pub colors_used: u32,
    pub colors_important: u32,
}

impl BmpHeader {
    /// Serialized size of the header.
    pub const SIZE: usize = 54;

    /// Expected value of [`BmpHeader::signature`].
    pub const SIGNATURE: [u8; 2] = *b"BM";

    /// Parse the first 54 bytes of `data`.
    pub fn parse(data: &[u8]) -> Result<Self, MonocropError> {
        if data.len() < Self::SIZE {
            return Err(MonocropError::UnexpectedEof {
                needed: Self::SIZE,
                actual: data.len(),
            });
        }
        let mut c = Cursor::new(data);
        let signature = c.read_fixed_bytes::<2>()?;
        if signature != Self::SIGNATURE {
            return Err(MonocropError::UnrecognizedFormat);
        }
        Ok(Self {
            signature,
            file_size: c.get_u32_le()?,
            reserved1: c.get_u16_le()?,
            reserved2: c.get_u16_le()?,
            data_offset: c.get_u32_le()?,
            header_size: c.get_u32_le()?,
            width: c.get_i32_le()?,
            height: c.get_i32_le()?,
            planes: c.get_u16_le()?,
            bits_per_pixel: c.get_u16_le()?,
            compression: c.get_u32_le()?,
            image_size: c.get_u32_le()?,
            x_pixels_per_meter: c.get_i32_le()?,
            y_pixels_per_meter: c.get_i32_le()?,
            colors_used: c.get_u32_le()?,
            colors_important: c.get_u32_le()?,
        })
    }

    /// Append the 54 header bytes to `out`, in declaration order.
    pub fn write_to(&self, out: &mut Vec<u8>) {
        // File header (14 bytes)
        out.extend_from_slice(&self.signature);
        out.extend_from_slice(&self.file_size.to_le_bytes());
        out.extend_from_slice(&self.reserved1.to_le_bytes());
        out.extend_from_slice(&self.reserved2.to_le_bytes());
        out.extend_from_slice(&self.data_offset.to_le_bytes());

        // Info header (40 bytes)
        out.extend_from_slice(&self.header_size.to_le_bytes());
        out.extend_from_slice(&self.width.to_le_bytes());
        out.extend_from_slice(&self.height.to_le_bytes());
        out.extend_from_slice(&self.planes.to_le_bytes());
        out.extend_from_slice(&self.bits_per_pixel.to_le_bytes());
        out.extend_from_slice(&self.compression.to_le_bytes());
        out.extend_from_slice(&self.image_size.to_le_bytes());
        out.extend_from_slice(&self.x_pixels_per_meter.to_le_bytes());
        out.extend_from_slice(&self.y_pixels_per_meter.to_le_bytes());
        out.extend_from_slice(&self.colors_used.to_le_bytes());
        out.extend_from_slice(&self.colors_important.to_le_bytes());
    }

    /// Header for an uncompressed 24-bit image with tightly packed rows.
    ///
    /// Sizes are computed from the dimensions; pixel data follows the header.
    #[cfg(test)]
    pub(crate) fn new_24bit(width: i32, height: i32) -> Self {
        let image_size = (width.unsigned_abs() as u64 * height.unsigned_abs() as u64 * 3) as u32;
        Self {
            signature: Self::SIGNATURE,
            file_size: image_size.wrapping_add(Self::SIZE as u32),
            reserved1: 0,
            reserved2: 0,
            data_offset: Self::SIZE as u32,
            header_size: 40,
            width,
            height,
            planes: 1,
            bits_per_pixel: 24,
            compression: 0,
            image_size,
            x_pixels_per_meter: 2835, // 72 DPI
            y_pixels_per_meter: 2835,
            colors_used: 0,
            colors_important: 0,
        }
    }
}
