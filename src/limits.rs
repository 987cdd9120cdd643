use crate::error::MonocropError;

/// Resource limits for decoding.
///
/// All fields default to `None` (no limit).
#[derive(Clone, Debug, Default)]
pub struct Limits {
    pub max_width: Option<u64>,
    pub max_height: Option<u64>,
    /// Maximum pixel count (width * height).
    pub max_pixels: Option<u64>,
    /// Maximum bytes for the pixel buffer allocation.
    pub max_memory_bytes: Option<u64>,
}

impl Limits {
    /// Check dimensions against limits. Negative header values are checked by magnitude.
    pub(crate) fn check(&self, width: i32, height: i32) -> Result<(), MonocropError> {
        let width = u64::from(width.unsigned_abs());
        let height = u64::from(height.unsigned_abs());
        if let Some(max_w) = self.max_width {
            if width > max_w {
                return Err(MonocropError::LimitExceeded(alloc::format!(
                    "width {width} exceeds limit {max_w}"
                )));
            }
        }
        if let Some(max_h) = self.max_height {
            if height > max_h {
                return Err(MonocropError::LimitExceeded(alloc::format!(
                    "height {height} exceeds limit {max_h}"
                )));
            }
        }
        if let Some(max_px) = self.max_pixels {
            let pixels = width * height;
            if pixels > max_px {
                return Err(MonocropError::LimitExceeded(alloc::format!(
                    "pixel count {pixels} exceeds limit {max_px}"
                )));
            }
        }
        Ok(())
    }

    /// Check that an allocation size is within memory limits.
    pub(crate) fn check_memory(&self, bytes: usize) -> Result<(), MonocropError> {
        if let Some(max_mem) = self.max_memory_bytes {
            if bytes as u64 > max_mem {
                return Err(MonocropError::LimitExceeded(alloc::format!(
                    "allocation {bytes} bytes exceeds memory limit {max_mem}"
                )));
            }
        }
        Ok(())
    }
}
