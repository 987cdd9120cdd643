//! In-memory run of the whole pipeline: decode, grayscale, crop, array.

use alloc::string::String;
use alloc::vec::Vec;
use log::{debug, warn};

use crate::array::ArrayEncoder;
use crate::bmp::{self, BmpHeader, BmpImage};
use crate::crop::{CropRegion, crop_binarize};
use crate::error::MonocropError;
use crate::limits::Limits;

/// Which buffer feeds the array export.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ArraySource {
    /// The full-image buffer after grayscale conversion.
    #[default]
    Grayscale,
    /// The full-image buffer as decoded.
    Original,
    /// The binarized crop buffer. Fails if the crop failed.
    Crop,
}

/// Everything one run produces.
///
/// Decoding failures are returned from [`ProcessRequest::process`] directly;
/// crop and array failures are kept per step so the other outputs survive.
#[derive(Debug)]
pub struct ProcessOutput {
    /// Decoded source image, unmodified.
    pub source: BmpImage,
    /// Source header with grayscaled pixels.
    pub grayscale: BmpImage,
    pub crop: Result<BmpImage, MonocropError>,
    pub array: Result<String, MonocropError>,
}

impl ProcessOutput {
    /// Header of the decoded source image.
    pub fn header(&self) -> &BmpHeader {
        &self.source.header
    }

    /// Encoded grayscale BMP bytes.
    pub fn grayscale_bytes(&self) -> Vec<u8> {
        self.grayscale.encode()
    }
}

/// Builder for one pipeline run over in-memory BMP bytes.
#[derive(Clone, Debug)]
pub struct ProcessRequest<'a> {
    data: &'a [u8],
    threshold: i32,
    region: CropRegion,
    array_source: ArraySource,
    array_encoder: ArrayEncoder<'a>,
    limits: Option<&'a Limits>,
}

impl<'a> ProcessRequest<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self {
            data,
            threshold: 128,
            region: CropRegion::default(),
            array_source: ArraySource::default(),
            array_encoder: ArrayEncoder::default(),
            limits: None,
        }
    }

    /// Luminance cutoff for binarization and array banding. Not range-checked.
    pub fn threshold(mut self, threshold: i32) -> Self {
        self.threshold = threshold;
        self
    }

    /// Bottom-left corner of the crop.
    pub fn origin(mut self, x: i32, y: i32) -> Self {
        self.region = CropRegion::new(x, y);
        self
    }

    pub fn region(mut self, region: CropRegion) -> Self {
        self.region = region;
        self
    }

    pub fn array_source(mut self, source: ArraySource) -> Self {
        self.array_source = source;
        self
    }

    pub fn array_encoder(mut self, encoder: ArrayEncoder<'a>) -> Self {
        self.array_encoder = encoder;
        self
    }

    pub fn with_limits(mut self, limits: &'a Limits) -> Self {
        self.limits = Some(limits);
        self
    }

    /// Run every step. Only decode errors are returned as `Err`.
    pub fn process(self) -> Result<ProcessOutput, MonocropError> {
        let source = bmp::decode(self.data, self.limits)?;
        debug!(
            "decoded {}x{} BMP, {} bytes of pixel data",
            source.width(),
            source.height(),
            source.pixels.len()
        );

        let grayscale = source.to_grayscale()?;

        let crop = crop_binarize(&source.header, &source.pixels, self.region, self.threshold);
        match &crop {
            Ok(_) => debug!(
                "cropped at ({}, {}) with threshold {}",
                self.region.x, self.region.y, self.threshold
            ),
            Err(e) => warn!("crop skipped: {e}"),
        }

        let buffer = match self.array_source {
            ArraySource::Grayscale => Ok(grayscale.pixels.as_slice()),
            ArraySource::Original => Ok(source.pixels.as_slice()),
            ArraySource::Crop => crop
                .as_ref()
                .map(|c| c.pixels.as_slice())
                .map_err(|_| MonocropError::CropUnavailable),
        };
        let array = buffer.and_then(|b| self.array_encoder.encode(b, self.threshold));
        if let Err(e) = &array {
            warn!("array export skipped: {e}");
        }

        Ok(ProcessOutput {
            source,
            grayscale,
            crop,
            array,
        })
    }
}
