//! # monocrop
//!
//! Grayscale conversion, thresholded crop, and C array export for
//! uncompressed 24-bit BMP images.
//!
//! One source image yields three artifacts:
//!
//! - a grayscale BMP with the source header and every B,G,R stride replaced
//!   by its luminance,
//! - an 84x48 black-and-white BMP cut from the source and binarized against
//!   a threshold,
//! - a C declaration of a 504-byte array (`unsigned char const imagem[504]`)
//!   for monochrome LCD panels.
//!
//! Luminance is `0.30 R + 0.59 G + 0.11 B` truncated to a byte, bit-exact with
//! the reference output. Pixel rows are handled as stored (bottom-up) and are
//! assumed to carry no padding.
//!
//! ## Non-Goals
//!
//! - Compressed BMP, palettes, or bit depths other than 24
//! - Crop sizes other than 84x48
//! - Interactive prompting
//!
//! ## Usage
//!
//! ```no_run
//! use monocrop::{ArraySource, ProcessRequest};
//!
//! let data: &[u8] = &[]; // your BMP bytes
//!
//! let out = ProcessRequest::new(data)
//!     .threshold(100)
//!     .origin(10, 20)
//!     .array_source(ArraySource::Grayscale)
//!     .process()?;
//!
//! let gray_bmp: Vec<u8> = out.grayscale_bytes();
//! if let Ok(crop) = &out.crop {
//!     let crop_bmp: Vec<u8> = crop.encode();
//! }
//! if let Ok(text) = &out.array {
//!     println!("{text}");
//! }
//! # Ok::<(), monocrop::MonocropError>(())
//! ```
//!
//! With the `std` feature, [`files::RunRequest`] reads the source from disk
//! and writes `<name>_gs.bmp`, `recorte.bmp`, and `imagem_vetor.h`.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

mod array;
mod bmp;
mod crop;
mod error;
mod grayscale;
mod limits;
mod pixel;
mod process;

#[cfg(feature = "std")]
pub mod files;

use alloc::vec::Vec;

// Re-exports
pub use array::{ARRAY_LEN, ARRAY_PER_LINE, ArrayEncoder, Band, emit_array};
pub use bmp::{BmpHeader, BmpImage};
pub use crop::{CROP_HEIGHT, CROP_WIDTH, CropRegion, crop_binarize};
pub use error::{ErrorClass, MonocropError};
pub use grayscale::apply_grayscale;
pub use limits::Limits;
pub use pixel::{BYTES_PER_PIXEL, binarize, luma};
pub use process::{ArraySource, ProcessOutput, ProcessRequest};

#[cfg(feature = "rgb")]
pub use pixel::Bgr8;

/// Decode BMP bytes into header and raw pixel buffer.
pub fn decode_bmp(data: &[u8]) -> Result<BmpImage, MonocropError> {
    bmp::decode(data, None)
}

/// Decode BMP bytes, rejecting images that exceed `limits` before allocating.
pub fn decode_bmp_with_limits(data: &[u8], limits: &Limits) -> Result<BmpImage, MonocropError> {
    bmp::decode(data, Some(limits))
}

/// Parse only the 54-byte header.
pub fn decode_header(data: &[u8]) -> Result<BmpHeader, MonocropError> {
    BmpHeader::parse(data)
}

/// Encode a header and pixel buffer. Header size fields are written as given.
pub fn encode_bmp(header: &BmpHeader, pixels: &[u8]) -> Vec<u8> {
    bmp::encode(header, pixels)
}
