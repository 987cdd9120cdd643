//! C array literal export of a pixel buffer.
//!
//! The output is a header-style declaration of a fixed 504-element byte
//! array, 28 literals per line:
//!
//! ```text
//! unsigned char const imagem[504] = {
//!
//! 0x00,0xFF,0xF0,0x50,...
//! ...
//! };
//! ```

use alloc::string::String;
use core::fmt::Write;

use crate::error::MonocropError;

/// Number of array elements emitted.
pub const ARRAY_LEN: usize = 504;
/// Literals per output line.
pub const ARRAY_PER_LINE: usize = 28;

/// How a single byte is rendered.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Band {
    /// `<= 0x0A`, rendered `0x00`.
    Black,
    /// `>= 0xF0`, rendered `0xFF`.
    White,
    /// Within 10 of the threshold, rendered `0xF0`.
    NearThreshold,
    /// Anything else, rendered as its own value.
    Literal(u8),
}

impl Band {
    /// Classify `pixel`. Checks run in order: black, white, near threshold.
    pub fn classify(pixel: u8, threshold: i32) -> Self {
        let t = i64::from(threshold);
        let p = i64::from(pixel);
        if pixel <= 0x0A {
            Band::Black
        } else if pixel >= 0xF0 {
            Band::White
        } else if t - 10 <= p && p <= t + 10 {
            Band::NearThreshold
        } else {
            Band::Literal(pixel)
        }
    }

    /// Byte value of the emitted literal.
    pub fn value(self) -> u8 {
        match self {
            Band::Black => 0x00,
            Band::White => 0xFF,
            Band::NearThreshold => 0xF0,
            Band::Literal(v) => v,
        }
    }
}

/// Renders a buffer's first [`ARRAY_LEN`] bytes as a C array declaration.
#[derive(Clone, Copy, Debug)]
pub struct ArrayEncoder<'a> {
    name: &'a str,
}

impl Default for ArrayEncoder<'_> {
    fn default() -> Self {
        Self { name: "imagem" }
    }
}

impl<'a> ArrayEncoder<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the declared array name.
    pub fn name(mut self, name: &'a str) -> Self {
        self.name = name;
        self
    }

    /// Render the declaration.
    ///
    /// Returns [`MonocropError::BufferTooSmall`] if `buffer` holds fewer than
    /// [`ARRAY_LEN`] bytes. Bytes past that are ignored.
    pub fn encode(&self, buffer: &[u8], threshold: i32) -> Result<String, MonocropError> {
        // declaration + (newline per line) + "0xNN," per element + closing
        let mut out = String::with_capacity(64 + ARRAY_LEN / ARRAY_PER_LINE + ARRAY_LEN * 5);
        self.write_to(&mut out, buffer, threshold)?;
        Ok(out)
    }

    /// Render the declaration into any [`core::fmt::Write`] sink.
    ///
    /// Sink failures come back as [`MonocropError::Fmt`].
    pub fn write_to<W: Write>(
        &self,
        out: &mut W,
        buffer: &[u8],
        threshold: i32,
    ) -> Result<(), MonocropError> {
        let Some(data) = buffer.get(..ARRAY_LEN) else {
            return Err(MonocropError::BufferTooSmall {
                needed: ARRAY_LEN,
                actual: buffer.len(),
            });
        };

        writeln!(out, "unsigned char const {}[{ARRAY_LEN}] = {{", self.name)?;
        for (i, &pixel) in data.iter().enumerate() {
            if i % ARRAY_PER_LINE == 0 {
                out.write_char('\n')?;
            }
            let v = Band::classify(pixel, threshold).value();
            write!(out, "0x{v:02X},")?;
        }
        out.write_str("\n};\n")?;
        Ok(())
    }
}

/// Render `buffer` with the default array name. See [`ArrayEncoder::encode`].
pub fn emit_array(buffer: &[u8], threshold: i32) -> Result<String, MonocropError> {
    ArrayEncoder::default().encode(buffer, threshold)
}
