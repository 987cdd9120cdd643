use alloc::string::String;

/// Broad failure classes, used by the integration layers to decide whether a
/// failure aborts the whole run or only the affected output.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorClass {
    /// Input is not a readable BMP. Fatal: no output is produced.
    Format,
    /// Caller-supplied parameters do not fit the image. Skips one step.
    Validation,
    /// An output could not be produced or written. Skips one step.
    Io,
}

/// Errors from BMP decoding, pixel transforms, and output persistence.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum MonocropError {
    #[error("not a BMP file (signature must be \"BM\")")]
    UnrecognizedFormat,

    #[error("unexpected end of input: need {needed} bytes, got {actual}")]
    UnexpectedEof { needed: usize, actual: usize },

    #[error("limit exceeded: {0}")]
    LimitExceeded(String),

    #[error("crop at ({x}, {y}) does not fit in a {width}x{height} image")]
    CropOutOfBounds {
        x: i32,
        y: i32,
        width: i32,
        height: i32,
    },

    #[error("unsupported format variant: {0}")]
    UnsupportedVariant(String),

    #[error("pixel offset {offset} outside buffer of {len} bytes")]
    OffsetOutOfRange { offset: usize, len: usize },

    #[error("buffer too small: need {needed} bytes, got {actual}")]
    BufferTooSmall { needed: usize, actual: usize },

    #[error("array source is the crop, but the crop was not produced")]
    CropUnavailable,

    #[error("array text could not be written")]
    Fmt(#[from] core::fmt::Error),

    #[cfg(feature = "std")]
    #[error("i/o error on {}: {source}", path.display())]
    Io {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl MonocropError {
    /// Which failure class this error belongs to.
    pub fn class(&self) -> ErrorClass {
        match self {
            Self::UnrecognizedFormat | Self::UnexpectedEof { .. } | Self::LimitExceeded(_) => {
                ErrorClass::Format
            }
            Self::CropOutOfBounds { .. }
            | Self::UnsupportedVariant(_)
            | Self::OffsetOutOfRange { .. }
            | Self::BufferTooSmall { .. }
            | Self::CropUnavailable => ErrorClass::Validation,
            Self::Fmt(_) => ErrorClass::Io,
            #[cfg(feature = "std")]
            Self::Io { .. } => ErrorClass::Io,
        }
    }

    /// Whether this error must abort the whole pipeline.
    pub fn is_fatal(&self) -> bool {
        self.class() == ErrorClass::Format
    }
}
