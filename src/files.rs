//! File-system integration: read a source BMP, write the three artifacts.
//!
//! Default output names apply only here; everything below this layer takes
//! explicit buffers and paths.

use std::path::{Path, PathBuf};

use log::{debug, info, warn};

use crate::array::ArrayEncoder;
use crate::bmp::BmpHeader;
use crate::crop::CropRegion;
use crate::error::MonocropError;
use crate::limits::Limits;
use crate::process::{ArraySource, ProcessRequest};

/// Default crop output file name.
pub const DEFAULT_CROP_FILE: &str = "recorte.bmp";
/// Default array output file name.
pub const DEFAULT_ARRAY_FILE: &str = "imagem_vetor.h";

/// Where each artifact is written.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutputPaths {
    pub grayscale: PathBuf,
    pub crop: PathBuf,
    pub array: PathBuf,
}

impl OutputPaths {
    /// `<stem>_gs.bmp` next to `source`, plus the default crop and array
    /// names in the current directory.
    pub fn for_source(source: &Path) -> Self {
        Self {
            grayscale: grayscale_path(source),
            crop: PathBuf::from(DEFAULT_CROP_FILE),
            array: PathBuf::from(DEFAULT_ARRAY_FILE),
        }
    }

    /// Put all three artifacts in `dir`, keeping their file names.
    pub fn in_dir(self, dir: &Path) -> Self {
        let rebase = |p: PathBuf| match p.file_name() {
            Some(name) => dir.join(name),
            None => dir.join(p),
        };
        Self {
            grayscale: rebase(self.grayscale),
            crop: rebase(self.crop),
            array: rebase(self.array),
        }
    }
}

/// `photo.bmp` becomes `photo_gs.bmp` in the same directory.
pub fn grayscale_path(source: &Path) -> PathBuf {
    let stem = source
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    source.with_file_name(format!("{stem}_gs.bmp"))
}

/// Write `bytes` to `path` through a sibling temporary file.
///
/// The final name only appears once the write has completed; on failure the
/// temporary is removed and nothing is left under `path`.
pub fn persist(path: &Path, bytes: &[u8]) -> Result<(), MonocropError> {
    let io_err = |source: std::io::Error| MonocropError::Io {
        path: path.to_path_buf(),
        source,
    };
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let tmp = path.with_file_name(format!(".{file_name}.partial"));

    if let Err(e) = std::fs::write(&tmp, bytes) {
        let _ = std::fs::remove_file(&tmp);
        return Err(io_err(e));
    }
    if let Err(e) = std::fs::rename(&tmp, path) {
        let _ = std::fs::remove_file(&tmp);
        return Err(io_err(e));
    }
    debug!("wrote {} bytes to {}", bytes.len(), path.display());
    Ok(())
}

/// Outcome of [`RunRequest::run`], one entry per artifact.
#[derive(Debug)]
pub struct RunReport {
    /// Header of the source image (dimensions for status output).
    pub header: BmpHeader,
    pub grayscale: Result<PathBuf, MonocropError>,
    pub crop: Result<PathBuf, MonocropError>,
    pub array: Result<PathBuf, MonocropError>,
}

impl RunReport {
    /// Whether every artifact was written.
    pub fn is_complete(&self) -> bool {
        self.grayscale.is_ok() && self.crop.is_ok() && self.array.is_ok()
    }
}

/// Builder for a file-to-files run.
#[derive(Clone, Debug)]
pub struct RunRequest<'a> {
    source: PathBuf,
    threshold: i32,
    region: CropRegion,
    array_source: ArraySource,
    array_encoder: ArrayEncoder<'a>,
    outputs: OutputPaths,
    limits: Option<&'a Limits>,
}

impl<'a> RunRequest<'a> {
    /// Start a run over `source`, writing to [`OutputPaths::for_source`].
    pub fn new(source: impl Into<PathBuf>) -> Self {
        let source = source.into();
        let outputs = OutputPaths::for_source(&source);
        Self {
            source,
            threshold: 128,
            region: CropRegion::default(),
            array_source: ArraySource::default(),
            array_encoder: ArrayEncoder::default(),
            outputs,
            limits: None,
        }
    }

    pub fn threshold(mut self, threshold: i32) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn origin(mut self, x: i32, y: i32) -> Self {
        self.region = CropRegion::new(x, y);
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

    pub fn outputs(mut self, outputs: OutputPaths) -> Self {
        self.outputs = outputs;
        self
    }

    pub fn with_limits(mut self, limits: &'a Limits) -> Self {
        self.limits = Some(limits);
        self
    }

    /// Read the source and write every artifact that can be produced.
    ///
    /// Returns `Err` only when the source cannot be read or decoded; failures
    /// of individual outputs are reported in the [`RunReport`].
    pub fn run(self) -> Result<RunReport, MonocropError> {
        let data = std::fs::read(&self.source).map_err(|source| MonocropError::Io {
            path: self.source.clone(),
            source,
        })?;

        let mut request = ProcessRequest::new(&data)
            .threshold(self.threshold)
            .region(self.region)
            .array_source(self.array_source)
            .array_encoder(self.array_encoder);
        if let Some(limits) = self.limits {
            request = request.with_limits(limits);
        }
        let output = request.process()?;
        info!(
            "{}: {}x{} pixels",
            self.source.display(),
            output.header().width,
            output.header().height
        );

        let outputs = self.outputs;
        let grayscale = write_step("grayscale", outputs.grayscale, Ok(output.grayscale_bytes()));
        let crop = write_step("crop", outputs.crop, output.crop.map(|c| c.encode()));
        let array = write_step("array", outputs.array, output.array.map(String::into_bytes));

        Ok(RunReport {
            header: output.source.header,
            grayscale,
            crop,
            array,
        })
    }
}

fn write_step(
    step: &str,
    path: PathBuf,
    bytes: Result<Vec<u8>, MonocropError>,
) -> Result<PathBuf, MonocropError> {
    let written = bytes.and_then(|b| persist(&path, &b));
    match written {
        Ok(()) => {
            info!("{step} saved to {}", path.display());
            Ok(path)
        }
        Err(e) => {
            warn!("{step} not saved: {e}");
            Err(e)
        }
    }
}
