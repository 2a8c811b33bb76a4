use std::fs;
use std::path::{Path, PathBuf};

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use tracing::debug;

use crate::api::ChartPresenter;
use crate::error::{ChartError, ChartResult, PresenterError, PresenterResult};
use crate::render::{Renderer, SurfaceSnapshot};

pub const PNG_MIME_TYPE: &str = "image/png";

/// A PNG snapshot of the drawing surface, ready to be offered as a download.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartExport {
    filename: String,
    bytes: Vec<u8>,
}

impl ChartExport {
    #[must_use]
    pub fn filename(&self) -> &str {
        &self.filename
    }

    #[must_use]
    pub fn mime_type(&self) -> &'static str {
        PNG_MIME_TYPE
    }

    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// `data:image/png;base64,...` form usable as a link target.
    #[must_use]
    pub fn data_uri(&self) -> String {
        format!("data:{PNG_MIME_TYPE};base64,{}", STANDARD.encode(&self.bytes))
    }

    /// Writes the image into `dir` under its download filename.
    pub fn write_into(&self, dir: &Path) -> ChartResult<PathBuf> {
        let path = dir.join(&self.filename);
        fs::write(&path, &self.bytes).map_err(|err| {
            ChartError::Export(format!("failed to write `{}`: {err}", path.display()))
        })?;
        debug!(path = %path.display(), bytes = self.bytes.len(), "wrote chart export");
        Ok(path)
    }
}

/// Serializes `surface` to PNG under `filename`.
pub fn export_png<S: SurfaceSnapshot + ?Sized>(
    surface: &S,
    filename: &str,
) -> ChartResult<ChartExport> {
    if filename.trim().is_empty() {
        return Err(ChartError::Export(
            "export filename must not be empty".to_owned(),
        ));
    }
    let bytes = surface.encode_png()?;
    debug!(filename, bytes = bytes.len(), "exported chart surface");
    Ok(ChartExport {
        filename: filename.to_owned(),
        bytes,
    })
}

impl<R: Renderer + SurfaceSnapshot> ChartPresenter<R> {
    /// Snapshots the bound surface as it currently looks.
    pub fn export_png(&self, filename: &str) -> PresenterResult<ChartExport> {
        let surface = self.surface().ok_or(PresenterError::MissingSurface)?;
        Ok(export_png(surface, filename)?)
    }
}
