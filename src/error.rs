use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

/// Geometry, rendering and export failures.
#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("export failed: {0}")]
    Export(String),
}

pub type PresenterResult<T> = Result<T, PresenterError>;

/// Failures reported by the chart presenter and the page dispatch layer.
///
/// All of them are terminal for the triggering event: callers log them and
/// leave the page as it was.
#[derive(Debug, Error)]
pub enum PresenterError {
    #[error("drawing surface could not be resolved")]
    MissingSurface,

    #[error("chart data missing or malformed: {0}")]
    MissingData(String),

    #[error("chart kind change requested before initialization")]
    NotInitialized,

    #[error("unsupported chart kind `{0}`")]
    UnsupportedKind(String),

    #[error(transparent)]
    Render(#[from] ChartError),
}
