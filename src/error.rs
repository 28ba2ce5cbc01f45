use thiserror::Error;

pub type GraphResult<T> = Result<T, GraphError>;

#[derive(Debug, Error)]
pub enum GraphError {
    /// A drawable surface could not be acquired. This is a setup defect on the
    /// caller's side and is never recovered silently.
    #[error("drawable surface unavailable: {reason}")]
    SurfaceUnavailable { reason: String },

    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid data: {0}")]
    InvalidData(String),
}
