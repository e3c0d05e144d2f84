use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("malformed figure document: {0}")]
    MalformedFigure(#[source] serde_json::Error),

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("render failed: {0}")]
    Render(String),
}
