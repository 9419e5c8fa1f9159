use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("random source exhausted after {drawn} samples")]
    RandomSourceExhausted { drawn: usize },

    #[error("chart instance is disposed")]
    Disposed,
}
