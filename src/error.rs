use thiserror::Error;

pub type FunnelResult<T> = Result<T, FunnelError>;

#[derive(Debug, Error)]
pub enum FunnelError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("invalid color `{0}`: expected `transparent` or a `#rgb`/`#rrggbb`/`#rrggbbaa` hex code")]
    InvalidColor(String),

    #[error("cannot render: too many slices (count: {count}, limit: {limit})")]
    TooManySlices { count: usize, limit: usize },
}
