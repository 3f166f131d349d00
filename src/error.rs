/// Errors that the codecs in this crate can signal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The output buffer has no room for the bytes or bits being written.
    BufferFull,
    /// The input ended before the bytes or bits being read were available.
    BufferUnderrun,
    /// The input bytes do not follow the encoding they claim to.
    OutOfSpec(String),
    /// The schema tree cannot be lowered to valid Parquet metadata.
    InvalidSchema(String),
    /// The combination of physical type and encoding is not supported.
    Unsupported(String),
}

impl std::error::Error for Error {}

impl std::fmt::Display for Error {
    fn fmt(&self, fmt: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Error::BufferFull => write!(fmt, "not enough space in the output buffer"),
            Error::BufferUnderrun => write!(fmt, "not enough bytes in the input buffer"),
            Error::OutOfSpec(message) => write!(fmt, "out of spec: {}", message),
            Error::InvalidSchema(message) => write!(fmt, "invalid schema: {}", message),
            Error::Unsupported(message) => write!(fmt, "unsupported: {}", message),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Error {
        match e.kind() {
            std::io::ErrorKind::WriteZero => Error::BufferFull,
            std::io::ErrorKind::UnexpectedEof => Error::BufferUnderrun,
            _ => Error::OutOfSpec(format!("underlying IO error: {}", e)),
        }
    }
}

/// A specialized `Result` for the errors of this crate.
pub type Result<T> = std::result::Result<T, Error>;
