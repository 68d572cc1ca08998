use std::fmt;
use std::path::PathBuf;

#[derive(Debug)]
pub enum Error {
    /// The source path does not resolve to a file.
    NotFound(PathBuf),
    /// Any other read or decode failure (permissions, invalid UTF-8, corrupt gzip data).
    IoError(std::io::Error),
    /// A stop-word list could not be parsed.
    ParserError(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::NotFound(path) => write!(f, "Not Found: {}", path.display()),
            Error::IoError(err) => write!(f, "IO Error: {}", err),
            Error::ParserError(msg) => write!(f, "Parser Error: {}", msg),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::IoError(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Error {
        Error::IoError(err)
    }
}

impl From<csv::Error> for Error {
    fn from(err: csv::Error) -> Error {
        if !err.is_io_error() {
            return Error::ParserError(err.to_string());
        }

        match err.into_kind() {
            csv::ErrorKind::Io(io_err) => Error::IoError(io_err),
            kind => Error::ParserError(format!("{:?}", kind)),
        }
    }
}
