use std::fmt::{Display, Formatter, Result};

#[derive(Debug)]
pub enum Error {
    Http(ureq::Error),
    Json(serde_json::Error),
    Io(std::io::Error),
    InvalidFeed(String),
}

impl std::error::Error for Error {}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Error::Http(e) => write!(f, "request failed: {}", e),
            Error::Json(e) => write!(f, "failed to decode feed: {}", e),
            Error::Io(e) => write!(f, "i/o error: {}", e),
            Error::InvalidFeed(e) => write!(f, "invalid feed: {}", e),
        }
    }
}

impl From<ureq::Error> for Error {
    fn from(ureq_error: ureq::Error) -> Self {
        Error::Http(ureq_error)
    }
}

impl From<serde_json::Error> for Error {
    fn from(serde_json_error: serde_json::Error) -> Self {
        Error::Json(serde_json_error)
    }
}

impl From<std::io::Error> for Error {
    fn from(io_error: std::io::Error) -> Self {
        Error::Io(io_error)
    }
}
