//! Error enum
use std::fmt;

use crate::oracle;

#[derive(Debug)]
pub enum Error {
    /// Missing credential, invalid setting. Fatal before any work is done.
    Config(String),
    Io(std::io::Error),
    Oracle(oracle::Error),
    Regex(regex::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Config(msg) => write!(f, "configuration error: {}", msg),
            Error::Io(e) => write!(f, "i/o error: {}", e),
            Error::Oracle(e) => write!(f, "oracle error: {}", e),
            Error::Regex(e) => write!(f, "invalid rule pattern: {}", e),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(e) => Some(e),
            Error::Oracle(e) => Some(e),
            Error::Regex(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Error {
        Error::Io(e)
    }
}

impl From<oracle::Error> for Error {
    fn from(e: oracle::Error) -> Error {
        Error::Oracle(e)
    }
}

impl From<regex::Error> for Error {
    fn from(e: regex::Error) -> Error {
        Error::Regex(e)
    }
}

impl From<dialoguer::Error> for Error {
    fn from(e: dialoguer::Error) -> Error {
        match e {
            dialoguer::Error::IO(e) => Error::Io(e),
        }
    }
}
