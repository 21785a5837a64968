/*! Correction oracles.

An oracle takes some text and returns a best-effort corrected version of it.
Oracles implement [Oracle] and report failures through [Error], leaving the decision to fall back to the caller.

[MessagesClient] is the HTTP implementation, talking to a Messages-style text generation API.
!*/
mod client;
pub mod prompt;

use std::fmt;

pub use client::MessagesClient;

/// Token usage reported by the backend.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Usage {
    pub input_tokens: u64,
    pub output_tokens: u64,
}

/// Corrected text along with backend usage, if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Correction {
    pub text: String,
    pub usage: Option<Usage>,
}

impl Correction {
    pub fn new(text: String, usage: Option<Usage>) -> Self {
        Self { text, usage }
    }
}

/// Something that corrects text.
pub trait Oracle {
    fn correct(&self, text: &str) -> Result<Correction, Error>;
}

impl<T: Oracle + ?Sized> Oracle for &T {
    fn correct(&self, text: &str) -> Result<Correction, Error> {
        (**self).correct(text)
    }
}

impl<T: Oracle + ?Sized> Oracle for Box<T> {
    fn correct(&self, text: &str) -> Result<Correction, Error> {
        (**self).correct(text)
    }
}

#[derive(Debug)]
pub enum Error {
    /// Transport level failure (connection, timeout, TLS...)
    Http(reqwest::Error),
    /// Backend answered with a non-success status.
    Status { code: u16, body: String },
    /// Response could not be understood.
    Malformed(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Http(e) => write!(f, "request failed: {}", e),
            Error::Status { code, body } => write!(f, "status {}: {}", code, body),
            Error::Malformed(msg) => write!(f, "malformed response: {}", msg),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Http(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Http(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Malformed(err.to_string())
    }
}
