//! Run configuration.
//!
//! Every tunable of a correction run lives here and is handed to the pipeline at construction.
//! [Config] and [OracleConfig] are built from command line arguments (see [crate::cli]),
//! the credential is read from the environment.
use std::path::{Path, PathBuf};
use std::time::Duration;

use log::debug;

use crate::error::Error;
use crate::oracle::prompt::CLEANING_PROMPT;

pub const DEFAULT_INPUT_PATH: &str = "raw/input.txt";
pub const DEFAULT_OUTPUT_PATH: &str = "output.txt";
pub const DEFAULT_CHUNK_SIZE: usize = 2000;
pub const DEFAULT_DELAY_SECS: u64 = 2;

pub const DEFAULT_API_KEY_VAR: &str = "ANTHROPIC_API_KEY";
pub const DEFAULT_ENDPOINT: &str = "https://api.anthropic.com";
pub const DEFAULT_MODEL: &str = "claude-sonnet-4-20250514";
pub const DEFAULT_MAX_TOKENS: u32 = 16000;
pub const DEFAULT_TIMEOUT_SECS: u64 = 600;

/// Pipeline configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    pub chunk_size_lines: usize,
    /// skip the confirmation prompt
    pub auto_start: bool,
    /// pause between two oracle calls
    pub inter_call_delay: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(DEFAULT_INPUT_PATH),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            chunk_size_lines: DEFAULT_CHUNK_SIZE,
            auto_start: false,
            inter_call_delay: Duration::from_secs(DEFAULT_DELAY_SECS),
        }
    }
}

impl Config {
    /// Check settings that would make the run pointless.
    pub fn validate(&self) -> Result<(), Error> {
        if self.chunk_size_lines == 0 {
            return Err(Error::Config(
                "chunk size must be at least one line".to_string(),
            ));
        }
        Ok(())
    }
}

/// Oracle client configuration.
#[derive(Clone, PartialEq)]
pub struct OracleConfig {
    pub endpoint: String,
    pub api_key: String,
    pub model: String,
    pub max_tokens: u32,
    pub temperature: f32,
    pub timeout: Duration,
    /// instructions sent along each chunk
    pub instructions: String,
}

// api_key is kept out of logs
impl std::fmt::Debug for OracleConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OracleConfig")
            .field("endpoint", &self.endpoint)
            .field("api_key", &"<redacted>")
            .field("model", &self.model)
            .field("max_tokens", &self.max_tokens)
            .field("temperature", &self.temperature)
            .field("timeout", &self.timeout)
            .field("instructions", &format!("{} chars", self.instructions.len()))
            .finish()
    }
}

impl OracleConfig {
    /// Default settings with the provided credential.
    pub fn with_api_key(api_key: String) -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            api_key,
            model: DEFAULT_MODEL.to_string(),
            max_tokens: DEFAULT_MAX_TOKENS,
            temperature: 0.0,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            instructions: CLEANING_PROMPT.to_string(),
        }
    }

    /// Read the credential from the `var` environment variable.
    ///
    /// An unset or blank variable is a [Error::Config].
    pub fn from_env(var: &str) -> Result<Self, Error> {
        let api_key = read_credential(var, |k| std::env::var(k).ok())?;
        Ok(Self::with_api_key(api_key))
    }

    /// Replace the instruction payload with the content of `path`.
    pub fn load_instructions(&mut self, path: &Path) -> Result<(), Error> {
        let instructions = std::fs::read_to_string(path).map_err(|e| {
            Error::Config(format!("could not read prompt file {:?}: {}", path, e))
        })?;
        if instructions.trim().is_empty() {
            return Err(Error::Config(format!("prompt file {:?} is empty", path)));
        }
        debug!("using instructions from {:?}", path);
        self.instructions = instructions;
        Ok(())
    }
}

/// Fetch a non-blank credential through `lookup`.
fn read_credential<F>(var: &str, lookup: F) -> Result<String, Error>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(var) {
        Some(key) if !key.trim().is_empty() => Ok(key.trim().to_string()),
        _ => Err(Error::Config(format!(
            "{} environment variable not set (export {}='your-key-here')",
            var, var
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let c = Config::default();
        assert_eq!(c.chunk_size_lines, 2000);
        assert_eq!(c.inter_call_delay, Duration::from_secs(2));
        assert!(!c.auto_start);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn zero_chunk_size() {
        let c = Config {
            chunk_size_lines: 0,
            ..Default::default()
        };
        assert!(matches!(c.validate(), Err(Error::Config(_))));
    }

    #[test]
    fn credential_lookup() {
        let found = read_credential("KEY", |_| Some(" abc \n".to_string())).unwrap();
        assert_eq!(found, "abc");

        assert!(matches!(
            read_credential("KEY", |_| None),
            Err(Error::Config(_))
        ));
        assert!(matches!(
            read_credential("KEY", |_| Some("   ".to_string())),
            Err(Error::Config(_))
        ));
    }

    #[test]
    fn missing_env_var() {
        let res = OracleConfig::from_env("OCRCLEAN_TEST_SURELY_UNSET_VARIABLE");
        assert!(matches!(res, Err(Error::Config(_))));
    }

    #[test]
    fn api_key_not_in_debug() {
        let c = OracleConfig::with_api_key("sk-secret".to_string());
        assert!(!format!("{:?}", c).contains("sk-secret"));
    }

    #[test]
    fn instructions_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prompt.txt");
        std::fs::write(&path, "Fix everything.").unwrap();

        let mut c = OracleConfig::with_api_key("k".to_string());
        c.load_instructions(&path).unwrap();
        assert_eq!(c.instructions, "Fix everything.");

        std::fs::write(&path, "\n").unwrap();
        assert!(matches!(
            c.load_instructions(&path),
            Err(Error::Config(_))
        ));
        assert!(matches!(
            c.load_instructions(&dir.path().join("nope")),
            Err(Error::Config(_))
        ));
    }
}
