//! Command line arguments and parameters management/parsing.
use std::path::PathBuf;
use std::time::Duration;

use structopt::StructOpt;

use crate::config::{
    Config, OracleConfig, DEFAULT_API_KEY_VAR, DEFAULT_ENDPOINT, DEFAULT_INPUT_PATH,
    DEFAULT_MODEL, DEFAULT_OUTPUT_PATH,
};
use crate::error::Error;

#[derive(Debug, StructOpt)]
#[structopt(name = "ocrclean", about = "OCR correction tool.")]
/// Holds every command that is callable by the `ocrclean` command.
pub enum OcrClean {
    #[structopt(about = "Correct a text file batch by batch through a text generation API")]
    Run(Run),
    #[structopt(about = "Apply the built-in substitution rules to a text file")]
    Clean(Clean),
}

#[derive(Debug, StructOpt)]
/// Run command and parameters.
///
/// ```sh
/// USAGE:
///     ocrclean run [FLAGS] [OPTIONS] [ARGS]
///
/// FLAGS:
///     -y, --auto       skip confirmation prompt
///
/// OPTIONS:
///     -s, --chunk-size <chunk-size>      lines per batch [default: 2000]
///         --delay <delay>                seconds to wait between two batches [default: 2]
///
/// ARGS:
///     <input>     source text file [default: raw/input.txt]
///     <output>    corrected text destination [default: output.txt]
/// ```
pub struct Run {
    #[structopt(
        parse(from_os_str),
        help = "source text file",
        default_value = DEFAULT_INPUT_PATH
    )]
    pub input: PathBuf,
    #[structopt(
        parse(from_os_str),
        help = "corrected text destination",
        default_value = DEFAULT_OUTPUT_PATH
    )]
    pub output: PathBuf,
    #[structopt(short = "y", long = "auto", help = "skip confirmation prompt")]
    pub auto: bool,
    #[structopt(
        short = "s",
        long = "chunk-size",
        help = "lines per batch",
        default_value = "2000"
    )]
    pub chunk_size: usize,
    #[structopt(
        long = "delay",
        help = "seconds to wait between two batches",
        default_value = "2"
    )]
    pub delay: u64,
    #[structopt(long = "model", help = "model name", default_value = DEFAULT_MODEL)]
    pub model: String,
    #[structopt(
        long = "max-tokens",
        help = "maximum output size (tokens) per batch",
        default_value = "16000"
    )]
    pub max_tokens: u32,
    #[structopt(long = "endpoint", help = "API base url", default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,
    #[structopt(
        long = "api-key-var",
        help = "environment variable holding the API key",
        default_value = DEFAULT_API_KEY_VAR
    )]
    pub api_key_var: String,
    #[structopt(
        parse(from_os_str),
        long = "prompt",
        help = "file replacing the built-in correction instructions"
    )]
    pub prompt: Option<PathBuf>,
}

impl Run {
    /// Build the oracle configuration, reading the credential from the environment.
    pub fn oracle_config(&self) -> Result<OracleConfig, Error> {
        let mut config = OracleConfig::from_env(&self.api_key_var)?;
        config.endpoint = self.endpoint.clone();
        config.model = self.model.clone();
        config.max_tokens = self.max_tokens;
        if let Some(prompt) = &self.prompt {
            config.load_instructions(prompt)?;
        }
        Ok(config)
    }
}

impl From<&Run> for Config {
    fn from(r: &Run) -> Self {
        Config {
            input_path: r.input.clone(),
            output_path: r.output.clone(),
            chunk_size_lines: r.chunk_size,
            auto_start: r.auto,
            inter_call_delay: Duration::from_secs(r.delay),
        }
    }
}

#[derive(Debug, StructOpt)]
/// Clean command and parameters.
pub struct Clean {
    #[structopt(
        parse(from_os_str),
        help = "source text file",
        default_value = DEFAULT_INPUT_PATH
    )]
    pub input: PathBuf,
    #[structopt(
        parse(from_os_str),
        help = "cleaned text destination",
        default_value = DEFAULT_OUTPUT_PATH
    )]
    pub output: PathBuf,
}
