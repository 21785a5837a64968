//! # ocrclean
//!
//! Correction of OCR errors in historical texts.
//!
//! ## Getting started
//!
//! ```sh
//! ocrclean 0.1.0
//! OCR correction tool.
//!
//! USAGE:
//!     ocrclean <SUBCOMMAND>
//!
//! FLAGS:
//!     -h, --help       Prints help information
//!     -V, --version    Prints version information
//!
//! SUBCOMMANDS:
//!     clean    Apply the built-in substitution rules to a text file
//!     help     Prints this message or the help of the given subcommand(s)
//!     run      Correct a text file batch by batch through a text generation API
//! ```
//!
//! `run` needs an API key in `ANTHROPIC_API_KEY` (see `--api-key-var`).
use structopt::StructOpt;

use ocrclean::cli;
use ocrclean::config::Config;
use ocrclean::error::Error;
use ocrclean::oracle::MessagesClient;
use ocrclean::pipeline::{CorrectionPipeline, Pipeline, RunOutcome, StdinConfirm};
use ocrclean::processing;

#[macro_use]
extern crate log;

fn run(opt: cli::OcrClean) -> Result<(), Error> {
    match opt {
        cli::OcrClean::Run(r) => {
            // credential is checked before anything is read or written
            let oracle_config = r.oracle_config()?;
            let config = Config::from(&r);
            let client = MessagesClient::new(oracle_config)?;

            let p = CorrectionPipeline::new(config, client, StdinConfirm);
            match p.run()? {
                RunOutcome::Completed(report) => {
                    println!(
                        "Processed {} lines in {} batches ({} kept uncorrected)",
                        report.lines_processed,
                        report.batches_completed,
                        report.nb_fallbacks()
                    );
                    println!(
                        "Input size: {} bytes, output size: {} bytes",
                        report.input_bytes, report.output_bytes
                    );
                }
                RunOutcome::Cancelled => println!("Cancelled."),
            }
        }

        cli::OcrClean::Clean(c) => {
            let report = processing::clean_file(&c.input, &c.output)?;
            println!(
                "{} -> {} characters, {} -> {} lines",
                report.chars_before, report.chars_after, report.lines_before, report.lines_after
            );
        }
    };
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let opt = cli::OcrClean::from_args();
    debug!("cli args\n{:#?}", opt);

    if let Err(e) = run(opt) {
        error!("{}", e);
        std::process::exit(1);
    }
}
