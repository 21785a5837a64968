//! OCR correction pipeline
//!
//! Streams a document through a correction [Oracle], chunk by chunk, and appends
//! each corrected chunk to the destination as soon as it is produced.
//!
//! # Processing
//! 1. The source document is read once to count lines (and therefore chunks).
//! 1. Unless auto start is enabled, the user is asked to confirm. Declining ends the run
//!    without touching the destination.
//! 1. The destination is truncated.
//! 1. Each chunk is corrected (falling back to the original text on oracle failure),
//!    appended to the destination, then the pipeline pauses before the next oracle call.
//!    There is no pause after the last chunk.
//!
//! Everything is sequential: chunks are written in document order, and there is
//! never more than one oracle call in flight.
use std::thread;
use std::time::Instant;

use log::{debug, info, warn};

use super::batch::BatchProcessor;
use super::confirm::Confirm;
use super::progress::{ProgressState, RunReport};
use super::Pipeline;
use crate::config::Config;
use crate::error::Error;
use crate::io::reader::{count_chunks, count_lines};
use crate::io::{AppendingSink, ChunkReader};
use crate::oracle::Oracle;

/// Terminal state of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Completed,
    Cancelled,
}

/// Terminal outcome of a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    Completed(RunReport),
    Cancelled,
}

impl RunOutcome {
    pub fn state(&self) -> RunState {
        match self {
            RunOutcome::Completed(_) => RunState::Completed,
            RunOutcome::Cancelled => RunState::Cancelled,
        }
    }
}

pub struct CorrectionPipeline<O, C> {
    config: Config,
    processor: BatchProcessor<O>,
    confirm: C,
}

impl<O, C> CorrectionPipeline<O, C>
where
    O: Oracle,
    C: Confirm,
{
    pub fn new(config: Config, oracle: O, confirm: C) -> Self {
        Self {
            config,
            processor: BatchProcessor::new(oracle),
            confirm,
        }
    }

    /// Correct and save every chunk, in order.
    fn process_chunks(
        &self,
        sink: &mut AppendingSink,
        progress: &mut ProgressState,
    ) -> Result<(), Error> {
        let reader = ChunkReader::open(
            &self.config.input_path,
            self.config.chunk_size_lines,
            progress.total_chunks,
        )?;
        let mut chunks = reader.peekable();

        while let Some(chunk) = chunks.next() {
            // a read error means no further chunk can be produced
            let chunk = chunk?;
            let result = self.processor.process(&chunk);

            // a chunk that can't be saved must stop the run
            sink.append(&result.text)?;
            progress.record(chunk.nb_lines(), &result);

            info!(
                "batch {}/{} saved. Progress: {}/{} lines ({:.1}%)",
                chunk.index(),
                chunk.total(),
                progress.lines_processed,
                progress.total_lines,
                progress.percent()
            );

            if chunks.peek().is_some() && !self.config.inter_call_delay.is_zero() {
                debug!(
                    "pausing {:?} before next batch",
                    self.config.inter_call_delay
                );
                thread::sleep(self.config.inter_call_delay);
            }
        }

        Ok(())
    }
}

impl<O, C> Pipeline<RunOutcome> for CorrectionPipeline<O, C>
where
    O: Oracle,
    C: Confirm,
{
    fn run(&self) -> Result<RunOutcome, Error> {
        self.config.validate()?;

        info!("analyzing file: {:?}", self.config.input_path);
        let total_lines = count_lines(&self.config.input_path)?;
        let total_chunks = count_chunks(total_lines, self.config.chunk_size_lines);
        info!(
            "{} lines, {} lines per batch, {} batches. Output file: {:?}",
            total_lines, self.config.chunk_size_lines, total_chunks, self.config.output_path
        );

        if self.config.auto_start {
            info!("auto-start mode enabled");
        } else if !self.confirm.confirm("Start processing?")? {
            info!("cancelled");
            return Ok(RunOutcome::Cancelled);
        }

        let started = Instant::now();
        let mut sink = AppendingSink::new(&self.config.output_path);
        sink.initialize()?;

        let mut progress = ProgressState::new(total_lines, total_chunks);
        self.process_chunks(&mut sink, &mut progress)?;

        let input_bytes = std::fs::metadata(&self.config.input_path)?.len();
        let output_bytes = std::fs::metadata(&self.config.output_path)?.len();
        let report = RunReport::new(
            progress,
            sink.nb_appends(),
            input_bytes,
            output_bytes,
            started.elapsed(),
        );

        info!(
            "complete: {} lines in {} batches ({:.1}s)",
            report.lines_processed,
            report.batches_completed,
            report.elapsed.as_secs_f64()
        );
        info!(
            "input size: {} bytes, output size: {} bytes, tokens in/out: {}/{}",
            report.input_bytes,
            report.output_bytes,
            report.usage.input_tokens,
            report.usage.output_tokens
        );
        if report.nb_fallbacks() > 0 {
            warn!(
                "{} batches kept uncorrected: {:?}",
                report.nb_fallbacks(),
                report.fallback_chunks
            );
        }

        Ok(RunOutcome::Completed(report))
    }
}
