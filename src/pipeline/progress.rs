//! Run progress and final report.
use std::time::Duration;

use super::batch::CorrectionResult;
use crate::oracle::Usage;

/// Cumulative counters of a running correction.
///
/// Counters only grow.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ProgressState {
    pub total_lines: usize,
    pub total_chunks: usize,
    pub lines_processed: usize,
    pub chunks_completed: usize,
    pub fallback_chunks: Vec<usize>,
    pub usage: Usage,
}

impl ProgressState {
    pub fn new(total_lines: usize, total_chunks: usize) -> Self {
        Self {
            total_lines,
            total_chunks,
            ..Default::default()
        }
    }

    /// Account for a saved chunk of `nb_lines` lines.
    pub fn record(&mut self, nb_lines: usize, result: &CorrectionResult) {
        self.lines_processed += nb_lines;
        self.chunks_completed += 1;
        if result.is_fallback() {
            self.fallback_chunks.push(result.index);
        }
        if let Some(usage) = &result.usage {
            self.usage.input_tokens += usage.input_tokens;
            self.usage.output_tokens += usage.output_tokens;
        }
    }

    /// Percentage of processed lines. An empty document is done from the start.
    pub fn percent(&self) -> f64 {
        if self.total_lines == 0 {
            return 100.0;
        }
        self.lines_processed as f64 * 100.0 / self.total_lines as f64
    }
}

/// Summary of a completed run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    pub lines_processed: usize,
    pub batches_completed: usize,
    /// writes made to the destination
    pub appends: u64,
    /// indices of chunks that were kept uncorrected
    pub fallback_chunks: Vec<usize>,
    pub usage: Usage,
    pub input_bytes: u64,
    pub output_bytes: u64,
    pub elapsed: Duration,
}

impl RunReport {
    pub fn new(
        progress: ProgressState,
        appends: u64,
        input_bytes: u64,
        output_bytes: u64,
        elapsed: Duration,
    ) -> Self {
        Self {
            lines_processed: progress.lines_processed,
            batches_completed: progress.chunks_completed,
            appends,
            fallback_chunks: progress.fallback_chunks,
            usage: progress.usage,
            input_bytes,
            output_bytes,
            elapsed,
        }
    }

    pub fn nb_fallbacks(&self) -> usize {
        self.fallback_chunks.len()
    }
}
