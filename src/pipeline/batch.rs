//! Chunk correction.
use std::time::{Duration, Instant};

use log::{info, warn};

use crate::io::Chunk;
use crate::oracle::{Oracle, Usage};

/// Outcome of the correction of a single [Chunk].
///
/// When the oracle failed, `text` is the original chunk text and `fallback` holds the reason.
#[derive(Debug, Clone, PartialEq)]
pub struct CorrectionResult {
    pub index: usize,
    pub text: String,
    pub elapsed: Duration,
    pub input_chars: usize,
    pub output_chars: usize,
    pub usage: Option<Usage>,
    pub fallback: Option<String>,
}

impl CorrectionResult {
    pub fn is_fallback(&self) -> bool {
        self.fallback.is_some()
    }
}

/// Sends chunks to an [Oracle], one at a time.
///
/// Oracle failures never stop the processing: the chunk is returned uncorrected.
/// No retry is attempted.
pub struct BatchProcessor<O> {
    oracle: O,
}

impl<O> BatchProcessor<O>
where
    O: Oracle,
{
    pub fn new(oracle: O) -> Self {
        Self { oracle }
    }

    pub fn process(&self, chunk: &Chunk) -> CorrectionResult {
        let text = chunk.text();
        let input_chars = text.chars().count();

        info!(
            "batch {}/{}: {} lines, {} characters",
            chunk.index(),
            chunk.total(),
            chunk.nb_lines(),
            input_chars
        );

        let start = Instant::now();
        let res = self.oracle.correct(&text);
        let elapsed = start.elapsed();

        match res {
            Ok(correction) => {
                info!(
                    "batch {}/{}: cleaned in {:.1}s",
                    chunk.index(),
                    chunk.total(),
                    elapsed.as_secs_f64()
                );
                if let Some(usage) = &correction.usage {
                    info!(
                        "batch {}/{}: {} input tokens, {} output tokens",
                        chunk.index(),
                        chunk.total(),
                        usage.input_tokens,
                        usage.output_tokens
                    );
                }
                CorrectionResult {
                    index: chunk.index(),
                    output_chars: correction.text.chars().count(),
                    text: correction.text,
                    elapsed,
                    input_chars,
                    usage: correction.usage,
                    fallback: None,
                }
            }
            Err(e) => {
                warn!(
                    "batch {}/{}: correction failed ({}), keeping original text",
                    chunk.index(),
                    chunk.total(),
                    e
                );
                CorrectionResult {
                    index: chunk.index(),
                    text,
                    elapsed,
                    input_chars,
                    output_chars: input_chars,
                    usage: None,
                    fallback: Some(e.to_string()),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::oracle::{self, Correction};

    struct Upper;
    impl Oracle for Upper {
        fn correct(&self, text: &str) -> Result<Correction, oracle::Error> {
            Ok(Correction::new(
                text.to_uppercase(),
                Some(Usage {
                    input_tokens: 4,
                    output_tokens: 2,
                }),
            ))
        }
    }

    struct Failing;
    impl Oracle for Failing {
        fn correct(&self, _: &str) -> Result<Correction, oracle::Error> {
            Err(oracle::Error::Malformed("nope".to_string()))
        }
    }

    fn chunk() -> Chunk {
        Chunk::new(2, 3, vec!["dupà\n".to_string(), "càtre".to_string()])
    }

    #[test_log::test]
    fn corrected() {
        let bp = BatchProcessor::new(Upper);
        let res = bp.process(&chunk());

        assert_eq!(res.index, 2);
        assert_eq!(res.text, "DUPÀ\nCÀTRE");
        assert_eq!(res.input_chars, 10);
        assert_eq!(res.output_chars, 10);
        assert_eq!(res.usage.map(|u| u.input_tokens), Some(4));
        assert!(!res.is_fallback());
    }

    #[test_log::test]
    fn fallback_keeps_text() {
        let bp = BatchProcessor::new(Failing);
        let res = bp.process(&chunk());

        assert_eq!(res.text, "dupà\ncàtre");
        assert!(res.is_fallback());
        assert!(res.fallback.unwrap().contains("nope"));
        assert_eq!(res.usage, None);
    }

    #[test]
    fn by_reference() {
        let oracle = Upper;
        let bp = BatchProcessor::new(&oracle);
        assert_eq!(bp.process(&chunk()).text, "DUPÀ\nCÀTRE");
    }
}
