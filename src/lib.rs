/*! # ocrclean

Correction of OCR'd historical texts.

This project can be used both as a tool, or as a lib to integrate chunked correction into other projects.

- [pipeline::CorrectionPipeline] streams a document, chunk by chunk, through a correction [oracle::Oracle]
  and appends results to a destination file.
- [processing::clean] applies a fixed table of substitution rules to a whole file.
!*/
pub mod cli;
pub mod config;
pub mod error;
pub mod io;
pub mod oracle;
pub mod pipeline;
pub mod processing;
pub mod transformers;
