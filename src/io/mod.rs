/*!
# IO utilities

Chunked reading of source documents and append-only writing of corrected text.
!*/
pub mod reader;
pub mod writer;

pub use reader::{Chunk, ChunkReader};
pub use writer::AppendingSink;
