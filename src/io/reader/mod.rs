/*! Document reading utilities

Documents are never loaded as a whole: [ChunkReader] streams them as groups of lines.
!*/
mod textreader;

pub use textreader::{count_chunks, count_lines, Chunk, ChunkReader};
