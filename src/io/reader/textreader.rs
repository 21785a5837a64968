/*! Chunked line reading

[ChunkReader] implements [Iterator] and yields [Chunk]s of at most `chunk_size` lines.
Lines keep their terminators, so that concatenating every chunk in order gives back the source document byte for byte.

Only one chunk is held in memory at a time.
!*/
use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::{Path, PathBuf},
};

use log::debug;

use crate::error::Error;

/// A contiguous group of lines of a document.
///
/// `index` is 1-based, `total` is the number of chunks the whole document is split into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chunk {
    index: usize,
    total: usize,
    lines: Vec<String>,
}

impl Chunk {
    pub fn new(index: usize, total: usize, lines: Vec<String>) -> Self {
        Self {
            index,
            total,
            lines,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn nb_lines(&self) -> usize {
        self.lines.len()
    }

    /// Concatenate lines, keeping original line terminators.
    pub fn text(&self) -> String {
        self.lines.concat()
    }
}

/// Number of chunks needed to hold `nb_lines` lines, `chunk_size` lines at a time.
pub fn count_chunks(nb_lines: usize, chunk_size: usize) -> usize {
    if chunk_size == 0 {
        return 0;
    }
    (nb_lines + chunk_size - 1) / chunk_size
}

/// Count lines of the file at `src`.
///
/// This is a full read of the file. Invalid UTF-8 is reported as an error,
/// the same way [ChunkReader] would report it.
pub fn count_lines(src: &Path) -> Result<usize, Error> {
    let f = File::open(src)?;
    let br = BufReader::new(f);
    let nb_lines = br.lines().try_fold(0usize, |acc, line| line.map(|_| acc + 1))?;
    debug!("{:?}: {} lines", src, nb_lines);
    Ok(nb_lines)
}

/// Reader that yields [Chunk]s of newline-terminated lines.
#[derive(Debug)]
pub struct ChunkReader<T> {
    path: PathBuf,
    br: T,
    chunk_size: usize,
    total: usize,
    index: usize,
    done: bool,
}

impl ChunkReader<BufReader<File>> {
    /// Open `src` for chunked reading.
    ///
    /// `total` is the expected chunk count, and is only used to tag chunks.
    /// See [count_lines] and [count_chunks].
    pub fn open(src: &Path, chunk_size: usize, total: usize) -> Result<Self, Error> {
        let f = File::open(src)?;
        let mut reader = Self::new(BufReader::new(f), chunk_size, total);
        reader.path = src.to_path_buf();
        Ok(reader)
    }
}

impl<T> ChunkReader<T>
where
    T: BufRead,
{
    pub fn new(br: T, chunk_size: usize, total: usize) -> Self {
        Self {
            path: PathBuf::new(),
            br,
            chunk_size,
            total,
            index: 0,
            done: false,
        }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    /// Get next line (read until `\n`, terminator included)
    fn next_line(&mut self) -> Option<Result<String, Error>> {
        let mut s = String::new();
        match self.br.read_line(&mut s) {
            Ok(0) => None,
            Ok(_) => Some(Ok(s)),
            Err(e) => Some(Err(Error::Io(e))),
        }
    }
}

impl<T> Iterator for ChunkReader<T>
where
    T: BufRead,
{
    type Item = Result<Chunk, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done || self.chunk_size == 0 {
            return None;
        }

        let mut lines = Vec::with_capacity(self.chunk_size);
        while lines.len() < self.chunk_size {
            match self.next_line() {
                Some(Ok(line)) => lines.push(line),
                Some(Err(e)) => {
                    // a read error leaves the stream in an unknown position
                    self.done = true;
                    return Some(Err(e));
                }
                None => {
                    self.done = true;
                    break;
                }
            }
        }

        if lines.is_empty() {
            return None;
        }

        self.index += 1;
        // the file may have grown since it was counted
        let total = self.total.max(self.index);
        Some(Ok(Chunk::new(self.index, total, lines)))
    }
}
