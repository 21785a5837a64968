//! Append-only text writer.
use log::{debug, info};
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::Error;

/// Append-only file sink.
///
/// The destination is opened in append mode, written, flushed and closed on each
/// [AppendingSink::append], so that a crash never loses a chunk that was reported as saved.
///
/// Note: nothing is created on construction. Use [AppendingSink::initialize] to truncate
/// (or create) the destination.
#[derive(Debug)]
pub struct AppendingSink {
    dst: PathBuf,
    nb_appends: u64,
    bytes_written: u64,
}

impl AppendingSink {
    pub fn new(dst: &Path) -> Self {
        Self {
            dst: dst.to_path_buf(),
            nb_appends: 0,
            bytes_written: 0,
        }
    }

    /// Number of successful appends since creation/last initialization.
    pub fn nb_appends(&self) -> u64 {
        self.nb_appends
    }

    /// Number of bytes appended since creation/last initialization.
    pub fn bytes_written(&self) -> u64 {
        self.bytes_written
    }

    /// Truncate or create the destination file.
    ///
    /// Calling it several times in a row is fine and leaves an empty file.
    pub fn initialize(&mut self) -> Result<(), Error> {
        info!("resetting {:?}", self.dst);
        File::create(&self.dst)?;
        self.nb_appends = 0;
        self.bytes_written = 0;
        Ok(())
    }

    /// Append `text` to the destination, adding a trailing `\n` if missing.
    ///
    /// Returns the number of bytes written.
    pub fn append(&mut self, text: &str) -> Result<u64, Error> {
        let mut options = OpenOptions::new();
        options.append(true).create(true);

        // file is closed when dropped, error paths included.
        let mut f = options.open(&self.dst)?;
        f.write_all(text.as_bytes())?;
        let mut written = text.len() as u64;
        if !text.ends_with('\n') {
            f.write_all(b"\n")?;
            written += 1;
        }
        f.flush()?;
        f.sync_data()?;

        self.nb_appends += 1;
        self.bytes_written += written;
        debug!(
            "appended {} bytes to {:?} (append #{})",
            written, self.dst, self.nb_appends
        );
        Ok(written)
    }
}
