use crate::codec::Encoder;
use crate::error::{Result, TaskError};
use crate::io::open_writer;
use crate::record::Record;
use std::fs::File;
use std::fmt;
use std::io::{self, BufWriter};
use std::path::{Path, PathBuf};

/// Writes the task's output artifact: one encoded (key, reduced value) pair
/// per group, in the order handed in, then an explicit flush before the task
/// counts as complete.
///
/// Creation truncates any existing artifact. There is no temp-file-then-
/// rename step; a crash mid-write leaves a truncated artifact the caller
/// must discard.
pub struct ResultWriter {
    path: PathBuf,
    encoder: Encoder<BufWriter<File>>,
}

impl ResultWriter {
    pub fn create(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let out = open_writer(&path).map_err(|source| TaskError::SinkUnavailable {
            path: path.clone(),
            source,
        })?;
        Ok(Self {
            path,
            encoder: Encoder::new(out),
        })
    }

    pub fn write(&mut self, key: &str, value: String) -> Result<()> {
        let record = Record {
            key: key.to_owned(),
            value,
        };
        self.encoder
            .encode_next(&record)
            .map_err(|source| self.write_error(source))
    }

    /// Flushes and closes the artifact.
    pub fn finish(mut self) -> Result<()> {
        self.encoder
            .flush()
            .map_err(|source| self.write_error(source))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write_error(&self, source: io::Error) -> TaskError {
        TaskError::SinkWrite {
            path: self.path.clone(),
            source,
        }
    }
}

impl fmt::Debug for ResultWriter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResultWriter")
            .field("path", &self.path)
            .finish()
    }
}
