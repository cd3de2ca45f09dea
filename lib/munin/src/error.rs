use std::io;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, TaskError>;

/// Task-fatal failures surfaced to the caller (the external scheduler). The
/// task aborts on the first one; the only recovery is re-running the whole
/// task from scratch.
#[derive(Debug, Error)]
pub enum TaskError {
    /// An intermediate partition could not be opened.
    #[error("cannot open partition {}: {source}", path.display())]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A partition's content stopped conforming to the interchange format
    /// before end-of-stream.
    #[error("malformed record in {}: {source}", path.display())]
    DecodeCorrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The output artifact could not be created.
    #[error("cannot create output {}: {source}", path.display())]
    SinkUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Writing to an already-created output artifact failed; the artifact is
    /// left truncated and must be discarded.
    #[error("write to output {} failed: {source}", path.display())]
    SinkWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
