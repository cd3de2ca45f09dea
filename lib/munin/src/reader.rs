use crate::codec::Decoder;
use crate::error::{Result, TaskError};
use crate::io::open_reader;
use crate::record::Record;
use std::fmt;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

/// Lazy, finite, forward-only view of one intermediate partition.
///
/// The underlying file handle is owned by this value and released when it is
/// dropped. Callers reading several partitions in sequence scope each reader
/// to its own loop iteration so at most one handle is open at a time.
pub struct PartitionRecords {
    path: PathBuf,
    decoder: Decoder<BufReader<File>>,
}

impl PartitionRecords {
    /// Opens one partition for decoding. A partition that cannot be opened
    /// is `SourceUnavailable`; content failures surface during iteration as
    /// `DecodeCorrupt`.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let input = open_reader(&path).map_err(|source| TaskError::SourceUnavailable {
            path: path.clone(),
            source,
        })?;
        Ok(Self {
            path,
            decoder: Decoder::new(input),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl fmt::Debug for PartitionRecords {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PartitionRecords")
            .field("path", &self.path)
            .finish()
    }
}

impl Iterator for PartitionRecords {
    type Item = Result<Record>;

    fn next(&mut self) -> Option<Self::Item> {
        let next = self.decoder.decode_next()?;
        Some(next.map_err(|source| TaskError::DecodeCorrupt {
            path: self.path.clone(),
            source,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::Encoder;
    use tempfile::TempDir;

    fn write_records(path: &Path, records: &[Record]) {
        let mut enc = Encoder::new(File::create(path).unwrap());
        for record in records {
            enc.encode_next(record).unwrap();
        }
        enc.flush().unwrap();
    }

    #[test]
    fn reads_a_partition_to_exhaustion() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("part");
        let records = vec![Record::new("a", "1"), Record::new("b", "2")];
        write_records(&path, &records);

        let read: Vec<Record> = PartitionRecords::open(&path)
            .unwrap()
            .collect::<Result<_>>()
            .unwrap();
        assert_eq!(read, records);
    }

    #[test]
    fn missing_partition_is_source_unavailable() {
        let dir = TempDir::new().unwrap();
        let err = PartitionRecords::open(dir.path().join("absent")).unwrap_err();
        assert!(matches!(err, TaskError::SourceUnavailable { .. }));
    }

    #[test]
    fn malformed_content_is_decode_corrupt() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("part");
        std::fs::write(&path, b"{\"Key\":\"a\",\"Value\":\"1\"}\nnot a record").unwrap();

        let mut reader = PartitionRecords::open(&path).unwrap();
        assert!(reader.next().unwrap().is_ok());
        let err = reader.next().unwrap().unwrap_err();
        assert!(matches!(err, TaskError::DecodeCorrupt { .. }));
    }
}
