//! Streaming interchange format for intermediate partitions and output
//! artifacts: newline-separated JSON records. Self-delimiting, so a decoder
//! pulls one record at a time and detects end-of-stream without an
//! out-of-band length.

use crate::record::Record;
use serde_json::de::IoRead;
use serde_json::StreamDeserializer;
use std::io::{self, Read, Write};

pub struct Encoder<W: Write> {
    out: W,
}

impl<W: Write> Encoder<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Appends one record. The output is re-readable byte-for-byte by
    /// `Decoder`.
    pub fn encode_next(&mut self, record: &Record) -> io::Result<()> {
        serde_json::to_writer(&mut self.out, record).map_err(io::Error::from)?;
        self.out.write_all(b"\n")
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

pub struct Decoder<R: Read> {
    stream: StreamDeserializer<'static, IoRead<R>, Record>,
}

impl<R: Read> Decoder<R> {
    pub fn new(input: R) -> Self {
        Self {
            stream: serde_json::Deserializer::from_reader(input).into_iter(),
        }
    }

    /// Pulls the next record. `None` is the explicit end-of-stream signal;
    /// `Err` means the content stopped conforming to the format.
    pub fn decode_next(&mut self) -> Option<serde_json::Result<Record>> {
        self.stream.next()
    }
}

impl<R: Read> Iterator for Decoder<R> {
    type Item = serde_json::Result<Record>;

    fn next(&mut self) -> Option<Self::Item> {
        self.decode_next()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encode_all(records: &[Record]) -> Vec<u8> {
        let mut enc = Encoder::new(Vec::new());
        for record in records {
            enc.encode_next(record).unwrap();
        }
        enc.into_inner()
    }

    #[test]
    fn round_trip_preserves_records() {
        let records = vec![
            Record::new("alpha", "1"),
            Record::new("beta", ""),
            Record::new("", "empty key is a value like any other"),
            Record::new("gamma", "tab\tand\nnewline"),
        ];
        let bytes = encode_all(&records);
        let decoded: Vec<Record> = Decoder::new(bytes.as_slice())
            .collect::<serde_json::Result<_>>()
            .unwrap();
        assert_eq!(decoded, records);
    }

    #[test]
    fn wire_fields_match_upstream_encoders() {
        let bytes = encode_all(&[Record::new("k", "v")]);
        assert_eq!(bytes, b"{\"Key\":\"k\",\"Value\":\"v\"}\n");
    }

    #[test]
    fn empty_stream_signals_end_immediately() {
        let mut dec = Decoder::new(&b""[..]);
        assert!(dec.decode_next().is_none());
    }

    #[test]
    fn garbage_after_valid_records_is_an_error() {
        let mut bytes = encode_all(&[Record::new("a", "1")]);
        bytes.extend_from_slice(b"{definitely not json");
        let mut dec = Decoder::new(bytes.as_slice());
        assert!(dec.decode_next().unwrap().is_ok());
        assert!(dec.decode_next().unwrap().is_err());
    }
}
