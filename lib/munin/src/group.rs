use crate::record::Record;
use std::iter::Peekable;

/// One distinct key with every value observed for it across all sources, in
/// merged-sequence order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    pub key: String,
    pub values: Vec<String>,
}

/// Collapses a key-sorted record sequence into maximal equal-key runs,
/// yielding one `Group` per distinct key. An empty input yields no groups.
pub struct Groups<I: Iterator<Item = Record>> {
    records: Peekable<I>,
}

impl<I: Iterator<Item = Record>> Groups<I> {
    pub fn new(records: I) -> Self {
        Self {
            records: records.peekable(),
        }
    }
}

impl<I: Iterator<Item = Record>> Iterator for Groups<I> {
    type Item = Group;

    fn next(&mut self) -> Option<Self::Item> {
        let first = self.records.next()?;
        let key = first.key;
        let mut values = vec![first.value];
        while let Some(record) = self.records.next_if(|r| r.key == key) {
            values.push(record.value);
        }
        Some(Group { key, values })
    }
}
