use serde::{Deserialize, Serialize};

/// The atomic key/value unit exchanged between the map and reduce stages.
/// Immutable once read; duplicates across partitions are legal and represent
/// distinct emissions that must all reach the same group.
///
/// Wire shape is `{"Key": ..., "Value": ...}`, the field names the upstream
/// map-side encoders use.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Record {
    pub key: String,
    pub value: String,
}

impl Record {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}
