use serde::Serialize;

/// Per-phase accounting for one reduce task, returned on success and logged
/// at completion.
#[derive(Default, Clone, Debug, Serialize)]
pub struct ReduceTaskStats {
    pub sources: usize,
    pub records_in: u64,
    pub groups: u64,
    pub read_ms: u64,
    pub sort_ms: u64,
    pub reduce_ms: u64,
    pub write_ms: u64,
    pub wall_ms: u64,
}
