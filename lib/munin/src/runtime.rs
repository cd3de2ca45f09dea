use crate::api::Reducer;
use crate::error::Result;
use crate::group::Groups;
use crate::naming::{reduce_name, result_name};
use crate::reader::PartitionRecords;
use crate::record::Record;
use crate::sort::sort_by_key;
use crate::stats::ReduceTaskStats;
use crate::writer::ResultWriter;
use std::path::PathBuf;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// One reduce task: merges the `n_map` intermediate partitions for bucket
/// `reduce_task`, groups values by key, applies the reducer once per
/// distinct key in ascending key order, and writes the output artifact.
///
/// Phases run sequentially on the calling thread. The first reading or
/// writing failure aborts the task and surfaces as a typed error; there is
/// no internal retry or partial-progress state, so the caller's only
/// recovery is re-running the whole task.
pub struct ReduceTask {
    job_name: String,
    reduce_task: usize,
    n_map: usize,
    dir: PathBuf,
    out_path: PathBuf,
}

impl ReduceTask {
    /// A task for reduce bucket `reduce_task` of `job_name`, fed by `n_map`
    /// map outputs. The output artifact defaults to the conventional result
    /// name inside the working directory.
    pub fn new(job_name: impl Into<String>, reduce_task: usize, n_map: usize) -> Self {
        let job_name = job_name.into();
        let out_path = PathBuf::from(result_name(&job_name, reduce_task));
        Self {
            job_name,
            reduce_task,
            n_map,
            dir: PathBuf::from("."),
            out_path,
        }
    }

    /// Working directory holding the intermediate partitions. Relative
    /// output paths resolve against it too. Defaults to the current
    /// directory.
    pub fn in_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.dir = dir.into();
        self
    }

    /// Overrides where the output artifact is created.
    pub fn with_output(mut self, out_path: impl Into<PathBuf>) -> Self {
        self.out_path = out_path.into();
        self
    }

    /// Location the output artifact will be (or was) created at.
    pub fn out_path(&self) -> PathBuf {
        self.dir.join(&self.out_path)
    }

    fn partition_path(&self, map_task: usize) -> PathBuf {
        self.dir
            .join(reduce_name(&self.job_name, map_task, self.reduce_task))
    }

    pub fn run<R: Reducer>(&self, reducer: &R) -> Result<ReduceTaskStats> {
        let task_start = Instant::now();
        let mut stats = ReduceTaskStats {
            sources: self.n_map,
            ..Default::default()
        };

        // Reading + merging. Each source is consumed to exhaustion and its
        // handle dropped before the next one opens, so at most one input
        // handle is live regardless of n_map.
        let read_start = Instant::now();
        let mut records: Vec<Record> = Vec::new();
        for map_task in 0..self.n_map {
            let path = self.partition_path(map_task);
            let mut source = PartitionRecords::open(&path)?;
            let before = records.len();
            for record in &mut source {
                records.push(record?);
            }
            debug!(
                partition = %path.display(),
                records = records.len() - before,
                "partition consumed"
            );
        }
        stats.records_in = records.len() as u64;
        stats.read_ms = read_start.elapsed().as_millis() as u64;
        info!(
            phase = "read",
            sources = stats.sources,
            records = stats.records_in,
            wall_ms = stats.read_ms,
            "all partitions consumed"
        );

        let sort_start = Instant::now();
        sort_by_key(&mut records);
        stats.sort_ms = sort_start.elapsed().as_millis() as u64;
        info!(phase = "sort", wall_ms = stats.sort_ms, "merged sequence ordered");

        // Grouping, reduction, and writing walk the merged sequence once.
        // The sink is only created here, after every source read succeeded,
        // so a mid-read failure never touches existing output.
        let out_path = self.out_path();
        let mut out = ResultWriter::create(&out_path)?;
        let mut reduce_time = Duration::ZERO;
        let mut write_time = Duration::ZERO;
        for group in Groups::new(records.into_iter()) {
            let reduce_start = Instant::now();
            let reduced = reducer.reduce(&group.key, &group.values);
            reduce_time += reduce_start.elapsed();

            let write_start = Instant::now();
            out.write(&group.key, reduced)?;
            write_time += write_start.elapsed();
            stats.groups += 1;
        }
        out.finish()?;
        stats.reduce_ms = reduce_time.as_millis() as u64;
        stats.write_ms = write_time.as_millis() as u64;
        stats.wall_ms = task_start.elapsed().as_millis() as u64;

        info!(
            phase = "reduce",
            job = %self.job_name,
            reduce_task = self.reduce_task,
            groups = stats.groups,
            out = %out_path.display(),
            wall_ms = stats.wall_ms,
            "reduce task complete"
        );
        Ok(stats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn output_defaults_to_conventional_result_name() {
        let task = ReduceTask::new("job", 3, 2).in_dir("/work");
        assert_eq!(task.out_path(), Path::new("/work/mrtmp.job-res-3"));
    }

    #[test]
    fn explicit_output_overrides_the_default() {
        let task = ReduceTask::new("job", 0, 1)
            .in_dir("/work")
            .with_output("final-out");
        assert_eq!(task.out_path(), Path::new("/work/final-out"));
    }
}
