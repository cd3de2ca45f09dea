use anyhow::Result;
use clap::Parser;
use munin::codec::{Decoder, Encoder};
use munin::{naming, Record, ReduceTask};
use std::collections::hash_map::DefaultHasher;
use std::fs::File;
use std::hash::{Hash, Hasher};
use std::path::PathBuf;

/// Reduce-side word count. The map phase is fabricated: each "map task"
/// buckets its (word, "1") emissions by reduce partition with the same hash
/// the real producers would use; the demo then runs one reduce task per
/// bucket and prints the aggregated artifacts.
#[derive(Parser, Debug)]
struct Args {
    /// Working directory for partitions and output artifacts
    #[arg(long, default_value = "mr-demo")]
    dir: PathBuf,
    /// Number of map tasks to fabricate
    #[arg(long, default_value_t = 3)]
    n_map: usize,
    /// Number of reduce buckets
    #[arg(long, default_value_t = 2)]
    n_reduce: usize,
}

const JOB: &str = "wordcount";

const CORPUS: [&str; 3] = [
    "the quick brown fox jumps over the lazy dog",
    "the dog barks and the fox runs",
    "quick brown dogs and quick brown foxes",
];

fn bucket(word: &str, n_reduce: usize) -> usize {
    let mut hasher = DefaultHasher::new();
    word.hash(&mut hasher);
    (hasher.finish() as usize) % n_reduce
}

fn fabricate_partitions(args: &Args) -> Result<()> {
    for map_task in 0..args.n_map {
        let mut encoders = Vec::with_capacity(args.n_reduce);
        for reduce_task in 0..args.n_reduce {
            let path = args
                .dir
                .join(naming::reduce_name(JOB, map_task, reduce_task));
            encoders.push(Encoder::new(File::create(path)?));
        }
        let text = CORPUS[map_task % CORPUS.len()];
        for word in text.split_whitespace() {
            encoders[bucket(word, args.n_reduce)].encode_next(&Record::new(word, "1"))?;
        }
        for enc in &mut encoders {
            enc.flush()?;
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt().with_env_filter("info").init();
    let args = Args::parse();
    std::fs::create_dir_all(&args.dir)?;
    fabricate_partitions(&args)?;

    let count = |_key: &str, values: &[String]| values.len().to_string();
    for reduce_task in 0..args.n_reduce {
        let task = ReduceTask::new(JOB, reduce_task, args.n_map).in_dir(&args.dir);
        let stats = task.run(&count)?;
        println!(
            "bucket {}: {} records -> {} groups in {}ms",
            reduce_task, stats.records_in, stats.groups, stats.wall_ms
        );
        for record in Decoder::new(File::open(task.out_path())?) {
            let record = record?;
            println!("  {}\t{}", record.key, record.value);
        }
    }
    Ok(())
}
