use std::fs::{self, File};
use std::io::{self, BufReader, BufWriter};
use std::path::Path;

pub fn ensure_dir(path: impl AsRef<Path>) -> io::Result<()> {
    fs::create_dir_all(path.as_ref())
}

pub fn open_reader(path: impl AsRef<Path>) -> io::Result<BufReader<File>> {
    Ok(BufReader::new(File::open(path)?))
}

pub fn open_writer(path: impl AsRef<Path>) -> io::Result<BufWriter<File>> {
    if let Some(parent) = path.as_ref().parent() {
        if !parent.as_os_str().is_empty() {
            ensure_dir(parent)?;
        }
    }
    Ok(BufWriter::new(File::create(path)?))
}
