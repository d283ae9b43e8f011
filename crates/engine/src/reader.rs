use crate::error::{EngineError, Result};
use line_sift_core::Buckets;
use line_sift_core::lines::{decode, split_lines};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Read every line of `path` into `buckets`, returning the number of lines.
///
/// If reading fails part way, the lines consumed so far stay in the buckets.
///
/// # Errors
/// Returns `EngineError::InputRead` if the file cannot be opened or read.
pub fn read_into(path: &Path, buckets: &mut Buckets) -> Result<usize> {
    let file = File::open(path).map_err(|e| EngineError::InputRead {
        path: path.to_path_buf(),
        source: e,
    })?;
    let mut reader = BufReader::new(file);
    read_lines(&mut reader, buckets).map_err(|e| EngineError::InputRead {
        path: path.to_path_buf(),
        source: e,
    })
}

fn read_lines<R: BufRead>(reader: &mut R, buckets: &mut Buckets) -> std::io::Result<usize> {
    let mut lines = 0;
    let mut chunk = Vec::new();

    loop {
        chunk.clear();
        if reader.read_until(b'\n', &mut chunk)? == 0 {
            break;
        }
        for line in split_lines(&chunk) {
            buckets.push_line(&decode(line));
            lines += 1;
        }
    }

    Ok(lines)
}
