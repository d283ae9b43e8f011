// crates/engine/src/lib.rs
pub mod config;
pub mod error;
pub mod reader;
pub mod result;
pub mod writer;

use crate::config::RunConfig;
use crate::error::{EngineError, Result};
use crate::result::RunResult;

/// Sort every input line into its bucket and write the buckets out.
///
/// Inputs are read one after another in the configured order. A file that
/// cannot be read, or a bucket that cannot be written, is recorded in
/// `RunResult::errors` and the run carries on.
///
/// # Errors
///
/// Returns `EngineError::NoInput` if `config.inputs` is empty. Nothing is
/// read or written in that case.
pub fn run(config: &RunConfig) -> Result<RunResult> {
    if config.inputs.is_empty() {
        return Err(EngineError::NoInput);
    }

    let mut result = RunResult::default();

    for path in &config.inputs {
        match reader::read_into(path, &mut result.buckets) {
            Ok(lines) => log::debug!("read {lines} lines from {}", path.display()),
            Err(e) => {
                log::debug!("recovered: {e}");
                result.errors.push(e);
            }
        }
    }

    let (written, write_errors) = writer::flush_to_outputs(config, &result.buckets);
    result.written = written;
    result.errors.extend(write_errors);

    Ok(result)
}
