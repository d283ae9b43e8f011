use crate::error::EngineError;
use line_sift_core::{Buckets, Summary};
use std::path::PathBuf;

/// Outcome of one run: the filled buckets, the files written, and every
/// recovered error in the order it occurred.
#[derive(Debug, Default)]
pub struct RunResult {
    pub buckets: Buckets,
    pub written: Vec<PathBuf>,
    pub errors: Vec<EngineError>,
}

impl RunResult {
    #[must_use]
    pub fn summary(&self) -> Summary {
        self.buckets.summary()
    }
}
