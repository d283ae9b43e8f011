// crates/core/src/lib.rs
#![allow(clippy::cargo_common_metadata)]
#![allow(clippy::multiple_crate_versions)]

pub mod bucket;
pub mod classify;
pub mod lines;
pub mod render;
pub mod stats;

pub use bucket::Buckets;
pub use classify::{Category, ClassifiedValue, classify};
pub use stats::{NumericStats, Summary, TextStats};
