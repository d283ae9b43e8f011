// crates/cli/src/config.rs
use crate::args::Args;
pub use line_sift_engine::config::{RunConfig, StatsMode};

impl From<Args> for RunConfig {
    fn from(args: Args) -> Self {
        Self {
            inputs: args.files,
            output_dir: args.output_dir,
            prefix: args.prefix,
            append: args.append,
            stats: if args.full {
                StatsMode::Full
            } else {
                StatsMode::Short
            },
        }
    }
}

/// Log level from the number of `-v` flags.
#[must_use]
pub const fn log_level(verbose: u8) -> log::LevelFilter {
    match verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        _ => log::LevelFilter::Debug,
    }
}
