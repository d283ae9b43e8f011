use clap::Parser;
use line_sift_cli::args::Args;
use line_sift_cli::config::{self, RunConfig};
use line_sift_cli::error::Result;
use line_sift_cli::presentation;
use line_sift_engine::error::EngineError;
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = Args::parse();

    env_logger::Builder::new()
        .filter_level(config::log_level(args.verbose))
        .parse_default_env()
        .init();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Application Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<()> {
    let format = args.format;
    let config = RunConfig::from(args);

    let result = match line_sift_engine::run(&config) {
        Ok(result) => result,
        Err(EngineError::NoInput) => {
            println!("{}", EngineError::NoInput);
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    for err in &result.errors {
        eprintln!("error: {err}");
    }
    log::info!("wrote {} output file(s)", result.written.len());

    presentation::print_summary(&result.summary(), config.stats, format)
}
