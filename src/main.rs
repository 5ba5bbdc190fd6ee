use clap::Parser;
use organize::cli::{Args, EXIT_FAILURE, run_cli};
use organize::config::Config;
use organize::logger::TracingLogger;
use organize::logging::init_tracing;
use organize::output::OutputFormatter;
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = Args::parse();

    let config = match Config::load(args.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            OutputFormatter::error(&format!("Error loading configuration: {}", e));
            return ExitCode::from(EXIT_FAILURE);
        }
    };

    if let Err(e) = init_tracing(&config.logging, args.verbosity()) {
        OutputFormatter::error(&format!("{:#}", e));
        return ExitCode::from(EXIT_FAILURE);
    }

    ExitCode::from(run_cli(&args, &config, &TracingLogger))
}
