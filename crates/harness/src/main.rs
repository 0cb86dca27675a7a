use std::{io, process::ExitCode};

use clap::Parser;
use hooke_harness::{
    HarnessError,
    cli::{self, Args},
};
use hooke_solvers::MethodRegistry;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), HarnessError> {
    let registry = MethodRegistry::new().with_standard_methods();

    if args.list_methods {
        cli::write_method_list(io::stdout().lock(), &registry)?;
        return Ok(());
    }

    let config = cli::load_and_apply_config(args, &registry)?;
    hooke_harness::run(&config, &registry, io::stdout().lock())
}

/// Logs to stderr at `warn`, or `debug` with `-v`. `RUST_LOG` wins if set.
fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
