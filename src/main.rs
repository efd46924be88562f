use fetchlog::cli::CliArgs;
use fetchlog::{init_logging, FetchlogConfig, Fetcher, VERSION};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;

fn main() {
    let args = CliArgs::parse();

    if let Err(err) = run(&args) {
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
}

fn run(args: &CliArgs) -> Result<()> {
    let mut config = FetchlogConfig::default();
    args.apply(&mut config);
    config.validate().context("Invalid configuration")?;

    let logging = config.logging_config();
    init_logging(logging.clone()).context("Failed to initialize logging")?;
    let _logger = logging.span().entered();

    debug!("fetchlog v{} starting", VERSION);
    debug!("Arguments: {:?}", args);
    debug!("{}", config);

    let fetcher = Fetcher::with_defaults().context("Failed to build HTTP client")?;

    // fetch failures are logged by the fetcher and never abort the run
    let mut failed = 0;
    for url in &config.urls {
        debug!(url = %url, "Trying GET request");
        if fetcher.fetch(url).is_err() {
            failed += 1;
        }
    }

    debug!(total = config.urls.len(), failed, "Finished fetching");
    Ok(())
}
