//! # countryline Main Entry Point
//!
//! Terminal country directory with search, filters and sorting.

use anyhow::Result;
use countryline::cmd_args::CommandLineArgs;
use countryline::{
    config, AppController, CountriesClient, SystemLinkOpener, TerminalEventStream,
    TerminalRenderStream,
};
use tracing_subscriber::{fmt::time::ChronoLocal, EnvFilter};

/// Dependencies whose own logs stay at warn unless asked for explicitly
const QUIET_TARGETS: [&str; 5] = ["reqwest", "hyper", "hyper_util", "rustls", "tokio"];

#[tokio::main]
async fn main() -> Result<()> {
    let cmd_args = CommandLineArgs::parse();
    init_tracing_subscriber(cmd_args.verbose())?;

    let base_url = cmd_args
        .base_url()
        .map(str::to_string)
        .unwrap_or_else(config::get_base_url);
    tracing::debug!("Using countries provider at '{}'", base_url);

    let client = CountriesClient::new(&base_url, cmd_args.timeout())?;

    let mut app = AppController::with_io_streams(
        &cmd_args,
        client,
        TerminalEventStream::new(),
        TerminalRenderStream::new(cmd_args.no_color()),
        Box::new(SystemLinkOpener::new()),
    );

    app.run().await
}

fn init_tracing_subscriber(verbose: bool) -> Result<()> {
    let level = if verbose {
        "debug".to_string()
    } else {
        config::get_log_level()
    };

    let mut filter = EnvFilter::try_new(&level)
        .or_else(|_| EnvFilter::try_new(config::DEFAULT_LOG_LEVEL))?;
    for target in QUIET_TARGETS {
        filter = filter.add_directive(format!("{target}=warn").parse()?);
    }

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_timer(ChronoLocal::rfc_3339())
        .init();
    Ok(())
}
