use anyhow::Context;
use clap::Parser;
use svi_collector::cli::{init_tracing, run, Cli};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.quiet, cli.log_file.as_deref())
        .context("failed to initialise logging")?;
    run(cli).await.context("street view collection failed")
}
