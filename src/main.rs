use anyhow::Context;
use clap::Parser;

use statelab::cli::{run, Cli};
use statelab::logging::init_tracing;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = cli.load_config().context("loading configuration")?;
    init_tracing(&config.logging);

    let output = run(cli, &config)?;
    print!("{}", output);
    Ok(())
}
