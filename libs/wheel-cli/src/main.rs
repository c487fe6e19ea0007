//! wheel - two-point discrimination wheel generator

use anyhow::Result;
use clap::Parser;
use wheel_cli::{init_tracing, run, Cli};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    run(cli)
}
