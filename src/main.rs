use anyhow::Result;
use clap::Parser;

use tabforge::cli::{run, Args};
use tabforge::init_logging;

fn main() -> Result<()> {
    let args = Args::parse();

    init_logging()?;

    run(&args, &mut std::io::stdout().lock())?;

    Ok(())
}
