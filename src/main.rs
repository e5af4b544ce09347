mod cli;

use anyhow::Result;
use clap::Parser;
use runfinder::logging;

fn main() -> Result<()> {
    let args = cli::Cli::parse();
    logging::init(logging::resolve_level(
        args.log_level.as_deref(),
        args.verbose,
    ));

    cli::run(args)
}
