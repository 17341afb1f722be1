use clap::Parser;
use version_cmp::cli::{Cli, execute, load_config};
use version_cmp::config::log_path;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = load_config(&cli)?;
    let _guard = version_cmp::logging::init(&config.log, cli.verbose, &log_path())?;

    for line in execute(cli.command, config.policy)? {
        println!("{line}");
    }

    Ok(())
}
