use std::process::ExitCode;

use anyhow::Context as _;
use clap::Parser as _;

fn main() -> ExitCode {
    if let Err(err) = try_main() {
        eprintln!("{err:#}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

fn try_main() -> anyhow::Result<()> {
    let cli = narrow::cli::Cli::parse();
    narrow::logging::init(cli.verbose).context("init logging")?;
    tracing::debug!(?cli, "parsed cli");

    match cli.command {
        narrow::cli::Command::Search(args) => {
            narrow::commands::search(args).context("search")?;
        }
        narrow::cli::Command::Fetch(args) => {
            narrow::commands::fetch(args).context("fetch")?;
        }
    }

    Ok(())
}
