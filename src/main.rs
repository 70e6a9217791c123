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
    bookbrowse::logging::init("info").context("init logging")?;

    let cli = bookbrowse::cli::Cli::parse();
    tracing::debug!(?cli, "parsed cli");

    let config = bookbrowse::config::Config::resolve(&cli).context("resolve config")?;
    tracing::debug!(?config, "resolved config");

    match cli.command {
        bookbrowse::cli::Command::Render(args) => {
            bookbrowse::commands::render(&config, args).context("render")?;
        }
        bookbrowse::cli::Command::Show(args) => {
            bookbrowse::commands::show(&config, args).context("show")?;
        }
        bookbrowse::cli::Command::Options => {
            bookbrowse::commands::options(&config).context("options")?;
        }
        bookbrowse::cli::Command::Replay(args) => {
            bookbrowse::commands::replay(&config, args).context("replay")?;
        }
    }

    Ok(())
}
