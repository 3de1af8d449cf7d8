mod cli;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::{Cli, Commands};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "adr_toc=debug" } else { "adr_toc=info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    let site = cli.site_config()?;

    match cli.command {
        Commands::PreBuild => {
            cli::pre_build(&site)?;
        }
        Commands::Page { src_path, input } => {
            cli::page(&site, &src_path, input.as_deref())?;
        }
        Commands::Render => {
            cli::render(&site)?;
        }
        Commands::List { format } => {
            cli::list(&site, &format)?;
        }
    }

    Ok(())
}
