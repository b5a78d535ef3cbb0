#![allow(clippy::module_inception)]
use crate::cli::cli::{Cli, Commands};
use crate::cli::handlers::{handle_prompt, handle_tag, Handlers};
use crate::config::Config;
use crate::{logging, tui};
use clap::Parser;

pub mod cli;
pub mod handlers;

pub async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init(matches!(cli.command, Commands::Tui { .. }));

    match cli.command {
        Commands::Tag { names, json } => handle_tag(&names, json)?,
        Commands::Prompt {
            folders,
            dashboards,
        } => handle_prompt(folders, dashboards)?,
        Commands::Search { url, query, json } => {
            let config = Config::create(url)?;
            let handlers = Handlers::create(&config)?;
            handlers.handle_search(query, json).await?;
        }
        Commands::Rm {
            folders,
            dashboards,
            url,
            yes,
        } => {
            let config = Config::create(url)?;
            let handlers = Handlers::create(&config)?;
            handlers.handle_rm(folders, dashboards, yes).await?;
        }
        Commands::Tui { url, query } => {
            let config = Config::create(url)?;
            tui::launch(&config, query).await?;
        }
    }

    Ok(())
}
