use clap::{Parser, Subcommand};

const DASHPRUNE_LONG_VERSION: &str = concat!(
"version: ", env!("CARGO_PKG_VERSION"), "\n",
"git sha: ", env!("DASHPRUNE_GIT_SHA"), "\n",
"build time (UTC): ", env!("DASHPRUNE_BUILD_TIME"), "\n",
"target: ", env!("DASHPRUNE_TARGET")
);

#[derive(Parser)]
#[command(
    name = "dashprune",
    version = env!("CARGO_PKG_VERSION"),
    long_version = DASHPRUNE_LONG_VERSION,
    about = "🏷️ dashprune — browse and bulk-delete dashboards"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the colors a tag name is drawn with
    Tag {
        /// One or more tag names
        #[arg(required = true)]
        names: Vec<String>,
        /// Output JSON array
        #[arg(long)]
        json: bool,
    },
    /// Print the delete confirmation for a selection size
    Prompt {
        /// Number of selected folders
        #[arg(long, default_value_t = 0)]
        folders: usize,
        /// Number of selected dashboards
        #[arg(long, default_value_t = 0)]
        dashboards: usize,
    },
    /// Search folders and dashboards
    Search {
        /// Server url override
        #[arg(long)]
        url: Option<String>,
        /// Search query
        #[arg(long)]
        query: Option<String>,
        /// Output JSON (sections with their items)
        #[arg(long)]
        json: bool,
    },
    /// Delete folders and dashboards by uid
    Rm {
        /// Folder uid (repeatable); deletes the folder and all its dashboards
        #[arg(long = "folder")]
        folders: Vec<String>,
        /// Dashboard uid (repeatable)
        #[arg(long = "dashboard")]
        dashboards: Vec<String>,
        /// Server url override
        #[arg(long)]
        url: Option<String>,
        /// Do not ask for confirmation
        #[arg(long)]
        yes: bool,
    },
    /// Launch the interactive Terminal UI
    Tui {
        /// Server url override
        #[arg(long)]
        url: Option<String>,
        /// Initial search query
        #[arg(long)]
        query: Option<String>,
    },
}
