use anyhow::Result;
use inquire::Confirm;
use serde_json::json;
use std::sync::Arc;
use tracing::info;

use crate::api::{sections_from_hits, GrafanaClient};
use crate::config::Config;
use crate::deletion::{compose_prompt, ActionDispatch, ConfirmDeleteModal, Navigator};
use crate::search::{DeletionRequest, SearchAction, SectionKind, SelectionCounts};
use crate::tags::derive_color;
use crate::tags::palette::hex;

/// Outside the TUI there is no page to move to; the request is only logged.
pub struct LogNavigator;

impl Navigator for LogNavigator {
    fn update(&self, path: &str) {
        info!(%path, "listing location requested");
    }
}

/// Reports a finished deletion on stdout.
pub struct PrintDispatch;

impl ActionDispatch for PrintDispatch {
    fn dispatch(&self, action: SearchAction) {
        if let SearchAction::DeleteItems { folders, dashboards } = action {
            for uid in folders {
                println!("🗑️ Folder '{uid}' deleted.");
            }
            for uid in dashboards {
                println!("🗑️ Dashboard '{uid}' deleted.");
            }
        }
    }
}

pub fn handle_tag(names: &[String], json_mode: bool) -> Result<()> {
    if json_mode {
        let rows: Vec<_> = names
            .iter()
            .map(|name| {
                let pair = derive_color(name);
                json!({
                    "name": name,
                    "color": hex(pair.color),
                    "borderColor": hex(pair.border_color),
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&rows)?);
    } else {
        for name in names {
            let pair = derive_color(name);
            println!("{name}\tcolor={}\tborder={}", hex(pair.color), hex(pair.border_color));
        }
    }
    Ok(())
}

pub fn handle_prompt(folders: usize, dashboards: usize) -> Result<()> {
    let prompt = compose_prompt(SelectionCounts { folders, dashboards });
    println!("{}", prompt.text);
    if let Some(subtitle) = prompt.subtitle {
        println!("{subtitle}");
    }
    Ok(())
}

pub struct Handlers<'a> {
    config: &'a Config,
    client: GrafanaClient,
}

impl<'a> Handlers<'a> {
    pub fn create(config: &'a Config) -> Result<Self> {
        Ok(Self {
            config,
            client: GrafanaClient::from_config(config)?,
        })
    }

    pub async fn handle_search(&self, query: Option<String>, json_mode: bool) -> Result<()> {
        let hits = self.client.search(query.as_deref()).await?;
        let sections = sections_from_hits(hits);
        if json_mode {
            println!("{}", serde_json::to_string_pretty(&sections)?);
            return Ok(());
        }
        if sections.is_empty() {
            println!("No results.");
            return Ok(());
        }
        for section in &sections {
            match section.kind {
                SectionKind::Folder => println!("📁 {} ({})", section.title, section.uid),
                SectionKind::General => println!("📁 {}", section.title),
            }
            for item in &section.items {
                if item.tags.is_empty() {
                    println!("   {} ({})", item.title, item.uid);
                } else {
                    println!("   {} ({}) [{}]", item.title, item.uid, item.tags.join(", "));
                }
            }
        }
        Ok(())
    }

    pub async fn handle_rm(
        &self,
        folders: Vec<String>,
        dashboards: Vec<String>,
        yes: bool,
    ) -> Result<()> {
        let request = DeletionRequest::new(folders, dashboards);
        if request.is_empty() {
            println!("❌ Nothing to delete; pass --folder or --dashboard");
            return Ok(());
        }

        let mut modal = ConfirmDeleteModal::new(
            Arc::new(self.client.clone()),
            Arc::new(LogNavigator),
            Arc::new(PrintDispatch),
        )
        .with_listing_path(self.config.listing_path.clone());
        modal.open();

        if !yes {
            let prompt = modal.prompt(&request);
            let mut confirm = Confirm::new(&prompt.text).with_default(false);
            if let Some(subtitle) = prompt.subtitle.as_deref() {
                confirm = confirm.with_help_message(subtitle);
            }
            if !confirm.prompt()? {
                modal.dismiss();
                println!("❎ Deletion cancelled.");
                return Ok(());
            }
        }

        modal.confirm(&request).await
    }
}
