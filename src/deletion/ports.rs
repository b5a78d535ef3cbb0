use anyhow::Result;
use async_trait::async_trait;

use crate::search::SearchAction;

/// Removes folders and dashboards from persistent storage.
#[async_trait]
pub trait DeletionService: Send + Sync {
    async fn delete_folders_and_dashboards(
        &self,
        folders: &[String],
        dashboards: &[String],
    ) -> Result<()>;
}

// Fire-and-forget location change.
pub trait Navigator: Send + Sync {
    fn update(&self, path: &str);
}

pub trait ActionDispatch: Send + Sync {
    fn dispatch(&self, action: SearchAction);
}
