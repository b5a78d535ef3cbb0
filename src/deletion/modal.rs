use std::sync::Arc;

use anyhow::Result;
use tracing::{debug, info};

use super::ports::{ActionDispatch, DeletionService, Navigator};
use super::prompt::{compose_prompt, DeletionPrompt};
use crate::search::{DeletionRequest, SearchAction};

pub const DEFAULT_LISTING_PATH: &str = "/dashboards";

/// Confirmation step in front of a bulk delete.
///
/// Confirming sends one request to the deletion service. Only after it
/// succeeds is the modal closed, the listing page requested (the current
/// folder may no longer exist) and the deletion announced to the state
/// reducer. Failures are returned untouched and leave the modal open.
pub struct ConfirmDeleteModal {
    service: Arc<dyn DeletionService>,
    navigator: Arc<dyn Navigator>,
    dispatch: Arc<dyn ActionDispatch>,
    listing_path: String,
    open: bool,
}

impl ConfirmDeleteModal {
    pub fn new(
        service: Arc<dyn DeletionService>,
        navigator: Arc<dyn Navigator>,
        dispatch: Arc<dyn ActionDispatch>,
    ) -> Self {
        Self {
            service,
            navigator,
            dispatch,
            listing_path: DEFAULT_LISTING_PATH.to_string(),
            open: false,
        }
    }

    pub fn with_listing_path(mut self, path: impl Into<String>) -> Self {
        self.listing_path = path.into();
        self
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    fn close(&mut self) {
        self.open = false;
    }

    /// Closes without touching the deletion service.
    pub fn dismiss(&mut self) {
        debug!("delete dismissed");
        self.close();
    }

    pub fn prompt(&self, request: &DeletionRequest) -> DeletionPrompt {
        compose_prompt(request.counts())
    }

    pub async fn confirm(&mut self, request: &DeletionRequest) -> Result<()> {
        info!(
            folders = request.folders.len(),
            dashboards = request.dashboards.len(),
            "deleting selection"
        );
        self.service
            .delete_folders_and_dashboards(&request.folders, &request.dashboards)
            .await?;

        self.close();
        self.navigator.update(&self.listing_path);
        self.dispatch.dispatch(SearchAction::DeleteItems {
            folders: request.folders.clone(),
            dashboards: request.dashboards.clone(),
        });
        Ok(())
    }
}
