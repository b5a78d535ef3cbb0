use anyhow::Result;
use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response, Url};
use tracing::{debug, info};

use super::error::ApiError;
use super::models::SearchHit;
use crate::config::Config;
use crate::deletion::DeletionService;

/// Thin client for the dashboard search and delete endpoints.
#[derive(Clone)]
pub struct GrafanaClient {
    client: Client,
    base_url: Url,
    token: Option<String>,
}

impl GrafanaClient {
    pub fn new(base_url: Url, token: Option<String>, client: Client) -> Self {
        Self {
            client,
            base_url,
            token,
        }
    }

    pub fn from_config(config: &Config) -> Result<Self, ApiError> {
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self::new(
            config.server_url.clone(),
            config.api_token.clone(),
            client,
        ))
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url, ApiError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ApiError::BaseUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn authorize(&self, req: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => req.bearer_auth(token),
            None => req,
        }
    }

    pub async fn search(&self, query: Option<&str>) -> Result<Vec<SearchHit>, ApiError> {
        let mut url = self.endpoint(&["api", "search"])?;
        if let Some(q) = query.filter(|q| !q.is_empty()) {
            url.query_pairs_mut().append_pair("query", q);
        }
        debug!(%url, "searching");
        let resp = self.authorize(self.client.get(url.clone())).send().await?;
        let resp = check("GET", &url, resp).await?;
        Ok(resp.json::<Vec<SearchHit>>().await?)
    }

    pub async fn delete_folder(&self, uid: &str) -> Result<(), ApiError> {
        let url = self.endpoint(&["api", "folders", uid])?;
        self.delete(url).await
    }

    pub async fn delete_dashboard(&self, uid: &str) -> Result<(), ApiError> {
        let url = self.endpoint(&["api", "dashboards", "uid", uid])?;
        self.delete(url).await
    }

    async fn delete(&self, url: Url) -> Result<(), ApiError> {
        debug!(%url, "deleting");
        let resp = self.authorize(self.client.delete(url.clone())).send().await?;
        check("DELETE", &url, resp).await?;
        Ok(())
    }
}

async fn check(method: &'static str, url: &Url, resp: Response) -> Result<Response, ApiError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    let body = resp.text().await.unwrap_or_default();
    Err(ApiError::Status {
        method,
        path: url.path().to_string(),
        status,
        body,
    })
}

#[async_trait]
impl DeletionService for GrafanaClient {
    /// Deletes folders first, then dashboards, one request at a time. The
    /// first failure stops the run.
    async fn delete_folders_and_dashboards(
        &self,
        folders: &[String],
        dashboards: &[String],
    ) -> Result<()> {
        for uid in folders {
            self.delete_folder(uid).await?;
            info!(uid = %uid, "folder deleted");
        }
        for uid in dashboards {
            self.delete_dashboard(uid).await?;
            info!(uid = %uid, "dashboard deleted");
        }
        Ok(())
    }
}
