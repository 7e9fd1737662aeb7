//! Slack Web API HTTP client.

use std::path::Path;

use async_trait::async_trait;
use reqwest::{header, Client, Response};
use serde::de::DeserializeOwned;
use url::Url;

use crate::api::types::*;
use crate::api::workspace::WorkspaceApi;
use crate::config::Config;
use crate::download::file::write_response_to;
use crate::error::{Error, Result};

/// Slack Web API client authenticated with a bearer token.
pub struct SlackApi {
    client: Client,
    base: Url,
    token: String,
    show_progress: bool,
}

impl SlackApi {
    /// Create a new API client from the run configuration.
    pub fn new(config: &Config) -> Result<Self> {
        let client = Client::builder()
            .user_agent(&config.http.user_agent)
            .timeout(config.request_timeout())
            .connect_timeout(config.connect_timeout())
            .build()
            .map_err(|e| Error::Api(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base: config.api_base()?,
            token: config.account.token.clone(),
            show_progress: config.output.show_progress,
        })
    }

    /// Full URL of a Web API method.
    fn method_url(&self, method: &str) -> String {
        format!("{}/{}", self.base.as_str().trim_end_matches('/'), method)
    }

    /// Make an authenticated form POST to a Web API method.
    async fn post(&self, method: &str, params: &[(&str, String)]) -> Result<Response> {
        let url = self.method_url(method);
        tracing::debug!("POST {} {:?}", url, params);

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.token)
            .form(params)
            .send()
            .await?;

        tracing::debug!("Response status: {}", response.status());
        Ok(response)
    }

    /// POST, require a success status, and decode the JSON body.
    async fn call<T: DeserializeOwned>(&self, method: &str, params: &[(&str, String)]) -> Result<T> {
        let response = self.post(method, params).await?;
        let status = response.status();
        if !status.is_success() {
            return Err(Error::Api(format!("{} failed: HTTP {}", method, status)));
        }

        let text = response.text().await?;
        tracing::trace!("{} response: {}", method, text);

        serde_json::from_str(&text).map_err(|e| {
            Error::Api(format!(
                "Failed to parse {} response: {} - Response: {}",
                method,
                e,
                text.chars().take(500).collect::<String>()
            ))
        })
    }

    /// Fetch a private file with the bearer token.
    pub async fn download_file(&self, url: &str) -> Result<Response> {
        let response = self
            .client
            .get(url)
            .bearer_auth(&self.token)
            .header(header::ACCEPT, "*/*")
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Error::Download(format!(
                "Failed to download file: HTTP {}",
                response.status()
            )));
        }

        Ok(response)
    }
}

#[async_trait]
impl WorkspaceApi for SlackApi {
    async fn list_files(&self, page: u32, ts_from: Option<i64>) -> Result<FilePage> {
        let mut params = vec![("page", page.to_string())];
        if let Some(ts) = ts_from {
            params.push(("ts_from", ts.to_string()));
        }

        let response = self.post("files.list", &params).await?;
        let status = response.status();
        if !status.is_success() {
            return Err(Error::ListingHttp {
                status: status.as_u16(),
            });
        }

        let text = response.text().await?;
        tracing::trace!("files.list response: {}", text);

        let listing: FileListResponse = serde_json::from_str(&text)?;
        if !listing.ok {
            return Err(Error::ListingRejected(
                listing.error.unwrap_or_else(|| "unknown_error".to_string()),
            ));
        }

        Ok(FilePage {
            files: listing.files,
            paging: listing.paging,
        })
    }

    async fn conversation_name(&self, conversation_id: &str) -> Result<String> {
        let info: ConversationInfoResponse = self
            .call("conversations.info", &[("channel", conversation_id.to_string())])
            .await?;

        match (info.ok, info.channel) {
            (true, Some(channel)) => Ok(channel.name),
            (_, _) => Err(Error::Api(format!(
                "conversations.info for {}: {}",
                conversation_id,
                info.error.as_deref().unwrap_or("missing channel")
            ))),
        }
    }

    async fn user_name(&self, user_id: &str) -> Result<String> {
        let info: UserInfoResponse = self
            .call("users.info", &[("user", user_id.to_string())])
            .await?;

        match (info.ok, info.user) {
            (true, Some(user)) => Ok(user.name),
            (_, _) => Err(Error::Api(format!(
                "users.info for {}: {}",
                user_id,
                info.error.as_deref().unwrap_or("missing user")
            ))),
        }
    }

    async fn download_to(&self, url: &str, dest: &Path) -> Result<u64> {
        let response = self.download_file(url).await?;
        write_response_to(response, dest, self.show_progress).await
    }
}
