//! HTTP client for the Cosmic v3 object API.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};

use super::{CmsError, ContentSource, ObjectPage, ObjectQuery};
use crate::config::AppConfig;

/// Reads objects from a single bucket.
#[derive(Debug, Clone)]
pub struct CosmicClient {
    client: Client,
    api_url: String,
    bucket_slug: String,
    read_key: Option<String>,
}

impl CosmicClient {
    pub fn new(config: &AppConfig) -> Result<Self, CmsError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.cms_timeout_secs))
            .build()?;

        Ok(Self {
            client,
            api_url: config.cosmic_api_url.clone(),
            bucket_slug: config.cosmic_bucket_slug.clone(),
            read_key: config.cosmic_read_key.clone(),
        })
    }

    /// Build the listing URL for a query.
    pub fn objects_url(&self, query: &ObjectQuery) -> Result<Url, CmsError> {
        let base = format!(
            "{}/buckets/{}/objects",
            self.api_url.trim_end_matches('/'),
            self.bucket_slug
        );

        let mut params = vec![
            (
                "query",
                serde_json::json!({ "type": query.object_type }).to_string(),
            ),
            ("depth", query.depth.to_string()),
        ];
        if !query.props.is_empty() {
            params.push(("props", query.props.join(",")));
        }
        if let Some(key) = &self.read_key {
            params.push(("read_key", key.clone()));
        }

        Url::parse_with_params(&base, &params).map_err(|e| CmsError::InvalidUrl(e.to_string()))
    }

    /// Map the HTTP response onto the adapter contract.
    ///
    /// Only a 404 is a "no objects" answer; every other failure is surfaced.
    async fn handle_response(
        response: reqwest::Response,
        object_type: &str,
    ) -> Result<ObjectPage, CmsError> {
        let status = response.status();

        if !status.is_success() {
            return match status {
                StatusCode::NOT_FOUND => Err(CmsError::NotFound {
                    object_type: object_type.to_string(),
                }),
                StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Err(CmsError::Unauthorized),
                _ => {
                    let body = match response.text().await {
                        Ok(body) => body,
                        Err(e) => {
                            tracing::warn!(
                                object_type,
                                status = status.as_u16(),
                                error = %e,
                                "Failed to read CMS error body"
                            );
                            String::new()
                        }
                    };
                    Err(CmsError::Status {
                        status: status.as_u16(),
                        body,
                    })
                }
            };
        }

        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}

#[async_trait]
impl ContentSource for CosmicClient {
    async fn find_objects(&self, query: &ObjectQuery) -> Result<ObjectPage, CmsError> {
        let url = self.objects_url(query)?;
        tracing::debug!(
            object_type = %query.object_type,
            depth = query.depth,
            "Fetching objects from CMS"
        );

        let response = self.client.get(url).send().await?;
        Self::handle_response(response, &query.object_type).await
    }
}
