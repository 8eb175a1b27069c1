use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use shared::protocol::CatalogResponse;
use url::Url;

use crate::{config::Settings, error::CatalogError};

/// Where the product catalog and its thumbnails come from.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    async fn fetch_catalog(&self) -> Result<CatalogResponse, CatalogError>;
    async fn fetch_thumbnail(&self, url: &str) -> Result<Vec<u8>, CatalogError>;
}

pub struct HttpCatalogSource {
    http: Client,
    catalog_url: Url,
}

impl HttpCatalogSource {
    pub fn new(catalog_url: &str, timeout: Duration) -> Result<Self, CatalogError> {
        let catalog_url = Url::parse(catalog_url).map_err(|source| CatalogError::InvalidUrl {
            url: catalog_url.to_string(),
            source,
        })?;
        let http = Client::builder().timeout(timeout).build()?;
        Ok(Self { http, catalog_url })
    }

    pub fn from_settings(settings: &Settings) -> Result<Self, CatalogError> {
        Self::new(&settings.catalog_url, settings.request_timeout())
    }

    pub fn catalog_url(&self) -> &Url {
        &self.catalog_url
    }
}

#[async_trait]
impl CatalogSource for HttpCatalogSource {
    async fn fetch_catalog(&self) -> Result<CatalogResponse, CatalogError> {
        tracing::debug!(url = %self.catalog_url, "requesting product catalog");
        let response = self.http.get(self.catalog_url.clone()).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::Status {
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await?;
        Ok(CatalogResponse::from_json(&body)?)
    }

    async fn fetch_thumbnail(&self, url: &str) -> Result<Vec<u8>, CatalogError> {
        let thumbnail_failure = |reason: String| CatalogError::Thumbnail {
            url: url.to_string(),
            reason,
        };

        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|err| thumbnail_failure(err.to_string()))?
            .error_for_status()
            .map_err(|err| thumbnail_failure(err.to_string()))?;
        let bytes = response
            .bytes()
            .await
            .map_err(|err| thumbnail_failure(err.to_string()))?;
        Ok(bytes.to_vec())
    }
}
