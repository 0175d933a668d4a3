//! レジストリ HTTP クライアント

use super::{ComponentDescriptor, RegistryIndex, RegistrySource};
use crate::config::{HttpConfig, RegistryConfig};
use crate::error::{DevcnError, Result};
use crate::http;
use reqwest::{Client, Url};
use serde::de::DeserializeOwned;
use std::future::Future;
use std::pin::Pin;

/// レジストリクライアント
pub struct RegistryClient {
    http: Client,
    config: RegistryConfig,
}

impl RegistryClient {
    pub fn new(http_config: &HttpConfig, config: RegistryConfig) -> Self {
        Self {
            http: http_config.build_client(),
            config,
        }
    }

    /// 本文を取得して JSON としてパース
    ///
    /// パース失敗は `DevcnError::RegistryParse`。
    async fn fetch_json<T: DeserializeOwned>(&self, url: &Url, spinner: Option<&str>) -> Result<T> {
        let body = match spinner {
            Some(message) => http::get_text_with_spinner(&self.http, url, message).await?,
            None => http::get_text(&self.http, url).await?,
        };

        serde_json::from_str(&body).map_err(|source| DevcnError::RegistryParse {
            url: url.to_string(),
            source,
        })
    }
}

impl RegistrySource for RegistryClient {
    fn component_url(&self, name: &str) -> Result<Url> {
        self.config.component_url(name)
    }

    fn fetch_component<'a>(
        &'a self,
        name: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<ComponentDescriptor>> + Send + 'a>> {
        Box::pin(async move {
            let url = self.config.component_url(name)?;
            self.fetch_json(&url, None).await
        })
    }

    fn fetch_index(&self) -> Pin<Box<dyn Future<Output = Result<RegistryIndex>> + Send + '_>> {
        Box::pin(async move {
            let url = self.config.index_url()?;
            self.fetch_json(&url, Some("Fetching available components..."))
                .await
        })
    }
}
