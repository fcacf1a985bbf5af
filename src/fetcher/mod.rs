//! Data Dragon document fetcher
//!
//! A [`Fetcher`] owns one HTTP client for its whole lifetime and turns
//! (locale, version, set) requests into decoded documents. Bad status codes
//! and undecodable bodies are logged and reported as `Ok(None)`; transport
//! failures are returned as [`FetchError::Transport`].

use crate::dd::{Card, Globals, Locale, Set, Version};
use crate::logger::{Logger, TracingLogger};
use crate::utils::http::{build_client, get_user_agent};
use crate::utils::json::from_slice_case_insensitive;
use serde::de::DeserializeOwned;
use std::any::type_name;
use std::sync::Arc;
use std::time::Duration;

mod error;
pub mod url;

pub use error::FetchError;
pub use url::DATA_DRAGON_URL;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetcherConfig {
    /// Scheme and host documents are requested from, without trailing slash
    pub base_url: String,
    pub user_agent: String,
    /// Whole-request deadline, unlimited when `None`
    pub timeout: Option<Duration>,
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self {
            base_url: DATA_DRAGON_URL.to_string(),
            user_agent: get_user_agent().to_string(),
            timeout: None,
        }
    }
}

pub struct Fetcher {
    client: Option<reqwest::Client>,
    base_url: String,
    logger: Arc<dyn Logger>,
}

impl Fetcher {
    /// Fetcher for the public Data Dragon host, logging through `tracing`
    pub fn new() -> Result<Self, FetchError> {
        Self::with_config(FetcherConfig::default(), Arc::new(TracingLogger))
    }

    pub fn with_config(config: FetcherConfig, logger: Arc<dyn Logger>) -> Result<Self, FetchError> {
        let client =
            build_client(&config.user_agent, config.timeout).map_err(FetchError::Client)?;

        Ok(Self {
            client: Some(client),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            logger,
        })
    }

    #[inline]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn globals_url(&self, locale: &Locale, version: &Version) -> String {
        url::globals_url(&self.base_url, locale, version)
    }

    /// `None` when the set has no directory name
    pub fn set_cards_url(&self, locale: &Locale, version: &Version, set: &Set) -> Option<String> {
        url::set_cards_url(&self.base_url, locale, version, set)
    }

    pub async fn fetch_globals(
        &self,
        locale: &Locale,
        version: &Version,
    ) -> Result<Option<Globals>, FetchError> {
        let url = self.globals_url(locale, version);

        self.fetch(&url).await
    }

    /// Returns `Ok(None)` without touching the network when `set` has no
    /// `name_ref`
    pub async fn fetch_set_cards(
        &self,
        locale: &Locale,
        version: &Version,
        set: &Set,
    ) -> Result<Option<Vec<Card>>, FetchError> {
        let Some(url) = self.set_cards_url(locale, version, set) else {
            return Ok(None);
        };

        self.fetch(&url).await
    }

    async fn fetch<T: DeserializeOwned>(&self, url: &str) -> Result<Option<T>, FetchError> {
        let client = self.client.as_ref().ok_or(FetchError::Closed)?;

        tracing::debug!("Fetching {url}");

        let response = client
            .get(url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|source| FetchError::Transport {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();

        if !status.is_success() {
            self.logger.error(&format!("{url} returned status code {status}."));

            return Ok(None);
        }

        let bytes = response.bytes().await.map_err(|source| FetchError::Transport {
            url: url.to_string(),
            source,
        })?;

        // JSON `null` decodes to `None`
        match from_slice_case_insensitive::<Option<T>>(&bytes) {
            Ok(value) => Ok(value),

            Err(err) => {
                self.logger.error(&format!(
                    "Could not parse the content at {url} as type {}: {err}",
                    type_name::<T>()
                ));

                Ok(None)
            }
        }
    }

    /// Release the HTTP client
    ///
    /// Returns `true` if this call released it and `false` if the fetcher
    /// was already closed. Fetches after closing fail with
    /// [`FetchError::Closed`].
    pub fn close(&mut self) -> bool {
        match self.client.take() {
            Some(client) => {
                drop(client);

                tracing::debug!("Closed Data Dragon fetcher for {}", self.base_url);

                true
            }

            None => false,
        }
    }

    #[inline]
    pub fn is_closed(&self) -> bool {
        self.client.is_none()
    }
}

impl Drop for Fetcher {
    fn drop(&mut self) {
        self.close();
    }
}

impl std::fmt::Debug for Fetcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Fetcher")
            .field("base_url", &self.base_url)
            .field("closed", &self.is_closed())
            .finish()
    }
}
