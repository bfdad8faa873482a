//! HTTP clients and the request executor.

use std::sync::Arc;

use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};
use url::Url;

use crate::api::v1::{LegacyMarketService, LegacyReferenceService, LegacyStockService};
use crate::api::{MarketService, ReferenceDataService, StockService};
use crate::models::Environment;
use crate::{Error, Result};

use super::config::{ClientConfig, Credentials};
use super::endpoint::Endpoint;
use super::request::{self, PathParams, QueryParams};

/// Base address of the legacy IEX Trading API (version fixed at 1.0).
const LEGACY_API_BASE: &str = "https://api.iextrading.com/1.0/";

/// Client for the IEX Cloud API (v2).
///
/// Provides access to the API services through accessor methods that
/// return service structs. All configuration is captured at construction
/// and immutable afterwards; cloning is cheap and clones share the
/// underlying transport handle.
///
/// # Example
///
/// ```no_run
/// use iexcloud_rs::{Environment, IexCloudClient};
///
/// # async fn example() -> iexcloud_rs::Result<()> {
/// let client = IexCloudClient::new("pk_your_token", Environment::Production)?;
///
/// let quote = client.stock().quote("aapl").await?;
/// println!("AAPL: {:?}", quote.latest_price);
///
/// let tops = client.market().tops(&["aapl", "msft"]).await?;
/// println!("Got {} top-of-book entries", tops.len());
/// # Ok(())
/// # }
/// ```
pub struct IexCloudClient {
    pub(crate) inner: Arc<ClientInner>,
}

impl IexCloudClient {
    /// Create a client from a publishable token.
    pub fn new(publishable_token: impl Into<String>, env: Environment) -> Result<Self> {
        Self::with_credentials(
            Credentials::publishable(publishable_token),
            env,
            ClientConfig::default(),
        )
    }

    /// Create a client from full credentials and custom configuration.
    pub fn with_credentials(
        credentials: Credentials,
        env: Environment,
        config: ClientConfig,
    ) -> Result<Self> {
        let base = format!("{}/{}/", env.api_base_url(), config.api_version.as_str());
        Self::with_base_url(&base, credentials, config)
    }

    /// Create a client against an explicit base address.
    ///
    /// Intended for tests against a local mock server and for routing
    /// through a proxy; production callers should prefer
    /// [`new`](Self::new).
    pub fn with_base_url(
        base_url: &str,
        credentials: Credentials,
        config: ClientConfig,
    ) -> Result<Self> {
        let inner = ClientInner::build(base_url, Some(credentials.publishable), config)?;
        Ok(Self {
            inner: Arc::new(inner),
        })
    }

    /// Get the stock service.
    pub fn stock(&self) -> StockService {
        StockService::new(self.inner.clone())
    }

    /// Get the IEX exchange-data service.
    pub fn market(&self) -> MarketService {
        MarketService::new(self.inner.clone())
    }

    /// Get the reference data service.
    pub fn reference(&self) -> ReferenceDataService {
        ReferenceDataService::new(self.inner.clone())
    }
}

impl Clone for IexCloudClient {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl std::fmt::Debug for IexCloudClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IexCloudClient")
            .field("base", &self.inner.base.as_str())
            .field("config", &self.inner.config)
            .finish()
    }
}

/// Client for the legacy IEX Trading API (v1).
///
/// The legacy API requires no token and serves a smaller, overlapping
/// endpoint set with slightly different response shapes (notably the
/// news items inside batch responses).
///
/// # Example
///
/// ```no_run
/// use iexcloud_rs::IexTradingClient;
///
/// # async fn example() -> iexcloud_rs::Result<()> {
/// let client = IexTradingClient::new()?;
/// let tops = client.market().tops(&["aapl"]).await?;
/// # Ok(())
/// # }
/// ```
pub struct IexTradingClient {
    pub(crate) inner: Arc<ClientInner>,
}

impl IexTradingClient {
    /// Create a client with default configuration.
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a client with custom configuration.
    ///
    /// The legacy API has exactly one version, so
    /// [`ClientConfig::api_version`] is ignored here.
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        Self::with_base_url(LEGACY_API_BASE, config)
    }

    /// Create a client against an explicit base address.
    ///
    /// Intended for tests against a local mock server and for routing
    /// through a proxy.
    pub fn with_base_url(base_url: &str, config: ClientConfig) -> Result<Self> {
        let inner = ClientInner::build(base_url, None, config)?;
        Ok(Self {
            inner: Arc::new(inner),
        })
    }

    /// Get the IEX exchange-data service.
    pub fn market(&self) -> LegacyMarketService {
        LegacyMarketService::new(self.inner.clone())
    }

    /// Get the stock service.
    pub fn stock(&self) -> LegacyStockService {
        LegacyStockService::new(self.inner.clone())
    }

    /// Get the reference data service.
    pub fn reference(&self) -> LegacyReferenceService {
        LegacyReferenceService::new(self.inner.clone())
    }
}

impl Clone for IexTradingClient {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl std::fmt::Debug for IexTradingClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IexTradingClient")
            .field("base", &self.inner.base.as_str())
            .field("config", &self.inner.config)
            .finish()
    }
}

/// Shared executor state: transport handle, base address, token.
///
/// Read-only after construction; safe for concurrent use from any
/// number of simultaneous calls.
pub(crate) struct ClientInner {
    pub(crate) http: reqwest::Client,
    base: Url,
    token: Option<SecretString>,
    pub(crate) config: ClientConfig,
}

impl ClientInner {
    fn build(base_url: &str, token: Option<SecretString>, config: ClientConfig) -> Result<Self> {
        // Url::join treats the last segment of a slashless base as a
        // file name, so normalize here once.
        let base = if base_url.ends_with('/') {
            Url::parse(base_url)?
        } else {
            Url::parse(&format!("{base_url}/"))?
        };

        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()?;

        Ok(Self {
            http,
            base,
            token,
            config,
        })
    }

    /// Resolve an endpoint and perform the GET.
    ///
    /// On a successful status the body is deserialized into `T`; a
    /// non-success status becomes [`Error::Api`] carrying the status and
    /// raw body; an unparseable body becomes [`Error::Deserialize`].
    /// One outbound request per call, no retries.
    pub(crate) async fn execute<T: DeserializeOwned>(
        &self,
        endpoint: &Endpoint<T>,
        path: &PathParams,
        mut query: QueryParams,
    ) -> Result<T> {
        // Resolved path without the query string, for logging only;
        // the token must never reach the log stream.
        let display_path = request::resolve(endpoint.path, path, &QueryParams::new())?;

        if let Some(token) = &self.token {
            query.push("token", token.expose_secret());
        }
        let relative = request::resolve(endpoint.path, path, &query)?;
        let url = self.base.join(&relative)?;

        debug!(path = %display_path, "GET");
        let response = self.http.get(url).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            warn!(path = %display_path, status = status.as_u16(), "request failed");
            return Err(Error::Api {
                status: status.as_u16(),
                body,
            });
        }

        serde_json::from_str(&body).map_err(|source| Error::Deserialize { body, source })
    }

    /// Convenience for endpoints with no placeholders and no query
    /// parameters beyond the defaults.
    pub(crate) async fn execute_no_params<T: DeserializeOwned>(
        &self,
        endpoint: &Endpoint<T>,
    ) -> Result<T> {
        self.execute(endpoint, &PathParams::new(), QueryParams::new())
            .await
    }

    /// Convenience for endpoints whose sole distinguishing parameter is
    /// a comma-joined symbol list. Requires at least one symbol.
    pub(crate) async fn execute_for_symbols<T: DeserializeOwned>(
        &self,
        endpoint: &Endpoint<T>,
        symbols: &[&str],
    ) -> Result<T> {
        if symbols.is_empty() {
            return Err(Error::InvalidInput(format!(
                "at least one symbol is required for {}",
                endpoint.path
            )));
        }
        let mut query = QueryParams::new();
        query.push("symbols", symbols.join(","));
        self.execute(endpoint, &PathParams::new(), query).await
    }
}
