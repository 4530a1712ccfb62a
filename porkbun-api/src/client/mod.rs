//! Porkbun API client

mod dns;
mod domains;
mod http;
mod ssl;

use std::fmt;
use std::sync::Arc;

use reqwest::Client;

use crate::error::{PorkbunError, Result};
use crate::types::{PingResponse, PricingResponse};

pub use dns::DnsApi;
pub use domains::DomainsApi;
pub use ssl::SslApi;

/// Production API root.
pub const DEFAULT_BASE_URL: &str = "https://api.porkbun.com/api/json/v3";

/// Environment variable holding the public API key.
pub const API_KEY_ENV: &str = "PORKBUN_API_KEY";
/// Environment variable holding the secret API key.
pub const SECRET_API_KEY_ENV: &str = "PORKBUN_SECRET_API_KEY";

// ============ Credentials ============

/// API key pair. Sent as `apikey` / `secretapikey` in every request body.
///
/// `Debug` output redacts both keys.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    api_key: String,
    secret_api_key: String,
}

impl Credentials {
    pub fn new(api_key: impl Into<String>, secret_api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            secret_api_key: secret_api_key.into(),
        }
    }

    /// Reads `PORKBUN_API_KEY` and `PORKBUN_SECRET_API_KEY`.
    ///
    /// A missing or empty variable is reported as a [`PorkbunError::ValidationError`]
    /// naming the variable.
    pub fn from_env() -> Result<Self> {
        Ok(Self::new(read_env(API_KEY_ENV)?, read_env(SECRET_API_KEY_ENV)?))
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub(crate) fn inject(&self, body: &mut serde_json::Map<String, serde_json::Value>) {
        body.insert("apikey".to_string(), self.api_key.clone().into());
        body.insert("secretapikey".to_string(), self.secret_api_key.clone().into());
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &"<redacted>")
            .field("secret_api_key", &"<redacted>")
            .finish()
    }
}

fn read_env(name: &str) -> Result<String> {
    match std::env::var(name) {
        Ok(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(PorkbunError::ValidationError {
            field: name.to_string(),
            value: serde_json::Value::Null,
            reason: format!("Environment variable {name} is not set"),
        }),
    }
}

// ============ Config ============

/// Immutable per-client settings, shared by every clone of a [`PorkbunClient`].
#[derive(Debug)]
pub struct ClientConfig {
    credentials: Credentials,
    base_url: String,
}

impl ClientConfig {
    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// API root without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

// ============ Client ============

/// Typed client for the Porkbun JSON API.
///
/// Cheap to clone; clones share the connection pool and configuration.
///
/// ```rust,no_run
/// # async fn run() -> porkbun_api::Result<()> {
/// use porkbun_api::{Credentials, PorkbunClient};
///
/// let client = PorkbunClient::new(Credentials::from_env()?);
/// let records = client.dns().get_records("example.com").await?;
/// println!("{} records", records.records.len());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct PorkbunClient {
    pub(crate) http: Client,
    pub(crate) config: Arc<ClientConfig>,
}

/// [`PorkbunClient`] builder
pub struct PorkbunClientBuilder {
    credentials: Credentials,
    base_url: String,
    http: Option<Client>,
}

impl PorkbunClientBuilder {
    fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            base_url: DEFAULT_BASE_URL.to_string(),
            http: None,
        }
    }

    /// Overrides the API root. Trailing slashes are stripped.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Uses a preconfigured `reqwest` client (timeouts, proxies, TLS settings).
    pub fn http_client(mut self, client: Client) -> Self {
        self.http = Some(client);
        self
    }

    pub fn build(self) -> PorkbunClient {
        PorkbunClient {
            http: self.http.unwrap_or_default(),
            config: Arc::new(ClientConfig {
                credentials: self.credentials,
                base_url: self.base_url,
            }),
        }
    }
}

impl PorkbunClient {
    pub fn new(credentials: Credentials) -> Self {
        Self::builder(credentials).build()
    }

    pub fn builder(credentials: Credentials) -> PorkbunClientBuilder {
        PorkbunClientBuilder::new(credentials)
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// DNS and DNSSEC record endpoints.
    pub fn dns(&self) -> DnsApi<'_> {
        DnsApi::new(self)
    }

    /// Domain, nameserver, URL forwarding and glue record endpoints.
    pub fn domains(&self) -> DomainsApi<'_> {
        DomainsApi::new(self)
    }

    /// SSL bundle endpoint.
    pub fn ssl(&self) -> SslApi<'_> {
        SslApi::new(self)
    }

    /// Tests connectivity and credentials. Returns the caller's public IP.
    pub async fn ping(&self) -> Result<PingResponse> {
        self.post_empty("/ping").await
    }

    /// Default registration, renewal and transfer prices for every supported TLD.
    pub async fn default_pricing(&self) -> Result<PricingResponse> {
        self.post_empty("/pricing/get").await
    }
}
