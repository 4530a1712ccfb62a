//! # porkbun-api
//!
//! A typed async client for the [Porkbun](https://porkbun.com/) registrar JSON API
//! (v3): DNS records, DNSSEC, nameservers, URL forwarding, glue records, SSL bundles
//! and pricing.
//!
//! Inputs are checked locally before any request is sent (domain syntax, IP
//! addresses, TTL, record content by type), and every failure is reported as one
//! [`PorkbunError`] variant.
//!
//! ## Feature Flags
//!
//! - **`native-tls`** *(default)*: Use the platform's native TLS implementation.
//! - **`rustls`**: Use rustls.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use porkbun_api::{CreateDnsRecordRequest, Credentials, DnsRecordType, PorkbunClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Reads PORKBUN_API_KEY / PORKBUN_SECRET_API_KEY
//!     let client = PorkbunClient::new(Credentials::from_env()?);
//!
//!     let pong = client.ping().await?;
//!     println!("calling from {}", pong.your_ip);
//!
//!     let mut record = CreateDnsRecordRequest::new("example.com", DnsRecordType::A, "1.1.1.1");
//!     record.name = Some("www".to_string());
//!     record.ttl = Some(600);
//!     let created = client.dns().create_record(&record).await?;
//!
//!     let fetched = client.dns().get_record("example.com", &created.id).await?;
//!     if let Some(r) = fetched.record {
//!         println!("{} {} -> {}", r.name, r.record_type, r.content);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! | Variant | Meaning |
//! |---------|---------|
//! | `ValidationError` | Rejected locally, nothing sent |
//! | `NetworkError` | Transport failure; the cause is available via `source()` |
//! | `HttpError` | Non-2xx status, raw body attached |
//! | `ResponseFormatError` | Body is not JSON or lacks a `status` field |
//! | `ApiError` | `status` other than `SUCCESS` |
//!
//! Requests are sent exactly once. There is no retry, timeout or rate limiting
//! beyond what the supplied `reqwest::Client` is configured with.

mod client;
mod error;
mod types;
mod utils;

pub mod validation;

pub use client::{
    API_KEY_ENV, ClientConfig, Credentials, DEFAULT_BASE_URL, DnsApi, DomainsApi, PorkbunClient,
    PorkbunClientBuilder, SECRET_API_KEY_ENV, SslApi,
};
pub use error::{PorkbunError, Result, TransportCause};
pub use types::*;
pub use utils::log_sanitizer::truncate_for_log;
