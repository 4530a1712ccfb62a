//! Request payloads and response shapes.

mod dns;
mod domains;

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{PorkbunError, Result};
use crate::utils::serde_helpers::{lenient, number_or_string, opt_number_or_string};

pub use dns::{
    CreateDnsRecordRequest, CreateDnsRecordResponse, CreateDnssecRecordRequest, DnsRecord,
    DnsRecordResponse, DnsRecordsResponse, DnssecRecord, DnssecRecordsResponse,
    EditDnsRecordByIdRequest, EditDnsRecordsByNameTypeRequest,
};
pub use domains::{
    AddUrlForwardRequest, CheckDomainResponse, Domain, DomainAvailability, DomainLabel,
    GlueAddresses, GlueHost, GlueRecordRequest, GlueRecordsResponse, ListAllRequest,
    ListAllResponse, NameserversResponse, PriceQuote, RenewalTransferPricing,
    UpdateNameserversRequest, UrlForward, UrlForwardingResponse,
};

/// Status value that marks a successful response.
pub const SUCCESS_STATUS: &str = "SUCCESS";

// ============ Envelope ============

/// The common wrapper present in every API response.
///
/// Endpoint-specific responses embed it with `#[serde(flatten)]`, so its fields sit
/// alongside the endpoint fields on the wire.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ApiEnvelope {
    /// `"SUCCESS"` or `"ERROR"`.
    pub status: String,
    /// Additional details, mostly present on errors. Non-string values are dropped.
    #[serde(
        default,
        deserialize_with = "lenient",
        skip_serializing_if = "Option::is_none"
    )]
    pub message: Option<String>,
    /// Rate-limit metadata for the current window. Dropped when malformed.
    #[serde(
        default,
        deserialize_with = "lenient",
        skip_serializing_if = "Option::is_none"
    )]
    pub limits: Option<RateLimits>,
}

impl ApiEnvelope {
    /// Whether `status` equals [`SUCCESS_STATUS`].
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.status == SUCCESS_STATUS
    }
}

/// Informational rate-limit data. The client does not enforce it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RateLimits {
    /// Seconds until the window resets.
    #[serde(rename = "TTL", default, deserialize_with = "number_or_string")]
    pub ttl: u64,
    /// Requests allowed per window.
    #[serde(default, deserialize_with = "number_or_string")]
    pub limit: u64,
    /// Requests used in the current window.
    #[serde(default, deserialize_with = "opt_number_or_string")]
    pub used: Option<u64>,
    /// Human-readable description.
    #[serde(rename = "naturalLanguage", default)]
    pub natural_language: String,
}

// ============ Record types ============

/// DNS record types accepted by the API.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum DnsRecordType {
    A,
    Mx,
    Cname,
    Alias,
    Txt,
    Ns,
    Aaaa,
    Srv,
    Tlsa,
    Caa,
    Https,
    Svcb,
    Sshfp,
}

impl DnsRecordType {
    /// Every supported type, in the order the API documents them.
    pub const ALL: [Self; 13] = [
        Self::A,
        Self::Mx,
        Self::Cname,
        Self::Alias,
        Self::Txt,
        Self::Ns,
        Self::Aaaa,
        Self::Srv,
        Self::Tlsa,
        Self::Caa,
        Self::Https,
        Self::Svcb,
        Self::Sshfp,
    ];

    /// Upper-case wire name, as used in path segments.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::A => "A",
            Self::Mx => "MX",
            Self::Cname => "CNAME",
            Self::Alias => "ALIAS",
            Self::Txt => "TXT",
            Self::Ns => "NS",
            Self::Aaaa => "AAAA",
            Self::Srv => "SRV",
            Self::Tlsa => "TLSA",
            Self::Caa => "CAA",
            Self::Https => "HTTPS",
            Self::Svcb => "SVCB",
            Self::Sshfp => "SSHFP",
        }
    }
}

impl fmt::Display for DnsRecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DnsRecordType {
    type Err = PorkbunError;

    fn from_str(s: &str) -> Result<Self> {
        let upper = s.trim().to_uppercase();
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == upper)
            .ok_or_else(|| PorkbunError::ValidationError {
                field: "type".to_string(),
                value: s.into(),
                reason: format!("Unsupported record type: {s}"),
            })
    }
}

// ============ Enumerated options ============

/// URL forward redirect kind.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ForwardType {
    /// HTTP 302.
    Temporary,
    /// HTTP 301.
    Permanent,
}

impl FromStr for ForwardType {
    type Err = PorkbunError;

    fn from_str(s: &str) -> Result<Self> {
        crate::validation::assert_valid(crate::validation::validate_forward_type(s), "type", s)?;
        Ok(if s == "permanent" {
            Self::Permanent
        } else {
            Self::Temporary
        })
    }
}

/// The API's `"yes"` / `"no"` flag.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum YesNo {
    Yes,
    #[default]
    No,
}

impl From<bool> for YesNo {
    fn from(value: bool) -> Self {
        if value { Self::Yes } else { Self::No }
    }
}

impl From<YesNo> for bool {
    fn from(value: YesNo) -> Self {
        value == YesNo::Yes
    }
}

impl FromStr for YesNo {
    type Err = PorkbunError;

    fn from_str(s: &str) -> Result<Self> {
        crate::validation::assert_valid(crate::validation::validate_yes_no(s), "value", s)?;
        Ok(if s == "yes" { Self::Yes } else { Self::No })
    }
}

// ============ Ping / Pricing / SSL ============

/// Response of `/ping`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PingResponse {
    #[serde(flatten)]
    pub envelope: ApiEnvelope,
    /// The public IP the request came from.
    #[serde(rename = "yourIp")]
    pub your_ip: String,
}

/// Default prices for one TLD.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TldPricing {
    pub registration: String,
    pub renewal: String,
    pub transfer: String,
    #[serde(default)]
    pub coupons: Vec<serde_json::Value>,
}

/// Response of `/pricing/get`, keyed by TLD.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PricingResponse {
    #[serde(flatten)]
    pub envelope: ApiEnvelope,
    pub pricing: BTreeMap<String, TldPricing>,
}

/// Response of `/ssl/retrieve/{domain}`.
///
/// `Debug` output redacts the private key.
#[derive(Clone, Serialize, Deserialize)]
pub struct SslBundle {
    #[serde(flatten)]
    pub envelope: ApiEnvelope,
    /// PEM certificate chain.
    #[serde(rename = "certificatechain")]
    pub certificate_chain: String,
    /// PEM private key.
    #[serde(rename = "privatekey")]
    pub private_key: String,
    /// PEM public key.
    #[serde(rename = "publickey")]
    pub public_key: String,
}

impl fmt::Debug for SslBundle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SslBundle")
            .field("envelope", &self.envelope)
            .field("certificate_chain", &self.certificate_chain)
            .field("private_key", &"<redacted>")
            .field("public_key", &self.public_key)
            .finish()
    }
}
