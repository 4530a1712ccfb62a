//! Domain, nameserver, URL forwarding and glue record types

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::utils::serde_helpers::{number_or_string, string_or_number};

use super::{ApiEnvelope, ForwardType, YesNo};

/// Timestamp format used by `createDate` / `expireDate`.
const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

// ============ listAll ============

/// Payload of `/domain/listAll`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ListAllRequest {
    /// Index to start from. The API returns 1000 domains per call.
    pub start: u32,
    pub include_labels: bool,
}

/// A label attached to a domain in the account.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DomainLabel {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    pub title: String,
    pub color: String,
}

/// A domain registered in the account.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Domain {
    pub domain: String,
    pub status: String,
    pub tld: String,
    /// `YYYY-MM-DD HH:MM:SS`
    pub create_date: String,
    /// `YYYY-MM-DD HH:MM:SS`
    pub expire_date: String,
    #[serde(deserialize_with = "string_or_number")]
    pub security_lock: String,
    #[serde(deserialize_with = "string_or_number")]
    pub whois_privacy: String,
    #[serde(deserialize_with = "number_or_string")]
    pub auto_renew: u32,
    #[serde(deserialize_with = "number_or_string")]
    pub not_local: u32,
    /// Present only when requested with `includeLabels`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub labels: Option<Vec<DomainLabel>>,
}

impl Domain {
    /// Parsed `createDate`, or `None` if the API sent something unexpected.
    pub fn created_at(&self) -> Option<NaiveDateTime> {
        NaiveDateTime::parse_from_str(&self.create_date, DATE_FORMAT).ok()
    }

    /// Parsed `expireDate`.
    pub fn expires_at(&self) -> Option<NaiveDateTime> {
        NaiveDateTime::parse_from_str(&self.expire_date, DATE_FORMAT).ok()
    }

    pub fn auto_renew_enabled(&self) -> bool {
        self.auto_renew != 0
    }
}

/// Response of `/domain/listAll`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListAllResponse {
    #[serde(flatten)]
    pub envelope: ApiEnvelope,
    #[serde(default)]
    pub domains: Vec<Domain>,
}

// ============ checkDomain ============

/// A price entry inside [`RenewalTransferPricing`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PriceQuote {
    #[serde(rename = "type")]
    pub kind: String,
    pub price: String,
    #[serde(default)]
    pub regular_price: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RenewalTransferPricing {
    pub renewal: PriceQuote,
    pub transfer: PriceQuote,
}

/// Availability and pricing of a domain name.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DomainAvailability {
    pub avail: YesNo,
    /// Purchase type, e.g. `registration`.
    #[serde(rename = "type")]
    pub kind: String,
    pub price: String,
    #[serde(default)]
    pub first_year_promo: String,
    #[serde(default)]
    pub regular_price: String,
    #[serde(default)]
    pub premium: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional: Option<RenewalTransferPricing>,
}

impl DomainAvailability {
    pub fn is_available(&self) -> bool {
        self.avail == YesNo::Yes
    }
}

/// Response of `/domain/checkDomain/{domain}`.
///
/// The live API nests the availability block under `response`; older responses
/// carried it at the top level. Both decode to the same shape; serialization
/// writes the nested form.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(from = "RawCheckDomainResponse", into = "RawCheckDomainResponse")]
pub struct CheckDomainResponse {
    pub envelope: ApiEnvelope,
    pub availability: DomainAvailability,
}

#[derive(Clone, Serialize, Deserialize)]
#[serde(untagged)]
enum RawCheckDomainResponse {
    Nested {
        #[serde(flatten)]
        envelope: ApiEnvelope,
        response: DomainAvailability,
    },
    Flat {
        #[serde(flatten)]
        envelope: ApiEnvelope,
        #[serde(flatten)]
        availability: DomainAvailability,
    },
}

impl From<RawCheckDomainResponse> for CheckDomainResponse {
    fn from(raw: RawCheckDomainResponse) -> Self {
        match raw {
            RawCheckDomainResponse::Nested { envelope, response } => Self {
                envelope,
                availability: response,
            },
            RawCheckDomainResponse::Flat {
                envelope,
                availability,
            } => Self {
                envelope,
                availability,
            },
        }
    }
}

impl From<CheckDomainResponse> for RawCheckDomainResponse {
    fn from(value: CheckDomainResponse) -> Self {
        Self::Nested {
            envelope: value.envelope,
            response: value.availability,
        }
    }
}

// ============ Nameservers ============

/// Response of `/domain/getNs/{domain}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NameserversResponse {
    #[serde(flatten)]
    pub envelope: ApiEnvelope,
    #[serde(default)]
    pub ns: Vec<String>,
}

/// Payload of `/domain/updateNs/{domain}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateNameserversRequest {
    #[serde(skip)]
    pub domain: String,
    pub ns: Vec<String>,
}

// ============ URL forwarding ============

/// A configured URL forward.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UrlForward {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    #[serde(default)]
    pub subdomain: String,
    pub location: String,
    #[serde(rename = "type")]
    pub forward_type: ForwardType,
    pub include_path: YesNo,
    pub wildcard: YesNo,
}

/// Response of `/domain/getUrlForwarding/{domain}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UrlForwardingResponse {
    #[serde(flatten)]
    pub envelope: ApiEnvelope,
    #[serde(default)]
    pub forwards: Vec<UrlForward>,
}

/// Payload of `/domain/addUrlForward/{domain}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddUrlForwardRequest {
    #[serde(skip)]
    pub domain: String,
    /// Leave unset to forward the root domain.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subdomain: Option<String>,
    pub location: String,
    #[serde(rename = "type")]
    pub forward_type: ForwardType,
    pub include_path: YesNo,
    /// Also forward all subdomains.
    pub wildcard: YesNo,
}

// ============ Glue records ============

/// Addresses bound to a glue host.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct GlueAddresses {
    #[serde(default)]
    pub v4: Vec<String>,
    #[serde(default)]
    pub v6: Vec<String>,
}

/// `[host, {v4, v6}]` as sent by `/domain/getGlue`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GlueHost(pub String, pub GlueAddresses);

impl GlueHost {
    pub fn host(&self) -> &str {
        &self.0
    }

    pub fn addresses(&self) -> &GlueAddresses {
        &self.1
    }
}

/// Response of `/domain/getGlue/{domain}`. `hosts` is absent when none exist.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GlueRecordsResponse {
    #[serde(flatten)]
    pub envelope: ApiEnvelope,
    #[serde(default)]
    pub hosts: Option<Vec<GlueHost>>,
}

/// Payload of `/domain/createGlue` and `/domain/updateGlue`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GlueRecordRequest {
    #[serde(skip)]
    pub domain: String,
    /// Host label under the domain, e.g. `ns1`.
    #[serde(skip)]
    pub glue_host_subdomain: String,
    pub ips: Vec<String>,
}
