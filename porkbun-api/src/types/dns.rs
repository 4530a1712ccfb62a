//! DNS and DNSSEC record types

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::utils::serde_helpers::{
    map_or_empty, number_or_string, opt_number_or_string, string_or_number,
};

use super::{ApiEnvelope, DnsRecordType};

// ============ Records ============

/// A DNS record as returned by `/dns/retrieve*`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DnsRecord {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    /// Fully-qualified record name.
    pub name: String,
    #[serde(rename = "type")]
    pub record_type: DnsRecordType,
    pub content: String,
    #[serde(deserialize_with = "number_or_string")]
    pub ttl: u32,
    #[serde(default)]
    pub prio: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

/// Response carrying a list of records.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DnsRecordsResponse {
    #[serde(flatten)]
    pub envelope: ApiEnvelope,
    #[serde(default)]
    pub records: Vec<DnsRecord>,
}

/// Response of a single-record lookup.
///
/// The API answers with a `records` array; the first element (if any) becomes `record`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DnsRecordResponse {
    #[serde(flatten)]
    pub envelope: ApiEnvelope,
    pub record: Option<DnsRecord>,
}

impl From<DnsRecordsResponse> for DnsRecordResponse {
    fn from(response: DnsRecordsResponse) -> Self {
        Self {
            envelope: response.envelope,
            record: response.records.into_iter().next(),
        }
    }
}

/// Payload of `/dns/create/{domain}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateDnsRecordRequest {
    /// Domain the record is created on. Sent in the path.
    #[serde(skip)]
    pub domain: String,
    /// Subdomain, without the domain. `None` or `""` for the root, `"*"` for a wildcard.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub record_type: DnsRecordType,
    pub content: String,
    /// Seconds; the API minimum and default is 600.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ttl: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl CreateDnsRecordRequest {
    /// A record with only the required fields set.
    pub fn new(
        domain: impl Into<String>,
        record_type: DnsRecordType,
        content: impl Into<String>,
    ) -> Self {
        Self {
            domain: domain.into(),
            name: None,
            record_type,
            content: content.into(),
            ttl: None,
            prio: None,
            notes: None,
        }
    }
}

/// Response of `/dns/create/{domain}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateDnsRecordResponse {
    #[serde(flatten)]
    pub envelope: ApiEnvelope,
    /// ID of the new record.
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
}

/// Payload of `/dns/edit/{domain}/{id}`. Replaces the record wholesale.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EditDnsRecordByIdRequest {
    #[serde(skip)]
    pub domain: String,
    #[serde(skip)]
    pub record_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub record_type: DnsRecordType,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ttl: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Payload of `/dns/editByNameType/{domain}/{type}/{subdomain}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EditDnsRecordsByNameTypeRequest {
    #[serde(skip)]
    pub domain: String,
    #[serde(skip, default = "default_record_type")]
    pub record_type: DnsRecordType,
    #[serde(skip)]
    pub subdomain: String,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ttl: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

fn default_record_type() -> DnsRecordType {
    DnsRecordType::A
}

// ============ DNSSEC ============

/// A DS record held at the registry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DnssecRecord {
    #[serde(deserialize_with = "number_or_string")]
    pub key_tag: u32,
    #[serde(deserialize_with = "number_or_string")]
    pub alg: u8,
    #[serde(deserialize_with = "number_or_string")]
    pub digest_type: u8,
    pub digest: String,
}

/// Response of `/dns/getDnssecRecords/{domain}`, keyed by key tag.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DnssecRecordsResponse {
    #[serde(flatten)]
    pub envelope: ApiEnvelope,
    #[serde(default, deserialize_with = "map_or_empty")]
    pub records: BTreeMap<String, DnssecRecord>,
}

/// Payload of `/dns/createDnssecRecord/{domain}`.
///
/// Registries differ in what they require; max sig life and key data are usually optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateDnssecRecordRequest {
    #[serde(skip)]
    pub domain: String,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "opt_number_or_string"
    )]
    pub key_tag: Option<u32>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "opt_number_or_string"
    )]
    pub alg: Option<u8>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "opt_number_or_string"
    )]
    pub digest_type: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub digest: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_sig_life: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key_data_flags: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key_data_protocol: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key_data_algo: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key_data_pub_key: Option<String>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn record_decodes_string_ttl() {
        let json = r#"{"id":"106926652","name":"www.example.com","type":"A","content":"1.1.1.1","ttl":"600","prio":"0","notes":""}"#;
        let r: DnsRecord = serde_json::from_str(json).unwrap();
        assert_eq!(r.ttl, 600);
        assert_eq!(r.record_type, DnsRecordType::A);
        assert_eq!(r.prio.as_deref(), Some("0"));
    }

    #[test]
    fn record_decodes_null_prio() {
        let json = r#"{"id":1,"name":"example.com","type":"TXT","content":"hi","ttl":600,"prio":null,"notes":null}"#;
        let r: DnsRecord = serde_json::from_str(json).unwrap();
        assert_eq!(r.id, "1");
        assert!(r.prio.is_none());
    }

    #[test]
    fn single_record_takes_first() {
        let json = r#"{"status":"SUCCESS","records":[{"id":"1","name":"a.example.com","type":"A","content":"1.1.1.1","ttl":"600"},{"id":"2","name":"b.example.com","type":"A","content":"1.1.1.2","ttl":"600"}]}"#;
        let many: DnsRecordsResponse = serde_json::from_str(json).unwrap();
        let one = DnsRecordResponse::from(many);
        assert_eq!(one.record.map(|r| r.id).as_deref(), Some("1"));
    }

    #[test]
    fn single_record_empty_is_none() {
        let many: DnsRecordsResponse =
            serde_json::from_str(r#"{"status":"SUCCESS","records":[]}"#).unwrap();
        assert!(DnsRecordResponse::from(many).record.is_none());
    }

    #[test]
    fn create_request_omits_domain_and_unset_fields() {
        let mut req = CreateDnsRecordRequest::new("example.com", DnsRecordType::Mx, "mail.example.com");
        req.prio = Some("10".to_string());
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"type":"MX","content":"mail.example.com","prio":"10"})
        );
    }

    #[test]
    fn create_response_accepts_numeric_id() {
        let r: CreateDnsRecordResponse =
            serde_json::from_str(r#"{"status":"SUCCESS","id":106926659}"#).unwrap();
        assert_eq!(r.id, "106926659");
    }

    #[test]
    fn dnssec_request_camel_case() {
        let req = CreateDnssecRecordRequest {
            domain: "example.com".to_string(),
            key_tag: Some(64087),
            alg: Some(13),
            digest_type: Some(2),
            digest: Some("15E445BD".to_string()),
            ..Default::default()
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"keyTag":64087,"alg":13,"digestType":2,"digest":"15E445BD"})
        );
    }

    #[test]
    fn dnssec_records_keyed_by_tag() {
        let json = r#"{"status":"SUCCESS","records":{"64087":{"keyTag":"64087","alg":"13","digestType":"2","digest":"15E445BD"}}}"#;
        let r: DnssecRecordsResponse = serde_json::from_str(json).unwrap();
        assert_eq!(r.records["64087"].alg, 13);
    }
}
