//! DNS record and DNSSEC endpoints (`/dns/...`)

use crate::error::Result;
use crate::types::{
    ApiEnvelope, CreateDnsRecordRequest, CreateDnsRecordResponse, CreateDnssecRecordRequest,
    DnsRecordResponse, DnsRecordType, DnsRecordsResponse, DnssecRecordsResponse,
    EditDnsRecordByIdRequest, EditDnsRecordsByNameTypeRequest,
};
use crate::validation::{
    assert_valid, validate_dns_content, validate_priority, validate_record_id,
    validate_subdomain, validate_ttl,
};

use super::PorkbunClient;
use super::http::endpoint_path;

const BASE_PATH: &str = "/dns";

/// DNS endpoints, obtained from [`PorkbunClient::dns`].
#[derive(Debug, Clone, Copy)]
pub struct DnsApi<'a> {
    client: &'a PorkbunClient,
}

impl<'a> DnsApi<'a> {
    pub(super) fn new(client: &'a PorkbunClient) -> Self {
        Self { client }
    }

    /// All records of a domain.
    pub async fn get_records(&self, domain: &str) -> Result<DnsRecordsResponse> {
        let path = endpoint_path(&format!("{BASE_PATH}/retrieve"), domain, &[])?;
        self.client.post_empty(&path).await
    }

    /// A single record by ID. `record` is `None` when the API returns no match.
    pub async fn get_record(&self, domain: &str, record_id: &str) -> Result<DnsRecordResponse> {
        assert_valid(validate_record_id(record_id), "record_id", record_id)?;
        let path = endpoint_path(&format!("{BASE_PATH}/retrieve"), domain, &[record_id])?;
        let records: DnsRecordsResponse = self.client.post_empty(&path).await?;
        Ok(records.into())
    }

    /// Records of one type at the root of the domain.
    ///
    /// Only the apex is searched; a CNAME lookup returns nothing when the root has
    /// none. Use [`get_subdomain_records_by_type`](Self::get_subdomain_records_by_type)
    /// for subdomains.
    pub async fn get_root_records_by_type(
        &self,
        domain: &str,
        record_type: DnsRecordType,
    ) -> Result<DnsRecordsResponse> {
        let path = endpoint_path(
            &format!("{BASE_PATH}/retrieveByNameType"),
            domain,
            &[record_type.as_str()],
        )?;
        self.client.post_empty(&path).await
    }

    /// Records of one type at `subdomain`.
    pub async fn get_subdomain_records_by_type(
        &self,
        domain: &str,
        record_type: DnsRecordType,
        subdomain: &str,
    ) -> Result<DnsRecordsResponse> {
        assert_valid(validate_subdomain(subdomain), "subdomain", subdomain)?;
        let path = endpoint_path(
            &format!("{BASE_PATH}/retrieveByNameType"),
            domain,
            &[record_type.as_str(), subdomain],
        )?;
        self.client.post_empty(&path).await
    }

    /// Creates a record and returns its ID.
    pub async fn create_record(
        &self,
        request: &CreateDnsRecordRequest,
    ) -> Result<CreateDnsRecordResponse> {
        if let Some(name) = &request.name {
            assert_valid(validate_subdomain(name), "name", name.as_str())?;
        }
        check_record_fields(
            request.record_type,
            &request.content,
            request.ttl,
            request.prio.as_deref(),
        )?;
        let path = endpoint_path(&format!("{BASE_PATH}/create"), &request.domain, &[])?;
        self.client.post(&path, request).await
    }

    /// Replaces a record identified by ID.
    pub async fn edit_record_by_id(&self, request: &EditDnsRecordByIdRequest) -> Result<ApiEnvelope> {
        assert_valid(
            validate_record_id(&request.record_id),
            "record_id",
            request.record_id.as_str(),
        )?;
        if let Some(name) = &request.name {
            assert_valid(validate_subdomain(name), "name", name.as_str())?;
        }
        check_record_fields(
            request.record_type,
            &request.content,
            request.ttl,
            request.prio.as_deref(),
        )?;
        let path = endpoint_path(
            &format!("{BASE_PATH}/edit"),
            &request.domain,
            &[request.record_id.as_str()],
        )?;
        self.client.post(&path, request).await
    }

    /// Edits every record matching a subdomain and type.
    pub async fn edit_records_by_name_type(
        &self,
        request: &EditDnsRecordsByNameTypeRequest,
    ) -> Result<ApiEnvelope> {
        assert_valid(
            validate_subdomain(&request.subdomain),
            "subdomain",
            request.subdomain.as_str(),
        )?;
        check_record_fields(
            request.record_type,
            &request.content,
            request.ttl,
            request.prio.as_deref(),
        )?;
        let path = endpoint_path(
            &format!("{BASE_PATH}/editByNameType"),
            &request.domain,
            &[request.record_type.as_str(), request.subdomain.as_str()],
        )?;
        self.client.post(&path, request).await
    }

    pub async fn delete_record_by_id(&self, domain: &str, record_id: &str) -> Result<ApiEnvelope> {
        assert_valid(validate_record_id(record_id), "record_id", record_id)?;
        let path = endpoint_path(&format!("{BASE_PATH}/delete"), domain, &[record_id])?;
        self.client.post_empty(&path).await
    }

    /// Deletes every record matching a subdomain and type.
    pub async fn delete_records_by_name_type(
        &self,
        domain: &str,
        record_type: DnsRecordType,
        subdomain: &str,
    ) -> Result<ApiEnvelope> {
        assert_valid(validate_subdomain(subdomain), "subdomain", subdomain)?;
        let path = endpoint_path(
            &format!("{BASE_PATH}/deleteByNameType"),
            domain,
            &[record_type.as_str(), subdomain],
        )?;
        self.client.post_empty(&path).await
    }

    // ============ DNSSEC ============

    /// Creates a DS record at the registry.
    pub async fn create_dnssec_record(
        &self,
        request: &CreateDnssecRecordRequest,
    ) -> Result<ApiEnvelope> {
        let path = endpoint_path(
            &format!("{BASE_PATH}/createDnssecRecord"),
            &request.domain,
            &[],
        )?;
        self.client.post(&path, request).await
    }

    /// Deletes DS records by key tag. Most registries delete every record with
    /// matching data, not only the one with this tag.
    pub async fn delete_dnssec_record(&self, domain: &str, key_tag: u32) -> Result<ApiEnvelope> {
        let key_tag = key_tag.to_string();
        let path = endpoint_path(
            &format!("{BASE_PATH}/deleteDnssecRecord"),
            domain,
            &[key_tag.as_str()],
        )?;
        self.client.post_empty(&path).await
    }

    /// DS records at the registry, keyed by key tag. Empty when none exist.
    pub async fn get_dnssec_records(&self, domain: &str) -> Result<DnssecRecordsResponse> {
        let path = endpoint_path(&format!("{BASE_PATH}/getDnssecRecords"), domain, &[])?;
        self.client.post_empty(&path).await
    }
}

/// Content, TTL and priority checks shared by create and edit.
fn check_record_fields(
    record_type: DnsRecordType,
    content: &str,
    ttl: Option<u32>,
    prio: Option<&str>,
) -> Result<()> {
    assert_valid(validate_dns_content(record_type, content), "content", content)?;
    if let Some(ttl) = ttl {
        assert_valid(validate_ttl(f64::from(ttl)), "ttl", ttl)?;
    }
    if let Some(prio) = prio {
        assert_valid(validate_priority(prio), "prio", prio)?;
    }
    Ok(())
}
