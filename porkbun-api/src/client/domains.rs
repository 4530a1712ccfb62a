//! Domain endpoints (`/domain/...`)

use crate::error::Result;
use crate::types::{
    AddUrlForwardRequest, ApiEnvelope, CheckDomainResponse, GlueRecordRequest,
    GlueRecordsResponse, ListAllRequest, ListAllResponse, NameserversResponse,
    UpdateNameserversRequest, UrlForwardingResponse,
};
use crate::validation::{
    assert_valid, validate_forward_id, validate_ips, validate_nameservers, validate_subdomain,
    validate_url,
};

use super::PorkbunClient;
use super::http::endpoint_path;

const BASE_PATH: &str = "/domain";

/// Domain endpoints, obtained from [`PorkbunClient::domains`].
#[derive(Debug, Clone, Copy)]
pub struct DomainsApi<'a> {
    client: &'a PorkbunClient,
}

impl<'a> DomainsApi<'a> {
    pub(super) fn new(client: &'a PorkbunClient) -> Self {
        Self { client }
    }

    /// Domains in the account, 1000 per call starting at `request.start`.
    pub async fn list_all(&self, request: ListAllRequest) -> Result<ListAllResponse> {
        self.client
            .post(&format!("{BASE_PATH}/listAll"), &request)
            .await
    }

    /// Availability and price of a domain name. Rate limited by the API.
    pub async fn check_domain(&self, domain: &str) -> Result<CheckDomainResponse> {
        let path = endpoint_path(&format!("{BASE_PATH}/checkDomain"), domain, &[])?;
        self.client.post_empty(&path).await
    }

    /// Authoritative nameservers listed at the registry.
    pub async fn get_nameservers(&self, domain: &str) -> Result<NameserversResponse> {
        let path = endpoint_path(&format!("{BASE_PATH}/getNs"), domain, &[])?;
        self.client.post_empty(&path).await
    }

    /// Replaces the nameservers listed at the registry.
    pub async fn update_nameservers(&self, request: &UpdateNameserversRequest) -> Result<ApiEnvelope> {
        assert_valid(validate_nameservers(&request.ns), "ns", request.ns.clone())?;
        let path = endpoint_path(&format!("{BASE_PATH}/updateNs"), &request.domain, &[])?;
        self.client.post(&path, request).await
    }

    // ============ URL forwarding ============

    pub async fn get_url_forwarding(&self, domain: &str) -> Result<UrlForwardingResponse> {
        let path = endpoint_path(&format!("{BASE_PATH}/getUrlForwarding"), domain, &[])?;
        self.client.post_empty(&path).await
    }

    /// Adds a URL forward. `type`, `includePath` and `wildcard` are enforced by
    /// their types; location and subdomain are checked here.
    pub async fn add_url_forward(&self, request: &AddUrlForwardRequest) -> Result<ApiEnvelope> {
        assert_valid(
            validate_url(&request.location),
            "location",
            request.location.as_str(),
        )?;
        if let Some(subdomain) = &request.subdomain {
            assert_valid(validate_subdomain(subdomain), "subdomain", subdomain.as_str())?;
        }
        let path = endpoint_path(&format!("{BASE_PATH}/addUrlForward"), &request.domain, &[])?;
        self.client.post(&path, request).await
    }

    pub async fn delete_url_forward(&self, domain: &str, forward_id: &str) -> Result<ApiEnvelope> {
        assert_valid(validate_forward_id(forward_id), "forward_id", forward_id)?;
        let path = endpoint_path(
            &format!("{BASE_PATH}/deleteUrlForward"),
            domain,
            &[forward_id],
        )?;
        self.client.post_empty(&path).await
    }

    // ============ Glue records ============

    /// Glue hosts of a domain. `hosts` is `None` when there are none.
    pub async fn get_glue_records(&self, domain: &str) -> Result<GlueRecordsResponse> {
        let path = endpoint_path(&format!("{BASE_PATH}/getGlue"), domain, &[])?;
        self.client.post_empty(&path).await
    }

    pub async fn create_glue(&self, request: &GlueRecordRequest) -> Result<ApiEnvelope> {
        self.write_glue("createGlue", request).await
    }

    /// Replaces every address of an existing glue host.
    pub async fn update_glue(&self, request: &GlueRecordRequest) -> Result<ApiEnvelope> {
        self.write_glue("updateGlue", request).await
    }

    pub async fn delete_glue(&self, domain: &str, glue_host_subdomain: &str) -> Result<ApiEnvelope> {
        assert_valid(
            validate_subdomain(glue_host_subdomain),
            "glue_host_subdomain",
            glue_host_subdomain,
        )?;
        let path = endpoint_path(
            &format!("{BASE_PATH}/deleteGlue"),
            domain,
            &[glue_host_subdomain],
        )?;
        self.client.post_empty(&path).await
    }

    async fn write_glue(&self, action: &str, request: &GlueRecordRequest) -> Result<ApiEnvelope> {
        assert_valid(
            validate_subdomain(&request.glue_host_subdomain),
            "glue_host_subdomain",
            request.glue_host_subdomain.as_str(),
        )?;
        assert_valid(validate_ips(&request.ips), "ips", request.ips.clone())?;
        let path = endpoint_path(
            &format!("{BASE_PATH}/{action}"),
            &request.domain,
            &[request.glue_host_subdomain.as_str()],
        )?;
        self.client.post(&path, request).await
    }
}
