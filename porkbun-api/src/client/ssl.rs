//! SSL endpoint (`/ssl/...`)

use crate::error::Result;
use crate::types::SslBundle;

use super::PorkbunClient;
use super::http::endpoint_path;

/// SSL endpoints, obtained from [`PorkbunClient::ssl`].
#[derive(Debug, Clone, Copy)]
pub struct SslApi<'a> {
    client: &'a PorkbunClient,
}

impl<'a> SslApi<'a> {
    pub(super) fn new(client: &'a PorkbunClient) -> Self {
        Self { client }
    }

    /// Certificate chain and key pair of the free certificate Porkbun issues for the domain.
    pub async fn retrieve_bundle(&self, domain: &str) -> Result<SslBundle> {
        let path = endpoint_path("/ssl/retrieve", domain, &[])?;
        self.client.post_empty(&path).await
    }
}
