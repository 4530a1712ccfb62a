//! 域名 / 名称服务器 / URL 转发 / Glue 记录端点测试（wiremock）

mod common;

use porkbun_api::{
    AddUrlForwardRequest, ForwardType, GlueRecordRequest, ListAllRequest, PorkbunError,
    UpdateNameserversRequest, YesNo,
};
use serde_json::json;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use common::{credential_body, mock_client, success};

async fn forbid_requests(server: &MockServer) {
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(success()))
        .expect(0)
        .mount(server)
        .await;
}

// ============ listAll ============

#[tokio::test]
async fn test_list_all_sends_defaults() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/domain/listAll"))
        .and(body_partial_json(credential_body()))
        .and(body_partial_json(json!({ "start": 0, "includeLabels": false })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "SUCCESS",
            "domains": [{
                "domain": "example.com",
                "status": "ACTIVE",
                "tld": "com",
                "createDate": "2018-08-20 17:52:51",
                "expireDate": "2023-08-20 17:52:51",
                "securityLock": "1",
                "whoisPrivacy": "1",
                "autoRenew": 0,
                "notLocal": 0
            }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let resp = require_ok!(
        mock_client(&server)
            .domains()
            .list_all(ListAllRequest::default())
            .await
    );
    assert_eq!(resp.domains.len(), 1);
    let domain = &resp.domains[0];
    assert_eq!(domain.tld, "com");
    assert!(domain.created_at().is_some());
    assert!(domain.labels.is_none());
}

#[tokio::test]
async fn test_list_all_with_labels_and_offset() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/domain/listAll"))
        .and(body_partial_json(json!({ "start": 1000, "includeLabels": true })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "SUCCESS",
            "domains": []
        })))
        .expect(1)
        .mount(&server)
        .await;

    let req = ListAllRequest {
        start: 1000,
        include_labels: true,
    };
    let resp = require_ok!(mock_client(&server).domains().list_all(req).await);
    assert!(resp.domains.is_empty());
}

// ============ checkDomain ============

#[tokio::test]
async fn test_check_domain_flat_response() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/domain/checkDomain/example.dev"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "SUCCESS",
            "avail": "no",
            "type": "registration",
            "price": "10.81",
            "firstYearPromo": "no",
            "regularPrice": "10.81",
            "premium": "no"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let resp = require_ok!(mock_client(&server).domains().check_domain("example.dev").await);
    assert!(!resp.availability.is_available());
    assert_eq!(resp.availability.price, "10.81");
}

// ============ Nameservers ============

#[tokio::test]
async fn test_update_nameservers_body() {
    let server = MockServer::start().await;
    let ns = vec![
        "curitiba.ns.porkbun.com".to_string(),
        "fortaleza.ns.porkbun.com".to_string(),
    ];
    Mock::given(method("POST"))
        .and(path("/domain/updateNs/example.com"))
        .and(body_partial_json(json!({ "ns": ns })))
        .respond_with(ResponseTemplate::new(200).set_body_json(success()))
        .expect(1)
        .mount(&server)
        .await;

    let req = UpdateNameserversRequest {
        domain: "example.com".to_string(),
        ns,
    };
    require_ok!(mock_client(&server).domains().update_nameservers(&req).await);
}

#[tokio::test]
async fn test_update_nameservers_rejects_bad_entry() {
    let server = MockServer::start().await;
    forbid_requests(&server).await;
    let client = mock_client(&server);

    let req = UpdateNameserversRequest {
        domain: "example.com".to_string(),
        ns: vec!["ns1.example.net".to_string(), "bad host!".to_string()],
    };
    assert_err_variant!(
        client.domains().update_nameservers(&req).await,
        PorkbunError::ValidationError { field, reason, .. }
            if field == "ns" && reason.starts_with("Nameserver at index 1")
    );

    let empty = UpdateNameserversRequest {
        domain: "example.com".to_string(),
        ns: Vec::new(),
    };
    assert_err_variant!(
        client.domains().update_nameservers(&empty).await,
        PorkbunError::ValidationError { field, .. } if field == "ns"
    );
}

// ============ URL forwarding ============

#[tokio::test]
async fn test_get_url_forwarding() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/domain/getUrlForwarding/example.com"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "SUCCESS",
            "forwards": [{
                "id": "22049209",
                "subdomain": "blog",
                "location": "https://blog.example.net",
                "type": "permanent",
                "includePath": "yes",
                "wildcard": "no"
            }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let resp = require_ok!(mock_client(&server).domains().get_url_forwarding("example.com").await);
    let forward = &resp.forwards[0];
    assert_eq!(forward.forward_type, ForwardType::Permanent);
    assert!(bool::from(forward.include_path));
}

#[tokio::test]
async fn test_add_url_forward_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/domain/addUrlForward/example.com"))
        .and(body_partial_json(json!({
            "subdomain": "blog",
            "location": "https://blog.example.net",
            "type": "temporary",
            "includePath": "no",
            "wildcard": "yes"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(success()))
        .expect(1)
        .mount(&server)
        .await;

    let req = AddUrlForwardRequest {
        domain: "example.com".to_string(),
        subdomain: Some("blog".to_string()),
        location: "https://blog.example.net".to_string(),
        forward_type: ForwardType::Temporary,
        include_path: YesNo::No,
        wildcard: YesNo::Yes,
    };
    require_ok!(mock_client(&server).domains().add_url_forward(&req).await);
}

#[tokio::test]
async fn test_add_url_forward_rejects_bad_location() {
    let server = MockServer::start().await;
    forbid_requests(&server).await;

    let req = AddUrlForwardRequest {
        domain: "example.com".to_string(),
        subdomain: None,
        location: "ftp://files.example.net".to_string(),
        forward_type: ForwardType::Temporary,
        include_path: YesNo::No,
        wildcard: YesNo::No,
    };
    assert_err_variant!(
        mock_client(&server).domains().add_url_forward(&req).await,
        PorkbunError::ValidationError { field, .. } if field == "location"
    );
}

#[tokio::test]
async fn test_delete_url_forward() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/domain/deleteUrlForward/example.com/22049209"))
        .respond_with(ResponseTemplate::new(200).set_body_json(success()))
        .expect(1)
        .mount(&server)
        .await;

    require_ok!(
        mock_client(&server)
            .domains()
            .delete_url_forward("example.com", "22049209")
            .await
    );
}

#[tokio::test]
async fn test_delete_url_forward_rejects_blank_id() {
    let server = MockServer::start().await;
    forbid_requests(&server).await;

    assert_err_variant!(
        mock_client(&server)
            .domains()
            .delete_url_forward("example.com", "")
            .await,
        PorkbunError::ValidationError { field, .. } if field == "forward_id"
    );
}

// ============ Glue ============

#[tokio::test]
async fn test_get_glue_records() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/domain/getGlue/example.com"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "SUCCESS",
            "hosts": [
                ["ns1.example.com", { "v6": ["2001:db8::1"], "v4": ["192.0.2.1"] }]
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let resp = require_ok!(mock_client(&server).domains().get_glue_records("example.com").await);
    let hosts = require_some!(resp.hosts);
    assert_eq!(hosts[0].host(), "ns1.example.com");
    assert_eq!(hosts[0].addresses().v6, vec!["2001:db8::1"]);
}

#[tokio::test]
async fn test_create_and_update_glue_paths() {
    let server = MockServer::start().await;
    for route in [
        "/domain/createGlue/example.com/ns1",
        "/domain/updateGlue/example.com/ns1",
    ] {
        Mock::given(method("POST"))
            .and(path(route))
            .and(body_partial_json(json!({ "ips": ["192.0.2.1", "2001:db8::1"] })))
            .respond_with(ResponseTemplate::new(200).set_body_json(success()))
            .expect(1)
            .mount(&server)
            .await;
    }

    let client = mock_client(&server);
    let req = GlueRecordRequest {
        domain: "example.com".to_string(),
        glue_host_subdomain: "ns1".to_string(),
        ips: vec!["192.0.2.1".to_string(), "2001:db8::1".to_string()],
    };
    require_ok!(client.domains().create_glue(&req).await);
    require_ok!(client.domains().update_glue(&req).await);
}

#[tokio::test]
async fn test_create_glue_rejects_bad_ip() {
    let server = MockServer::start().await;
    forbid_requests(&server).await;

    let req = GlueRecordRequest {
        domain: "example.com".to_string(),
        glue_host_subdomain: "ns1".to_string(),
        ips: vec!["1.1.1.1".to_string(), "bad".to_string()],
    };
    assert_err_variant!(
        mock_client(&server).domains().create_glue(&req).await,
        PorkbunError::ValidationError { field, reason, .. }
            if field == "ips" && reason.contains("index 1")
    );
}

#[tokio::test]
async fn test_delete_glue() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/domain/deleteGlue/example.com/ns1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(success()))
        .expect(1)
        .mount(&server)
        .await;

    require_ok!(
        mock_client(&server)
            .domains()
            .delete_glue("example.com", "ns1")
            .await
    );
}
