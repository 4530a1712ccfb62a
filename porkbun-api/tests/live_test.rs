//! 真实 API 冒烟测试
//!
//! 需要环境变量：`PORKBUN_API_KEY`、`PORKBUN_SECRET_API_KEY`、`TEST_DOMAIN`
//! （域名需开启 API 访问）。运行：
//!     cargo test -p porkbun-api --test live_test -- --ignored --nocapture --test-threads=1

mod common;

use porkbun_api::{CreateDnsRecordRequest, DnsRecordType};

use common::{generate_test_record_name, live_client, test_domain};

#[tokio::test]
#[ignore]
async fn test_live_ping() {
    skip_if_no_credentials!("PORKBUN_API_KEY", "PORKBUN_SECRET_API_KEY");
    let client = require_some!(live_client());

    let pong = require_ok!(client.ping().await);
    assert!(!pong.your_ip.is_empty());
}

#[tokio::test]
#[ignore]
async fn test_live_get_nameservers() {
    skip_if_no_credentials!("PORKBUN_API_KEY", "PORKBUN_SECRET_API_KEY", "TEST_DOMAIN");
    let client = require_some!(live_client());
    let domain = require_some!(test_domain());

    let ns = require_ok!(client.domains().get_nameservers(&domain).await);
    assert!(!ns.ns.is_empty());
}

#[tokio::test]
#[ignore]
async fn test_live_txt_record_lifecycle() {
    skip_if_no_credentials!("PORKBUN_API_KEY", "PORKBUN_SECRET_API_KEY", "TEST_DOMAIN");
    let client = require_some!(live_client());
    let domain = require_some!(test_domain());
    let name = generate_test_record_name();

    // 1. 创建
    let mut req = CreateDnsRecordRequest::new(domain.as_str(), DnsRecordType::Txt, "porkbun-api live test");
    req.name = Some(name.clone());
    req.ttl = Some(600);
    let created = require_ok!(client.dns().create_record(&req).await, "创建 TXT 记录失败");

    // 2. 查询
    let fetched = client.dns().get_record(&domain, &created.id).await;

    // 3. 清理（无论查询结果如何都删除）
    let deleted = client.dns().delete_record_by_id(&domain, &created.id).await;

    let fetched = require_ok!(fetched);
    let record = require_some!(fetched.record);
    assert_eq!(record.record_type, DnsRecordType::Txt);
    assert!(record.name.starts_with(&name));
    require_ok!(deleted, "删除 TXT 记录失败");
}
