//! 共享测试工具和辅助函数

#![allow(dead_code)]

use std::env;

use porkbun_api::{Credentials, PorkbunClient};
use serde_json::{Value, json};
use wiremock::MockServer;

pub const TEST_API_KEY: &str = "pk1_test_public";
pub const TEST_SECRET_API_KEY: &str = "sk1_test_secret";

/// 跳过测试的宏（当环境变量缺失时）
#[macro_export]
macro_rules! skip_if_no_credentials {
    ($($var:expr),+) => {
        $(
            if std::env::var($var).is_err() {
                eprintln!("跳过测试: 缺少环境变量 {}", $var);
                return;
            }
        )+
    };
}

/// 断言 `Option` 为 `Some`，并解包返回内部值（失败则直接让测试失败）。
#[macro_export]
macro_rules! require_some {
    ($expr:expr $(,)?) => {{
        let opt = $expr;
        assert!(opt.is_some(), "expected Some(..), got None");
        let Some(val) = opt else {
            return;
        };
        val
    }};
}

/// 断言 `Result` 为 `Ok`，并解包返回内部值（失败则直接让测试失败）。
#[macro_export]
macro_rules! require_ok {
    ($expr:expr $(,)?) => {{
        let res = $expr;
        assert!(res.is_ok(), "expected Ok(..), got {res:?}");
        let Ok(val) = res else {
            return;
        };
        val
    }};
    ($expr:expr, $($msg:tt)+) => {{
        let res = $expr;
        assert!(
            res.is_ok(),
            "{}: {res:?}",
            format_args!($($msg)+)
        );
        let Ok(val) = res else {
            return;
        };
        val
    }};
}

/// 断言 `Result` 为指定的错误变体
#[macro_export]
macro_rules! assert_err_variant {
    ($expr:expr, $pat:pat $(if $guard:expr)? $(,)?) => {{
        let res = $expr;
        assert!(
            matches!(&res, Err($pat) $(if $guard)?),
            "unexpected result: {res:?}"
        );
    }};
}

/// 指向 mock server 的客户端（固定测试凭证）
pub fn mock_client(server: &MockServer) -> PorkbunClient {
    PorkbunClient::builder(Credentials::new(TEST_API_KEY, TEST_SECRET_API_KEY))
        .base_url(server.uri())
        .build()
}

/// 请求体中必定携带的凭证字段
pub fn credential_body() -> Value {
    json!({
        "apikey": TEST_API_KEY,
        "secretapikey": TEST_SECRET_API_KEY,
    })
}

/// 最小成功响应
pub fn success() -> Value {
    json!({ "status": "SUCCESS" })
}

/// 从环境变量创建真实客户端
pub fn live_client() -> Option<PorkbunClient> {
    let credentials = Credentials::from_env().ok()?;
    Some(PorkbunClient::new(credentials))
}

/// 真实测试使用的域名
pub fn test_domain() -> Option<String> {
    env::var("TEST_DOMAIN").ok()
}

/// 生成唯一的测试记录名称
pub fn generate_test_record_name() -> String {
    let uuid = uuid::Uuid::new_v4();
    format!("porkbun-test-{}", &uuid.to_string()[..8])
}
