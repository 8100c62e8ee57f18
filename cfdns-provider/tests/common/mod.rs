//! 共享测试工具和辅助函数

#![allow(dead_code)]

use cfdns_provider::CloudflareProvider;
use serde_json::{Value, json};
use wiremock::MockServer;

pub const TEST_TOKEN: &str = "test-token-0123456789";
pub const ZONE_ID: &str = "023e105f4ecef8ad9ca31a8372d0c353";

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
}

/// 指向 mock server 的 provider
pub fn provider_for(server: &MockServer) -> CloudflareProvider {
    CloudflareProvider::with_base_url(TEST_TOKEN.to_string(), server.uri())
        .expect("failed to build provider")
}

/// Cloudflare 成功响应信封
pub fn envelope(result: Value) -> Value {
    json!({
        "success": true,
        "errors": [],
        "messages": [],
        "result": result
    })
}

/// 带分页信息的成功响应信封
pub fn paged_envelope(result: Value, page: u32, per_page: u32, total_count: u32) -> Value {
    json!({
        "success": true,
        "errors": [],
        "messages": [],
        "result": result,
        "result_info": {
            "page": page,
            "per_page": per_page,
            "count": result.as_array().map_or(0, Vec::len),
            "total_count": total_count
        }
    })
}

/// Cloudflare 失败响应信封
pub fn error_envelope(code: i32, message: &str) -> Value {
    json!({
        "success": false,
        "errors": [{ "code": code, "message": message }],
        "messages": [],
        "result": null
    })
}

pub fn record_json(id: &str, name: &str, record_type: &str, content: &str, ttl: u32) -> Value {
    json!({
        "id": id,
        "zone_id": ZONE_ID,
        "zone_name": "example.com",
        "name": name,
        "type": record_type,
        "content": content,
        "proxiable": true,
        "proxied": false,
        "ttl": ttl,
        "locked": false,
        "created_on": "2024-01-01T00:00:00Z",
        "modified_on": "2024-01-01T00:00:00Z"
    })
}
