//! Cloudflare HTTP 请求方法
//!
//! Every request is sent once. Transport failures, 429 and 502-504 are reported
//! before the body is interpreted; everything else goes through the envelope.

use reqwest::header::RETRY_AFTER;
use reqwest::{Method, RequestBuilder, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::{ProviderError, Result};
use crate::log_sanitizer::truncate_for_log;

use super::CloudflareProvider;
use super::error::{Target, api_error, status_error};
use super::types::Envelope;

impl CloudflareProvider {
    /// 执行 GET 请求，返回完整信封（分页信息在 `result_info` 中）
    pub(super) async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        target: Target<'_>,
    ) -> Result<Envelope<T>> {
        self.send(Method::GET, path, None::<&()>, target).await
    }

    /// 执行写请求（POST 创建 / PUT 整体替换），返回 `result`
    pub(super) async fn write<T: DeserializeOwned, B: Serialize>(
        &self,
        method: Method,
        path: &str,
        body: &B,
        target: Target<'_>,
    ) -> Result<T> {
        self.send(method, path, Some(body), target)
            .await?
            .result
            .ok_or_else(|| ProviderError::Parse("response has no result".to_string()))
    }

    /// 执行 DELETE 请求
    pub(super) async fn delete(&self, path: &str, target: Target<'_>) -> Result<()> {
        self.send::<serde_json::Value, ()>(Method::DELETE, path, None, target)
            .await
            .map(drop)
    }

    async fn send<T: DeserializeOwned, B: Serialize>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
        target: Target<'_>,
    ) -> Result<Envelope<T>> {
        let url = format!("{}{path}", self.base_url);
        log::debug!("[cloudflare] {method} {url}");

        let mut request = self
            .client
            .request(method, &url)
            .bearer_auth(&self.api_token);
        if let Some(body) = body {
            log_body(body);
            request = request.json(body);
        }

        let (status, text) = execute(request).await?;
        decode(status, &text, target)
    }
}

/// Send and read the body, turning transport-level failures into errors.
async fn execute(request: RequestBuilder) -> Result<(u16, String)> {
    let response = request.send().await.map_err(|e| {
        if e.is_timeout() {
            ProviderError::Timeout(e.to_string())
        } else {
            ProviderError::Network(e.to_string())
        }
    })?;

    let status = response.status().as_u16();
    log::debug!("[cloudflare] Response Status: {status}");

    match status {
        429 => {
            let retry_after = retry_after(&response);
            let body = read_body(response).await.unwrap_or_default();
            log::warn!("[cloudflare] Rate limited, retry_after={retry_after:?}");
            Err(ProviderError::RateLimited {
                retry_after,
                message: Some(truncate_for_log(&body)).filter(|b| !b.is_empty()),
            })
        }
        502..=504 => {
            let body = read_body(response).await.unwrap_or_default();
            log::warn!("[cloudflare] Gateway error (HTTP {status})");
            Err(ProviderError::Network(format!(
                "HTTP {status}: {}",
                truncate_for_log(&body)
            )))
        }
        _ => {
            let body = read_body(response).await?;
            log::debug!("[cloudflare] Response Body: {}", truncate_for_log(&body));
            Ok((status, body))
        }
    }
}

fn retry_after(response: &Response) -> Option<u64> {
    response
        .headers()
        .get(RETRY_AFTER)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.trim().parse().ok())
}

async fn read_body(response: Response) -> Result<String> {
    response
        .text()
        .await
        .map_err(|e| ProviderError::Network(format!("failed to read response body: {e}")))
}

/// Parse the envelope; `success: false` maps its first error.
fn decode<T: DeserializeOwned>(status: u16, text: &str, target: Target<'_>) -> Result<Envelope<T>> {
    let envelope: Envelope<T> = match serde_json::from_str(text) {
        Ok(envelope) => envelope,
        // 错误响应不一定是 JSON 信封（例如网关直接返回的 401/403）
        Err(_) if status >= 400 => return Err(status_error(status, text)),
        Err(e) => {
            log::error!("[cloudflare] JSON parse failed: {e}");
            return Err(ProviderError::Parse(e.to_string()));
        }
    };

    if envelope.success {
        return Ok(envelope);
    }

    let err = match envelope.errors.into_iter().next() {
        Some(first) => {
            log::error!("[cloudflare] API error {}: {}", first.code, first.message);
            api_error(first, target)
        }
        None => ProviderError::Api {
            code: None,
            message: format!("request failed (HTTP {status})"),
        },
    };
    Err(err)
}

fn log_body<B: Serialize>(body: &B) {
    if log::log_enabled!(log::Level::Debug) {
        let body_json =
            serde_json::to_string(body).unwrap_or_else(|_| "无法序列化请求体".to_string());
        log::debug!("[cloudflare] Request Body: {body_json}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cloudflare::types::ZoneResult;

    const ZONE: Target<'static> = Target::Zone("example.com");

    #[test]
    fn success_envelope_passes_through() {
        let envelope: Envelope<Vec<ZoneResult>> = decode(
            200,
            r#"{"success":true,"errors":[],"result":[{"id":"z1","name":"example.com"}]}"#,
            ZONE,
        )
        .unwrap();
        assert_eq!(envelope.result.map(|z| z.len()), Some(1));
    }

    #[test]
    fn failure_without_errors_reports_status() {
        let err = decode::<serde_json::Value>(400, r#"{"success":false,"errors":[]}"#, ZONE)
            .unwrap_err();
        assert_eq!(
            err,
            ProviderError::Api {
                code: None,
                message: "request failed (HTTP 400)".to_string()
            }
        );
    }

    #[test]
    fn non_json_error_uses_status() {
        let err = decode::<serde_json::Value>(403, "Forbidden", ZONE).unwrap_err();
        assert!(matches!(err, ProviderError::PermissionDenied { .. }));
    }

    #[test]
    fn non_json_success_is_parse_error() {
        let err = decode::<serde_json::Value>(200, "<html></html>", ZONE).unwrap_err();
        assert!(matches!(err, ProviderError::Parse(_)));
    }
}
