use crate::config::credentials::Credentials;
use crate::core::{ApiRequest, ConfigProvider, Executor, HttpMethod, RequestParams};
use crate::domain::model::ApiResponse;
use crate::utils::error::{AlphaStreamError, Result};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use std::time::Duration;
use url::Url;

/// Typed client for the AlphaStream REST API.
pub struct AlphaStreamClient {
    client: Client,
    base_url: Url,
    credentials: Option<Credentials>,
    retry_attempts: u32,
    retry_delay: Duration,
}

impl AlphaStreamClient {
    pub fn new<C: ConfigProvider>(config: &C) -> Result<Self> {
        crate::utils::validation::validate_url("base_url", config.base_url())?;
        crate::utils::validation::validate_positive_number(
            "timeout",
            config.timeout().as_secs(),
            1,
        )?;

        // 基底 URL 必須以 / 結尾，否則 Url::join 會吃掉最後一段路徑
        let mut base = config.base_url().to_string();
        if !base.ends_with('/') {
            base.push('/');
        }
        let base_url = Url::parse(&base)?;

        let client = Client::builder()
            .timeout(config.timeout())
            .user_agent(config.user_agent())
            .build()?;

        tracing::debug!(
            "AlphaStream client ready: base_url={}, authenticated={}, retries={}",
            base_url,
            config.credentials().is_some(),
            config.retry_attempts()
        );

        Ok(Self {
            client,
            base_url,
            credentials: config.credentials(),
            retry_attempts: config.retry_attempts(),
            retry_delay: config.retry_delay(),
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn is_authenticated(&self) -> bool {
        self.credentials.is_some()
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        Ok(self.base_url.join(path.trim_start_matches('/'))?)
    }

    async fn send_once(
        &self,
        method: HttpMethod,
        url: &Url,
        params: &RequestParams,
    ) -> Result<String> {
        let mut request = match method {
            HttpMethod::Get => self
                .client
                .get(url.clone())
                .query(&params.to_query_pairs()),
            HttpMethod::Post => self.client.post(url.clone()).json(&params.to_json_body()),
        };

        if let Some(credentials) = &self.credentials {
            let timestamp = chrono::Utc::now().timestamp();
            request = request
                .basic_auth(&credentials.client_id, Some(&credentials.api_token))
                .header("Timestamp", timestamp.to_string());
        }

        let response = request.send().await?;
        let status = response.status();
        tracing::debug!("📡 API response status: {} ({})", status, url);

        let body = response.text().await?;
        if status.is_success() {
            return Ok(body);
        }

        Err(status_error(status, url, body))
    }

    async fn send_with_retry(
        &self,
        method: HttpMethod,
        url: &Url,
        params: &RequestParams,
    ) -> Result<String> {
        let max_retries = if method.is_idempotent() {
            self.retry_attempts
        } else {
            0
        };

        let mut attempt = 0;
        loop {
            match self.send_once(method, url, params).await {
                Ok(body) => return Ok(body),
                Err(e) if attempt < max_retries && e.is_retryable() => {
                    attempt += 1;
                    tracing::warn!(
                        "🔁 Retrying {} ({}/{}) after error: {}",
                        url,
                        attempt,
                        max_retries,
                        e
                    );
                    tokio::time::sleep(self.retry_delay).await;
                }
                Err(e) => return Err(e),
            }
        }
    }
}

fn status_error(status: StatusCode, url: &Url, body: String) -> AlphaStreamError {
    let messages = serde_json::from_str::<ApiResponse>(&body)
        .map(|r| r.messages)
        .unwrap_or_default();

    AlphaStreamError::HttpStatusError {
        status: status.as_u16(),
        url: url.to_string(),
        messages,
        body,
    }
}

#[async_trait]
impl Executor for AlphaStreamClient {
    async fn execute<R>(&self, request: &R) -> Result<R::Response>
    where
        R: ApiRequest + 'static,
    {
        request.validate()?;

        let method = request.method();
        let url = self.endpoint(&request.path())?;
        let params = request.parameters();

        tracing::debug!("📡 {:?} {} ({} parameters)", method, url, params.len());

        let body = match self.send_with_retry(method, &url, &params).await {
            Ok(body) => body,
            Err(e) => {
                tracing::error!("❌ {:?} {} failed: {}", method, url, e);
                return Err(e);
            }
        };

        serde_json::from_str(&body).map_err(|e| {
            tracing::error!("❌ Unexpected payload from {}: {}", url, e);
            AlphaStreamError::SerializationError(e)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ClientSettings;

    #[test]
    fn test_base_url_gets_trailing_slash() {
        let client =
            AlphaStreamClient::new(&ClientSettings::new("https://example.com/api/v2")).unwrap();
        assert_eq!(client.base_url().as_str(), "https://example.com/api/v2/");
        assert_eq!(
            client.endpoint("alpha/list").unwrap().as_str(),
            "https://example.com/api/v2/alpha/list"
        );
        assert_eq!(
            client.endpoint("/alpha/list").unwrap().as_str(),
            "https://example.com/api/v2/alpha/list"
        );
        assert!(!client.is_authenticated());
    }

    #[test]
    fn test_rejects_non_http_base_url() {
        assert!(AlphaStreamClient::new(&ClientSettings::new("ftp://example.com")).is_err());
    }

    #[test]
    fn test_rejects_sub_second_timeout() {
        for timeout in [Duration::ZERO, Duration::from_millis(500)] {
            let settings = ClientSettings::default().with_timeout(timeout);
            assert!(matches!(
                AlphaStreamClient::new(&settings),
                Err(AlphaStreamError::InvalidConfigValueError { .. })
            ));
        }
    }

    #[test]
    fn test_status_error_extracts_messages() {
        let url = Url::parse("https://example.com/api/v2/alpha/x").unwrap();
        let err = status_error(
            StatusCode::NOT_FOUND,
            &url,
            r#"{"success":false,"messages":["Alpha not found"]}"#.to_string(),
        );
        match err {
            AlphaStreamError::HttpStatusError {
                status, messages, ..
            } => {
                assert_eq!(status, 404);
                assert_eq!(messages, vec!["Alpha not found".to_string()]);
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_status_error_tolerates_plain_body() {
        let url = Url::parse("https://example.com/api/v2/alpha/x").unwrap();
        match status_error(StatusCode::BAD_GATEWAY, &url, "Bad gateway".to_string()) {
            AlphaStreamError::HttpStatusError { messages, body, .. } => {
                assert!(messages.is_empty());
                assert_eq!(body, "Bad gateway");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }
}
