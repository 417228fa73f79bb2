use crate::config::credentials::Credentials;
use crate::domain::params::RequestParams;
use crate::utils::error::Result;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
}

impl HttpMethod {
    pub fn is_idempotent(&self) -> bool {
        matches!(self, HttpMethod::Get)
    }
}

/// A typed descriptor for one remote operation.
pub trait ApiRequest: Send + Sync {
    type Response: DeserializeOwned + Send;

    fn method(&self) -> HttpMethod;

    /// Path relative to the API base URL, without a leading slash.
    fn path(&self) -> String;

    fn parameters(&self) -> RequestParams {
        RequestParams::new()
    }

    /// Runs before anything is sent.
    fn validate(&self) -> Result<()> {
        Ok(())
    }
}

/// Requests that page through results with a `start` offset.
pub trait Paginated: ApiRequest + Clone {
    fn start(&self) -> usize;
    fn with_start(self, start: usize) -> Self;
}

#[async_trait]
pub trait Executor: Send + Sync {
    async fn execute<R>(&self, request: &R) -> Result<R::Response>
    where
        R: ApiRequest + 'static;
}

pub trait ConfigProvider: Send + Sync {
    fn base_url(&self) -> &str;
    fn credentials(&self) -> Option<Credentials>;
    fn timeout(&self) -> Duration;
    fn retry_attempts(&self) -> u32;
    fn retry_delay(&self) -> Duration;
    fn user_agent(&self) -> &str;
}
