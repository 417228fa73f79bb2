use crate::utils::error::{AlphaStreamError, Result};
use crate::utils::validation::validate_non_empty_string;
use serde::{Deserialize, Serialize};
use std::env;

pub const CLIENT_ID_ENV: &str = "ALPHASTREAM_CLIENT_ID";
pub const API_TOKEN_ENV: &str = "ALPHASTREAM_API_TOKEN";

#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub client_id: String,
    pub api_token: String,
}

impl Credentials {
    pub fn new(client_id: impl Into<String>, api_token: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            api_token: api_token.into(),
        }
    }

    /// 從環境變數讀取；兩個變數都沒設時回傳 `None`
    pub fn from_env() -> Result<Option<Self>> {
        match (env::var(CLIENT_ID_ENV).ok(), env::var(API_TOKEN_ENV).ok()) {
            (Some(client_id), Some(api_token)) => Ok(Some(Self::new(client_id, api_token))),
            (None, None) => Ok(None),
            (Some(_), None) => Err(AlphaStreamError::MissingConfigError {
                field: API_TOKEN_ENV.to_string(),
            }),
            (None, Some(_)) => Err(AlphaStreamError::MissingConfigError {
                field: CLIENT_ID_ENV.to_string(),
            }),
        }
    }

    pub fn validate(&self) -> Result<()> {
        validate_non_empty_string("credentials.client_id", &self.client_id).map_err(|_| {
            AlphaStreamError::ConfigValidationError {
                field: "credentials.client_id".to_string(),
                message: "Client id cannot be empty".to_string(),
            }
        })?;
        validate_non_empty_string("credentials.api_token", &self.api_token).map_err(|_| {
            AlphaStreamError::ConfigValidationError {
                field: "credentials.api_token".to_string(),
                message: "API token cannot be empty".to_string(),
            }
        })
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("client_id", &self.client_id)
            .field("api_token", &"<redacted>")
            .finish()
    }
}
