use crate::domain::model::ApiResponse;
use crate::domain::params::RequestParams;
use crate::domain::ports::{ApiRequest, HttpMethod};
use crate::utils::error::Result;
use crate::utils::validation::validate_identifier;

/// Subscribe to an alpha's signal under a shared or exclusive license.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Subscribe {
    pub id: String,
    pub exclusive: bool,
}

impl Subscribe {
    pub fn shared(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            exclusive: false,
        }
    }

    pub fn exclusive(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            exclusive: true,
        }
    }
}

impl ApiRequest for Subscribe {
    type Response = ApiResponse;

    fn method(&self) -> HttpMethod {
        HttpMethod::Post
    }

    fn path(&self) -> String {
        format!("alpha/{}/subscribe", self.id)
    }

    fn parameters(&self) -> RequestParams {
        let mut params = RequestParams::new();
        params.insert("exclusive", self.exclusive);
        params
    }

    fn validate(&self) -> Result<()> {
        validate_identifier("id", &self.id)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Unsubscribe {
    pub id: String,
}

impl Unsubscribe {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

impl ApiRequest for Unsubscribe {
    type Response = ApiResponse;

    fn method(&self) -> HttpMethod {
        HttpMethod::Post
    }

    fn path(&self) -> String {
        format!("alpha/{}/unsubscribe", self.id)
    }

    fn validate(&self) -> Result<()> {
        validate_identifier("id", &self.id)
    }
}
