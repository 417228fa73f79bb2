use crate::domain::model::ApiResponse;
use crate::domain::params::RequestParams;
use crate::domain::ports::{ApiRequest, HttpMethod};
use crate::utils::error::Result;
use crate::utils::validation::{validate_email, validate_identifier, validate_non_empty_string};

/// Opens a conversation with the author of an alpha.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CreateConversation {
    pub id: String,
    pub from: String,
    pub subject: String,
    pub message: String,
    pub cc: Option<String>,
}

impl ApiRequest for CreateConversation {
    type Response = ApiResponse;

    fn method(&self) -> HttpMethod {
        HttpMethod::Post
    }

    fn path(&self) -> String {
        format!("alpha/{}/conversations/create", self.id)
    }

    fn parameters(&self) -> RequestParams {
        let mut params = RequestParams::new();
        params.insert("from", self.from.clone());
        params.insert("subject", self.subject.clone());
        params.insert("message", self.message.clone());
        params.insert_opt("cc", self.cc.clone());
        params
    }

    fn validate(&self) -> Result<()> {
        validate_identifier("id", &self.id)?;
        validate_email("from", &self.from)?;
        if let Some(cc) = &self.cc {
            validate_email("cc", cc)?;
        }
        validate_non_empty_string("subject", &self.subject)?;
        validate_non_empty_string("message", &self.message)
    }
}
