use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use crate::domain::model::ApiResponse;
use crate::domain::params::RequestParams;
use crate::domain::ports::{ApiRequest, HttpMethod};
use crate::utils::error::{AlphaStreamError, Result};
use crate::utils::validation::validate_identifier;

/// Places a bid on an alpha. The bid stays open until `good_until`.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateBidPrice {
    pub id: String,
    pub shared_price: Option<Decimal>,
    pub exclusive_price: Option<Decimal>,
    pub good_until: DateTime<Utc>,
}

impl CreateBidPrice {
    pub fn shared(id: impl Into<String>, price: Decimal, good_until: DateTime<Utc>) -> Self {
        Self {
            id: id.into(),
            shared_price: Some(price),
            exclusive_price: None,
            good_until,
        }
    }
}

impl ApiRequest for CreateBidPrice {
    type Response = ApiResponse;

    fn method(&self) -> HttpMethod {
        HttpMethod::Post
    }

    fn path(&self) -> String {
        format!("alpha/{}/prices/bids/create", self.id)
    }

    fn parameters(&self) -> RequestParams {
        let mut params = RequestParams::new();
        params.insert_decimal("shared", self.shared_price);
        params.insert_decimal("exclusive", self.exclusive_price);
        params.insert("good-until", self.good_until.timestamp());
        params
    }

    fn validate(&self) -> Result<()> {
        validate_identifier("id", &self.id)?;

        if self.shared_price.is_none() && self.exclusive_price.is_none() {
            return Err(AlphaStreamError::InvalidRequestError {
                field: "shared_price".to_string(),
                reason: "A bid needs a shared or an exclusive price".to_string(),
            });
        }

        for (field, price) in [
            ("shared_price", self.shared_price),
            ("exclusive_price", self.exclusive_price),
        ] {
            if let Some(price) = price {
                if price <= Decimal::ZERO {
                    return Err(AlphaStreamError::InvalidRequestError {
                        field: field.to_string(),
                        reason: format!("Price must be positive, got {}", price),
                    });
                }
            }
        }

        Ok(())
    }
}
