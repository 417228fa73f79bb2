use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::utils::error::{AlphaStreamError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetClass {
    Equity,
    Forex,
    Crypto,
    Cfd,
    Option,
    Future,
    Index,
}

impl AssetClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            AssetClass::Equity => "equity",
            AssetClass::Forex => "forex",
            AssetClass::Crypto => "crypto",
            AssetClass::Cfd => "cfd",
            AssetClass::Option => "option",
            AssetClass::Future => "future",
            AssetClass::Index => "index",
        }
    }
}

impl std::fmt::Display for AssetClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for AssetClass {
    type Err = AlphaStreamError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "equity" => Ok(AssetClass::Equity),
            "forex" => Ok(AssetClass::Forex),
            "crypto" => Ok(AssetClass::Crypto),
            "cfd" => Ok(AssetClass::Cfd),
            "option" => Ok(AssetClass::Option),
            "future" => Ok(AssetClass::Future),
            "index" => Ok(AssetClass::Index),
            other => Err(AlphaStreamError::InvalidRequestError {
                field: "asset_classes".to_string(),
                reason: format!("Unknown asset class: {}", other),
            }),
        }
    }
}

/// A trading signal listed on the platform.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Alpha {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub author: Option<Author>,
    #[serde(default)]
    pub asset_classes: Vec<AssetClass>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub accuracy: Option<f64>,
    #[serde(default)]
    pub sharpe_ratio: Option<f64>,
    #[serde(default)]
    pub uniqueness: Option<f64>,
    #[serde(default, with = "chrono::serde::ts_seconds_option")]
    pub listed: Option<DateTime<Utc>>,
    #[serde(default)]
    pub prices: Vec<PriceQuote>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InsightType {
    Price,
    Volatility,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InsightDirection {
    Up,
    Down,
    Flat,
}

/// A single prediction emitted by an alpha.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Insight {
    pub id: String,
    #[serde(default)]
    pub group_id: Option<String>,
    #[serde(default)]
    pub source_model: Option<String>,
    #[serde(default, with = "chrono::serde::ts_seconds_option")]
    pub generated_time: Option<DateTime<Utc>>,
    #[serde(default, with = "chrono::serde::ts_seconds_option")]
    pub close_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub symbol: Option<String>,
    #[serde(default)]
    pub ticker: Option<String>,
    #[serde(rename = "type")]
    pub insight_type: InsightType,
    pub direction: InsightDirection,
    /// Seconds.
    #[serde(default)]
    pub period: Option<f64>,
    #[serde(default)]
    pub magnitude: Option<f64>,
    #[serde(default)]
    pub confidence: Option<f64>,
    #[serde(default)]
    pub weight: Option<f64>,
    #[serde(default)]
    pub reference_value: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Author {
    pub id: String,
    #[serde(default)]
    pub biography: Option<String>,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default, with = "chrono::serde::ts_seconds_option")]
    pub signed_up: Option<DateTime<Utc>>,
    #[serde(default, with = "chrono::serde::ts_seconds_option")]
    pub last_login: Option<DateTime<Utc>>,
    #[serde(default)]
    pub alphas_listed: u32,
    #[serde(default)]
    pub forum_comments: u32,
    #[serde(default)]
    pub forum_discussions: u32,
    #[serde(default)]
    pub projects: u32,
    #[serde(default)]
    pub backtests: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PriceType {
    Ask,
    Bid,
}

/// 一筆報價（賣方要價或買方出價），可分共享與獨家兩種授權價格
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceQuote {
    pub price_type: PriceType,
    #[serde(default)]
    pub shared_price: Option<Decimal>,
    #[serde(default)]
    pub exclusive_price: Option<Decimal>,
    #[serde(default, with = "chrono::serde::ts_seconds_option")]
    pub time: Option<DateTime<Utc>>,
    #[serde(default, with = "chrono::serde::ts_seconds_option")]
    pub good_until: Option<DateTime<Utc>>,
}

impl PriceQuote {
    /// Quotes without `good_until` never expire.
    pub fn is_valid_at(&self, at: DateTime<Utc>) -> bool {
        self.good_until.map_or(true, |until| at <= until)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlphaRuntimeError {
    #[serde(default, with = "chrono::serde::ts_seconds_option")]
    pub time: Option<DateTime<Utc>>,
    pub error: String,
    #[serde(default)]
    pub stack_trace: String,
}

/// Outcome of a mutating call (subscribe, conversation, bid).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiResponse {
    pub success: bool,
    #[serde(default)]
    pub messages: Vec<String>,
}

impl ApiResponse {
    pub fn into_result(self) -> Result<Self> {
        if self.success {
            Ok(self)
        } else {
            Err(AlphaStreamError::RequestRejected {
                messages: self.messages,
            })
        }
    }
}
