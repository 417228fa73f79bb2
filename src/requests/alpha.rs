use rust_decimal::Decimal;

use crate::domain::model::{Alpha, AlphaRuntimeError, AssetClass, Insight, PriceQuote};
use crate::domain::params::RequestParams;
use crate::domain::ports::{ApiRequest, HttpMethod, Paginated};
use crate::domain::range::Range;
use crate::utils::error::Result;
use crate::utils::validation::validate_identifier;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct GetAlphaById {
    pub id: String,
}

impl GetAlphaById {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

impl ApiRequest for GetAlphaById {
    type Response = Alpha;

    fn method(&self) -> HttpMethod {
        HttpMethod::Get
    }

    fn path(&self) -> String {
        format!("alpha/{}", self.id)
    }

    fn validate(&self) -> Result<()> {
        validate_identifier("id", &self.id)
    }
}

/// 依 ID 取得子資源（insights、prices、errors）的分頁請求共用同一個形狀
macro_rules! alpha_resource_request {
    ($(#[$meta:meta])* $name:ident, $segment:literal, $item:ty) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq)]
        pub struct $name {
            pub id: String,
            pub start: usize,
        }

        impl $name {
            pub fn new(id: impl Into<String>) -> Self {
                Self {
                    id: id.into(),
                    start: 0,
                }
            }
        }

        impl ApiRequest for $name {
            type Response = Vec<$item>;

            fn method(&self) -> HttpMethod {
                HttpMethod::Get
            }

            fn path(&self) -> String {
                format!("alpha/{}/{}", self.id, $segment)
            }

            fn parameters(&self) -> RequestParams {
                let mut params = RequestParams::new();
                params.insert("start", self.start as u64);
                params
            }

            fn validate(&self) -> Result<()> {
                validate_identifier("id", &self.id)
            }
        }

        impl Paginated for $name {
            fn start(&self) -> usize {
                self.start
            }

            fn with_start(self, start: usize) -> Self {
                Self { start, ..self }
            }
        }
    };
}

alpha_resource_request!(
    /// Insights emitted by an alpha, oldest first.
    GetAlphaInsights,
    "insights",
    Insight
);

alpha_resource_request!(
    /// Ask and bid quotes for an alpha, oldest first.
    GetAlphaPrices,
    "prices",
    PriceQuote
);

alpha_resource_request!(
    /// Runtime errors logged while the alpha was running.
    GetAlphaErrors,
    "errors",
    AlphaRuntimeError
);

/// Identifiers of every alpha visible to the caller.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct GetAlphaList;

impl ApiRequest for GetAlphaList {
    type Response = Vec<String>;

    fn method(&self) -> HttpMethod {
        HttpMethod::Get
    }

    fn path(&self) -> String {
        "alpha/list".to_string()
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchAlphas {
    pub author: Option<String>,
    pub asset_classes: Vec<AssetClass>,
    /// Security identifier strings, e.g. `"BTCUSD XJ"`.
    pub symbols: Vec<String>,
    pub include_tags: Vec<String>,
    pub exclude_tags: Vec<String>,
    pub accuracy: Option<Range<f64>>,
    pub sharpe: Option<Range<f64>>,
    pub uniqueness: Option<Range<f64>>,
    pub shared_fee: Option<Range<Decimal>>,
    pub exclusive_fee: Option<Range<Decimal>>,
    pub start: usize,
}

impl ApiRequest for SearchAlphas {
    type Response = Vec<Alpha>;

    fn method(&self) -> HttpMethod {
        HttpMethod::Get
    }

    fn path(&self) -> String {
        "alpha/search".to_string()
    }

    fn parameters(&self) -> RequestParams {
        let mut params = RequestParams::new();
        params.insert_opt("author", self.author.clone());
        params.insert_list(
            "asset-classes",
            self.asset_classes.iter().map(|c| c.as_str()),
        );
        params.insert_list("symbols", self.symbols.clone());
        params.insert_list("include-tags", self.include_tags.clone());
        params.insert_list("exclude-tags", self.exclude_tags.clone());
        params.insert_range("accuracy", self.accuracy.as_ref());
        params.insert_range("sharpe", self.sharpe.as_ref());
        params.insert_range("uniqueness", self.uniqueness.as_ref());
        params.insert_range("shared-fee", self.shared_fee.as_ref());
        params.insert_range("exclusive-fee", self.exclusive_fee.as_ref());
        params.insert("start", self.start as u64);
        params
    }

    fn validate(&self) -> Result<()> {
        if let Some(author) = &self.author {
            validate_identifier("author", author)?;
        }
        if let Some(range) = &self.accuracy {
            range.validate("accuracy")?;
        }
        if let Some(range) = &self.sharpe {
            range.validate("sharpe")?;
        }
        if let Some(range) = &self.uniqueness {
            range.validate("uniqueness")?;
        }
        if let Some(range) = &self.shared_fee {
            range.validate("shared_fee")?;
        }
        if let Some(range) = &self.exclusive_fee {
            range.validate("exclusive_fee")?;
        }
        Ok(())
    }
}

impl Paginated for SearchAlphas {
    fn start(&self) -> usize {
        self.start
    }

    fn with_start(self, start: usize) -> Self {
        Self { start, ..self }
    }
}
