use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::params::decimal_value;
use crate::utils::error::{AlphaStreamError, Result};
use crate::utils::validation::validate_ordered;

/// Inclusive `[minimum, maximum]` search bound. Either side may be open.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Range<T> {
    minimum: Option<T>,
    maximum: Option<T>,
}

impl<T> Range<T> {
    pub fn create(minimum: Option<T>, maximum: Option<T>) -> Self {
        Self { minimum, maximum }
    }

    pub fn new(minimum: T, maximum: T) -> Self {
        Self::create(Some(minimum), Some(maximum))
    }

    pub fn at_least(minimum: T) -> Self {
        Self::create(Some(minimum), None)
    }

    pub fn at_most(maximum: T) -> Self {
        Self::create(None, Some(maximum))
    }

    pub fn minimum(&self) -> Option<&T> {
        self.minimum.as_ref()
    }

    pub fn maximum(&self) -> Option<&T> {
        self.maximum.as_ref()
    }
}

impl<T: RangeBound> Range<T> {
    pub fn validate(&self, field_name: &str) -> Result<()> {
        // NaN 會在序列化時變成 null 而被丟掉，也不會被 validate_ordered 擋下
        for bound in [self.minimum.as_ref(), self.maximum.as_ref()]
            .into_iter()
            .flatten()
        {
            if !bound.is_finite() {
                return Err(AlphaStreamError::InvalidRequestError {
                    field: field_name.to_string(),
                    reason: format!("Bound {:?} is not a finite number", bound),
                });
            }
        }
        validate_ordered(field_name, self.minimum.as_ref(), self.maximum.as_ref())
    }
}

impl<T: PartialOrd> Range<T> {
    pub fn contains(&self, value: &T) -> bool {
        self.minimum.as_ref().map_or(true, |min| value >= min)
            && self.maximum.as_ref().map_or(true, |max| value <= max)
    }
}

/// Types usable as range bounds in search filters.
pub trait RangeBound: PartialOrd + std::fmt::Debug {
    fn to_param(&self) -> Value;

    fn is_finite(&self) -> bool {
        true
    }
}

macro_rules! impl_integer_bound {
    ($($t:ty),*) => {
        $(impl RangeBound for $t {
            fn to_param(&self) -> Value {
                Value::from(*self)
            }
        })*
    };
}

impl_integer_bound!(i32, i64, u32, u64);

impl RangeBound for f64 {
    fn to_param(&self) -> Value {
        Value::from(*self)
    }

    fn is_finite(&self) -> bool {
        f64::is_finite(*self)
    }
}

impl RangeBound for Decimal {
    fn to_param(&self) -> Value {
        decimal_value(*self)
    }
}

impl RangeBound for DateTime<Utc> {
    fn to_param(&self) -> Value {
        Value::from(self.timestamp())
    }
}
