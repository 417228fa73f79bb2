use rust_decimal::Decimal;
use serde_json::{Map, Value};

use crate::domain::range::{Range, RangeBound};

/// Ordered request parameters. GET requests render them as a query string,
/// POST requests as a JSON object body.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestParams {
    entries: Vec<(String, Value)>,
}

impl RequestParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        let key = key.into();
        let value = value.into();
        if value.is_null() {
            return;
        }
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn insert_opt<V: Into<Value>>(&mut self, key: impl Into<String>, value: Option<V>) {
        if let Some(value) = value {
            self.insert(key, value);
        }
    }

    pub fn insert_decimal(&mut self, key: impl Into<String>, value: Option<Decimal>) {
        if let Some(value) = value {
            self.insert(key, decimal_value(value));
        }
    }

    /// Empty lists are omitted.
    pub fn insert_list<I, V>(&mut self, key: impl Into<String>, values: I)
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        let values: Vec<Value> = values.into_iter().map(Into::into).collect();
        if !values.is_empty() {
            self.insert(key, Value::Array(values));
        }
    }

    pub fn insert_range<T: RangeBound>(&mut self, name: &str, range: Option<&Range<T>>) {
        if let Some(range) = range {
            if let Some(min) = range.minimum() {
                self.insert(format!("{}-minimum", name), min.to_param());
            }
            if let Some(max) = range.maximum() {
                self.insert(format!("{}-maximum", name), max.to_param());
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn to_query_pairs(&self) -> Vec<(String, String)> {
        self.entries
            .iter()
            .map(|(key, value)| (key.clone(), render_query_value(value)))
            .collect()
    }

    pub fn to_json_body(&self) -> Value {
        let map: Map<String, Value> = self.entries.iter().cloned().collect();
        Value::Object(map)
    }
}

/// Exact decimals become JSON numbers when they parse as such, otherwise strings.
pub fn decimal_value(value: Decimal) -> Value {
    let text = value.normalize().to_string();
    match serde_json::from_str::<serde_json::Number>(&text) {
        Ok(number) => Value::Number(number),
        Err(_) => Value::String(text),
    }
}

fn render_query_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Array(items) => items
            .iter()
            .map(render_query_value)
            .collect::<Vec<_>>()
            .join(","),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}
