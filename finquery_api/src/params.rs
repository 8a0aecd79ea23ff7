//! Request parameters: an ordered map of string keys to scalars or lists of
//! scalars, serializable as a query string or a JSON object body.

use std::collections::BTreeMap;

use serde_json::Value;
use url::Url;

/// A single scalar parameter value.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    Text(String),
    Int(i64),
    Float(f64),
    Bool(bool),
}

impl Scalar {
    /// Renders the scalar as it appears in a query string.
    pub fn to_query_value(&self) -> String {
        match self {
            Scalar::Text(s) => s.clone(),
            Scalar::Int(i) => i.to_string(),
            Scalar::Float(f) => f.to_string(),
            Scalar::Bool(b) => b.to_string(),
        }
    }

    fn to_json(&self) -> Value {
        match self {
            Scalar::Text(s) => Value::String(s.clone()),
            Scalar::Int(i) => Value::from(*i),
            Scalar::Float(f) => Value::from(*f),
            Scalar::Bool(b) => Value::Bool(*b),
        }
    }
}

impl From<&str> for Scalar {
    fn from(value: &str) -> Self {
        Scalar::Text(value.to_string())
    }
}

impl From<String> for Scalar {
    fn from(value: String) -> Self {
        Scalar::Text(value)
    }
}

impl From<i64> for Scalar {
    fn from(value: i64) -> Self {
        Scalar::Int(value)
    }
}

impl From<f64> for Scalar {
    fn from(value: f64) -> Self {
        Scalar::Float(value)
    }
}

impl From<bool> for Scalar {
    fn from(value: bool) -> Self {
        Scalar::Bool(value)
    }
}

/// A parameter value: one scalar or a list of scalars.
#[derive(Debug, Clone, PartialEq)]
pub enum ParamValue {
    Scalar(Scalar),
    List(Vec<Scalar>),
}

/// Ordered parameter map for one request. Consumed by the call that sends it.
#[derive(Debug, Clone, Default)]
pub struct Params(BTreeMap<String, ParamValue>);

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a scalar parameter, replacing any previous value for the key.
    pub fn set(mut self, key: &str, value: impl Into<Scalar>) -> Self {
        self.0
            .insert(key.to_string(), ParamValue::Scalar(value.into()));
        self
    }

    /// Sets a list-valued parameter. On GET the key is repeated once per
    /// element; on POST the value becomes a JSON array.
    pub fn set_list<I, S>(mut self, key: &str, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Scalar>,
    {
        let list = values.into_iter().map(Into::into).collect();
        self.0.insert(key.to_string(), ParamValue::List(list));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Appends every parameter to the URL's query string.
    pub fn append_to_url(&self, url: &mut Url) {
        let mut pairs = url.query_pairs_mut();
        for (key, value) in &self.0 {
            match value {
                ParamValue::Scalar(scalar) => {
                    pairs.append_pair(key, &scalar.to_query_value());
                }
                ParamValue::List(list) => {
                    for scalar in list {
                        pairs.append_pair(key, &scalar.to_query_value());
                    }
                }
            }
        }
    }

    /// Serializes the parameters as a JSON object for a POST body.
    pub fn to_json_object(&self) -> Value {
        let map = self
            .0
            .iter()
            .map(|(key, value)| {
                let json = match value {
                    ParamValue::Scalar(scalar) => scalar.to_json(),
                    ParamValue::List(list) => {
                        Value::Array(list.iter().map(Scalar::to_json).collect())
                    }
                };
                (key.clone(), json)
            })
            .collect();
        Value::Object(map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn scalars_render_as_query_values() {
        assert_eq!(Scalar::from("IBM").to_query_value(), "IBM");
        assert_eq!(Scalar::from(30i64).to_query_value(), "30");
        assert_eq!(Scalar::from(false).to_query_value(), "false");
        assert_eq!(Scalar::from(1.5f64).to_query_value(), "1.5");
    }

    #[test]
    fn list_values_repeat_the_key() {
        let params = Params::new()
            .set("symbol", "IBM")
            .set_list("exchange", ["NYSE", "LON"]);
        let mut url = Url::parse("https://example.com/query").unwrap();
        params.append_to_url(&mut url);
        assert_eq!(
            url.query(),
            Some("exchange=NYSE&exchange=LON&symbol=IBM")
        );
    }

    #[test]
    fn json_body_keeps_scalar_types() {
        let params = Params::new()
            .set("query", "APPLE")
            .set("limit", 5i64)
            .set("verbose", true)
            .set_list("markets", ["US", "GB"]);
        assert_eq!(
            params.to_json_object(),
            json!({
                "limit": 5,
                "markets": ["US", "GB"],
                "query": "APPLE",
                "verbose": true,
            })
        );
    }

    #[test]
    fn set_replaces_previous_value() {
        let params = Params::new().set("period", "d").set("period", "w");
        assert_eq!(params.to_json_object(), json!({"period": "w"}));
    }
}
