//! Record and request types for the EODHD end-of-day API.

use std::fmt;
use std::str::FromStr;

use finquery_api::{validate, Error};
use serde::Serialize;
use serde_json::{Map, Value};

/// Bar period for historical data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Period {
    #[default]
    Daily,
    Weekly,
    Monthly,
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Period::Daily => "d",
            Period::Weekly => "w",
            Period::Monthly => "m",
        };
        f.write_str(s)
    }
}

impl FromStr for Period {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "d" | "daily" => Ok(Period::Daily),
            "w" | "weekly" => Ok(Period::Weekly),
            "m" | "monthly" => Ok(Period::Monthly),
            other => Err(format!("unknown period '{other}' (expected d, w, or m)")),
        }
    }
}

/// Sort order for historical bars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Order {
    /// Oldest bar first.
    #[default]
    Ascending,
    /// Newest bar first.
    Descending,
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Order::Ascending => "a",
            Order::Descending => "d",
        };
        f.write_str(s)
    }
}

impl FromStr for Order {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "a" | "asc" => Ok(Order::Ascending),
            "d" | "desc" => Ok(Order::Descending),
            other => Err(format!("unknown order '{other}' (expected a or d)")),
        }
    }
}

/// One end-of-day bar. The feed serializes numeric fields as numbers or
/// numeric strings; both forms validate.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EodBar {
    pub date: String,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub adjusted_close: f64,
    pub volume: i64,
}

impl EodBar {
    fn from_row(index: usize, row: &Map<String, Value>) -> Result<Self, Error> {
        Ok(Self {
            date: validate::text_field(row, index, "date")?,
            open: validate::float_field(row, index, "open")?,
            high: validate::float_field(row, index, "high")?,
            low: validate::float_field(row, index, "low")?,
            close: validate::float_field(row, index, "close")?,
            adjusted_close: validate::float_field(row, index, "adjusted_close")?,
            volume: validate::int_field(row, index, "volume")?,
        })
    }
}

/// Validates a decoded response into an ordered list of bars. The whole
/// sequence fails on the first row that does not satisfy the schema; no
/// prefix of valid bars is returned.
pub fn validate_bars(raw: &Value) -> Result<Vec<EodBar>, Error> {
    validate::rows(raw, EodBar::from_row)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn bar(date: &str) -> Value {
        json!({
            "date": date,
            "open": "1.0",
            "high": "2.0",
            "low": "0.5",
            "close": "1.5",
            "adjusted_close": "1.5",
            "volume": "100"
        })
    }

    #[test]
    fn string_numerics_validate_into_typed_fields() {
        let raw = json!([bar("2025-01-01")]);
        let bars = validate_bars(&raw).unwrap();
        assert_eq!(bars.len(), 1);
        assert_eq!(bars[0].date, "2025-01-01");
        assert_eq!(bars[0].open, 1.0);
        assert_eq!(bars[0].volume, 100);
    }

    #[test]
    fn missing_close_names_the_row_and_field() {
        let mut rows: Vec<Value> = (1..=5).map(|d| bar(&format!("2025-01-0{d}"))).collect();
        rows[2].as_object_mut().unwrap().remove("close");
        let err = validate_bars(&json!(rows)).unwrap_err();
        match err {
            Error::Validation { index, field, .. } => {
                assert_eq!(index, 2);
                assert_eq!(field, "close");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn order_preserved_and_length_matches() {
        let raw = json!([bar("2025-01-01"), bar("2025-01-02"), bar("2025-01-03")]);
        let bars = validate_bars(&raw).unwrap();
        let dates: Vec<&str> = bars.iter().map(|b| b.date.as_str()).collect();
        assert_eq!(dates, vec!["2025-01-01", "2025-01-02", "2025-01-03"]);
    }

    #[test]
    fn period_and_order_round_trip() {
        assert_eq!("d".parse::<Period>().unwrap(), Period::Daily);
        assert_eq!(Period::Weekly.to_string(), "w");
        assert_eq!("asc".parse::<Order>().unwrap(), Order::Ascending);
        assert_eq!(Order::Descending.to_string(), "d");
        assert!("x".parse::<Period>().is_err());
    }
}
