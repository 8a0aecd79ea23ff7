//! Request types for the OpenFIGI mapping API.

use serde::Serialize;

/// One third-party identifier to resolve to a FIGI. A batch of jobs is
/// POSTed to `/v3/mapping` as a top-level JSON array.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MappingJob {
    /// Identifier type, e.g. `ID_BB_GLOBAL` or `ID_ISIN`.
    pub id_type: String,
    pub id_value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exch_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mic_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
}

impl MappingJob {
    pub fn new(id_type: &str, id_value: &str) -> Self {
        Self {
            id_type: id_type.to_string(),
            id_value: id_value.to_string(),
            exch_code: None,
            mic_code: None,
            currency: None,
        }
    }

    /// Restricts the lookup to one exchange code, e.g. `US`.
    pub fn with_exch_code(mut self, exch_code: &str) -> Self {
        self.exch_code = Some(exch_code.to_string());
        self
    }

    /// Restricts the lookup to one market identifier code.
    pub fn with_mic_code(mut self, mic_code: &str) -> Self {
        self.mic_code = Some(mic_code.to_string());
        self
    }

    /// Restricts the lookup to instruments in one currency.
    pub fn with_currency(mut self, currency: &str) -> Self {
        self.currency = Some(currency.to_string());
        self
    }
}
