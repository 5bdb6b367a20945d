//! Usage data types decoded from the claude.ai API.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer};

/// One entry of `GET /api/organizations` (only fields we care about)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Organization {
    /// Organization UUID
    pub uuid: String,
}

/// Body of `GET /api/organizations/{id}/usage`
#[derive(Debug, Deserialize)]
pub(crate) struct UsageResponse {
    pub five_hour: FiveHourWindow,
}

/// The rolling five-hour usage window
#[derive(Debug, Deserialize)]
pub(crate) struct FiveHourWindow {
    #[serde(deserialize_with = "deserialize_integral")]
    pub utilization: i64,
    #[serde(default, deserialize_with = "deserialize_lenient_string")]
    pub resets_at: Option<String>,
}

/// Five-hour usage of one organization
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UsageSnapshot {
    /// Percentage of the window consumed (0-100, not validated)
    pub utilization: i64,
    /// When the window resets, forwarded verbatim
    pub resets_at: Option<String>,
}

impl From<UsageResponse> for UsageSnapshot {
    fn from(response: UsageResponse) -> Self {
        Self {
            utilization: response.five_hour.utilization,
            resets_at: response.five_hour.resets_at,
        }
    }
}

/// Accept any JSON number with an integral value (`42` or `42.0`)
fn deserialize_integral<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let number = serde_json::Number::deserialize(deserializer)?;
    if let Some(value) = number.as_i64() {
        return Ok(value);
    }
    match number.as_f64() {
        Some(value) if value.fract() == 0.0 && value.abs() < i64::MAX as f64 => Ok(value as i64),
        _ => Err(D::Error::custom(format!(
            "expected an integral utilization, got {}",
            number
        ))),
    }
}

/// Keep string values, map `null` and any other type to `None`
fn deserialize_lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::String(s)) => Some(s),
        _ => None,
    })
}
