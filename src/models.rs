use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::error::ArgumentError;

// ============================================================================
// National Weather Service API Models
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct AlertResponse {
    pub features: Vec<AlertFeature>,
}

#[derive(Debug, Default, Deserialize)]
pub struct AlertFeature {
    #[serde(default)]
    pub properties: AlertProperties,
}

/// Every field may be missing, null, or of an unexpected type upstream.
/// Absent fields deserialize to `Value::Null`.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct AlertProperties {
    #[serde(default)]
    pub event: Value,
    #[serde(default, rename = "areaDesc")]
    pub area_desc: Value,
    #[serde(default)]
    pub severity: Value,
    #[serde(default)]
    pub status: Value,
    #[serde(default)]
    pub headline: Value,
}

#[derive(Debug, Default, Deserialize)]
pub struct PointsResponse {
    #[serde(default)]
    pub properties: PointsProperties,
}

#[derive(Debug, Default, Deserialize)]
pub struct PointsProperties {
    pub forecast: Option<String>,
}

impl PointsResponse {
    /// The forecast endpoint for the resolved grid point, if one was given
    pub fn forecast_url(&self) -> Option<&str> {
        self.properties
            .forecast
            .as_deref()
            .filter(|url| !url.is_empty())
    }
}

#[derive(Debug, Deserialize)]
pub struct ForecastResponse {
    pub properties: ForecastProperties,
}

#[derive(Debug, Deserialize)]
pub struct ForecastProperties {
    pub periods: Vec<ForecastPeriod>,
}

/// Fields are kept as raw JSON so whatever upstream sent is shown as-is.
/// `None` means the field was absent; an explicit `null` is `Some(Value::Null)`.
#[derive(Debug, Default, Deserialize)]
pub struct ForecastPeriod {
    #[serde(default, deserialize_with = "present")]
    pub name: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    pub temperature: Option<Value>,
    #[serde(default, rename = "temperatureUnit", deserialize_with = "present")]
    pub temperature_unit: Option<Value>,
    #[serde(default, rename = "windSpeed", deserialize_with = "present")]
    pub wind_speed: Option<Value>,
    #[serde(default, rename = "windDirection", deserialize_with = "present")]
    pub wind_direction: Option<Value>,
    #[serde(default, rename = "shortForecast", deserialize_with = "present")]
    pub short_forecast: Option<Value>,
}

fn present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

// ============================================================================
// MCP Tool Request Models
// ============================================================================

#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct GetAlertsRequest {
    /// Two-letter state code (e.g. CA, NY)
    #[schemars(length(min = 2, max = 2))]
    pub state: String,
}

impl GetAlertsRequest {
    pub fn validate(&self) -> Result<(), ArgumentError> {
        let len = self.state.chars().count();
        if len != 2 {
            return Err(ArgumentError::StateLength(len));
        }
        Ok(())
    }

    /// The state code as sent upstream
    pub fn region_code(&self) -> String {
        self.state.to_uppercase()
    }
}

#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct GetForecastRequest {
    /// Latitude of the location
    #[schemars(range(min = -90.0, max = 90.0))]
    pub latitude: f64,
    /// Longitude of the location
    #[schemars(range(min = -180.0, max = 180.0))]
    pub longitude: f64,
}

impl GetForecastRequest {
    pub fn validate(&self) -> Result<(), ArgumentError> {
        if !(-90.0..=90.0).contains(&self.latitude) {
            return Err(ArgumentError::Latitude(self.latitude));
        }
        if !(-180.0..=180.0).contains(&self.longitude) {
            return Err(ArgumentError::Longitude(self.longitude));
        }
        Ok(())
    }
}
