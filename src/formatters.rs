use serde_json::{Number, Value};

use crate::models::{AlertFeature, ForecastPeriod};

/// Formats one alert as five labeled lines followed by a `---` separator
pub fn format_alert(feature: &AlertFeature) -> String {
    let props = &feature.properties;
    [
        format!("Event: {}", or_default(&props.event, "Unknown")),
        format!("Area: {}", or_default(&props.area_desc, "Unknown")),
        format!("Severity: {}", or_default(&props.severity, "Unknown")),
        format!("Status: {}", or_default(&props.status, "Unknown")),
        format!("Headline: {}", or_default(&props.headline, "No headline")),
        "---".to_string(),
    ]
    .join("\n")
}

/// Formats one forecast period; fields are shown exactly as upstream sent them
pub fn format_period(period: &ForecastPeriod) -> String {
    [
        format!("{}:", raw(&period.name)),
        format!(
            "Temperature: {}\u{00b0}{}",
            raw(&period.temperature),
            raw(&period.temperature_unit)
        ),
        format!("Wind: {} {}", raw(&period.wind_speed), raw(&period.wind_direction)),
        raw(&period.short_forecast),
        "---".to_string(),
    ]
    .join("\n")
}

/// Builds the `get-alerts` reply for a normalized state code
pub fn format_alerts(code: &str, features: &[AlertFeature]) -> String {
    if features.is_empty() {
        return format!("No active alerts for {code}");
    }

    let blocks = features
        .iter()
        .map(format_alert)
        .collect::<Vec<_>>()
        .join("\n");
    format!("Active alerts for {code}:\n\n{blocks}")
}

/// Builds the `get-forecast` reply
pub fn format_forecast(latitude: f64, longitude: f64, periods: &[ForecastPeriod]) -> String {
    let blocks = periods
        .iter()
        .map(format_period)
        .collect::<Vec<_>>()
        .join("\n");
    format!(
        "Forecast for {}, {}:\n\n{blocks}",
        format_number(latitude),
        format_number(longitude)
    )
}

/// Renders a number the way a JSON-native client would print it:
/// integral values without a fraction, zero without a sign, and
/// exponent notation below 1e-6 and from 1e21 up.
pub fn format_number(n: f64) -> String {
    if n == 0.0 {
        return "0".to_string();
    }
    if n.is_nan() {
        return "NaN".to_string();
    }
    if n.is_infinite() {
        return if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }

    let abs = n.abs();
    if abs >= 1e21 {
        format!("{n:e}").replacen('e', "e+", 1)
    } else if abs < 1e-6 {
        format!("{n:e}")
    } else {
        n.to_string()
    }
}

// Null, empty strings, `false` and zero all take the default.
fn or_default(value: &Value, default: &str) -> String {
    match value {
        Value::Null | Value::Bool(false) => default.to_string(),
        Value::String(s) if s.is_empty() => default.to_string(),
        Value::Number(n) if n.as_f64() == Some(0.0) => default.to_string(),
        other => text(other),
    }
}

// Absent fields print as nothing; an explicit null prints as `null`.
fn raw(value: &Option<Value>) -> String {
    value.as_ref().map(text).unwrap_or_default()
}

fn text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => number(n),
        other => other.to_string(),
    }
}

fn number(n: &Number) -> String {
    if n.is_f64() {
        n.as_f64().map(format_number).unwrap_or_else(|| n.to_string())
    } else {
        n.to_string()
    }
}
