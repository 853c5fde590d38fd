/// User agent string for HTTP requests
pub const USER_AGENT: &str = "weather-app/1.0";

/// National Weather Service API base URL
pub const NWS_API_BASE: &str = "https://api.weather.gov";

/// Accept header sent with every NWS request
pub const GEO_JSON: &str = "application/geo+json";

pub const ALERTS_UNAVAILABLE: &str = "Failed to retrieve alerts data";
pub const FORECAST_URL_UNAVAILABLE: &str = "Failed to retrieve forecast URL";
pub const FORECAST_UNAVAILABLE: &str = "Failed to retrieve forecast data";
