use anyhow::Result;
use rmcp::{
    handler::server::{wrapper::Parameters, ServerHandler, tool::ToolRouter},
    model::{CallToolResult, Content, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router,
    ErrorData as McpError,
};

use crate::config::Config;
use crate::constants::{ALERTS_UNAVAILABLE, FORECAST_UNAVAILABLE, FORECAST_URL_UNAVAILABLE};
use crate::error::ArgumentError;
use crate::fetcher::NwsClient;
use crate::formatters::{format_alerts, format_forecast, format_number};
use crate::models::{
    AlertResponse, ForecastResponse, GetAlertsRequest, GetForecastRequest, PointsResponse,
};

/// Main weather service that handles MCP requests
#[derive(Clone)]
pub struct Weather {
    nws: NwsClient,
    tool_router: ToolRouter<Self>,
}

impl Weather {
    /// Creates a new Weather service instance
    pub fn new(config: &Config) -> Result<Self> {
        Ok(Self {
            nws: NwsClient::new(config)?,
            tool_router: Self::tool_router(),
        })
    }

    /// Active alerts for an already normalized state code.
    ///
    /// Never fails; upstream problems become a fixed sentence.
    pub async fn alerts_report(&self, code: &str) -> String {
        let url = self.nws.url(&format!("/alerts?area={code}"));

        match self.nws.fetch_json::<AlertResponse>(&url).await {
            Some(alerts) => format_alerts(code, &alerts.features),
            None => ALERTS_UNAVAILABLE.to_string(),
        }
    }

    /// Forecast periods for a coordinate.
    ///
    /// Resolves the grid point first; the forecast URL is only known once
    /// that call returns.
    pub async fn forecast_report(&self, latitude: f64, longitude: f64) -> String {
        let points_url = self.nws.url(&format!(
            "/points/{},{}",
            format_number(latitude),
            format_number(longitude)
        ));

        let Some(forecast_url) = self.resolve_forecast_url(&points_url).await else {
            return FORECAST_URL_UNAVAILABLE.to_string();
        };

        match self.nws.fetch_json::<ForecastResponse>(&forecast_url).await {
            Some(forecast) => format_forecast(latitude, longitude, &forecast.properties.periods),
            None => FORECAST_UNAVAILABLE.to_string(),
        }
    }

    async fn resolve_forecast_url(&self, points_url: &str) -> Option<String> {
        let points = self.nws.fetch_json::<PointsResponse>(points_url).await?;

        match points.forecast_url() {
            Some(url) => Some(url.to_string()),
            None => {
                tracing::warn!(url = points_url, "Points response has no forecast URL");
                None
            }
        }
    }
}

fn invalid_params(err: ArgumentError) -> McpError {
    McpError::invalid_params(err.to_string(), None)
}

#[tool_handler]
impl ServerHandler for Weather {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "weather".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                icons: None,
                title: None,
                website_url: None,
            },
            instructions: Some(
                "Weather alerts and forecasts for US locations from the National Weather Service API."
                    .to_string(),
            ),
        }
    }
}

#[tool_router]
impl Weather {
    /// Gets active weather alerts for a US state
    #[tool(name = "get-alerts", description = "Get weather alerts for a state")]
    async fn get_alerts(
        &self,
        Parameters(request): Parameters<GetAlertsRequest>,
    ) -> Result<CallToolResult, McpError> {
        request.validate().map_err(invalid_params)?;

        let code = request.region_code();
        tracing::info!("Getting alerts for state: {}", code);

        let text = self.alerts_report(&code).await;
        Ok(CallToolResult::success(vec![Content::text(text)]))
    }

    /// Gets the NWS forecast for a coordinate
    #[tool(name = "get-forecast", description = "Get weather forecast for a location")]
    async fn get_forecast(
        &self,
        Parameters(request): Parameters<GetForecastRequest>,
    ) -> Result<CallToolResult, McpError> {
        request.validate().map_err(invalid_params)?;

        tracing::info!(
            "Getting forecast for coordinates: {}, {}",
            request.latitude,
            request.longitude
        );

        let text = self
            .forecast_report(request.latitude, request.longitude)
            .await;
        Ok(CallToolResult::success(vec![Content::text(text)]))
    }
}
