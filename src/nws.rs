use crate::error::Error;
use crate::http::read_json;
use crate::location::Location;
use crate::weather::{Units, Weather};
use reqwest::header::USER_AGENT;
use reqwest::RequestBuilder;
use std::sync::Arc;
use tracing::debug;

mod geojson;

pub const BASE_URL: &str = "https://api.weather.gov";
const POINT_CONTEXT: &str = "Failed to fetch NWS location metadata";
const FORECAST_CONTEXT: &str = "Failed to fetch NWS forecast";

#[derive(Debug)]
struct ClientState {
    ua: String,
    base_url: String,
    client: reqwest::Client,
}

/// National Weather Service API client. The service refuses requests
/// without a `User-Agent`, so one is sent with every call.
#[derive(Clone, Debug)]
pub struct Client {
    state: Arc<ClientState>,
}

impl Client {
    pub fn with_base_url(base_url: &str, ua: &str) -> Client {
        Client {
            state: Arc::new(ClientState {
                ua: ua.to_string(),
                base_url: base_url.trim_end_matches('/').to_string(),
                client: reqwest::Client::new(),
            }),
        }
    }

    /// Resolves the forecast endpoint and nearest place name for `loc`.
    pub async fn get_point(&self, loc: &Location) -> Result<Point, Error> {
        let url = format!("{}/points/{}", self.state.base_url, loc);
        debug!("Fetching NWS location metadata from {}", url);

        let res = self
            .get(&url)
            .send()
            .await
            .map_err(Error::request(POINT_CONTEXT))?;
        let res: geojson::point::Response = read_json(res, POINT_CONTEXT).await?;
        Ok(res.to_point(self))
    }

    fn get(&self, url: &str) -> RequestBuilder {
        self.state.client.get(url).header(USER_AGENT, &self.state.ua)
    }
}

#[derive(Debug)]
pub struct Point {
    client: Client,
    forecast_hourly: String,
    city: String,
    state: String,
}

impl Point {
    #[cfg(test)]
    fn forecast_hourly_url(&self) -> &str {
        &self.forecast_hourly
    }

    /// "City, ST"
    pub fn place_name(&self) -> String {
        format!("{}, {}", self.city, self.state)
    }

    /// Fetches the hourly forecast and returns the period covering now.
    pub async fn get_current_weather(&self, units: Units) -> Result<Weather, Error> {
        debug!(
            "Fetching NWS forecast from {}?units={}",
            self.forecast_hourly,
            units.forecast_param()
        );

        let res = self
            .client
            .get(&self.forecast_hourly)
            .query(&[("units", units.forecast_param())])
            .send()
            .await
            .map_err(Error::request(FORECAST_CONTEXT))?;
        let res: geojson::forecast::Response = read_json(res, FORECAST_CONTEXT).await?;
        res.into_current_weather(self.place_name())
            .ok_or(Error::NoForecastPeriods)
    }
}
