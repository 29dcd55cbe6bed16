//! Greets the caller with the current weather at their approximate location.
//!
//! The pipeline is three sequential calls: an IP geolocation lookup, a
//! National Weather Service point lookup, and the hourly forecast for that
//! point. The first period of the forecast is formatted as one sentence.

pub mod error;
pub mod geoip;
mod http;
pub mod location;
pub mod nws;
pub mod output;
pub mod report;
pub mod weather;

use std::path::PathBuf;
use tracing::debug;

pub use error::Error;
pub use location::Location;
pub use weather::{Units, Weather};

pub const DEFAULT_USER_AGENT: &str = concat!(
    env!("CARGO_PKG_NAME"),
    "/",
    env!("CARGO_PKG_VERSION")
);

#[derive(Debug, Clone)]
pub struct Options {
    pub units: Units,
    pub output: Option<PathBuf>,
    pub api_key: String,
    pub user_agent: String,
    pub geoip_url: String,
    pub nws_url: String,
}

impl Options {
    pub fn new(api_key: &str) -> Options {
        Options {
            units: Units::default(),
            output: None,
            api_key: api_key.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            geoip_url: geoip::BASE_URL.to_string(),
            nws_url: nws::BASE_URL.to_string(),
        }
    }
}

/// Looks up the weather and writes the report. Nothing is written unless
/// every request succeeds.
pub async fn run(options: &Options) -> Result<(), Error> {
    let geoip = geoip::Client::with_base_url(
        &options.geoip_url,
        &options.api_key,
        &options.user_agent,
    );
    let location = geoip.get_location().await?;
    debug!("Located at {}", location);

    let nws = nws::Client::with_base_url(&options.nws_url, &options.user_agent);
    let point = nws.get_point(&location).await?;
    let weather = point.get_current_weather(options.units).await?;
    debug!(
        "Wind {} {} at {}",
        weather.wind_speed, weather.wind_direction, weather.location
    );

    let text = report::summarize(&weather);
    output::write_output(&text, options.output.as_deref())
}
