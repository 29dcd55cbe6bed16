use super::{Client, Point};

pub mod point {
    use super::{Client, Point};
    use serde_derive::Deserialize;

    #[derive(Debug, Deserialize)]
    pub struct Response {
        properties: Properties,
    }

    impl Response {
        pub fn to_point(&self, client: &Client) -> Point {
            let place = &self.properties.relative_location.properties;
            Point {
                client: client.clone(),
                forecast_hourly: self.properties.forecast_hourly.clone(),
                city: place.city.clone(),
                state: place.state.clone(),
            }
        }
    }

    #[derive(Debug, Deserialize)]
    struct Properties {
        #[serde(rename = "forecastHourly")]
        forecast_hourly: String,
        #[serde(rename = "relativeLocation")]
        relative_location: RelativeLocation,
    }

    #[derive(Debug, Deserialize)]
    struct RelativeLocation {
        properties: Place,
    }

    #[derive(Debug, Deserialize)]
    struct Place {
        city: String,
        state: String,
    }
}

pub mod forecast {
    use crate::weather::Weather;
    use serde_derive::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Period {
        temperature: f64,
        #[serde(rename = "temperatureUnit")]
        temperature_unit: String,
        #[serde(rename = "windSpeed")]
        wind_speed: String,
        #[serde(rename = "windDirection")]
        wind_direction: String,
        #[serde(rename = "shortForecast")]
        short_forecast: String,
    }

    #[derive(Debug, Deserialize)]
    struct Properties {
        periods: Vec<Period>,
    }

    #[derive(Debug, Deserialize)]
    pub struct Response {
        properties: Properties,
    }

    impl Response {
        /// Periods arrive in chronological order, so the first is now.
        pub fn into_current_weather(self, location: String) -> Option<Weather> {
            let now = self.properties.periods.into_iter().next()?;
            Some(Weather {
                location,
                temperature: now.temperature,
                temperature_unit: now.temperature_unit,
                wind_speed: now.wind_speed,
                wind_direction: now.wind_direction,
                short_forecast: now.short_forecast,
            })
        }
    }
}
