use clap::ValueEnum;

/// Unit system the forecast is requested in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Units {
    /// US customary units (°F, mph)
    #[default]
    Us,
    /// Metric units (°C, km/h)
    Metric,
}

impl Units {
    /// Value of the forecast endpoint's `units` query parameter.
    pub fn forecast_param(&self) -> &'static str {
        match self {
            Units::Metric => "si",
            Units::Us => "us",
        }
    }
}

/// Current conditions at a named place.
#[derive(Debug, Clone, PartialEq)]
pub struct Weather {
    pub location: String,
    pub temperature: f64,
    pub temperature_unit: String,
    pub wind_speed: String,
    pub wind_direction: String,
    pub short_forecast: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_metric_selects_si() {
        assert_eq!(Units::Metric.forecast_param(), "si");
        assert_eq!(Units::Us.forecast_param(), "us");
        assert_eq!(Units::default(), Units::Us);
    }

    #[test]
    fn parses_cli_names() {
        assert_eq!(Units::from_str("metric", false), Ok(Units::Metric));
        assert_eq!(Units::from_str("us", false), Ok(Units::Us));
        assert!(Units::from_str("kelvin", false).is_err());
    }
}
