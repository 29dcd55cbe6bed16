use crate::weather::Weather;
use chrono::{Local, Timelike};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PeriodOfDay {
    Morning,
    Afternoon,
    Evening,
}

impl PeriodOfDay {
    pub fn from_hour(hour: u32) -> PeriodOfDay {
        match hour {
            0..=11 => PeriodOfDay::Morning,
            12..=16 => PeriodOfDay::Afternoon,
            _ => PeriodOfDay::Evening,
        }
    }

    pub fn now() -> PeriodOfDay {
        PeriodOfDay::from_hour(Local::now().hour())
    }
}

impl fmt::Display for PeriodOfDay {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            PeriodOfDay::Morning => "morning",
            PeriodOfDay::Afternoon => "afternoon",
            PeriodOfDay::Evening => "evening",
        })
    }
}

/// `Good afternoon! It is 72°F and sunny in Springfield, IL.`
pub fn format_report(weather: &Weather, period: PeriodOfDay) -> String {
    format!(
        "Good {}! It is {}°{} and {} in {}.",
        period,
        weather.temperature,
        weather.temperature_unit,
        weather.short_forecast.to_lowercase(),
        weather.location
    )
}

/// Formats `weather` with a greeting for the current local hour.
pub fn summarize(weather: &Weather) -> String {
    format_report(weather, PeriodOfDay::now())
}
