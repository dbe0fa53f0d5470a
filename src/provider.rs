use std::{fmt, path::PathBuf};

use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::record::RawDay;

pub const OPENWEATHERMAP_URL: &str = "http://api.openweathermap.org/data/2.5/forecast/daily";

/// Where to look for wind. Passed verbatim as the `q` query parameter, so
/// it reads `City,country`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location(pub String);

impl Default for Location {
    fn default() -> Self {
        Self(String::from("Toronto,ca"))
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Error)]
pub enum RetrievalError {
    #[error("No OpenWeatherMap API key was provided")]
    MissingApiKey,
    #[error("Forecast request failed with status {status}: {text}")]
    Status { status: u16, text: String },
    #[error("Could not reach the forecast provider: {0}")]
    Transport(String),
    #[error("Could not read the forecast: {0}")]
    Io(#[from] std::io::Error),
    #[error("Could not decode the forecast: {0}")]
    Decode(#[from] serde_json::Error),
}

impl From<ureq::Error> for RetrievalError {
    fn from(error: ureq::Error) -> Self {
        match error {
            ureq::Error::Status(status, response) => Self::Status {
                status,
                text: response.status_text().to_string(),
            },
            ureq::Error::Transport(transport) => Self::Transport(transport.to_string()),
        }
    }
}

/// Hands over the whole daily forecast at once, in chronological order.
pub trait ForecastProvider {
    fn fetch(&self) -> Result<Vec<RawDay>, RetrievalError>;
}

#[derive(Debug, Deserialize)]
struct DailyForecast {
    list: Vec<RawDay>,
}

/// Decode the body of a `forecast/daily` response.
pub fn parse_daily_forecast(body: &str) -> Result<Vec<RawDay>, RetrievalError> {
    let forecast: DailyForecast = serde_json::from_str(body)?;
    Ok(forecast.list)
}

#[derive(Debug, Clone)]
pub struct OpenWeatherMap {
    pub location: Location,
    api_key: String,
}

impl OpenWeatherMap {
    pub fn new(location: Location, api_key: impl Into<String>) -> Result<Self, RetrievalError> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(RetrievalError::MissingApiKey);
        }
        Ok(Self { location, api_key })
    }
}

impl ForecastProvider for OpenWeatherMap {
    fn fetch(&self) -> Result<Vec<RawDay>, RetrievalError> {
        debug!(url = OPENWEATHERMAP_URL, location = %self.location, "requesting forecast");
        let body = ureq::get(OPENWEATHERMAP_URL)
            .query("q", &self.location.0)
            .query("units", "metric")
            .query("appid", &self.api_key)
            .call()?
            .into_string()?;

        let days = parse_daily_forecast(&body)?;
        debug!(days = days.len(), "forecast received");
        Ok(days)
    }
}

/// Reads a previously saved `forecast/daily` response.
#[derive(Debug, Clone)]
pub struct SavedForecast {
    pub path: PathBuf,
}

impl ForecastProvider for SavedForecast {
    fn fetch(&self) -> Result<Vec<RawDay>, RetrievalError> {
        debug!(path = %self.path.display(), "reading saved forecast");
        let body = std::fs::read_to_string(&self.path)?;
        parse_daily_forecast(&body)
    }
}
