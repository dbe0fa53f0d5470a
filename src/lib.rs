//! Finds the days of the coming week that are good for dinghy sailing.
//!
//! A [`ForecastProvider`] hands over the daily forecast, [`Rules::evaluate`]
//! keeps the days meeting every threshold and [`Report`] renders them.

use miette::Diagnostic;
use thiserror::Error;

pub mod direction;
pub mod forecast;
pub mod provider;
pub mod record;
pub mod report;
pub mod rules;

pub use direction::Direction;
pub use forecast::ForecastDay;
pub use provider::{ForecastProvider, Location, OpenWeatherMap, RetrievalError, SavedForecast};
pub use record::{MalformedRecord, RawDay};
pub use report::Report;
pub use rules::{Rejection, Rules};

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error(transparent)]
    #[diagnostic(
        code(sailing_days::retrieval),
        help("check the location, the API key and your connection")
    )]
    Retrieval(#[from] RetrievalError),
    #[error(transparent)]
    #[diagnostic(
        code(sailing_days::malformed_record),
        help("the provider sent a day without a mandatory field, no report was produced")
    )]
    MalformedRecord(#[from] MalformedRecord),
}

/// Fetch the forecast once and keep the sailing days.
pub fn find_sailing_days(
    provider: &impl ForecastProvider,
    rules: &Rules,
) -> Result<Vec<ForecastDay>, Error> {
    let raw = provider.fetch()?;
    Ok(rules.evaluate(&raw)?)
}
