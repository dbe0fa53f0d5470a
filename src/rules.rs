use thiserror::Error;
use tracing::{debug, info};

use crate::{
    forecast::{ForecastDay, MS_TO_KMH},
    record::{CheckedDay, MalformedRecord, RawDay},
};

/// Thresholds a day has to meet to be worth rigging the boat.
///
/// Every bound is inclusive: a day sitting exactly on a limit is accepted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rules {
    /// mm
    pub max_rain: f64,
    /// mm
    pub max_snow: f64,
    /// ºC
    pub min_day_temp: f64,
    /// m/s
    pub min_wind_speed: f64,
    /// m/s
    pub max_wind_speed: f64,
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            max_rain: 0.0,
            max_snow: 0.0,
            min_day_temp: 10.0,
            min_wind_speed: 15.0 / MS_TO_KMH,
            max_wind_speed: 30.0 / MS_TO_KMH,
        }
    }
}

/// Why a day was turned down. Rejecting a day is not a failure.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum Rejection {
    #[error("Too much rain: {0} mm")]
    TooMuchRain(f64),
    #[error("Too much snow: {0} mm")]
    TooMuchSnow(f64),
    #[error("Too cold: {0} ºC")]
    TooCold(f64),
    /// m/s, shown in km/h
    #[error("Wind too light: {:.1} km/h", .0 * MS_TO_KMH)]
    WindTooLight(f64),
    /// m/s, shown in km/h
    #[error("Wind too heavy: {:.1} km/h", .0 * MS_TO_KMH)]
    WindTooHeavy(f64),
}

impl Rules {
    /// Build the rules from wind limits expressed in km/h.
    pub fn with_wind_kmh(self, min: f64, max: f64) -> Self {
        Self {
            min_wind_speed: min / MS_TO_KMH,
            max_wind_speed: max / MS_TO_KMH,
            ..self
        }
    }

    /// Returns the first rule the day breaks, in the order rain, snow,
    /// temperature, light wind, heavy wind.
    pub fn check(&self, day: &CheckedDay) -> Result<(), Rejection> {
        if let Some(rain) = day.rain.filter(|rain| *rain > self.max_rain) {
            return Err(Rejection::TooMuchRain(rain));
        }
        if let Some(snow) = day.snow.filter(|snow| *snow > self.max_snow) {
            return Err(Rejection::TooMuchSnow(snow));
        }
        if day.temp_day < self.min_day_temp {
            return Err(Rejection::TooCold(day.temp_day));
        }
        if day.wind_speed < self.min_wind_speed {
            return Err(Rejection::WindTooLight(day.wind_speed));
        }
        if day.wind_speed > self.max_wind_speed {
            return Err(Rejection::WindTooHeavy(day.wind_speed));
        }
        Ok(())
    }

    /// Keep the sailing days out of the provider's records, in their original
    /// order.
    ///
    /// The first record missing a mandatory field aborts the whole evaluation:
    /// no partial result is ever returned.
    pub fn evaluate(&self, days: &[RawDay]) -> Result<Vec<ForecastDay>, MalformedRecord> {
        let mut sailing_days = Vec::new();

        for (index, raw) in days.iter().enumerate() {
            let day = raw.check(index)?;
            match self.check(&day) {
                Ok(()) => sailing_days.push(ForecastDay::from(day)),
                Err(rejection) => debug!(index, date = %day.date, %rejection, "skipping day"),
            }
        }

        info!(
            records = days.len(),
            accepted = sailing_days.len(),
            "forecast evaluated"
        );
        Ok(sailing_days)
    }
}
