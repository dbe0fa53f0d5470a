use std::fmt;

use time::Date;

use crate::{direction::Direction, record::CheckedDay};

pub const MS_TO_KMH: f64 = 3.6;

/// A day that made the cut, ready to be displayed.
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastDay {
    pub date: Date,
    pub condition: String,

    /// ºC
    pub temp_high: f64,
    /// ºC
    pub temp_low: f64,
    /// ºC
    pub temp_day: f64,

    /// km/h
    pub wind_speed: f64,
    /// degrees, as reported
    pub wind_bearing: f64,

    /// mm, `None` when the provider did not report any
    pub rain: Option<f64>,
    /// mm, `None` when the provider did not report any
    pub snow: Option<f64>,
}

impl ForecastDay {
    pub fn wind_direction(&self) -> Direction {
        Direction::from_bearing(self.wind_bearing)
    }

    /// Long form used in reports, e.g. `Monday January 05, 2026`.
    pub fn long_date(&self) -> String {
        format!(
            "{} {} {:02}, {}",
            self.date.weekday(),
            self.date.month(),
            self.date.day(),
            self.date.year()
        )
    }
}

impl From<CheckedDay> for ForecastDay {
    fn from(day: CheckedDay) -> Self {
        Self {
            date: day.date,
            condition: day.condition,
            temp_high: day.temp_max,
            temp_low: day.temp_min,
            temp_day: day.temp_day,
            wind_speed: day.wind_speed * MS_TO_KMH,
            wind_bearing: day.wind_bearing,
            rain: day.rain,
            snow: day.snow,
        }
    }
}

/// Display rounding: half to even, on the shown value only.
fn rounded(value: f64) -> i64 {
    value.round_ties_even() as i64
}

impl fmt::Display for ForecastDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.long_date())?;
        writeln!(f, "{}", self.condition)?;
        writeln!(
            f,
            "Temperature: High = {} C, Low = {} C",
            rounded(self.temp_high),
            rounded(self.temp_low)
        )?;
        writeln!(
            f,
            "Wind: {} km/h {}",
            rounded(self.wind_speed),
            self.wind_direction()
        )?;
        // a reported 0 mm is as good as nothing for display purposes
        if let Some(rain) = self.rain.filter(|rain| *rain != 0.0) {
            writeln!(f, "Rain: {} mm", rounded(rain))?;
        }
        if let Some(snow) = self.snow.filter(|snow| *snow != 0.0) {
            writeln!(f, "Snow: {} mm", rounded(snow))?;
        }
        Ok(())
    }
}
