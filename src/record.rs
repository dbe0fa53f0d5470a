use serde::Deserialize;
use thiserror::Error;
use time::{Date, OffsetDateTime};

/// One day of the daily forecast, as served by the provider.
///
/// Mandatory fields are kept optional here so that a record missing one of
/// them is reported as a [`MalformedRecord`] naming the field, instead of
/// failing the decoding of the whole response.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawDay {
    #[serde(rename = "dt")]
    pub timestamp: Option<i64>,
    #[serde(default)]
    pub temp: RawTemperature,
    /// m/s
    #[serde(rename = "speed")]
    pub wind_speed: Option<f64>,
    /// degrees
    #[serde(rename = "deg")]
    pub wind_bearing: Option<f64>,
    /// mm
    pub rain: Option<f64>,
    /// mm
    pub snow: Option<f64>,
    #[serde(default)]
    pub weather: Vec<RawCondition>,
}

/// ºC
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawTemperature {
    pub day: Option<f64>,
    pub min: Option<f64>,
    pub max: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawCondition {
    pub main: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Timestamp,
    DayTemperature,
    MinTemperature,
    MaxTemperature,
    WindSpeed,
    WindBearing,
    Condition,
}

impl Field {
    pub fn name(self) -> &'static str {
        match self {
            Self::Timestamp => "dt",
            Self::DayTemperature => "temp.day",
            Self::MinTemperature => "temp.min",
            Self::MaxTemperature => "temp.max",
            Self::WindSpeed => "speed",
            Self::WindBearing => "deg",
            Self::Condition => "weather[0].main",
        }
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum MalformedRecord {
    #[error("Record #{index}{} is missing `{}`", at(.timestamp), .field.name())]
    MissingField {
        index: usize,
        timestamp: Option<i64>,
        field: Field,
    },
    #[error("Record #{index} has an invalid timestamp {timestamp}: {source}")]
    InvalidTimestamp {
        index: usize,
        timestamp: i64,
        source: time::error::ComponentRange,
    },
}

fn at(timestamp: &Option<i64>) -> String {
    timestamp.map(|dt| format!(" (dt = {dt})")).unwrap_or_default()
}

impl MalformedRecord {
    pub fn index(&self) -> usize {
        match self {
            Self::MissingField { index, .. } | Self::InvalidTimestamp { index, .. } => *index,
        }
    }
}

/// A raw record with every mandatory field present.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckedDay {
    pub date: Date,
    pub condition: String,
    pub temp_day: f64,
    pub temp_min: f64,
    pub temp_max: f64,
    /// m/s
    pub wind_speed: f64,
    pub wind_bearing: f64,
    pub rain: Option<f64>,
    pub snow: Option<f64>,
}

impl RawDay {
    pub fn condition(&self) -> Option<&str> {
        self.weather.first()?.main.as_deref()
    }

    /// `index` is the record's position in the provider's sequence and is only
    /// used to identify it in errors.
    pub fn check(&self, index: usize) -> Result<CheckedDay, MalformedRecord> {
        let missing = |field| MalformedRecord::MissingField {
            index,
            timestamp: self.timestamp,
            field,
        };

        let timestamp = self.timestamp.ok_or_else(|| missing(Field::Timestamp))?;
        let date = OffsetDateTime::from_unix_timestamp(timestamp)
            .map_err(|source| MalformedRecord::InvalidTimestamp {
                index,
                timestamp,
                source,
            })?
            .date();

        Ok(CheckedDay {
            date,
            condition: self
                .condition()
                .ok_or_else(|| missing(Field::Condition))?
                .to_string(),
            temp_day: self.temp.day.ok_or_else(|| missing(Field::DayTemperature))?,
            temp_min: self.temp.min.ok_or_else(|| missing(Field::MinTemperature))?,
            temp_max: self.temp.max.ok_or_else(|| missing(Field::MaxTemperature))?,
            wind_speed: self.wind_speed.ok_or_else(|| missing(Field::WindSpeed))?,
            wind_bearing: self.wind_bearing.ok_or_else(|| missing(Field::WindBearing))?,
            rain: self.rain,
            snow: self.snow,
        })
    }
}

#[cfg(test)]
mod tests {
    use time::Month;

    use super::*;

    fn raw() -> RawDay {
        serde_json::from_str(
            r#"{
                "dt": 1767614400,
                "temp": { "day": 15.2, "min": 9.1, "max": 17.8, "night": 10.0 },
                "pressure": 1012.5,
                "speed": 6.5,
                "deg": 225,
                "weather": [{ "id": 800, "main": "Clear", "description": "sky is clear" }],
                "clouds": 0
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn decodes_provider_shape() {
        let day = raw();
        assert_eq!(day.timestamp, Some(1767614400));
        assert_eq!(day.temp.day, Some(15.2));
        assert_eq!(day.wind_bearing, Some(225.0));
        assert_eq!(day.condition(), Some("Clear"));
        assert_eq!(day.rain, None);
        assert_eq!(day.snow, None);
    }

    #[test]
    fn check_derives_utc_date() {
        let day = raw().check(0).unwrap();
        assert_eq!(
            day.date,
            Date::from_calendar_date(2026, Month::January, 5).unwrap()
        );
        assert_eq!(day.condition, "Clear");
        assert_eq!(day.rain, None);
    }

    #[test]
    fn late_utc_timestamp_stays_on_its_day() {
        let day = RawDay {
            timestamp: Some(1767657599), // 2026-01-05T23:59:59Z
            ..raw()
        };
        assert_eq!(
            day.check(0).unwrap().date,
            Date::from_calendar_date(2026, Month::January, 5).unwrap()
        );
    }

    #[test]
    fn missing_fields_are_named() {
        let mut day = raw();
        day.temp.day = None;
        assert_eq!(
            day.check(3),
            Err(MalformedRecord::MissingField {
                index: 3,
                timestamp: Some(1767614400),
                field: Field::DayTemperature,
            })
        );

        let day = RawDay {
            weather: Vec::new(),
            ..raw()
        };
        let err = day.check(1).unwrap_err();
        assert_eq!(err.index(), 1);
        assert_eq!(
            err.to_string(),
            "Record #1 (dt = 1767614400) is missing `weather[0].main`"
        );

        let day = RawDay {
            timestamp: None,
            ..raw()
        };
        assert!(matches!(
            day.check(0),
            Err(MalformedRecord::MissingField {
                field: Field::Timestamp,
                timestamp: None,
                ..
            })
        ));
    }

    #[test]
    fn out_of_range_timestamp() {
        let day = RawDay {
            timestamp: Some(i64::MAX),
            ..raw()
        };
        assert!(matches!(
            day.check(2),
            Err(MalformedRecord::InvalidTimestamp { index: 2, .. })
        ));
    }
}
