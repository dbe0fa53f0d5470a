use std::path::PathBuf;

use sailing_days::{
    find_sailing_days, Direction, Error, ForecastProvider, MalformedRecord, RawDay, Report, Rules,
    SavedForecast,
};

fn fixture(name: &str) -> SavedForecast {
    SavedForecast {
        path: PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("tests")
            .join("fixtures")
            .join(name),
    }
}

#[test]
fn toronto_week() {
    let days = find_sailing_days(&fixture("toronto_daily.json"), &Rules::default()).unwrap();

    let directions: Vec<_> = days.iter().map(|day| day.wind_direction()).collect();
    assert_eq!(directions, [Direction::WSW, Direction::WNW, Direction::N]);
    assert_eq!(days[2].rain, Some(0.0));

    assert_eq!(
        Report::new(&days).to_string(),
        "There are 3 good sailing days coming up!
Here are the forecasts:

Friday June 05, 2026
Clear
Temperature: High = 24 C, Low = 14 C
Wind: 19 km/h WSW

Monday June 08, 2026
Clouds
Temperature: High = 20 C, Low = 12 C
Wind: 28 km/h WNW

Wednesday June 10, 2026
Clear
Temperature: High = 17 C, Low = 10 C
Wind: 17 km/h N

"
    );
}

#[test]
fn relaxed_rules_let_the_rain_in() {
    let rules = Rules {
        max_rain: 5.0,
        ..Rules::default()
    };
    let days = find_sailing_days(&fixture("toronto_daily.json"), &rules).unwrap();
    assert_eq!(days.len(), 4);
    assert_eq!(days[1].condition, "Rain");
    assert!(days[1].to_string().contains("Rain: 5 mm"));
}

struct Stub(Vec<RawDay>);

impl ForecastProvider for Stub {
    fn fetch(&self) -> Result<Vec<RawDay>, sailing_days::RetrievalError> {
        Ok(self.0.clone())
    }
}

#[test]
fn malformed_record_produces_no_report() {
    let mut days = fixture("toronto_daily.json").fetch().unwrap();
    days[4].wind_speed = None;

    match find_sailing_days(&Stub(days), &Rules::default()) {
        Err(Error::MalformedRecord(err @ MalformedRecord::MissingField { .. })) => {
            assert_eq!(err.index(), 4);
            assert_eq!(
                err.to_string(),
                "Record #4 (dt = 1781006400) is missing `speed`"
            );
        }
        other => panic!("expected a malformed record, got {other:?}"),
    }
}

#[test]
fn missing_file_is_a_retrieval_error() {
    assert!(matches!(
        find_sailing_days(&fixture("nope.json"), &Rules::default()),
        Err(Error::Retrieval(_))
    ));
}
