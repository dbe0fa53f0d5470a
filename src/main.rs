use std::path::PathBuf;

use clap::Parser;
use miette::IntoDiagnostic;
use sailing_days::{
    find_sailing_days, Error, ForecastDay, Location, OpenWeatherMap, Report, Rules, SavedForecast,
};
use tracing_subscriber::EnvFilter;

/// Lists the upcoming days with good dinghy sailing weather.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// City and country code, e.g. `Toronto,ca`.
    #[arg(short, long, default_value_t = Location::default().0)]
    location: String,

    /// Read a saved `forecast/daily` JSON response instead of calling the API.
    #[arg(short, long)]
    input: Option<PathBuf>,

    #[arg(long, env = "OPENWEATHERMAP_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// mm
    #[arg(long, default_value_t = Rules::default().max_rain)]
    max_rain: f64,
    /// mm
    #[arg(long, default_value_t = Rules::default().max_snow)]
    max_snow: f64,
    /// ºC
    #[arg(long, default_value_t = Rules::default().min_day_temp)]
    min_day_temp: f64,
    /// km/h
    #[arg(long, default_value_t = 15.0)]
    min_wind: f64,
    /// km/h
    #[arg(long, default_value_t = 30.0)]
    max_wind: f64,

    /// Log more about the evaluation, repeat for more.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn rules(&self) -> Rules {
        Rules {
            max_rain: self.max_rain,
            max_snow: self.max_snow,
            min_day_temp: self.min_day_temp,
            ..Rules::default()
        }
        .with_wind_kmh(self.min_wind, self.max_wind)
    }

    fn sailing_days(&self) -> Result<Vec<ForecastDay>, Error> {
        let rules = self.rules();
        match &self.input {
            Some(path) => find_sailing_days(&SavedForecast { path: path.clone() }, &rules),
            None => {
                let provider = OpenWeatherMap::new(
                    Location(self.location.clone()),
                    self.api_key.clone().unwrap_or_default(),
                )?;
                find_sailing_days(&provider, &rules)
            }
        }
    }
}

fn main() -> miette::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let default_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .into_diagnostic()?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let days = cli.sailing_days()?;
    print!("{}", Report::new(&days));
    Ok(())
}
