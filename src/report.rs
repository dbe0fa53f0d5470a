use std::fmt;

use crate::forecast::ForecastDay;

/// The accepted days, rendered as the text shown to the sailor.
#[derive(Debug, Clone, Copy)]
pub struct Report<'a> {
    pub days: &'a [ForecastDay],
}

impl<'a> Report<'a> {
    pub fn new(days: &'a [ForecastDay]) -> Self {
        Self { days }
    }
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.days.len() {
            0 => writeln!(f, "There are no good sailing days coming up.\nBummer!")?,
            1 => writeln!(
                f,
                "There's 1 good sailing day coming up!\nHere's the forecast:\n"
            )?,
            n => writeln!(
                f,
                "There are {n} good sailing days coming up!\nHere are the forecasts:\n"
            )?,
        }

        for day in self.days {
            writeln!(f, "{day}")?;
        }
        Ok(())
    }
}
