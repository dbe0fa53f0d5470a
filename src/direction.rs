use std::{fmt, str::FromStr};

/// The 16 points of the compass rose, clockwise from north.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    N,
    NNE,
    NE,
    ENE,
    E,
    ESE,
    SE,
    SSE,
    S,
    SSW,
    SW,
    WSW,
    W,
    WNW,
    NW,
    NNW,
}

const SECTOR: f64 = 360.0 / 16.0;

impl Direction {
    pub const ALL: [Direction; 16] = [
        Self::N,
        Self::NNE,
        Self::NE,
        Self::ENE,
        Self::E,
        Self::ESE,
        Self::SE,
        Self::SSE,
        Self::S,
        Self::SSW,
        Self::SW,
        Self::WSW,
        Self::W,
        Self::WNW,
        Self::NW,
        Self::NNW,
    ];

    /// Resolve a wind bearing in degrees to the closest compass point.
    ///
    /// Any real input is accepted: the bearing is reduced modulo 360 first, and
    /// a non-finite bearing resolves to `N`. A bearing sitting exactly on a
    /// sector boundary rounds half-to-even, so 11.25° is `N` and 33.75° is `NE`.
    pub fn from_bearing(degrees: f64) -> Self {
        let sector = (degrees.rem_euclid(360.0) / SECTOR).round_ties_even();
        // NaN casts to 0, and 360° rounds up to 16
        let index = sector as usize % Self::ALL.len();
        Self::ALL[index]
    }

    /// Centre of the sector, in degrees.
    pub fn bearing(self) -> f64 {
        self as usize as f64 * SECTOR
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::N => "N",
            Self::NNE => "NNE",
            Self::NE => "NE",
            Self::ENE => "ENE",
            Self::E => "E",
            Self::ESE => "ESE",
            Self::SE => "SE",
            Self::SSE => "SSE",
            Self::S => "S",
            Self::SSW => "SSW",
            Self::SW => "SW",
            Self::WSW => "WSW",
            Self::W => "W",
            Self::WNW => "WNW",
            Self::NW => "NW",
            Self::NNW => "NNW",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Direction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|direction| direction.label() == s)
            .ok_or_else(|| format!("Unknown wind direction: {s}"))
    }
}
