//! Ridership records and the rollups computed over them.

use std::str::FromStr;

/// Classification of a ridership record.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DayType {
    /// Monday through Friday, code `W`.
    Weekday,
    /// Saturday, code `A`.
    Saturday,
    /// Sunday or holiday, code `U`.
    SundayHoliday,
}

impl DayType {
    /// All day types in reporting order.
    pub const ALL: [Self; 3] = [Self::Weekday, Self::Saturday, Self::SundayHoliday];

    /// Code stored in `Ridership.Type_of_Day`.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Weekday => "W",
            Self::Saturday => "A",
            Self::SundayHoliday => "U",
        }
    }

    /// Label used in the percentage breakdown.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Weekday => "Weekday",
            Self::Saturday => "Saturday",
            Self::SundayHoliday => "Sunday/holiday",
        }
    }
}

impl FromStr for DayType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "W" => Ok(Self::Weekday),
            "A" => Ok(Self::Saturday),
            "U" => Ok(Self::SundayHoliday),
            other => Err(format!("unknown day type code: {other:?}")),
        }
    }
}

/// Headline numbers printed at startup.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DatasetStats {
    pub stations: i64,
    pub stops: i64,
    pub ride_entries: i64,
    /// First ride date, `YYYY-MM-DD`.
    pub first_date: Option<String>,
    /// Last ride date, `YYYY-MM-DD`.
    pub last_date: Option<String>,
    pub total_riders: i64,
}

/// Riders for one day type at one station.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DayTypeTotal {
    pub day_type: DayType,
    pub riders: i64,
}

/// Riders summed over one station.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StationTotal {
    pub name: String,
    pub riders: i64,
}

/// Number of distinct stops a line serves in one direction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LineDirectionCount {
    pub color: String,
    pub direction: String,
    pub stops: i64,
}

/// Riders summed over one calendar year.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct YearTotal {
    pub year: i32,
    pub riders: i64,
}

/// Riders summed over one calendar month.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MonthTotal {
    /// 1 through 12.
    pub month: u32,
    pub year: i32,
    pub riders: i64,
}

impl MonthTotal {
    /// `MM/YYYY` label.
    #[must_use]
    pub fn label(&self) -> String {
        format!("{:02}/{}", self.month, self.year)
    }
}

/// Riders recorded on a single day.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DailyCount {
    /// `YYYY-MM-DD`.
    pub date: String,
    pub riders: i64,
}

/// A station with a stop inside a search box.
#[derive(Clone, Debug, PartialEq)]
pub struct NearbyStation {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
}
