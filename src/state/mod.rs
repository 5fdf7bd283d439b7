//! Typed rows read from the ridership dataset.

mod ridership;
mod transit;

pub use ridership::{
    DailyCount, DatasetStats, DayType, DayTypeTotal, LineDirectionCount, MonthTotal,
    NearbyStation, StationTotal, YearTotal,
};
pub use transit::{Direction, Station, Stop};
