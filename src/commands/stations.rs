//! Station lookups and day-type reports (commands 1-3).

use std::io::{BufRead, Write};

use super::{CommandResult, InputError, Session};
use crate::constants;
use crate::core::breakdown::{shares_of_total, DayTypeBreakdown};
use crate::state::DayType;
use crate::ui::format;

/// List every station whose name matches a wildcard pattern.
pub(super) fn find_stations<R: BufRead, W: Write>(s: &mut Session<'_, R, W>) -> CommandResult {
    let pattern = s.ask(constants::PROMPT_PARTIAL_NAME)?;
    let stations = s.db.find_stations(&pattern)?;
    if stations.is_empty() {
        return Err(InputError::NoStations.into());
    }
    for station in &stations {
        writeln!(s.console, "{} : {}", station.id, station.name)?;
    }
    Ok(())
}

/// Split one station's ridership into weekday, Saturday, and Sunday/holiday.
pub(super) fn day_type_breakdown<R: BufRead, W: Write>(
    s: &mut Session<'_, R, W>,
) -> CommandResult {
    let name = s.ask(constants::PROMPT_EXACT_NAME)?;
    let totals = s.db.day_type_totals(&name)?;
    let breakdown = DayTypeBreakdown::from_totals(&totals).ok_or(InputError::NoData)?;

    writeln!(s.console, "Percentage of ridership for the {name} station:")?;
    for (day_type, share) in breakdown.rows() {
        writeln!(
            s.console,
            "  {} ridership: {} ({})",
            day_type.label(),
            format::thousands(share.riders),
            format::percent(share.percent)
        )?;
    }
    writeln!(
        s.console,
        "  Total ridership: {}",
        format::thousands(breakdown.total)
    )?;
    Ok(())
}

/// Weekday ridership at every station with its share of the weekday total.
pub(super) fn weekday_ranking<R: BufRead, W: Write>(s: &mut Session<'_, R, W>) -> CommandResult {
    let totals = s.db.station_totals(DayType::Weekday)?;

    writeln!(s.console, "{}", constants::HEADER_WEEKDAY_RANKING)?;
    for (station, share) in shares_of_total(&totals, |t| t.riders) {
        writeln!(
            s.console,
            "{} : {} ({})",
            station.name,
            format::thousands(station.riders),
            format::percent(share)
        )?;
    }
    Ok(())
}
