//! Dataset overview printed at startup and by the `stats` subcommand.

use std::io::Write;

use color_eyre::Result;

use crate::constants;
use crate::db::Database;
use crate::ui::format;

/// Write the general statistics block.
///
/// # Errors
///
/// Returns an error if a query or the write fails.
pub fn print_stats(db: &Database, out: &mut impl Write) -> Result<()> {
    let stats = db.stats()?;
    let first = stats.first_date.as_deref().unwrap_or("-");
    let last = stats.last_date.as_deref().unwrap_or("-");

    writeln!(out, "{}", constants::HEADER_STATS)?;
    writeln!(out, "  # of stations: {}", format::thousands(stats.stations))?;
    writeln!(out, "  # of stops: {}", format::thousands(stats.stops))?;
    writeln!(out, "  # of ride entries: {}", format::thousands(stats.ride_entries))?;
    writeln!(out, "  date range: {first} - {last}")?;
    writeln!(out, "  Total ridership: {}", format::thousands(stats.total_riders))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::fixture;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_print_stats() {
        let db = fixture::database();
        let mut out = Vec::new();
        print_stats(&db, &mut out).unwrap();
        let expected = "\
General Statistics:
  # of stations: 6
  # of stops: 9
  # of ride entries: 28
  date range: 2020-01-06 - 2022-01-12
  Total ridership: 16,910
";
        assert_eq!(String::from_utf8(out).unwrap(), expected);
    }
}
