//! Line and stop reports (commands 4-5).

use std::io::{BufRead, Write};

use super::{CommandResult, InputError, Session};
use crate::constants;
use crate::core::breakdown::percent;
use crate::state::Direction;
use crate::ui::format;

/// Stops a line serves in one direction, with accessibility.
pub(super) fn line_stops<R: BufRead, W: Write>(s: &mut Session<'_, R, W>) -> CommandResult {
    let color = s.ask(constants::PROMPT_LINE_COLOR)?.to_uppercase();
    if s.db.line_stops(&color, None)?.is_empty() {
        return Err(InputError::NoLine.into());
    }

    // An unrecognised direction is a direction the line does not run in.
    let direction = s
        .ask(constants::PROMPT_DIRECTION)?
        .parse::<Direction>()
        .map_err(|_| InputError::NoDirection)?;
    let stops = s.db.line_stops(&color, Some(direction))?;
    if stops.is_empty() {
        return Err(InputError::NoDirection.into());
    }

    for stop in &stops {
        writeln!(
            s.console,
            "{} : direction = {direction} ({})",
            stop.name,
            stop.accessibility_label()
        )?;
    }
    Ok(())
}

/// Stop counts per line color and direction as a share of all stops.
pub(super) fn stop_counts<R: BufRead, W: Write>(s: &mut Session<'_, R, W>) -> CommandResult {
    let counts = s.db.stop_counts_by_line()?;
    let total_stops = s.db.stop_count()?;

    writeln!(s.console, "{}", constants::HEADER_STOP_COUNTS)?;
    for count in &counts {
        writeln!(
            s.console,
            "{} going {} : {} ({})",
            count.color,
            count.direction,
            format::thousands(count.stops),
            format::percent(percent(count.stops, total_stops).unwrap_or(0.0))
        )?;
    }
    Ok(())
}
