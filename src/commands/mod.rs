//! The nine report commands.
//!
//! Each handler reads its input through the session console, queries the
//! [`Database`], and writes a formatted report. Input problems end the
//! command with a message; anything else is propagated to the caller.

mod lines;
mod nearby;
mod stations;
mod stats;
mod trends;

use std::fmt;
use std::io::{self, BufRead, Write};

use color_eyre::Report;

use crate::cli::console::Console;
use crate::constants;
use crate::db::Database;
use crate::state::Station;
use crate::ui::Plotter;

pub use stats::print_stats;

/// A report selectable from the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// `1`: stations matching a partial name.
    FindStations,
    /// `2`: ridership split by day type for one station.
    DayTypeBreakdown,
    /// `3`: weekday ridership for every station.
    WeekdayRanking,
    /// `4`: stops on a line in one direction.
    LineStops,
    /// `5`: stop counts per line and direction.
    StopCounts,
    /// `6`: ridership per year at one station.
    YearlyRidership,
    /// `7`: ridership per month of a year at one station.
    MonthlyRidership,
    /// `8`: daily ridership of two stations over a year.
    DailyComparison,
    /// `9`: stations within a mile of a point.
    NearbyStations,
}

impl Command {
    /// Command for a menu token `1`-`9`.
    #[must_use]
    pub fn from_token(token: &str) -> Option<Self> {
        let command = match token {
            "1" => Self::FindStations,
            "2" => Self::DayTypeBreakdown,
            "3" => Self::WeekdayRanking,
            "4" => Self::LineStops,
            "5" => Self::StopCounts,
            "6" => Self::YearlyRidership,
            "7" => Self::MonthlyRidership,
            "8" => Self::DailyComparison,
            "9" => Self::NearbyStations,
            _ => return None,
        };
        Some(command)
    }
}

/// A problem with what the user typed or asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputError {
    NoStations,
    NoStation,
    MultipleStations,
    NoData,
    NoLine,
    NoDirection,
    InvalidNumber,
    InvalidYear,
    LatitudeOutOfBounds,
    LongitudeOutOfBounds,
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self {
            Self::NoStations => constants::MSG_NO_STATIONS,
            Self::NoStation => constants::MSG_NO_STATION,
            Self::MultipleStations => constants::MSG_MULTIPLE_STATIONS,
            Self::NoData => constants::MSG_NO_DATA,
            Self::NoLine => constants::MSG_NO_LINE,
            Self::NoDirection => constants::MSG_NO_DIRECTION,
            Self::InvalidNumber => constants::MSG_INVALID_NUMBER,
            Self::InvalidYear => constants::MSG_INVALID_YEAR,
            Self::LatitudeOutOfBounds => constants::MSG_LATITUDE_OUT_OF_BOUNDS,
            Self::LongitudeOutOfBounds => constants::MSG_LONGITUDE_OUT_OF_BOUNDS,
        };
        f.write_str(message)
    }
}

/// Why a command stopped early.
#[derive(Debug)]
pub enum CommandError {
    /// Rejected input; reported to the user.
    Input(InputError),
    /// Input ran out mid-command.
    EndOfInput,
    /// Database, terminal, or I/O failure.
    Fatal(Report),
}

impl From<InputError> for CommandError {
    fn from(err: InputError) -> Self {
        Self::Input(err)
    }
}

impl From<Report> for CommandError {
    fn from(err: Report) -> Self {
        Self::Fatal(err)
    }
}

impl From<io::Error> for CommandError {
    fn from(err: io::Error) -> Self {
        Self::Fatal(err.into())
    }
}

type CommandResult = Result<(), CommandError>;

/// State shared by the handlers for the life of the menu loop.
pub struct Session<'a, R, W> {
    pub db: &'a Database,
    pub console: Console<R, W>,
    pub plotter: &'a mut dyn Plotter,
    /// Offer plots after reports that support them.
    pub plots: bool,
}

impl<'a, R: BufRead, W: Write> Session<'a, R, W> {
    pub fn new(
        db: &'a Database,
        console: Console<R, W>,
        plotter: &'a mut dyn Plotter,
        plots: bool,
    ) -> Self {
        Self {
            db,
            console,
            plotter,
            plots,
        }
    }

    /// Run one command to completion.
    ///
    /// # Errors
    ///
    /// Returns an error only for failures outside the user's control.
    pub fn execute(&mut self, command: Command) -> color_eyre::Result<()> {
        tracing::debug!(?command, "running command");
        let result = match command {
            Command::FindStations => stations::find_stations(self),
            Command::DayTypeBreakdown => stations::day_type_breakdown(self),
            Command::WeekdayRanking => stations::weekday_ranking(self),
            Command::LineStops => lines::line_stops(self),
            Command::StopCounts => lines::stop_counts(self),
            Command::YearlyRidership => trends::yearly_ridership(self),
            Command::MonthlyRidership => trends::monthly_ridership(self),
            Command::DailyComparison => trends::daily_comparison(self),
            Command::NearbyStations => nearby::nearby_stations(self),
        };

        match result {
            Ok(()) | Err(CommandError::EndOfInput) => Ok(()),
            Err(CommandError::Input(err)) => {
                tracing::debug!(?command, ?err, "command rejected input");
                writeln!(self.console, "{err}")?;
                Ok(())
            }
            Err(CommandError::Fatal(report)) => Err(report),
        }
    }

    /// Prompt for one line of input.
    fn ask(&mut self, prompt: &str) -> Result<String, CommandError> {
        self.console.prompt(prompt)?.ok_or(CommandError::EndOfInput)
    }

    /// Resolve a wildcard pattern to exactly one station.
    fn ask_station(&mut self, prompt: &str) -> Result<Station, CommandError> {
        let pattern = self.ask(prompt)?;
        let mut found = self.db.find_stations(&pattern)?;
        match found.len() {
            0 => Err(InputError::NoStation.into()),
            1 => Ok(found.remove(0)),
            _ => Err(InputError::MultipleStations.into()),
        }
    }

    /// Prompt for a four-digit year.
    fn ask_year(&mut self, prompt: &str) -> Result<i32, CommandError> {
        let answer = self.ask(prompt)?;
        Ok(parse_year(&answer)?)
    }

    /// Ask whether to plot; never asks when plotting is disabled.
    fn offer_plot(&mut self) -> Result<bool, CommandError> {
        if !self.plots {
            return Ok(false);
        }
        let answer = self.ask(constants::PROMPT_PLOT)?;
        Ok(answer.trim().eq_ignore_ascii_case("y"))
    }
}

/// Parse a four-digit year.
fn parse_year(input: &str) -> Result<i32, InputError> {
    let input = input.trim();
    if input.len() != 4 || !input.bytes().all(|b| b.is_ascii_digit()) {
        return Err(InputError::InvalidYear);
    }
    input.parse().map_err(|_| InputError::InvalidYear)
}

/// Parse a decimal number such as a latitude.
fn parse_number(input: &str) -> Result<f64, InputError> {
    input.trim().parse().map_err(|_| InputError::InvalidNumber)
}

#[cfg(test)]
pub(crate) mod testing {
    //! Drive a [`Session`] from a scripted transcript.

    use std::io::Cursor;

    use super::{Command, Console, Session};
    use crate::db::Database;
    use crate::ui::RecordingPlotter;

    /// Run `command` with `input` as the user's answers.
    ///
    /// Returns everything written and the charts that were requested.
    pub fn run(
        db: &Database,
        command: Command,
        input: &str,
        plots: bool,
    ) -> (String, RecordingPlotter) {
        let mut plotter = RecordingPlotter::default();
        let console = Console::new(Cursor::new(input.to_string()), Vec::new());
        let mut session = Session::new(db, console, &mut plotter, plots);
        session.execute(command).unwrap();
        let output = session.console.into_output();
        (String::from_utf8(output).unwrap(), plotter)
    }
}
