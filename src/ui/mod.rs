//! Presentation layer: text formatting and chart rendering.
//!
//! Charts go through the [`Plotter`] trait so the command handlers never
//! touch the terminal directly.

pub mod chart;
pub mod format;
pub mod map;
mod widgets;

use std::io;

use color_eyre::eyre::WrapErr;
use color_eyre::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    DefaultTerminal, Frame,
};

pub use chart::{LineChart, Series};
pub use map::StationMap;

/// Display sink for charts. Nothing flows back into the caller.
pub trait Plotter {
    /// Show a line chart.
    ///
    /// # Errors
    ///
    /// Returns an error if the chart cannot be displayed.
    fn line_chart(&mut self, chart: &LineChart) -> Result<()>;

    /// Show stations on the metro map.
    ///
    /// # Errors
    ///
    /// Returns an error if the map cannot be displayed.
    fn station_map(&mut self, map: &StationMap) -> Result<()>;
}

/// Renders charts full-screen on the terminal until the user closes them.
#[derive(Debug, Default)]
pub struct TerminalPlotter;

impl Plotter for TerminalPlotter {
    fn line_chart(&mut self, chart: &LineChart) -> Result<()> {
        tracing::debug!(title = %chart.title, series = chart.series.len(), "showing line chart");
        show(|frame, area| chart::render(frame, area, chart))
    }

    fn station_map(&mut self, map: &StationMap) -> Result<()> {
        tracing::debug!(title = %map.title, stations = map.stations.len(), "showing station map");
        show(|frame, area| map::render(frame, area, map))
    }
}

/// Take over the terminal, draw until a close key, then hand it back.
fn show(draw: impl Fn(&mut Frame, Rect)) -> Result<()> {
    show_on(ratatui::try_init, draw)
}

/// Same as [`show`] with the terminal setup supplied by the caller.
///
/// Fails without touching the terminal when `init` fails, e.g. when there
/// is no controlling TTY.
fn show_on(
    init: impl FnOnce() -> io::Result<DefaultTerminal>,
    draw: impl Fn(&mut Frame, Rect),
) -> Result<()> {
    let mut terminal = init().wrap_err("Failed to open chart screen")?;
    let result = run(&mut terminal, draw);
    ratatui::restore();
    result.wrap_err("Failed to display chart")
}

fn run(terminal: &mut DefaultTerminal, draw: impl Fn(&mut Frame, Rect)) -> Result<()> {
    loop {
        terminal.draw(|frame| {
            let [body, footer] =
                Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(frame.area());
            draw(frame, body);
            widgets::footer::render(frame, footer);
        })?;

        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press
                && matches!(key.code, KeyCode::Char('q') | KeyCode::Esc | KeyCode::Enter)
            {
                return Ok(());
            }
        }
    }
}

/// Keeps every chart it is asked to show.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct RecordingPlotter {
    pub charts: Vec<LineChart>,
    pub maps: Vec<StationMap>,
}

#[cfg(test)]
impl Plotter for RecordingPlotter {
    fn line_chart(&mut self, chart: &LineChart) -> Result<()> {
        self.charts.push(chart.clone());
        Ok(())
    }

    fn station_map(&mut self, map: &StationMap) -> Result<()> {
        self.maps.push(map.clone());
        Ok(())
    }
}
