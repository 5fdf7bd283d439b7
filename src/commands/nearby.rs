//! Stations within a mile of a point (command 9).

use std::io::{BufRead, Write};

use super::{parse_number, CommandResult, InputError, Session};
use crate::constants;
use crate::core::geo::{Coordinate, CoordinateError};
use crate::ui::StationMap;

impl From<CoordinateError> for InputError {
    fn from(err: CoordinateError) -> Self {
        match err {
            CoordinateError::LatitudeOutOfBounds => Self::LatitudeOutOfBounds,
            CoordinateError::LongitudeOutOfBounds => Self::LongitudeOutOfBounds,
        }
    }
}

pub(super) fn nearby_stations<R: BufRead, W: Write>(s: &mut Session<'_, R, W>) -> CommandResult {
    let latitude = parse_number(&s.ask(constants::PROMPT_LATITUDE)?)?;
    let latitude = Coordinate::check_latitude(latitude).map_err(InputError::from)?;
    let longitude = parse_number(&s.ask(constants::PROMPT_LONGITUDE)?)?;
    let center = Coordinate::new(latitude, longitude).map_err(InputError::from)?;

    let area = center.one_mile_box();
    let stations = s.db.stations_within(&area)?;
    if stations.is_empty() {
        return Err(InputError::NoStations.into());
    }

    writeln!(s.console, "{}", constants::HEADER_NEARBY)?;
    for station in &stations {
        writeln!(
            s.console,
            "{} : ({}, {})",
            station.name, station.latitude, station.longitude
        )?;
    }

    if s.offer_plot()? {
        s.plotter
            .station_map(&StationMap::nearby(stations, area))?;
    }
    Ok(())
}
