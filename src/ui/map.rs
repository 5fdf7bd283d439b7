//! Station map screen.
//!
//! Draws the fixed metro extent with the coastline as background, the search
//! area, and one labeled marker per station.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::{
        canvas::{Canvas, Map, MapResolution, Points, Rectangle},
        Block, Borders,
    },
    Frame,
};

use crate::constants;
use crate::core::geo::BoundingBox;
use crate::state::NearbyStation;
use crate::theme;

/// Stations to place on the map and the area that was searched.
#[derive(Clone, Debug, PartialEq)]
pub struct StationMap {
    pub title: String,
    pub stations: Vec<NearbyStation>,
    pub search_area: BoundingBox,
}

impl StationMap {
    /// Map of a nearby-station search result.
    #[must_use]
    pub fn nearby(stations: Vec<NearbyStation>, search_area: BoundingBox) -> Self {
        Self {
            title: constants::TITLE_NEARBY_MAP.to_string(),
            stations,
            search_area,
        }
    }

    /// Station positions as canvas `(x, y)` = `(longitude, latitude)` pairs.
    #[must_use]
    pub fn coords(&self) -> Vec<(f64, f64)> {
        self.stations
            .iter()
            .map(|s| (s.longitude, s.latitude))
            .collect()
    }
}

/// Render the station map into `area`.
pub fn render(frame: &mut Frame, area: Rect, map: &StationMap) {
    let coords = map.coords();
    let search = map.search_area;

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::BORDER_FOCUSED))
        .title(Span::styled(
            format!(" {} ", map.title),
            Style::default()
                .fg(theme::TEXT_PRIMARY)
                .add_modifier(Modifier::BOLD),
        ));

    let canvas = Canvas::default()
        .block(block)
        .marker(Marker::Braille)
        .x_bounds(constants::MAP_LONGITUDE_BOUNDS)
        .y_bounds(constants::MAP_LATITUDE_BOUNDS)
        .paint(|ctx| {
            ctx.draw(&Map {
                resolution: MapResolution::High,
                color: theme::MAP_BACKGROUND,
            });
            ctx.layer();

            ctx.draw(&Rectangle {
                x: search.west,
                y: search.south,
                width: search.east - search.west,
                height: search.north - search.south,
                color: theme::SEARCH_AREA,
            });
            ctx.draw(&Points {
                coords: &coords,
                color: theme::STATION_POINT,
            });
            ctx.layer();

            for station in &map.stations {
                ctx.print(
                    station.longitude,
                    station.latitude,
                    Line::styled(station.name.clone(), Style::default().fg(theme::TEXT_PRIMARY)),
                );
            }
        });

    frame.render_widget(canvas, area);
}
