//! Nordic Frost color theme definitions.
//!
//! This module defines the palette used by the chart screens, based on the
//! Nord color scheme with semantic color assignments.

use ratatui::style::Color;

// === Nord Polar Night (Dark backgrounds) ===

/// Medium polar night shade.
pub const NORD_POLAR_NIGHT_3: Color = Color::Rgb(67, 76, 94);
/// Lightest polar night shade.
pub const NORD_POLAR_NIGHT_4: Color = Color::Rgb(76, 86, 106);

// === Nord Snow Storm (Light text) ===

/// Primary snow storm shade.
pub const NORD_SNOW_STORM_1: Color = Color::Rgb(216, 222, 233);

// === Nord Frost (Accent blues/cyans) ===

/// Frost accent 2 - cyan (primary accent).
pub const NORD_FROST_2: Color = Color::Rgb(136, 192, 208);
/// Frost accent 3 - light blue.
pub const NORD_FROST_3: Color = Color::Rgb(129, 161, 193);

// === Nord Aurora (Status colors) ===

/// Aurora red.
pub const NORD_RED: Color = Color::Rgb(191, 97, 106);
/// Aurora orange.
pub const NORD_ORANGE: Color = Color::Rgb(208, 135, 112);
/// Aurora yellow.
pub const NORD_YELLOW: Color = Color::Rgb(235, 203, 139);
/// Aurora green.
pub const NORD_GREEN: Color = Color::Rgb(163, 190, 140);

// === Semantic Color Aliases ===

/// Primary text color.
pub const TEXT_PRIMARY: Color = NORD_SNOW_STORM_1;
/// Secondary/muted text color.
pub const TEXT_SECONDARY: Color = NORD_POLAR_NIGHT_4;
/// Primary accent color.
pub const ACCENT_PRIMARY: Color = NORD_FROST_2;

// === Chart Element Colors ===

/// Border around a chart screen.
pub const BORDER_FOCUSED: Color = NORD_FROST_2;
/// Axis lines and labels.
pub const AXIS: Color = NORD_POLAR_NIGHT_4;
/// Line colors assigned to series in order.
pub const SERIES: [Color; 4] = [NORD_FROST_2, NORD_ORANGE, NORD_GREEN, NORD_RED];
/// Coastline drawn behind the station map.
pub const MAP_BACKGROUND: Color = NORD_POLAR_NIGHT_3;
/// Outline of the search area on the station map.
pub const SEARCH_AREA: Color = NORD_YELLOW;
/// Station markers on the station map.
pub const STATION_POINT: Color = NORD_FROST_3;
