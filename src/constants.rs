//! Application-wide constants and configuration values.
//!
//! This module defines the static values used throughout the reporting tool,
//! including file names, geographic bounds, prompts, and user-facing messages.

// === Application Metadata ===

/// Application name (from Cargo.toml).
pub const APP_NAME: &str = env!("CARGO_PKG_NAME");
/// Current application version (from Cargo.toml).
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// === Path Configuration ===

/// Dataset file opened when neither the CLI nor the config file names one.
pub const DEFAULT_DATABASE_FILE: &str = "CTA2_L_daily_ridership.db";
/// Name of the configuration file inside the app config directory.
pub const CONFIG_FILE_NAME: &str = "config.toml";
/// Environment variable holding a `tracing` filter directive.
pub const LOG_ENV_VAR: &str = "RIDERSHIP_LOG";

// === Geographic Configuration ===

/// Accepted latitude range for the nearby-station search.
pub const LATITUDE_RANGE: (f64, f64) = (40.0, 43.0);
/// Accepted longitude range for the nearby-station search.
pub const LONGITUDE_RANGE: (f64, f64) = (-88.0, -87.0);
/// Degrees of latitude per mile.
pub const DEGREES_PER_MILE_LAT: f64 = 1.0 / 69.0;
/// Degrees of longitude per mile at Chicago's latitude.
pub const DEGREES_PER_MILE_LON: f64 = 1.0 / 51.0;
/// Decimal places kept on each bounding box edge.
pub const BOUNDING_BOX_PRECISION: i32 = 3;
/// Longitude extent of the station map background `[west, east]`.
pub const MAP_LONGITUDE_BOUNDS: [f64; 2] = [-87.9277, -87.5569];
/// Latitude extent of the station map background `[south, north]`.
pub const MAP_LATITUDE_BOUNDS: [f64; 2] = [41.7012, 42.0868];

// === Output Configuration ===

/// Number of daily records shown at each end of a daily comparison.
pub const DAILY_PREVIEW_ROWS: usize = 5;

// === Prompts ===

pub const BANNER: &str = "** Welcome to CTA L analysis app **";
pub const PROMPT_COMMAND: &str = "Please enter a command (1-9, x to exit): ";
pub const PROMPT_PARTIAL_NAME: &str = "\nEnter partial station name (wildcards _ and %): ";
pub const PROMPT_EXACT_NAME: &str = "\nEnter the name of the station you would like to analyze: ";
pub const PROMPT_LINE_COLOR: &str = "\nEnter a line color (e.g. Red or Yellow): ";
pub const PROMPT_DIRECTION: &str = "Enter a direction (N/S/W/E): ";
pub const PROMPT_STATION_PATTERN: &str = "\nEnter a station name (wildcards _ and %): ";
pub const PROMPT_YEAR: &str = "Enter a year: ";
pub const PROMPT_COMPARISON_YEAR: &str = "\nYear to compare against? ";
pub const PROMPT_STATION_1: &str = "\nEnter station 1 (wildcards _ and %): ";
pub const PROMPT_STATION_2: &str = "\nEnter station 2 (wildcards _ and %): ";
pub const PROMPT_LATITUDE: &str = "\nEnter a latitude: ";
pub const PROMPT_LONGITUDE: &str = "Enter a longitude: ";
pub const PROMPT_PLOT: &str = "Plot? (y/n) \n";

// === Messages: Lookup Failures ===

pub const MSG_NO_STATIONS: &str = "**No stations found...";
pub const MSG_NO_STATION: &str = "**No station found...";
pub const MSG_MULTIPLE_STATIONS: &str = "**Multiple stations found...";
pub const MSG_NO_DATA: &str = "**No data found...\n";
pub const MSG_NO_LINE: &str = "**No such line...";
pub const MSG_NO_DIRECTION: &str = "**That line does not run in the direction chosen...";

// === Messages: Input Validation ===

pub const MSG_INVALID_NUMBER: &str = "**Invalid input. Please enter a valid number.";
pub const MSG_INVALID_YEAR: &str = "**Invalid year...";
pub const MSG_LATITUDE_OUT_OF_BOUNDS: &str = "**Latitude entered is out of bounds...";
pub const MSG_LONGITUDE_OUT_OF_BOUNDS: &str = "**Longitude entered is out of bounds...";
pub const MSG_UNKNOWN_COMMAND: &str = " **Error, unknown command, try again...";

// === Report Headers ===

pub const HEADER_STATS: &str = "General Statistics:";
pub const HEADER_WEEKDAY_RANKING: &str = "Ridership on Weekdays for Each Station";
pub const HEADER_STOP_COUNTS: &str = "Number of Stops For Each Color By Direction";
pub const HEADER_NEARBY: &str = "\nList of Stations Within a Mile";

// === Chart Labels ===

pub const TITLE_NEARBY_MAP: &str = "Stations Near You";
pub const LABEL_NUMBER_OF_RIDERS: &str = "Number of Riders";
pub const CHART_FOOTER_CLOSE: &str = "Close";
