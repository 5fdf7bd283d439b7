//! Read-only access to the ridership dataset.
//!
//! Only this module talks to SQLite. Command handlers call the typed query
//! methods on [`Database`] and never build SQL themselves.

#[cfg(test)]
pub(crate) mod fixture;

use std::path::Path;

use color_eyre::eyre::{eyre, WrapErr};
use color_eyre::Result;
use rusqlite::{params, Connection, OpenFlags};

use crate::core::geo::BoundingBox;
use crate::state::{
    DailyCount, DatasetStats, DayType, DayTypeTotal, Direction, LineDirectionCount, MonthTotal,
    NearbyStation, Station, StationTotal, Stop, YearTotal,
};

/// Flags for opening the dataset. Paths are plain file names, never URIs.
const OPEN_FLAGS: OpenFlags =
    OpenFlags::SQLITE_OPEN_READ_ONLY.union(OpenFlags::SQLITE_OPEN_NO_MUTEX);

/// The one open connection to the dataset.
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open the dataset file read-only.
    ///
    /// # Errors
    ///
    /// Returns an error if the file does not exist or is not a SQLite database.
    pub fn open(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(eyre!("Dataset not found: {}", path.display()));
        }
        let conn = Connection::open_with_flags(path, OPEN_FLAGS)
            .wrap_err_with(|| format!("Failed to open dataset {}", path.display()))?;
        tracing::info!(path = %path.display(), "opened dataset read-only");
        Ok(Self { conn })
    }

    #[cfg(test)]
    pub(crate) fn from_connection(conn: Connection) -> Self {
        Self { conn }
    }

    #[cfg(test)]
    pub(crate) fn connection(&self) -> &Connection {
        &self.conn
    }

    // ── Dataset overview ───────────────────────────────────────────

    /// Counts, date range, and total ridership across the whole dataset.
    ///
    /// # Errors
    ///
    /// Returns an error if any query fails.
    pub fn stats(&self) -> Result<DatasetStats> {
        let count = |table: &str| -> Result<i64> {
            let sql = format!("SELECT COUNT(*) FROM {table}");
            Ok(self.conn.query_row(&sql, [], |row| row.get(0))?)
        };

        let (first_date, last_date): (Option<String>, Option<String>) = self.conn.query_row(
            "SELECT strftime('%Y-%m-%d', MIN(Ride_Date)), strftime('%Y-%m-%d', MAX(Ride_Date))
             FROM Ridership",
            [],
            |row| Ok((row.get(0)?, row.get(1)?)),
        )?;

        let total_riders: i64 = self.conn.query_row(
            "SELECT COALESCE(SUM(Num_Riders), 0) FROM Ridership",
            [],
            |row| row.get(0),
        )?;

        Ok(DatasetStats {
            stations: count("Stations")?,
            stops: count("Stops")?,
            ride_entries: count("Ridership")?,
            first_date,
            last_date,
            total_riders,
        })
    }

    // ── Stations ───────────────────────────────────────────────────

    /// Stations whose name matches a `LIKE` pattern, ordered by name.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn find_stations(&self, pattern: &str) -> Result<Vec<Station>> {
        tracing::debug!(pattern, "searching stations");
        let mut stmt = self.conn.prepare_cached(
            "SELECT Station_ID, Station_Name FROM Stations
             WHERE Station_Name LIKE ?1
             ORDER BY Station_Name ASC, Station_ID ASC",
        )?;
        let stations = stmt
            .query_map(params![pattern], |row| {
                Ok(Station {
                    id: row.get(0)?,
                    name: row.get(1)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(stations)
    }

    /// Distinct station names matching a `LIKE` pattern.
    ///
    /// Stations sharing a name collapse into one entry.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn find_station_names(&self, pattern: &str) -> Result<Vec<String>> {
        tracing::debug!(pattern, "searching station names");
        let mut stmt = self.conn.prepare_cached(
            "SELECT Station_Name FROM Stations
             WHERE Station_Name LIKE ?1
             GROUP BY Station_Name
             ORDER BY Station_Name ASC",
        )?;
        let names = stmt
            .query_map(params![pattern], |row| row.get(0))?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(names)
    }

    // ── Ridership breakdowns ───────────────────────────────────────

    /// Riders per day type for every station with exactly this name.
    ///
    /// Day types with no records are absent from the result.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or a record carries an unknown
    /// day type code.
    pub fn day_type_totals(&self, station_name: &str) -> Result<Vec<DayTypeTotal>> {
        tracing::debug!(station_name, "loading day type totals");
        let mut stmt = self.conn.prepare_cached(
            "SELECT Type_of_Day, SUM(Num_Riders) FROM Ridership
             WHERE Station_ID IN (SELECT Station_ID FROM Stations WHERE Station_Name = ?1)
             GROUP BY Type_of_Day",
        )?;
        let rows = stmt
            .query_map(params![station_name], |row| {
                Ok((row.get::<_, String>(0)?, row.get::<_, i64>(1)?))
            })?
            .collect::<Result<Vec<_>, _>>()?;

        rows.into_iter()
            .map(|(code, riders)| {
                let day_type = code.parse::<DayType>().map_err(|e| eyre!(e))?;
                Ok(DayTypeTotal { day_type, riders })
            })
            .collect()
    }

    /// Riders per station name for one day type, largest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn station_totals(&self, day_type: DayType) -> Result<Vec<StationTotal>> {
        tracing::debug!(day_type = day_type.code(), "loading station totals");
        let mut stmt = self.conn.prepare_cached(
            "SELECT s.Station_Name, SUM(r.Num_Riders) AS Total
             FROM Ridership r
             INNER JOIN Stations s ON r.Station_ID = s.Station_ID
             WHERE r.Type_of_Day = ?1
             GROUP BY s.Station_Name
             ORDER BY Total DESC, s.Station_Name ASC",
        )?;
        let totals = stmt
            .query_map(params![day_type.code()], |row| {
                Ok(StationTotal {
                    name: row.get(0)?,
                    riders: row.get(1)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(totals)
    }

    // ── Lines and stops ────────────────────────────────────────────

    /// Stops served by a line color, optionally restricted to one direction.
    ///
    /// The color match ignores case. Stops are grouped by name; a name counts
    /// as accessible when any of its stops is.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn line_stops(&self, color: &str, direction: Option<Direction>) -> Result<Vec<Stop>> {
        tracing::debug!(color, ?direction, "loading line stops");
        let mut stmt = self.conn.prepare_cached(
            "SELECT Stops.Stop_Name, MAX(Stops.ADA)
             FROM Stops
             JOIN StopDetails ON Stops.Stop_ID = StopDetails.Stop_ID
             JOIN Lines ON StopDetails.Line_ID = Lines.Line_ID
             WHERE UPPER(Lines.Color) = UPPER(?1)
               AND (?2 IS NULL OR UPPER(Stops.Direction) = ?2)
             GROUP BY Stops.Stop_Name
             ORDER BY Stops.Stop_Name ASC",
        )?;
        let stops = stmt
            .query_map(params![color, direction.map(Direction::code)], |row| {
                Ok(Stop {
                    name: row.get(0)?,
                    accessible: row.get::<_, i64>(1)? != 0,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(stops)
    }

    /// Distinct stop counts per line color and direction.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn stop_counts_by_line(&self) -> Result<Vec<LineDirectionCount>> {
        let mut stmt = self.conn.prepare_cached(
            "SELECT Lines.Color, Stops.Direction, COUNT(DISTINCT Stops.Stop_ID)
             FROM Stops
             INNER JOIN StopDetails ON Stops.Stop_ID = StopDetails.Stop_ID
             JOIN Lines ON StopDetails.Line_ID = Lines.Line_ID
             GROUP BY Lines.Color, Stops.Direction
             ORDER BY Lines.Color ASC, Stops.Direction ASC",
        )?;
        let counts = stmt
            .query_map([], |row| {
                Ok(LineDirectionCount {
                    color: row.get(0)?,
                    direction: row.get(1)?,
                    stops: row.get(2)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(counts)
    }

    /// Number of stops in the dataset.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn stop_count(&self) -> Result<i64> {
        Ok(self
            .conn
            .query_row("SELECT COUNT(*) FROM Stops", [], |row| row.get(0))?)
    }

    // ── Rollups over time ──────────────────────────────────────────

    /// Riders per calendar year for all stations with this exact name.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn yearly_ridership(&self, station_name: &str) -> Result<Vec<YearTotal>> {
        tracing::debug!(station_name, "loading yearly ridership");
        let mut stmt = self.conn.prepare_cached(
            "SELECT CAST(strftime('%Y', Ride_Date) AS INTEGER) AS Year, SUM(Num_Riders)
             FROM Ridership
             JOIN Stations ON Ridership.Station_ID = Stations.Station_ID
             WHERE Station_Name = ?1
             GROUP BY Year
             ORDER BY Year ASC",
        )?;
        let years = stmt
            .query_map(params![station_name], |row| {
                Ok(YearTotal {
                    year: row.get(0)?,
                    riders: row.get(1)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(years)
    }

    /// Riders per month of `year` at one station.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn monthly_ridership(&self, station_id: i64, year: i32) -> Result<Vec<MonthTotal>> {
        tracing::debug!(station_id, year, "loading monthly ridership");
        let mut stmt = self.conn.prepare_cached(
            "SELECT CAST(strftime('%m', Ride_Date) AS INTEGER) AS Month, SUM(Num_Riders)
             FROM Ridership
             WHERE Station_ID = ?1 AND strftime('%Y', Ride_Date) = ?2
             GROUP BY Month
             ORDER BY Month ASC",
        )?;
        let months = stmt
            .query_map(params![station_id, format!("{year:04}")], |row| {
                Ok(MonthTotal {
                    month: row.get(0)?,
                    year,
                    riders: row.get(1)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(months)
    }

    /// Every daily record of `year` at one station, in date order.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn daily_ridership(&self, station_id: i64, year: i32) -> Result<Vec<DailyCount>> {
        tracing::debug!(station_id, year, "loading daily ridership");
        let mut stmt = self.conn.prepare_cached(
            "SELECT DATE(Ride_Date) AS RideDate, Num_Riders
             FROM Ridership
             WHERE Station_ID = ?1 AND strftime('%Y', Ride_Date) = ?2
             ORDER BY RideDate ASC",
        )?;
        let days = stmt
            .query_map(params![station_id, format!("{year:04}")], |row| {
                Ok(DailyCount {
                    date: row.get(0)?,
                    riders: row.get(1)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(days)
    }

    // ── Geography ──────────────────────────────────────────────────

    /// Stations with at least one stop inside `area`, ordered by name.
    ///
    /// One row per distinct stop position.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn stations_within(&self, area: &BoundingBox) -> Result<Vec<NearbyStation>> {
        tracing::debug!(?area, "searching stations by position");
        let mut stmt = self.conn.prepare_cached(
            "SELECT DISTINCT Stations.Station_Name, Stops.Latitude, Stops.Longitude
             FROM Stations
             JOIN Stops ON Stations.Station_ID = Stops.Station_ID
             WHERE Stops.Latitude BETWEEN ?1 AND ?2
               AND Stops.Longitude BETWEEN ?3 AND ?4
             ORDER BY Stations.Station_Name ASC, Stops.Latitude ASC, Stops.Longitude ASC",
        )?;
        let stations = stmt
            .query_map(
                params![area.south, area.north, area.west, area.east],
                |row| {
                    Ok(NearbyStation {
                        name: row.get(0)?,
                        latitude: row.get(1)?,
                        longitude: row.get(2)?,
                    })
                },
            )?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(stations)
    }
}
