//! In-memory dataset used by unit tests.
//!
//! A handful of real downtown stations with hand-picked ridership so that
//! expected totals can be worked out by hand.

use rusqlite::{params, Connection};

use super::Database;

const SCHEMA: &str = "
CREATE TABLE Stations (Station_ID INTEGER PRIMARY KEY, Station_Name TEXT NOT NULL);
CREATE TABLE Stops (
    Stop_ID INTEGER PRIMARY KEY,
    Station_ID INTEGER NOT NULL,
    Stop_Name TEXT NOT NULL,
    Direction TEXT NOT NULL,
    ADA INTEGER NOT NULL,
    Latitude REAL NOT NULL,
    Longitude REAL NOT NULL
);
CREATE TABLE Lines (Line_ID INTEGER PRIMARY KEY, Color TEXT NOT NULL);
CREATE TABLE StopDetails (Stop_ID INTEGER NOT NULL, Line_ID INTEGER NOT NULL);
CREATE TABLE Ridership (
    Station_ID INTEGER NOT NULL,
    Ride_Date TEXT NOT NULL,
    Type_of_Day TEXT NOT NULL,
    Num_Riders INTEGER NOT NULL
);
";

pub const CLARK_LAKE: i64 = 40380;
pub const STATE_LAKE: i64 = 40260;
pub const FULLERTON: i64 = 41220;
pub const JACKSON_RED: i64 = 40560;
pub const JACKSON_BLUE: i64 = 40070;
pub const HOWARD: i64 = 40900;

const STATIONS: &[(i64, &str)] = &[
    (CLARK_LAKE, "Clark/Lake"),
    (STATE_LAKE, "State/Lake"),
    (FULLERTON, "Fullerton"),
    (JACKSON_RED, "Jackson"),
    (JACKSON_BLUE, "Jackson"),
    (HOWARD, "Howard"),
];

const LINES: &[(i64, &str)] = &[(1, "Red"), (2, "Blue"), (3, "Brown")];

/// `(stop id, station id, name, direction, ada, lat, lon, line ids)`
type StopRow = (i64, i64, &'static str, &'static str, i64, f64, f64, &'static [i64]);

const STOPS: &[StopRow] = &[
    (30074, CLARK_LAKE, "Clark/Lake (Inner Loop)", "S", 1, 41.885_737, -87.630_886, &[3]),
    (30375, CLARK_LAKE, "Clark/Lake (O'Hare-bound)", "W", 1, 41.885_737, -87.630_886, &[2]),
    (30050, STATE_LAKE, "State/Lake (Inner Loop)", "S", 0, 41.885_74, -87.627_835, &[3]),
    (30233, FULLERTON, "Fullerton (Howard-bound)", "N", 1, 41.925_051, -87.652_866, &[1, 3]),
    (30234, FULLERTON, "Fullerton (95th-bound)", "S", 1, 41.925_051, -87.652_866, &[1]),
    (30110, JACKSON_RED, "Jackson (Howard-bound)", "N", 1, 41.878_153, -87.627_596, &[1]),
    (30109, JACKSON_RED, "Jackson (95th-bound)", "S", 1, 41.878_153, -87.627_596, &[1]),
    (30015, JACKSON_BLUE, "Jackson (O'Hare-bound)", "W", 0, 41.878_183, -87.629_296, &[2]),
    (30173, HOWARD, "Howard (NB)", "N", 0, 42.019_063, -87.672_892, &[1]),
];

const RIDERSHIP: &[(i64, &str, &str, i64)] = &[
    (CLARK_LAKE, "2020-01-06", "W", 1000),
    (CLARK_LAKE, "2020-01-11", "A", 300),
    (CLARK_LAKE, "2020-01-12", "U", 200),
    (CLARK_LAKE, "2020-02-03", "W", 1100),
    (CLARK_LAKE, "2021-03-01", "W", 900),
    (CLARK_LAKE, "2021-03-06", "A", 250),
    (CLARK_LAKE, "2021-12-31", "W", 400),
    (CLARK_LAKE, "2022-01-03", "W", 10),
    (CLARK_LAKE, "2022-01-04", "W", 20),
    (CLARK_LAKE, "2022-01-05", "W", 30),
    (STATE_LAKE, "2020-01-06", "W", 700),
    (STATE_LAKE, "2020-01-07", "W", 800),
    (FULLERTON, "2020-01-06", "W", 2000),
    (FULLERTON, "2020-01-11", "A", 500),
    (JACKSON_RED, "2020-01-06", "W", 600),
    (JACKSON_BLUE, "2020-01-06", "W", 300),
];

/// Fullerton carries twelve weekday records in January 2022 with
/// `100 * day` riders each.
pub const FULLERTON_2022_DAYS: i64 = 12;

/// Build the fixture schema and rows into `conn`.
pub fn seed(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(SCHEMA)?;

    for (id, name) in STATIONS {
        conn.execute(
            "INSERT INTO Stations (Station_ID, Station_Name) VALUES (?1, ?2)",
            params![id, name],
        )?;
    }
    for (id, color) in LINES {
        conn.execute(
            "INSERT INTO Lines (Line_ID, Color) VALUES (?1, ?2)",
            params![id, color],
        )?;
    }
    for (stop_id, station_id, name, direction, ada, lat, lon, lines) in STOPS {
        conn.execute(
            "INSERT INTO Stops (Stop_ID, Station_ID, Stop_Name, Direction, ADA, Latitude, Longitude)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            params![stop_id, station_id, name, direction, ada, lat, lon],
        )?;
        for line_id in *lines {
            conn.execute(
                "INSERT INTO StopDetails (Stop_ID, Line_ID) VALUES (?1, ?2)",
                params![stop_id, line_id],
            )?;
        }
    }

    let mut insert = conn.prepare(
        "INSERT INTO Ridership (Station_ID, Ride_Date, Type_of_Day, Num_Riders)
         VALUES (?1, ?2 || ' 00:00:00', ?3, ?4)",
    )?;
    for (station_id, date, day_type, riders) in RIDERSHIP {
        insert.execute(params![station_id, date, day_type, riders])?;
    }
    for day in 1..=FULLERTON_2022_DAYS {
        let date = format!("2022-01-{day:02}");
        insert.execute(params![FULLERTON, date, "W", 100 * day])?;
    }
    Ok(())
}

/// An in-memory [`Database`] holding the fixture rows.
pub fn database() -> Database {
    let conn = Connection::open_in_memory().expect("in-memory database");
    seed(&conn).expect("seed fixture");
    Database::from_connection(conn)
}
