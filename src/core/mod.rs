//! Derived values computed over query results.
//!
//! Everything here is pure: no I/O, no database handle.

pub mod breakdown;
pub mod geo;
