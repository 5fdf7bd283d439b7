//! Small widgets shared by the chart screens.

pub mod footer;
