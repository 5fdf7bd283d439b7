//! Ridership over time (commands 6-8).

use std::io::{BufRead, Write};

use super::{CommandResult, InputError, Session};
use crate::constants;
use crate::core::breakdown::head_and_tail;
use crate::state::{DailyCount, Station};
use crate::ui::{format, LineChart, Series};

/// Yearly totals for one station name.
pub(super) fn yearly_ridership<R: BufRead, W: Write>(s: &mut Session<'_, R, W>) -> CommandResult {
    let pattern = s.ask(constants::PROMPT_STATION_PATTERN)?;
    let mut names = s.db.find_station_names(&pattern)?;
    let name = match names.len() {
        0 => return Err(InputError::NoStation.into()),
        1 => names.remove(0),
        _ => return Err(InputError::MultipleStations.into()),
    };

    let years = s.db.yearly_ridership(&name)?;
    if years.is_empty() {
        return Err(InputError::NoData.into());
    }

    let title = format!("Yearly Ridership at {name}");
    writeln!(s.console, "{title}")?;
    for year in &years {
        writeln!(s.console, "{} : {}", year.year, format::thousands(year.riders))?;
    }

    if s.offer_plot()? {
        let ticks: Vec<f64> = years.iter().map(|y| f64::from(y.year)).collect();
        #[allow(clippy::cast_precision_loss)]
        let points = years
            .iter()
            .map(|y| (f64::from(y.year), y.riders as f64))
            .collect();
        s.plotter.line_chart(&LineChart {
            title,
            x_label: "Year".to_string(),
            y_label: constants::LABEL_NUMBER_OF_RIDERS.to_string(),
            series: vec![Series {
                label: None,
                points,
            }],
            x_ticks: Some(ticks),
            markers: true,
        })?;
    }
    Ok(())
}

/// Monthly totals for one station in one year.
pub(super) fn monthly_ridership<R: BufRead, W: Write>(
    s: &mut Session<'_, R, W>,
) -> CommandResult {
    let station = s.ask_station(constants::PROMPT_STATION_PATTERN)?;
    let year = s.ask_year(constants::PROMPT_YEAR)?;

    let months = s.db.monthly_ridership(station.id, year)?;
    if months.is_empty() {
        return Err(InputError::NoData.into());
    }

    let title = format!("Monthly Ridership at {} for {year}", station.name);
    writeln!(s.console, "{title}")?;
    for month in &months {
        writeln!(s.console, "{} : {}", month.label(), format::thousands(month.riders))?;
    }

    if s.offer_plot()? {
        #[allow(clippy::cast_precision_loss)]
        let points = months
            .iter()
            .map(|m| (f64::from(m.month), m.riders as f64))
            .collect();
        s.plotter.line_chart(&LineChart {
            title,
            x_label: "Month".to_string(),
            y_label: constants::LABEL_NUMBER_OF_RIDERS.to_string(),
            series: vec![Series {
                label: None,
                points,
            }],
            x_ticks: Some((1..=12_u8).map(f64::from).collect()),
            markers: true,
        })?;
    }
    Ok(())
}

/// Day-by-day ridership of two stations across one year.
pub(super) fn daily_comparison<R: BufRead, W: Write>(
    s: &mut Session<'_, R, W>,
) -> CommandResult {
    let year = s.ask_year(constants::PROMPT_COMPARISON_YEAR)?;
    let first = s.ask_station(constants::PROMPT_STATION_1)?;
    let second = s.ask_station(constants::PROMPT_STATION_2)?;

    let first_days = s.db.daily_ridership(first.id, year)?;
    let second_days = s.db.daily_ridership(second.id, year)?;

    write_daily_preview(s, 1, &first, &first_days)?;
    write_daily_preview(s, 2, &second, &second_days)?;
    writeln!(s.console)?;

    if (first_days.is_empty() && second_days.is_empty()) || !s.offer_plot()? {
        return Ok(());
    }
    s.plotter.line_chart(&LineChart {
        title: format!("Ridership Each Day of {year}"),
        x_label: "Day".to_string(),
        y_label: constants::LABEL_NUMBER_OF_RIDERS.to_string(),
        series: vec![daily_series(&first, &first_days), daily_series(&second, &second_days)],
        x_ticks: None,
        markers: false,
    })?;
    Ok(())
}

fn write_daily_preview<R: BufRead, W: Write>(
    s: &mut Session<'_, R, W>,
    position: u8,
    station: &Station,
    days: &[DailyCount],
) -> CommandResult {
    writeln!(s.console, "Station {position}: {} {}", station.id, station.name)?;
    for day in head_and_tail(days, constants::DAILY_PREVIEW_ROWS) {
        writeln!(s.console, "{} {}", day.date, day.riders)?;
    }
    Ok(())
}

/// Riders against day index within the year.
#[allow(clippy::cast_precision_loss)]
fn daily_series(station: &Station, days: &[DailyCount]) -> Series {
    Series {
        label: Some(station.name.clone()),
        points: days
            .iter()
            .enumerate()
            .map(|(i, day)| (i as f64, day.riders as f64))
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::commands::{testing, Command};
    use crate::constants;
    use crate::db::fixture;

    #[test]
    fn test_yearly_ridership_with_plot() {
        let db = fixture::database();
        let (output, plotter) = testing::run(&db, Command::YearlyRidership, "clark%\ny\n", true);
        let expected = [
            "Yearly Ridership at Clark/Lake",
            "2020 : 2,600",
            "2021 : 1,550",
            "2022 : 60",
        ]
        .join("\n");
        assert_eq!(
            output,
            format!(
                "{}{expected}\n{}",
                constants::PROMPT_STATION_PATTERN,
                constants::PROMPT_PLOT
            )
        );

        assert_eq!(plotter.charts.len(), 1);
        let chart = &plotter.charts[0];
        assert_eq!(chart.title, "Yearly Ridership at Clark/Lake");
        assert_eq!(chart.x_ticks, Some(vec![2020.0, 2021.0, 2022.0]));
        assert_eq!(
            chart.series[0].points,
            vec![(2020.0, 2600.0), (2021.0, 1550.0), (2022.0, 60.0)]
        );
    }

    #[test]
    fn test_yearly_ridership_declined_plot() {
        let db = fixture::database();
        let (_, plotter) = testing::run(&db, Command::YearlyRidership, "Clark/Lake\nn\n", true);
        assert!(plotter.charts.is_empty());
    }

    #[test]
    fn test_yearly_ridership_plots_disabled() {
        let db = fixture::database();
        let (output, plotter) = testing::run(&db, Command::YearlyRidership, "Clark/Lake\n", false);
        assert!(!output.contains("Plot?"));
        assert!(output.ends_with("2022 : 60\n"));
        assert!(plotter.charts.is_empty());
    }

    #[test]
    fn test_yearly_ridership_lookup_failures() {
        let db = fixture::database();
        let (output, plotter) = testing::run(&db, Command::YearlyRidership, "%Lake\ny\n", true);
        assert!(output.ends_with("**Multiple stations found...\n"));
        assert!(plotter.charts.is_empty());

        let (output, _) = testing::run(&db, Command::YearlyRidership, "Midway\n", true);
        assert!(output.ends_with("**No station found...\n"));

        let (output, _) = testing::run(&db, Command::YearlyRidership, "Howard\n", true);
        assert!(output.ends_with("**No data found...\n\n"));
    }

    #[test]
    fn test_yearly_ridership_single_name_for_shared_stations() {
        let db = fixture::database();
        let (output, _) = testing::run(&db, Command::YearlyRidership, "Jackson\nn\n", true);
        assert!(output.contains("Yearly Ridership at Jackson\n2020 : 900\n"));
    }

    #[test]
    fn test_monthly_ridership() {
        let db = fixture::database();
        let (output, plotter) =
            testing::run(&db, Command::MonthlyRidership, "Clark/Lake\n2020\ny\n", true);
        let expected = [
            "Monthly Ridership at Clark/Lake for 2020",
            "01/2020 : 1,500",
            "02/2020 : 1,100",
        ]
        .join("\n");
        assert_eq!(
            output,
            format!(
                "{}{}{expected}\n{}",
                constants::PROMPT_STATION_PATTERN,
                constants::PROMPT_YEAR,
                constants::PROMPT_PLOT
            )
        );

        let chart = &plotter.charts[0];
        assert_eq!(chart.x_label, "Month");
        assert_eq!(chart.x_ticks.as_ref().map(Vec::len), Some(12));
        assert_eq!(chart.series[0].points, vec![(1.0, 1500.0), (2.0, 1100.0)]);
    }

    #[test]
    fn test_monthly_ridership_rejects_ambiguous_station_by_id() {
        let db = fixture::database();
        let (output, _) = testing::run(&db, Command::MonthlyRidership, "Jackson\n2020\n", true);
        assert!(output.ends_with("**Multiple stations found...\n"));
        assert!(!output.contains(constants::PROMPT_YEAR));
    }

    #[test]
    fn test_monthly_ridership_invalid_year() {
        let db = fixture::database();
        let (output, _) = testing::run(&db, Command::MonthlyRidership, "Clark/Lake\ntwenty\n", true);
        assert!(output.ends_with("**Invalid year...\n"));
    }

    #[test]
    fn test_monthly_ridership_year_without_data() {
        let db = fixture::database();
        let (output, plotter) =
            testing::run(&db, Command::MonthlyRidership, "Clark/Lake\n1999\ny\n", true);
        assert!(output.ends_with("**No data found...\n\n"));
        assert!(plotter.charts.is_empty());
    }

    #[test]
    fn test_daily_comparison() {
        let db = fixture::database();
        let (output, plotter) = testing::run(
            &db,
            Command::DailyComparison,
            "2022\nFullerton\nClark/Lake\ny\n",
            true,
        );
        let expected = [
            "Station 1: 41220 Fullerton",
            "2022-01-01 100",
            "2022-01-02 200",
            "2022-01-03 300",
            "2022-01-04 400",
            "2022-01-05 500",
            "2022-01-08 800",
            "2022-01-09 900",
            "2022-01-10 1000",
            "2022-01-11 1100",
            "2022-01-12 1200",
            "Station 2: 40380 Clark/Lake",
            "2022-01-03 10",
            "2022-01-04 20",
            "2022-01-05 30",
            "",
        ]
        .join("\n");
        assert_eq!(
            output,
            format!(
                "{}{}{}{expected}\n{}",
                constants::PROMPT_COMPARISON_YEAR,
                constants::PROMPT_STATION_1,
                constants::PROMPT_STATION_2,
                constants::PROMPT_PLOT
            )
        );

        let chart = &plotter.charts[0];
        assert_eq!(chart.title, "Ridership Each Day of 2022");
        assert_eq!(chart.series.len(), 2);
        assert_eq!(chart.series[0].label.as_deref(), Some("Fullerton"));
        assert_eq!(chart.series[0].points.len(), 12);
        assert_eq!(chart.series[1].points, vec![(0.0, 10.0), (1.0, 20.0), (2.0, 30.0)]);
    }

    #[test]
    fn test_daily_comparison_stops_at_first_bad_station() {
        let db = fixture::database();
        let (output, _) =
            testing::run(&db, Command::DailyComparison, "2022\nMidway\nClark/Lake\n", true);
        assert!(output.ends_with("**No station found...\n"));
        assert!(!output.contains(constants::PROMPT_STATION_2));
    }

    #[test]
    fn test_daily_comparison_invalid_year() {
        let db = fixture::database();
        let (output, _) = testing::run(&db, Command::DailyComparison, "22\n", true);
        assert_eq!(
            output,
            format!("{}**Invalid year...\n", constants::PROMPT_COMPARISON_YEAR)
        );
    }
}
