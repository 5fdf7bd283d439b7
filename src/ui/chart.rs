//! Line chart screen.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    symbols::Marker,
    text::Span,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, LegendPosition},
    Frame,
};

use crate::theme;
use crate::ui::format;

/// One named line on a chart.
#[derive(Clone, Debug, PartialEq)]
pub struct Series {
    /// Legend entry; unnamed series stay out of the legend.
    pub label: Option<String>,
    pub points: Vec<(f64, f64)>,
}

/// Everything needed to draw a line chart.
#[derive(Clone, Debug, PartialEq)]
pub struct LineChart {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub series: Vec<Series>,
    /// Fixed x axis ticks; the data range is used when absent.
    pub x_ticks: Option<Vec<f64>>,
    /// Mark each data point in addition to the line.
    pub markers: bool,
}

impl LineChart {
    /// X range covering the ticks, or the data when there are none.
    #[must_use]
    pub fn x_bounds(&self) -> [f64; 2] {
        let xs: Vec<f64> = match &self.x_ticks {
            Some(ticks) if !ticks.is_empty() => ticks.clone(),
            _ => self.points().map(|(x, _)| x).collect(),
        };
        let low = xs.iter().copied().fold(f64::INFINITY, f64::min);
        let high = xs.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        if !low.is_finite() || !high.is_finite() {
            return [0.0, 1.0];
        }
        if (high - low).abs() < f64::EPSILON {
            [low - 1.0, high + 1.0]
        } else {
            [low, high]
        }
    }

    /// Y range from zero to a little above the largest value.
    #[must_use]
    pub fn y_bounds(&self) -> [f64; 2] {
        let high = self.points().map(|(_, y)| y).fold(0.0, f64::max);
        if high > 0.0 {
            [0.0, high * 1.1]
        } else {
            [0.0, 1.0]
        }
    }

    fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.series.iter().flat_map(|s| s.points.iter().copied())
    }
}

/// Render a line chart into `area`.
#[allow(clippy::cast_possible_truncation)]
pub fn render(frame: &mut Frame, area: Rect, chart: &LineChart) {
    let x_bounds = chart.x_bounds();
    let y_bounds = chart.y_bounds();

    let mut datasets = Vec::new();
    for (i, series) in chart.series.iter().enumerate() {
        let color = theme::SERIES[i % theme::SERIES.len()];
        let mut line = Dataset::default()
            .marker(Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(color))
            .data(&series.points);
        if let Some(label) = &series.label {
            line = line.name(label.clone());
        }
        datasets.push(line);

        if chart.markers {
            datasets.push(
                Dataset::default()
                    .marker(Marker::Dot)
                    .graph_type(GraphType::Scatter)
                    .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
                    .data(&series.points),
            );
        }
    }

    let x_labels: Vec<Span> = match &chart.x_ticks {
        Some(ticks) if !ticks.is_empty() => ticks
            .iter()
            .map(|t| Span::raw(format!("{}", t.round() as i64)))
            .collect(),
        _ => [x_bounds[0], (x_bounds[0] + x_bounds[1]) / 2.0, x_bounds[1]]
            .iter()
            .map(|v| Span::raw(format!("{}", v.round() as i64)))
            .collect(),
    };
    let y_labels: Vec<Span> = [y_bounds[0], y_bounds[1] / 2.0, y_bounds[1]]
        .iter()
        .map(|v| Span::raw(format::thousands(v.round() as i64)))
        .collect();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::BORDER_FOCUSED))
        .title(Span::styled(
            format!(" {} ", chart.title),
            Style::default()
                .fg(theme::TEXT_PRIMARY)
                .add_modifier(Modifier::BOLD),
        ));

    let widget = Chart::new(datasets)
        .block(block)
        .legend_position(Some(LegendPosition::TopLeft))
        .x_axis(
            Axis::default()
                .title(chart.x_label.clone())
                .style(Style::default().fg(theme::AXIS))
                .bounds(x_bounds)
                .labels(x_labels),
        )
        .y_axis(
            Axis::default()
                .title(chart.y_label.clone())
                .style(Style::default().fg(theme::AXIS))
                .bounds(y_bounds)
                .labels(y_labels),
        );

    frame.render_widget(widget, area);
}
