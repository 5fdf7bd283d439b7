//! Footer widget with keybinding hints for chart screens

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::constants;
use crate::theme;

/// Render the chart screen footer
pub fn render(frame: &mut Frame, area: Rect) {
    let hints = [("q/Esc/Enter", constants::CHART_FOOTER_CLOSE)];
    render_hints(frame, area, &hints);
}

fn render_hints(frame: &mut Frame, area: Rect, hints: &[(&str, &str)]) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),     // Hints (left)
            Constraint::Length(20), // Branding (right)
        ])
        .split(area);

    let mut hint_spans = vec![Span::raw(" ")];
    let mut current_width = 1;
    let max_width = chunks[0].width as usize;

    for (i, (key, action)) in hints.iter().enumerate() {
        // key + " " + action, plus " │ " before every item but the first
        let sep_width = if i > 0 { 3 } else { 0 };
        let item_width = key.len() + 1 + action.len() + sep_width;

        if current_width + item_width > max_width {
            break;
        }

        if i > 0 {
            hint_spans.push(Span::styled(
                " │ ",
                Style::default().fg(Color::Rgb(50, 50, 50)),
            ));
        }
        hint_spans.push(Span::styled(
            *key,
            Style::default()
                .fg(theme::ACCENT_PRIMARY)
                .add_modifier(Modifier::BOLD),
        ));
        hint_spans.push(Span::raw(" "));
        hint_spans.push(Span::styled(*action, Style::default().fg(Color::DarkGray)));

        current_width += item_width;
    }
    frame.render_widget(Paragraph::new(Line::from(hint_spans)), chunks[0]);

    let branding = Line::from(vec![Span::styled(
        format!("{} v{} ", constants::APP_NAME, constants::APP_VERSION),
        Style::default().fg(theme::TEXT_SECONDARY),
    )]);
    frame.render_widget(
        Paragraph::new(branding).alignment(Alignment::Right),
        chunks[1],
    );
}
