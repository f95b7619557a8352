use crate::app::AppState;
use crate::submission::SubmissionState;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Padding, Paragraph, Wrap};

use super::state::{InputMode, MIN_TERMINAL_HEIGHT, MIN_TERMINAL_WIDTH};

pub(super) fn draw_header(frame: &mut ratatui::Frame, area: Rect, app: &AppState) {
    let state_color = match app.submission {
        SubmissionState::Idle => Color::White,
        SubmissionState::Submitting { .. } => Color::Yellow,
        SubmissionState::Succeeded { .. } => Color::Green,
        SubmissionState::Failed { .. } => Color::Red,
    };

    let header = Line::from(vec![
        Span::styled(
            " shortwire",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" │ "),
        Span::styled("Service:", Style::default().fg(Color::DarkGray)),
        Span::styled(
            format!(" {} ", app.endpoint),
            Style::default().fg(Color::White),
        ),
        Span::raw("│ "),
        Span::styled("State:", Style::default().fg(Color::DarkGray)),
        Span::styled(
            format!(" {} ", app.submission.label()),
            Style::default().fg(state_color),
        ),
    ]);

    let paragraph = Paragraph::new(header).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(paragraph, area);
}

pub(super) fn draw_form(frame: &mut ratatui::Frame, area: Rect, app: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Length(1)])
        .split(area);

    let border_color = if app.form_error.is_some() {
        Color::Red
    } else {
        Color::Cyan
    };
    let field = Paragraph::new(Line::from(vec![
        Span::raw(app.form_value.as_str()),
        Span::styled("█", Style::default().fg(Color::Gray)),
    ]))
    .block(
        Block::default()
            .title(" Long URL ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color)),
    );
    frame.render_widget(field, chunks[0]);

    // The affordance is visibly disabled exactly while a submission is in
    // flight; AppState enforces the same latch on the Enter gesture.
    let affordance = if app.submission.is_in_flight() {
        Span::styled("  [ Shortening… ]", Style::default().fg(Color::DarkGray))
    } else {
        Span::styled(
            "  [ Shorten (Enter) ]",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )
    };

    let mut spans = vec![affordance];
    if let Some(error) = &app.form_error {
        spans.push(Span::raw("  "));
        spans.push(Span::styled(
            error.as_str(),
            Style::default().fg(Color::Red),
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), chunks[1]);
}

pub(super) fn draw_status(frame: &mut ratatui::Frame, area: Rect, app: &AppState) {
    let mut lines = Vec::new();
    match &app.submission {
        SubmissionState::Idle => {
            lines.push(Line::styled(
                "Enter a long URL and press Enter to shorten it.",
                Style::default().fg(Color::DarkGray),
            ));
        }
        SubmissionState::Submitting { .. } => {
            lines.push(Line::styled("Sending…", Style::default().fg(Color::Yellow)));
        }
        SubmissionState::Succeeded { outcome } => {
            lines.push(Line::styled(
                outcome.message.clone(),
                Style::default().fg(Color::Green),
            ));
            if let Some(alias) = &outcome.alias {
                lines.push(Line::from(vec![
                    Span::styled("Alias:       ", Style::default().fg(Color::DarkGray)),
                    Span::raw(alias.clone()),
                ]));
            }
            if let Some(destination) = &outcome.destination {
                lines.push(Line::from(vec![
                    Span::styled("Opened:      ", Style::default().fg(Color::DarkGray)),
                    Span::raw(destination.clone()),
                ]));
            }
        }
        SubmissionState::Failed { outcome } => {
            lines.push(Line::styled(
                outcome.message.clone(),
                Style::default().fg(Color::Red),
            ));
        }
    }

    let status = Paragraph::new(lines)
        .block(
            Block::default()
                .title(" Result ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .wrap(Wrap { trim: false });
    frame.render_widget(status, area);
}

pub(super) fn draw_footer(frame: &mut ratatui::Frame, area: Rect, mode: InputMode) {
    let hints = match mode {
        InputMode::Edit => vec![
            ("Enter", "Submit"),
            ("Ctrl+U", "Clear"),
            ("F1", "Help"),
            ("Esc", "Quit"),
        ],
        InputMode::Help => vec![("Esc", "Close")],
    };

    let spans: Vec<Span> = hints
        .iter()
        .flat_map(|(key, action)| {
            vec![
                Span::styled(format!(" {key} "), Style::default().fg(Color::Yellow)),
                Span::styled(format!("{action} "), Style::default().fg(Color::Gray)),
            ]
        })
        .collect();

    let footer = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(footer, area);
}

pub(super) fn draw_help_popup(frame: &mut ratatui::Frame, area: Rect) {
    let popup_area = centered_rect(60, 60, area);

    frame.render_widget(Clear, popup_area);

    let help_text = vec![
        Line::from(vec![Span::styled(
            "  Keyboard Shortcuts  ",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )]),
        Line::from(""),
        Line::from(vec![
            Span::styled("  Enter     ", Style::default().fg(Color::Green)),
            Span::raw("Submit the URL for shortening"),
        ]),
        Line::from(vec![
            Span::styled("  Backspace ", Style::default().fg(Color::Green)),
            Span::raw("Delete the last character"),
        ]),
        Line::from(vec![
            Span::styled("  Ctrl+U    ", Style::default().fg(Color::Green)),
            Span::raw("Clear the field"),
        ]),
        Line::from(vec![
            Span::styled("  F1        ", Style::default().fg(Color::Green)),
            Span::raw("Toggle this help"),
        ]),
        Line::from(vec![
            Span::styled("  Esc/Ctrl+C", Style::default().fg(Color::Green)),
            Span::raw(" Quit"),
        ]),
        Line::from(""),
        Line::from(
            "  When the service returns an alias, its destination is resolved and opened in your browser.",
        ),
        Line::from(""),
        Line::styled(
            "  Press Esc to close  ",
            Style::default().fg(Color::DarkGray),
        ),
    ];

    let help = Paragraph::new(help_text)
        .block(
            Block::default()
                .title(" Help ")
                .title_alignment(Alignment::Center)
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan))
                .padding(Padding::horizontal(1)),
        )
        .style(Style::default().bg(Color::Black))
        .wrap(Wrap { trim: false });

    frame.render_widget(help, popup_area);
}

pub(super) fn draw_terminal_too_small(frame: &mut ratatui::Frame, area: Rect) {
    let message = Paragraph::new(vec![
        Line::from(""),
        Line::styled(
            "Terminal too small",
            Style::default()
                .fg(Color::Red)
                .add_modifier(Modifier::BOLD),
        ),
        Line::from(format!(
            "Need at least {MIN_TERMINAL_WIDTH}x{MIN_TERMINAL_HEIGHT}, have {}x{}",
            area.width, area.height
        )),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(message, area);
}

fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
