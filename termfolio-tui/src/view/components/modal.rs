//! Modal dialog components

use chrono::{DateTime, Local};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use termfolio_core::{FormField, SubmissionStatus};

use crate::model::{App, Modal};
use crate::view::document::{visible_tail, wrap};
use crate::view::theme::colors;

/// Render the active modal, if any.
pub fn render(app: &App, frame: &mut Frame) {
    let Some(ref modal) = app.modal.active else {
        return;
    };

    match modal {
        Modal::Compose { focus } => render_compose(app, frame, *focus),
        Modal::SubmitSuccess { sent_at } => render_submit_success(frame, *sent_at),
        Modal::Help => render_help(frame),
    }
}

/// Centered rectangle of a fixed size.
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

fn field_placeholder(field: FormField) -> &'static str {
    match field {
        FormField::Name => "Your name",
        FormField::Email => "you@example.com",
        FormField::Message => "What would you like to say?",
    }
}

fn render_compose(app: &App, frame: &mut Frame, focus: usize) {
    let c = colors();
    // Content width inside the padded inner rect
    let inner_width: usize = 50;

    let mut lines: Vec<Line> = Vec::new();
    for (i, field) in FormField::ALL.into_iter().enumerate() {
        lines.push(Line::styled(field.label(), Style::default().fg(Color::Gray)));
        let value = app.contact.draft().get(field);
        if focus == i {
            lines.push(Line::styled(
                format!("  {}▎", visible_tail(value, inner_width.saturating_sub(4))),
                Style::default().fg(Color::Cyan),
            ));
        } else if value.is_empty() {
            lines.push(Line::styled(
                format!("  {}", field_placeholder(field)),
                Style::default().fg(Color::DarkGray),
            ));
        } else {
            lines.push(Line::styled(
                format!("  {}", visible_tail(value, inner_width.saturating_sub(3))),
                Style::default().fg(Color::White),
            ));
        }
        if let Some(err) = app.contact.errors().get(field) {
            lines.push(Line::styled(
                format!("  ⚠ {err}"),
                Style::default().fg(c.error),
            ));
        } else {
            lines.push(Line::from(""));
        }
    }

    if app.contact.status() == SubmissionStatus::Error {
        for row in wrap(
            "Sorry, there was an error sending your message. Please try again.",
            inner_width,
        ) {
            lines.push(Line::styled(row, Style::default().fg(c.error)));
        }
    } else {
        lines.push(Line::from(""));
    }
    lines.push(Line::from(""));

    let send_focused = focus == FormField::ALL.len();
    let send_button = if app.contact.is_in_flight() {
        Span::styled(" Sending... ", Style::default().fg(c.warning))
    } else if send_focused {
        Span::styled(
            " Send Message ",
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        Span::styled(" Send Message ", Style::default().fg(Color::Cyan))
    };
    lines.push(Line::from(vec![Span::raw("  "), send_button]));
    lines.push(Line::from(""));

    lines.push(Line::from(vec![
        Span::styled("Tab", Style::default().fg(Color::Yellow)),
        Span::styled(" Next | ", Style::default().fg(Color::DarkGray)),
        Span::styled("Enter", Style::default().fg(Color::Yellow)),
        Span::styled(" Send | ", Style::default().fg(Color::DarkGray)),
        Span::styled("Esc", Style::default().fg(Color::Yellow)),
        Span::styled(" Close", Style::default().fg(Color::DarkGray)),
    ]));

    let height = u16::try_from(lines.len()).unwrap_or(u16::MAX).saturating_add(2);
    let area = centered_rect(56, height, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Send Me a Message ")
        .title_alignment(Alignment::Center)
        .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .style(Style::default().bg(c.bg));
    frame.render_widget(block, area);

    let inner = Rect::new(
        area.x + 2,
        area.y + 1,
        area.width.saturating_sub(4),
        area.height.saturating_sub(2),
    );
    frame.render_widget(Paragraph::new(lines), inner);
}

fn render_submit_success(frame: &mut Frame, sent_at: DateTime<Local>) {
    let c = colors();
    let area = centered_rect(52, 9, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Message Sent ")
        .title_alignment(Alignment::Center)
        .title_style(
            Style::default()
                .fg(c.success)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(c.success))
        .style(Style::default().bg(c.bg));
    frame.render_widget(block, area);

    let lines = vec![
        Line::from(""),
        Line::styled(
            "✓ Message Sent Successfully!",
            Style::default()
                .fg(c.success)
                .add_modifier(Modifier::BOLD),
        ),
        Line::from(""),
        Line::styled(
            "Thank you for reaching out!",
            Style::default().fg(Color::White),
        ),
        Line::styled(
            "I'll get back to you as soon as possible.",
            Style::default().fg(Color::White),
        ),
        Line::from(""),
        Line::styled(
            format!(
                "Sent at {} · Press Esc or Enter to close",
                sent_at.format("%H:%M")
            ),
            Style::default().fg(Color::DarkGray),
        ),
    ];

    let inner = Rect::new(
        area.x + 2,
        area.y + 1,
        area.width.saturating_sub(4),
        area.height.saturating_sub(2),
    );
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), inner);
}

fn render_help(frame: &mut Frame) {
    let area = centered_rect(58, 18, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Help ")
        .title_alignment(Alignment::Center)
        .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .style(Style::default().bg(colors().bg));
    frame.render_widget(block, area);

    let lines = vec![
        Line::styled(
            "Browsing",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
        row("Tab / ←→", "Switch between sidebar and document"),
        row("↑↓ / jk", "Move section / scroll"),
        row("PgUp/PgDn", "Scroll a page"),
        row("Home/End, g/G", "Jump to top / bottom"),
        row("Enter", "Open section; compose in Contact"),
        row("t", "Toggle the color theme"),
        row("q", "Quit"),
        Line::from(""),
        Line::styled(
            "Compose",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
        row("Tab / ↓", "Next field"),
        row("Shift+Tab / ↑", "Previous field"),
        row("Enter", "Next field; send from the button"),
        row("Esc", "Close, keeping the draft"),
        Line::from(""),
        Line::styled(
            "Press Esc or Enter to close",
            Style::default().fg(Color::DarkGray),
        ),
    ];

    let inner = Rect::new(
        area.x + 2,
        area.y + 1,
        area.width.saturating_sub(4),
        area.height.saturating_sub(2),
    );
    frame.render_widget(Paragraph::new(lines), inner);
}

fn row(key: &'static str, desc: &'static str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("  {key:<14}"), Style::default().fg(Color::Yellow)),
        Span::styled(desc, Style::default().fg(Color::White)),
    ])
}
