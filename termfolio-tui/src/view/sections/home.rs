//! Hero section

use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthStr;

use termfolio_core::Profile;

use crate::view::document::wrap;
use crate::view::theme::colors;

pub fn lines(profile: &Profile, width: usize) -> Vec<Line<'static>> {
    let c = colors();
    let name = profile.name.to_uppercase();
    let rule_width = UnicodeWidthStr::width(name.as_str()).min(width.saturating_sub(2));

    let mut lines = vec![Line::from(""), Line::from("")];
    lines.push(Line::styled(
        format!("  {name}"),
        Style::default().fg(c.highlight).add_modifier(Modifier::BOLD),
    ));
    lines.push(Line::styled(
        format!("  {}", "─".repeat(rule_width)),
        Style::default().fg(c.border),
    ));
    lines.push(Line::from(""));
    lines.push(Line::styled(
        format!("  {}", profile.headline),
        Style::default().fg(c.fg).add_modifier(Modifier::BOLD),
    ));
    for row in wrap(&profile.tagline, width.saturating_sub(2)) {
        lines.push(Line::styled(
            format!("  {row}"),
            Style::default().fg(c.muted),
        ));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled(
            format!("  ⌂ {}", profile.contact.location),
            Style::default().fg(c.muted),
        ),
        Span::raw("   "),
        Span::styled(
            format!("✉ {}", profile.contact.email),
            Style::default().fg(c.muted),
        ),
    ]));
    lines.push(Line::from(""));
    lines.push(Line::styled(
        "  Scroll with j/k, or pick a section from the sidebar.",
        Style::default().fg(c.muted).add_modifier(Modifier::ITALIC),
    ));
    lines.push(Line::from(""));
    lines
}
