//! About section

use ratatui::style::{Modifier, Style};
use ratatui::text::Line;

use termfolio_core::Profile;

use super::heading;
use crate::view::document::wrap;
use crate::view::theme::colors;

pub fn lines(profile: &Profile, width: usize) -> Vec<Line<'static>> {
    let c = colors();
    let mut lines = heading("WHO I AM", "About Me");

    for paragraph in &profile.summary {
        for row in wrap(paragraph, width.saturating_sub(2)) {
            lines.push(Line::styled(format!("  {row}"), Style::default().fg(c.fg)));
        }
        lines.push(Line::from(""));
    }

    if !profile.education.is_empty() {
        lines.push(Line::styled(
            "  Education",
            Style::default().fg(c.fg).add_modifier(Modifier::BOLD),
        ));
        for entry in &profile.education {
            lines.push(Line::styled(
                format!("    {} · {}", entry.degree, entry.institution),
                Style::default().fg(c.fg),
            ));
            lines.push(Line::styled(
                format!("    {} · {}", entry.period, entry.status),
                Style::default().fg(c.muted),
            ));
        }
        lines.push(Line::from(""));
    }

    lines
}
