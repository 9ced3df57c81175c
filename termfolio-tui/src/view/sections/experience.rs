//! Experience section

use ratatui::style::{Modifier, Style};
use ratatui::text::Line;

use termfolio_core::Profile;

use super::heading;
use crate::view::document::wrap;
use crate::view::theme::colors;

pub fn lines(profile: &Profile, width: usize) -> Vec<Line<'static>> {
    let c = colors();
    let mut lines = heading("WHERE I'VE WORKED", "Experience");

    for job in &profile.experience {
        lines.push(Line::styled(
            format!("  ▸ {}", job.position),
            Style::default().fg(c.fg).add_modifier(Modifier::BOLD),
        ));
        let mut place = format!("    {} · {}", job.company, job.location);
        if job.remote {
            place.push_str(" · Remote");
        }
        lines.push(Line::styled(place, Style::default().fg(c.fg)));
        lines.push(Line::styled(
            format!("    {}", job.duration),
            Style::default().fg(c.muted),
        ));
        for item in &job.description {
            for (i, row) in wrap(item, width.saturating_sub(6)).into_iter().enumerate() {
                let prefix = if i == 0 { "    • " } else { "      " };
                lines.push(Line::styled(
                    format!("{prefix}{row}"),
                    Style::default().fg(c.fg),
                ));
            }
        }
        if !job.technologies.is_empty() {
            lines.push(Line::styled(
                format!("    {}", job.technologies.join(" · ")),
                Style::default().fg(c.highlight),
            ));
        }
        lines.push(Line::from(""));
    }

    if !profile.certifications.is_empty() {
        lines.push(Line::styled(
            "  Certifications",
            Style::default().fg(c.fg).add_modifier(Modifier::BOLD),
        ));
        for cert in &profile.certifications {
            lines.push(Line::styled(
                format!("    • {} · {} · {}", cert.name, cert.issuer, cert.date),
                Style::default().fg(c.fg),
            ));
        }
        lines.push(Line::from(""));
    }

    lines
}
