//! Projects section

use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use termfolio_core::Profile;

use super::heading;
use crate::view::document::wrap;
use crate::view::theme::colors;

pub fn lines(profile: &Profile, width: usize) -> Vec<Line<'static>> {
    let c = colors();
    let mut lines = heading("WHAT I'VE BUILT", "Projects");

    for project in &profile.projects {
        lines.push(Line::styled(
            format!("  ▸ {}", project.title),
            Style::default().fg(c.fg).add_modifier(Modifier::BOLD),
        ));
        for row in wrap(&project.description, width.saturating_sub(4)) {
            lines.push(Line::styled(format!("    {row}"), Style::default().fg(c.fg)));
        }
        if let Some(url) = &project.live_url {
            lines.push(link_line("live", url));
        }
        if let Some(url) = &project.repo_url {
            lines.push(link_line("code", url));
        }
        if !project.technologies.is_empty() {
            lines.push(Line::styled(
                format!("    {}", project.technologies.join(" · ")),
                Style::default().fg(c.highlight),
            ));
        }
        lines.push(Line::from(""));
    }

    lines
}

fn link_line(label: &'static str, url: &str) -> Line<'static> {
    let c = colors();
    Line::from(vec![
        Span::styled(format!("    {label}  "), Style::default().fg(c.muted)),
        Span::styled(
            url.to_string(),
            Style::default()
                .fg(c.highlight)
                .add_modifier(Modifier::UNDERLINED),
        ),
    ])
}
