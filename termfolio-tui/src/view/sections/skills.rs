//! Skills section

use ratatui::style::{Modifier, Style};
use ratatui::text::Line;

use termfolio_core::Profile;

use super::heading;
use crate::view::document::wrap;
use crate::view::theme::colors;

pub fn lines(profile: &Profile, width: usize) -> Vec<Line<'static>> {
    let c = colors();
    let mut lines = heading("WHAT I WORK WITH", "Skills");

    for group in &profile.skills {
        lines.push(Line::styled(
            format!("  {}", group.category),
            Style::default().fg(c.fg).add_modifier(Modifier::BOLD),
        ));
        for row in wrap(&group.items.join(" · "), width.saturating_sub(4)) {
            lines.push(Line::styled(format!("    {row}"), Style::default().fg(c.fg)));
        }
        lines.push(Line::from(""));
    }

    lines
}
