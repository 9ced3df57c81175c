//! Section line builders
//!
//! Each section renders its slice of the profile into styled lines at a
//! given wrap width; the document stitches them together in order.

pub mod about;
pub mod contact;
pub mod experience;
pub mod home;
pub mod projects;
pub mod skills;

use ratatui::style::{Modifier, Style};
use ratatui::text::Line;

use super::theme::colors;

/// Shared section heading: a small eyebrow label over a bold title.
fn heading(eyebrow: &'static str, title: &'static str) -> Vec<Line<'static>> {
    let c = colors();
    vec![
        Line::from(""),
        Line::styled(format!("  {eyebrow}"), Style::default().fg(c.highlight)),
        Line::styled(
            format!("  {title}"),
            Style::default().fg(c.fg).add_modifier(Modifier::BOLD),
        ),
        Line::from(""),
    ]
}
