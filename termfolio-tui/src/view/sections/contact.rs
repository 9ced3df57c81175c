//! Contact section

use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use termfolio_core::Profile;

use super::heading;
use crate::view::document::wrap;
use crate::view::theme::{colors, Styles};

pub fn lines(profile: &Profile, width: usize) -> Vec<Line<'static>> {
    let c = colors();
    let mut lines = heading("GET IN TOUCH", "Contact Me");

    let blurb = "Have a question or an opportunity to discuss? Send a message \
                 straight from the terminal and it lands in my inbox.";
    for row in wrap(blurb, width.saturating_sub(2)) {
        lines.push(Line::styled(format!("  {row}"), Style::default().fg(c.fg)));
    }
    lines.push(Line::from(""));

    lines.push(channel("email", &profile.contact.email, false));
    lines.push(channel("location", &profile.contact.location, false));
    if let Some(github) = &profile.contact.github {
        lines.push(channel("github", github, true));
    }
    if let Some(linkedin) = &profile.contact.linkedin {
        lines.push(channel("linkedin", linkedin, true));
    }
    lines.push(Line::from(""));

    lines.push(Line::from(vec![
        Span::raw("  "),
        Span::styled("[ Enter ]", Styles::hint_key()),
        Span::styled(" Send me a message", Style::default().fg(c.fg)),
    ]));
    lines.push(Line::from(""));

    lines
}

fn channel(label: &'static str, value: &str, link: bool) -> Line<'static> {
    let c = colors();
    let value_style = if link {
        Style::default()
            .fg(c.highlight)
            .add_modifier(Modifier::UNDERLINED)
    } else {
        Style::default().fg(c.fg)
    };
    Line::from(vec![
        Span::styled(format!("  {label:<9} "), Style::default().fg(c.muted)),
        Span::styled(value.to_string(), value_style),
    ])
}
