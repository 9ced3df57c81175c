//! Status bar component

use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use termfolio_core::Section;

use crate::model::{App, Modal};
use crate::view::theme::Styles;

/// Key hints for the current state.
fn get_hints(app: &App) -> Vec<(&'static str, &'static str)> {
    let mut hints = Vec::new();

    if let Some(modal) = &app.modal.active {
        match modal {
            Modal::Compose { .. } => {
                hints.push(("Tab", "Next Field"));
                hints.push(("Enter", "Send"));
                hints.push(("Esc", "Close"));
            }
            Modal::SubmitSuccess { .. } | Modal::Help => {
                hints.push(("Esc", "Close"));
            }
        }
        return hints;
    }

    hints.push(("Tab", "Switch Panel"));
    if app.focus.is_navigation() {
        hints.push(("↑↓", "Section"));
        hints.push(("Enter", "Go"));
    } else {
        hints.push(("↑↓", "Scroll"));
        hints.push(("PgUp/PgDn", "Page"));
        if app.tracker.scroll() > 0 {
            hints.push(("Home", "Top"));
        }
        if app.tracker.active() == Section::Contact {
            hints.push(("Enter", "Compose"));
        }
    }
    hints.push(("t", "Theme"));
    hints.push(("?", "Help"));
    hints.push(("q", "Quit"));
    hints
}

/// Render the status bar: key hints, then the current notice.
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let hints = get_hints(app);
    let mut spans = vec![Span::raw(" ")];
    for (i, (key, desc)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(*key, Styles::hint_key()));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(*desc, Styles::hint_desc()));
    }

    if let Some(message) = &app.status_message {
        spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        spans.push(Span::styled(
            message.clone(),
            Style::default().fg(Color::Yellow),
        ));
    }

    let statusbar = Paragraph::new(Line::from(spans)).style(Styles::statusbar());
    frame.render_widget(statusbar, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::FocusPanel;
    use crate::test_mocks::test_app;

    fn has_hint(app: &App, key: &str) -> bool {
        get_hints(app).iter().any(|(k, _)| *k == key)
    }

    #[test]
    fn top_hint_appears_only_after_scrolling() {
        tokio_test::block_on(async {
            let (mut app, _rx) = test_app();
            app.focus = FocusPanel::Content;
            assert!(!has_hint(&app, "Home"));
            app.tracker.scroll_by(5);
            assert!(has_hint(&app, "Home"));
        });
    }

    #[test]
    fn compose_hint_needs_the_contact_section() {
        tokio_test::block_on(async {
            let (mut app, _rx) = test_app();
            app.focus = FocusPanel::Content;
            assert!(!has_hint(&app, "Enter"));
            app.tracker.scroll_by(isize::MAX);
            assert_eq!(app.tracker.active(), Section::Contact);
            assert!(has_hint(&app, "Enter"));
        });
    }

    #[test]
    fn modal_hints_replace_the_browsing_hints() {
        tokio_test::block_on(async {
            let (mut app, _rx) = test_app();
            app.modal.show_compose();
            assert!(has_hint(&app, "Tab"));
            assert!(!has_hint(&app, "q"));
        });
    }
}
