//! Sidebar update logic

use crate::message::NavigationMessage;
use crate::model::{App, FocusPanel};

/// Handle sidebar messages. Every cursor move starts a glide toward the
/// chosen section.
pub fn update(app: &mut App, msg: NavigationMessage) {
    match msg {
        NavigationMessage::SelectPrevious => {
            app.navigation.select_previous();
            navigate_to_selection(app);
        }
        NavigationMessage::SelectNext => {
            app.navigation.select_next();
            navigate_to_selection(app);
        }
        NavigationMessage::SelectFirst => {
            app.navigation.select_first();
            navigate_to_selection(app);
        }
        NavigationMessage::SelectLast => {
            app.navigation.select_last();
            navigate_to_selection(app);
        }
        NavigationMessage::Confirm => {
            navigate_to_selection(app);
            app.focus = FocusPanel::Content;
            app.clear_status();
        }
    }
}

fn navigate_to_selection(app: &mut App) {
    if let Some(section) = app.navigation.current_section() {
        app.tracker.navigate_to(section.id());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_mocks::test_app;
    use termfolio_core::Section;

    #[tokio::test]
    async fn cursor_moves_start_a_glide() {
        let (mut app, _rx) = test_app();
        update(&mut app, NavigationMessage::SelectNext);
        assert_eq!(app.navigation.selected, 1);
        // The target section becomes active right away.
        assert_eq!(app.tracker.active(), Section::About);
        assert!(app.tracker.is_gliding());
    }

    #[tokio::test]
    async fn confirm_jumps_and_focuses_the_document() {
        let (mut app, _rx) = test_app();
        update(&mut app, NavigationMessage::SelectLast);
        update(&mut app, NavigationMessage::Confirm);
        assert!(app.focus.is_content());
        assert_eq!(app.tracker.active(), Section::Contact);
    }
}
