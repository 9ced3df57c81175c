//! Update layer: the only place application state changes

mod content;
mod modal;
mod navigation;

use ratatui::layout::Rect;

use crate::message::AppMessage;
use crate::model::{App, FocusPanel};
use crate::view::document::Document;

/// Apply one message to the application state.
pub fn update(app: &mut App, msg: AppMessage) {
    match msg {
        AppMessage::Quit => {
            app.tracker.release();
            app.should_quit = true;
        }
        AppMessage::ToggleFocus => {
            if !app.modal.is_open() {
                app.focus = app.focus.toggle();
            }
        }
        AppMessage::Navigation(nav_msg) => navigation::update(app, nav_msg),
        AppMessage::Content(content_msg) => content::update(app, content_msg),
        AppMessage::Modal(modal_msg) => modal::update(app, modal_msg),
        AppMessage::SubmissionFinished(result) => modal::finish_submission(app, result),
        AppMessage::GoBack => {
            if app.modal.is_open() {
                app.modal.close();
            } else if app.focus.is_content() {
                app.focus = FocusPanel::Navigation;
            }
            app.clear_status();
        }
        AppMessage::ShowHelp => app.modal.show_help(),
        AppMessage::ToggleTheme => {
            app.theme = app.theme.next();
            crate::view::theme::set_theme_index(app.theme.index());
            // Styles are baked into the cached document
            rebuild_document(app);
            let mut config = app.config.load().unwrap_or_default();
            config.theme = app.theme;
            if let Err(err) = app.config.save(&config) {
                log::warn!("failed to save config: {err}");
            }
            app.set_status(format!("Theme: {}", app.theme.label()));
        }
        AppMessage::Resize(width, height) => {
            app.terminal_area = Rect::new(0, 0, width, height);
            rebuild_document(app);
        }
        AppMessage::Tick => {
            if let Some(section) = app.tracker.tick() {
                app.navigation.sync_to(section);
            }
        }
        AppMessage::Noop => {}
    }
}

/// Rebuild the document for the current terminal size and theme, then
/// rebind the tracker to the new geometry.
pub fn rebuild_document(app: &mut App) {
    let viewport = crate::view::content_viewport(app.terminal_area);
    app.document = Document::build(&app.profile, viewport.width, viewport.height);
    app.tracker
        .bind(app.document.layout().clone(), usize::from(viewport.height));
    app.navigation.sync_to(app.tracker.active());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::NavigationMessage;
    use crate::test_mocks::test_app;
    use termfolio_core::Section;

    #[tokio::test]
    async fn toggle_focus_flips_panels() {
        let (mut app, _rx) = test_app();
        assert!(app.focus.is_navigation());
        update(&mut app, AppMessage::ToggleFocus);
        assert!(app.focus.is_content());
    }

    #[tokio::test]
    async fn toggle_focus_is_inert_while_a_modal_is_open() {
        let (mut app, _rx) = test_app();
        app.modal.show_help();
        update(&mut app, AppMessage::ToggleFocus);
        assert!(app.focus.is_navigation());
    }

    #[tokio::test]
    async fn quit_releases_the_tracker() {
        let (mut app, _rx) = test_app();
        assert!(app.tracker.is_bound());
        update(&mut app, AppMessage::Quit);
        assert!(app.should_quit);
        assert!(!app.tracker.is_bound());
    }

    #[tokio::test]
    async fn ticks_glide_toward_the_navigation_target() {
        let (mut app, _rx) = test_app();
        update(
            &mut app,
            AppMessage::Navigation(NavigationMessage::SelectLast),
        );
        assert!(app.tracker.is_gliding());
        assert_eq!(app.tracker.active(), Section::Contact);

        for _ in 0..200 {
            update(&mut app, AppMessage::Tick);
            if !app.tracker.is_gliding() {
                break;
            }
        }
        assert!(!app.tracker.is_gliding());
        assert_eq!(app.tracker.scroll(), app.tracker.max_scroll());
        assert_eq!(app.navigation.selected, Section::Contact.index());
    }

    #[tokio::test]
    async fn resize_rebuilds_and_clamps_the_scroll() {
        let (mut app, _rx) = test_app();
        update(
            &mut app,
            AppMessage::Navigation(NavigationMessage::SelectLast),
        );
        for _ in 0..200 {
            update(&mut app, AppMessage::Tick);
        }
        let before = app.tracker.scroll();
        assert!(before > 0);

        // A much taller terminal shrinks the scroll range.
        update(&mut app, AppMessage::Resize(120, 120));
        assert!(app.tracker.is_bound());
        assert!(app.tracker.scroll() <= app.tracker.max_scroll());
    }

    #[tokio::test]
    async fn theme_toggle_updates_state_and_status() {
        let (mut app, _rx) = test_app();
        let before = app.theme;
        update(&mut app, AppMessage::ToggleTheme);
        assert_eq!(app.theme, before.next());
        assert_eq!(app.status_message.as_deref(), Some("Theme: Light"));
    }

    #[tokio::test]
    async fn go_back_returns_focus_to_the_sidebar() {
        let (mut app, _rx) = test_app();
        update(&mut app, AppMessage::ToggleFocus);
        app.set_status("note");
        update(&mut app, AppMessage::GoBack);
        assert!(app.focus.is_navigation());
        assert!(app.status_message.is_none());
    }
}
