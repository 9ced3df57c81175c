//! Event handling: translates terminal events into messages

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::message::{AppMessage, ContentMessage, ModalMessage, NavigationMessage};
use crate::model::{App, Modal};

use super::keymap::DefaultKeymap;

/// Poll for the next terminal event, waiting at most `timeout`.
pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// Translate a terminal event into a message.
pub fn handle_event(event: Event, app: &App) -> AppMessage {
    match event {
        Event::Key(key_event) => handle_key_event(key_event, app),
        // Wrap widths depend on the terminal size, so the document has to
        // be rebuilt.
        Event::Resize(width, height) => AppMessage::Resize(width, height),
        _ => AppMessage::Noop,
    }
}

fn handle_key_event(key: KeyEvent, app: &App) -> AppMessage {
    // Only key presses; Release and Repeat would double keystrokes on some
    // terminals.
    if key.kind != KeyEventKind::Press {
        return AppMessage::Noop;
    }

    // Modals capture the keyboard while open
    if app.modal.is_open() {
        return handle_modal_keys(key, app);
    }

    if DefaultKeymap::FORCE_QUIT.matches(&key) || DefaultKeymap::QUIT.matches(&key) {
        return AppMessage::Quit;
    }
    if DefaultKeymap::HELP.matches(&key) {
        return AppMessage::ShowHelp;
    }
    if DefaultKeymap::TOGGLE_THEME.matches(&key) {
        return AppMessage::ToggleTheme;
    }
    if DefaultKeymap::BACK.matches(&key) {
        return AppMessage::GoBack;
    }

    if key.modifiers.is_empty() && key.code == KeyCode::Tab
        || DefaultKeymap::FOCUS_LEFT.matches(&key)
        || DefaultKeymap::FOCUS_RIGHT.matches(&key)
    {
        return AppMessage::ToggleFocus;
    }

    if app.focus.is_navigation() {
        handle_navigation_keys(key)
    } else {
        handle_content_keys(key)
    }
}

fn handle_navigation_keys(key: KeyEvent) -> AppMessage {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => {
            AppMessage::Navigation(NavigationMessage::SelectPrevious)
        }
        KeyCode::Down | KeyCode::Char('j') => AppMessage::Navigation(NavigationMessage::SelectNext),
        KeyCode::Home | KeyCode::Char('g') => AppMessage::Navigation(NavigationMessage::SelectFirst),
        KeyCode::End | KeyCode::Char('G') => AppMessage::Navigation(NavigationMessage::SelectLast),
        KeyCode::Enter => AppMessage::Navigation(NavigationMessage::Confirm),
        _ => AppMessage::Noop,
    }
}

fn handle_content_keys(key: KeyEvent) -> AppMessage {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => AppMessage::Content(ContentMessage::ScrollUp),
        KeyCode::Down | KeyCode::Char('j') => AppMessage::Content(ContentMessage::ScrollDown),
        KeyCode::PageUp => AppMessage::Content(ContentMessage::PageUp),
        KeyCode::PageDown => AppMessage::Content(ContentMessage::PageDown),
        KeyCode::Home | KeyCode::Char('g') => AppMessage::Content(ContentMessage::ScrollTop),
        KeyCode::End | KeyCode::Char('G') => AppMessage::Content(ContentMessage::ScrollBottom),
        KeyCode::Enter => AppMessage::Content(ContentMessage::Confirm),
        _ => AppMessage::Noop,
    }
}

fn handle_modal_keys(key: KeyEvent, app: &App) -> AppMessage {
    // Ctrl+C closes any modal
    if DefaultKeymap::FORCE_QUIT.matches(&key) {
        return AppMessage::Modal(ModalMessage::Close);
    }

    let Some(ref modal) = app.modal.active else {
        return AppMessage::Noop;
    };

    match modal {
        Modal::Compose { focus } => handle_compose_keys(key, *focus),
        Modal::SubmitSuccess { .. } | Modal::Help => match key.code {
            KeyCode::Enter | KeyCode::Esc => AppMessage::Modal(ModalMessage::Close),
            _ => AppMessage::Noop,
        },
    }
}

fn handle_compose_keys(key: KeyEvent, focus: usize) -> AppMessage {
    match key.code {
        KeyCode::Esc => AppMessage::Modal(ModalMessage::Close),
        KeyCode::Tab | KeyCode::Down => AppMessage::Modal(ModalMessage::NextField),
        KeyCode::BackTab | KeyCode::Up => AppMessage::Modal(ModalMessage::PrevField),
        // Enter walks through the fields and submits from the send row
        KeyCode::Enter => {
            if Modal::compose_field(focus).is_some() {
                AppMessage::Modal(ModalMessage::NextField)
            } else {
                AppMessage::Modal(ModalMessage::Confirm)
            }
        }
        KeyCode::Backspace => AppMessage::Modal(ModalMessage::Backspace),
        KeyCode::Char(ch)
            if key.modifiers.is_empty() || key.modifiers == KeyModifiers::SHIFT =>
        {
            AppMessage::Modal(ModalMessage::Input(ch))
        }
        _ => AppMessage::Noop,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_mocks::test_app;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn q_quits_outside_modals() {
        tokio_test::block_on(async {
            let (app, _rx) = test_app();
            let msg = handle_key_event(press(KeyCode::Char('q')), &app);
            assert!(matches!(msg, AppMessage::Quit));
        });
    }

    #[test]
    fn typing_q_in_the_compose_form_is_input() {
        tokio_test::block_on(async {
            let (mut app, _rx) = test_app();
            app.modal.show_compose();
            let msg = handle_key_event(press(KeyCode::Char('q')), &app);
            assert!(matches!(msg, AppMessage::Modal(ModalMessage::Input('q'))));
        });
    }

    #[test]
    fn shift_characters_still_reach_the_form() {
        tokio_test::block_on(async {
            let (mut app, _rx) = test_app();
            app.modal.show_compose();
            let key = KeyEvent::new(KeyCode::Char('J'), KeyModifiers::SHIFT);
            let msg = handle_key_event(key, &app);
            assert!(matches!(msg, AppMessage::Modal(ModalMessage::Input('J'))));
        });
    }

    #[test]
    fn enter_advances_fields_and_sends_from_the_send_row() {
        tokio_test::block_on(async {
            let (mut app, _rx) = test_app();
            app.modal.show_compose();
            let msg = handle_key_event(press(KeyCode::Enter), &app);
            assert!(matches!(msg, AppMessage::Modal(ModalMessage::NextField)));

            app.modal.active = Some(Modal::Compose { focus: 3 });
            let msg = handle_key_event(press(KeyCode::Enter), &app);
            assert!(matches!(msg, AppMessage::Modal(ModalMessage::Confirm)));
        });
    }

    #[test]
    fn resize_events_request_a_document_rebuild() {
        tokio_test::block_on(async {
            let (app, _rx) = test_app();
            let msg = handle_event(Event::Resize(120, 40), &app);
            assert!(matches!(msg, AppMessage::Resize(120, 40)));
        });
    }

    #[test]
    fn non_press_key_events_are_ignored() {
        tokio_test::block_on(async {
            let (app, _rx) = test_app();
            let mut key = press(KeyCode::Char('q'));
            key.kind = KeyEventKind::Release;
            let msg = handle_key_event(key, &app);
            assert!(matches!(msg, AppMessage::Noop));
        });
    }
}
