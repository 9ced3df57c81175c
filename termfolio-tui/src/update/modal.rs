//! Modal update logic

use std::sync::Arc;

use termfolio_relay::RelayError;

use crate::message::{AppMessage, ModalMessage};
use crate::model::state::COMPOSE_SLOTS;
use crate::model::{App, Modal};

/// Handle messages for whichever modal is open.
pub fn update(app: &mut App, msg: ModalMessage) {
    match app.modal.active {
        Some(Modal::Compose { .. }) => handle_compose(app, msg),
        Some(Modal::SubmitSuccess { .. }) => {
            if matches!(msg, ModalMessage::Close | ModalMessage::Confirm) {
                // Dismissing the overlay also resets the banner.
                app.contact.acknowledge_success();
                app.modal.close();
                app.clear_status();
            }
        }
        Some(Modal::Help) => {
            if matches!(msg, ModalMessage::Close | ModalMessage::Confirm) {
                app.modal.close();
            }
        }
        None => {}
    }
}

fn handle_compose(app: &mut App, msg: ModalMessage) {
    let Some(Modal::Compose { ref mut focus }) = app.modal.active else {
        return;
    };

    match msg {
        ModalMessage::Close => {
            // The draft survives; only the form view goes away.
            app.modal.close();
            app.clear_status();
        }
        ModalMessage::NextField => {
            *focus = (*focus + 1) % COMPOSE_SLOTS;
        }
        ModalMessage::PrevField => {
            if *focus == 0 {
                *focus = COMPOSE_SLOTS - 1;
            } else {
                *focus -= 1;
            }
        }
        ModalMessage::Input(ch) => {
            if let Some(field) = Modal::compose_field(*focus) {
                app.contact.push_char(field, ch);
            }
        }
        ModalMessage::Backspace => {
            if let Some(field) = Modal::compose_field(*focus) {
                app.contact.pop_char(field);
            }
        }
        ModalMessage::Confirm => submit(app),
    }
}

/// Validate the draft and, if it passes, hand the submission to the relay
/// on the runtime. The outcome comes back as a `SubmissionFinished` message.
fn submit(app: &mut App) {
    let Some(submission) = app.contact.begin_submit() else {
        // Validation errors are already stored on the form.
        return;
    };
    app.set_status("Sending message...");

    let relay = Arc::clone(&app.relay);
    let messages = app.messages.clone();
    app.runtime.spawn(async move {
        let result = relay.submit(&submission).await;
        // If the app is already shutting down the outcome is dropped.
        let _ = messages.send(AppMessage::SubmissionFinished(result));
    });
}

/// Record a finished submission and surface the outcome.
pub fn finish_submission(app: &mut App, result: Result<(), RelayError>) {
    if let Err(err) = &result {
        if err.is_expected() {
            log::warn!("contact form submission failed: {err}");
        } else {
            log::error!("contact form submission failed: {err}");
        }
    }

    app.contact.finish_submit(result.is_ok());
    if result.is_ok() {
        app.set_status("Message sent");
        app.modal.show_submit_success();
    } else {
        app.set_status("Message failed to send");
    }
}
