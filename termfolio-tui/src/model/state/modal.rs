//! Modal state

use chrono::{DateTime, Local};
use termfolio_core::FormField;

/// Focus slots in the compose form: the three fields, then the send row.
pub const COMPOSE_SLOTS: usize = FormField::ALL.len() + 1;

/// Active modal dialog
#[derive(Debug, Clone)]
pub enum Modal {
    /// Contact form
    Compose {
        /// Focused slot, `0..COMPOSE_SLOTS`
        focus: usize,
    },
    /// Confirmation shown after a delivered submission
    SubmitSuccess {
        /// When the relay accepted the message
        sent_at: DateTime<Local>,
    },
    /// Keyboard shortcut reference
    Help,
}

impl Modal {
    /// Form field at a compose focus slot, `None` on the send row.
    pub fn compose_field(focus: usize) -> Option<FormField> {
        FormField::ALL.get(focus).copied()
    }
}

/// Modal manager; at most one dialog is open.
#[derive(Debug, Default)]
pub struct ModalState {
    pub active: Option<Modal>,
}

impl ModalState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn close(&mut self) {
        self.active = None;
    }

    pub fn is_open(&self) -> bool {
        self.active.is_some()
    }

    pub fn show_compose(&mut self) {
        self.active = Some(Modal::Compose { focus: 0 });
    }

    pub fn show_submit_success(&mut self) {
        self.active = Some(Modal::SubmitSuccess {
            sent_at: Local::now(),
        });
    }

    pub fn show_help(&mut self) {
        self.active = Some(Modal::Help);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compose_focus_maps_fields_then_send_row() {
        assert_eq!(Modal::compose_field(0), Some(FormField::Name));
        assert_eq!(Modal::compose_field(1), Some(FormField::Email));
        assert_eq!(Modal::compose_field(2), Some(FormField::Message));
        assert_eq!(Modal::compose_field(COMPOSE_SLOTS - 1), None);
    }

    #[test]
    fn one_modal_at_a_time() {
        let mut state = ModalState::new();
        assert!(!state.is_open());
        state.show_compose();
        state.show_help();
        assert!(matches!(state.active, Some(Modal::Help)));
        state.close();
        assert!(!state.is_open());
    }
}
