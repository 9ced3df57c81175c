//! UI state submodules

mod modal;

pub use modal::{Modal, ModalState, COMPOSE_SLOTS};
