//! Model layer: application state

mod app;
mod focus;
mod navigation;
pub mod state;

pub use app::App;
pub use focus::FocusPanel;
pub use navigation::{NavItem, NavigationState};
pub use state::{Modal, ModalState};
