//! Top-level application messages

use termfolio_relay::RelayError;

use super::{ContentMessage, ModalMessage, NavigationMessage};

/// Everything that can happen to the application.
#[derive(Debug, Clone)]
pub enum AppMessage {
    /// Exit the application
    Quit,
    /// Switch focus between sidebar and document
    ToggleFocus,
    /// Sidebar messages
    Navigation(NavigationMessage),
    /// Document panel messages
    Content(ContentMessage),
    /// Modal dialog messages
    Modal(ModalMessage),
    /// Esc outside a modal: return focus to the sidebar
    GoBack,
    /// Open the shortcut reference
    ShowHelp,
    /// Cycle the color theme
    ToggleTheme,
    /// Terminal was resized to (width, height)
    Resize(u16, u16),
    /// Poll timeout elapsed; advances the scroll glide
    Tick,
    /// A spawned form submission finished
    SubmissionFinished(Result<(), RelayError>),
    /// Nothing to do
    Noop,
}
