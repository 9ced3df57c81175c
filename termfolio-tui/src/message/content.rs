//! Document panel messages

/// Scrolling and actions in the document panel.
#[derive(Debug, Clone, Copy)]
pub enum ContentMessage {
    ScrollUp,
    ScrollDown,
    PageUp,
    PageDown,
    ScrollTop,
    ScrollBottom,
    /// Enter: open the compose form while the contact section is active
    Confirm,
}
