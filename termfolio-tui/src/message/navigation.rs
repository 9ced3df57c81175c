//! Sidebar messages

/// Cursor movement in the section sidebar. Every move starts a glide to the
/// chosen section.
#[derive(Debug, Clone, Copy)]
pub enum NavigationMessage {
    SelectPrevious,
    SelectNext,
    SelectFirst,
    SelectLast,
    /// Jump to the selected section and focus the document
    Confirm,
}
