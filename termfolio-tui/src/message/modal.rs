//! Modal dialog messages

/// Interaction with the active modal.
#[derive(Debug, Clone, Copy)]
pub enum ModalMessage {
    /// Close the modal (the compose draft survives)
    Close,
    /// Move to the next compose slot
    NextField,
    /// Move to the previous compose slot
    PrevField,
    /// Confirm: submit from the send row
    Confirm,
    /// Type a character into the focused field
    Input(char),
    /// Delete the character before the cursor
    Backspace,
}
