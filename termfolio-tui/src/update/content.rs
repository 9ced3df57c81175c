//! Document panel update logic

use termfolio_core::Section;

use crate::message::ContentMessage;
use crate::model::App;

/// Handle scrolling and actions in the document panel.
pub fn update(app: &mut App, msg: ContentMessage) {
    let changed = match msg {
        ContentMessage::ScrollUp => app.tracker.scroll_by(-1),
        ContentMessage::ScrollDown => app.tracker.scroll_by(1),
        ContentMessage::PageUp => app.tracker.scroll_by(-page_step(app)),
        ContentMessage::PageDown => app.tracker.scroll_by(page_step(app)),
        ContentMessage::ScrollTop => app.tracker.scroll_to(0),
        ContentMessage::ScrollBottom => app.tracker.scroll_to(app.tracker.max_scroll()),
        ContentMessage::Confirm => {
            if app.tracker.active() == Section::Contact {
                app.modal.show_compose();
            }
            None
        }
    };

    if let Some(section) = changed {
        app.navigation.sync_to(section);
    }
}

/// One page of scrolling, leaving two rows of overlap.
fn page_step(app: &App) -> isize {
    let viewport = crate::view::content_viewport(app.terminal_area);
    isize::try_from(viewport.height.saturating_sub(2))
        .unwrap_or(1)
        .max(1)
}
