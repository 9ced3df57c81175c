//! Application state

use std::sync::Arc;

use ratatui::layout::Rect;
use tokio::runtime::Handle;
use tokio::sync::mpsc::UnboundedSender;

use termfolio_core::{ContactForm, Profile, SectionTracker};
use termfolio_relay::FormRelay;

use crate::backend::ConfigService;
use crate::message::AppMessage;
use crate::view::document::Document;
use crate::view::theme::Theme;

use super::{FocusPanel, ModalState, NavigationState};

/// Global application state
pub struct App {
    /// Set by `Quit`; the main loop exits after the next draw
    pub should_quit: bool,
    /// Which panel navigation keys go to
    pub focus: FocusPanel,
    /// Sidebar entries and highlight
    pub navigation: NavigationState,
    /// One-line notice shown in the status bar
    pub status_message: Option<String>,

    // === Portfolio content ===
    /// Everything the document renders from
    pub profile: Profile,
    /// Rendered document; rebuilt on resize and theme changes
    pub document: Document,
    /// Scroll position, glide animation and the derived active section
    pub tracker: SectionTracker,
    /// Contact form draft and submission lifecycle
    pub contact: ContactForm,

    // === UI chrome ===
    /// Current color theme
    pub theme: Theme,
    /// Active modal dialog, if any
    pub modal: ModalState,
    /// Terminal area from the last resize
    pub terminal_area: Rect,

    // === Services ===
    /// Spawns submissions onto the runtime
    pub runtime: Handle,
    /// Feeds completion messages back into the main loop
    pub messages: UnboundedSender<AppMessage>,
    /// Delivers accepted contact form submissions
    pub relay: Arc<dyn FormRelay>,
    /// Loads and persists the configuration file
    pub config: Box<dyn ConfigService>,
}

impl App {
    pub fn new(
        profile: Profile,
        theme: Theme,
        relay: Arc<dyn FormRelay>,
        config: Box<dyn ConfigService>,
        runtime: Handle,
        messages: UnboundedSender<AppMessage>,
        terminal_area: Rect,
    ) -> Self {
        crate::view::theme::set_theme_index(theme.index());

        let viewport = crate::view::content_viewport(terminal_area);
        let document = Document::build(&profile, viewport.width, viewport.height);
        let mut tracker = SectionTracker::new();
        tracker.bind(document.layout().clone(), usize::from(viewport.height));

        Self {
            should_quit: false,
            focus: FocusPanel::Navigation,
            navigation: NavigationState::new(),
            status_message: None,
            profile,
            document,
            tracker,
            contact: ContactForm::new(),
            theme,
            modal: ModalState::new(),
            terminal_area,
            runtime,
            messages,
            relay,
            config,
        }
    }

    /// Show a one-line notice in the status bar.
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// Clear the status bar notice.
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }
}
