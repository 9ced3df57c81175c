//! Mock services and app fixtures shared by the unit tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use ratatui::layout::Rect;
use tokio::sync::mpsc::{self, UnboundedReceiver};

use termfolio_core::content::sample_profile;
use termfolio_relay::{FormRelay, FormSubmission, RelayError, Result};

use crate::backend::{AppConfig, ConfigService};
use crate::message::AppMessage;
use crate::model::App;
use crate::view::theme::Theme;

// ===== MockRelay =====

/// Relay that records every submission and answers with a canned outcome.
pub struct MockRelay {
    reject_with: Option<RelayError>,
    submissions: AtomicUsize,
}

impl MockRelay {
    /// A relay that accepts everything.
    pub fn delivering() -> Arc<Self> {
        Arc::new(Self {
            reject_with: None,
            submissions: AtomicUsize::new(0),
        })
    }

    /// A relay that rejects everything with the given error.
    pub fn rejecting(error: RelayError) -> Arc<Self> {
        Arc::new(Self {
            reject_with: Some(error),
            submissions: AtomicUsize::new(0),
        })
    }

    /// How many submissions reached the relay.
    pub fn submission_count(&self) -> usize {
        self.submissions.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl FormRelay for MockRelay {
    fn id(&self) -> &'static str {
        "mock"
    }

    async fn submit(&self, _submission: &FormSubmission) -> Result<()> {
        self.submissions.fetch_add(1, Ordering::SeqCst);
        match &self.reject_with {
            Some(error) => Err(error.clone()),
            None => Ok(()),
        }
    }
}

// ===== MockConfigService =====

/// Config service backed by nothing; loads defaults, discards saves.
pub struct MockConfigService;

impl ConfigService for MockConfigService {
    fn load(&self) -> anyhow::Result<AppConfig> {
        Ok(AppConfig::default())
    }

    fn save(&self, _config: &AppConfig) -> anyhow::Result<()> {
        Ok(())
    }
}

// ===== fixtures =====

/// An app on an 80x24 terminal, wired to the sample profile and the given
/// relay. Must be called from a tokio runtime context.
pub fn test_app_with(relay: Arc<dyn FormRelay>) -> (App, UnboundedReceiver<AppMessage>) {
    let (messages, delivery) = mpsc::unbounded_channel();
    let app = App::new(
        sample_profile(),
        Theme::Dark,
        relay,
        Box::new(MockConfigService),
        tokio::runtime::Handle::current(),
        messages,
        Rect::new(0, 0, 80, 24),
    );
    (app, delivery)
}

/// `test_app_with` an always-delivering relay.
pub fn test_app() -> (App, UnboundedReceiver<AppMessage>) {
    test_app_with(MockRelay::delivering())
}
