//! termfolio: a portfolio that lives in the terminal
//!
//! Elm-style architecture:
//! - Model: application state (`model/`)
//! - Message: everything that can happen (`message/`)
//! - Update: state transitions (`update/`)
//! - View: rendering (`view/`)
//! - Event: input translation (`event/`)
//! - Backend: configuration and profile loading (`backend/`)

mod app;
mod backend;
mod event;
mod message;
mod model;
#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod test_mocks;
mod update;
mod util;
mod view;

use std::fs;
use std::sync::Arc;

use anyhow::{Context, Result};
use ratatui::layout::Rect;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use termfolio_core::content::sample_profile;
use termfolio_core::Profile;
use termfolio_relay::{FormRelay, FormspreeRelay};

use backend::{AppConfig, ConfigService, LocalConfigService};
use util::{init_terminal, restore_terminal};

/// Log to a daily file; stderr would bleed into the alternate screen. If no
/// data directory is available the app simply runs without logs.
fn init_logging() {
    let Some(dir) = dirs::data_local_dir().map(|dir| dir.join("termfolio")) else {
        return;
    };
    if fs::create_dir_all(&dir).is_err() {
        return;
    }
    let path = dir.join(format!(
        "termfolio-{}.log",
        chrono::Local::now().format("%Y-%m-%d")
    ));
    let Ok(file) = fs::OpenOptions::new().create(true).append(true).open(path) else {
        return;
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(Arc::new(file))
                .with_ansi(false),
        )
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
}

/// The configured profile, or the embedded sample with a status note when
/// loading fails.
fn resolve_profile(config: &AppConfig) -> (Profile, Option<String>) {
    let Some(path) = &config.profile_path else {
        return (sample_profile(), None);
    };
    match backend::load_profile(path) {
        Ok(profile) => (profile, None),
        Err(err) => {
            if err.is_expected() {
                log::warn!("falling back to the sample profile: {err}");
            } else {
                log::error!("falling back to the sample profile: {err}");
            }
            let note = format!("Profile unavailable, showing the sample ({err})");
            (sample_profile(), Some(note))
        }
    }
}

fn main() -> Result<()> {
    init_logging();

    let config_service = LocalConfigService;
    let config = config_service.load().unwrap_or_else(|err| {
        log::warn!("failed to load config: {err}");
        AppConfig::default()
    });

    let (profile, profile_note) = resolve_profile(&config);

    let relay: Arc<dyn FormRelay> = Arc::new(
        FormspreeRelay::new(profile.contact.form_endpoint.as_str())
            .context("invalid contact form endpoint")?,
    );
    log::info!("contact form relay: {}", relay.id());

    // Submissions run on the runtime; the UI loop itself stays synchronous.
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("failed to start the async runtime")?;
    let (messages, mut delivery) = tokio::sync::mpsc::unbounded_channel();

    let mut terminal = init_terminal()?;
    let size = terminal.size()?;
    let mut app = model::App::new(
        profile,
        config.theme,
        relay,
        Box::new(config_service),
        runtime.handle().clone(),
        messages,
        Rect::new(0, 0, size.width, size.height),
    );
    if let Some(note) = profile_note {
        app.set_status(note);
    }

    let result = app::run(&mut terminal, &mut app, &mut delivery);

    restore_terminal(&mut terminal)?;

    result
}
