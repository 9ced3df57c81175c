//! Application main loop

use std::time::Duration;

use anyhow::Result;
use tokio::sync::mpsc::UnboundedReceiver;

use crate::event;
use crate::message::AppMessage;
use crate::model::App;
use crate::update;
use crate::util::Term;
use crate::view;

/// How long one poll waits for input; doubles as the glide animation
/// interval.
const TICK_INTERVAL: Duration = Duration::from_millis(100);

/// Draw, drain finished submissions, then handle one input event or let a
/// tick advance the scroll glide.
pub fn run(
    terminal: &mut Term,
    app: &mut App,
    delivery: &mut UnboundedReceiver<AppMessage>,
) -> Result<()> {
    loop {
        terminal.draw(|frame| {
            view::render(app, frame);
        })?;

        if app.should_quit {
            break;
        }

        // Outcomes of spawned submissions arrive between frames.
        while let Ok(msg) = delivery.try_recv() {
            update::update(app, msg);
        }

        if let Some(event) = event::poll_event(TICK_INTERVAL)? {
            let msg = event::handle_event(event, app);
            update::update(app, msg);
        } else {
            update::update(app, AppMessage::Tick);
        }
    }

    Ok(())
}
