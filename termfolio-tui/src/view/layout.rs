//! Top-level layout

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Style;
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::model::App;

use super::components;
use super::theme::{colors, Styles};

/// Render the full frame: title bar, sidebar, document, status bar, and the
/// active modal on top.
pub fn render(app: &App, frame: &mut Frame) {
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(frame.area());

    render_title_bar(app, frame, main_layout[0]);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(20), Constraint::Percentage(80)])
        .split(main_layout[1]);

    components::navigation::render(app, frame, columns[0]);
    render_document(app, frame, columns[1]);

    components::statusbar::render(app, frame, main_layout[2]);

    // Modals sit on top of everything
    components::modal::render(app, frame);
}

/// The inner text area of the document panel at a terminal size. Scroll
/// geometry has to match what `render` draws, so both derive from this.
pub fn content_viewport(area: Rect) -> Rect {
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(area);
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(20), Constraint::Percentage(80)])
        .split(main_layout[1]);
    let content = columns[1];
    // Drop the border row and column on each side.
    Rect::new(
        content.x.saturating_add(1),
        content.y.saturating_add(1),
        content.width.saturating_sub(2),
        content.height.saturating_sub(2),
    )
}

fn render_title_bar(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();
    let title = Paragraph::new(format!(" {} · {}", app.profile.name, app.profile.headline))
        .style(Style::default().bg(c.highlight).fg(c.selected_fg));
    frame.render_widget(title, area);
}

fn render_document(app: &App, frame: &mut Frame, area: Rect) {
    let border_style = if app.focus.is_content() {
        Styles::border_focused()
    } else {
        Styles::border()
    };
    let block = Block::default()
        .title(format!(" {} ", app.tracker.active().title()))
        .title_style(Styles::title())
        .borders(Borders::ALL)
        .border_style(border_style);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let scroll = u16::try_from(app.tracker.scroll()).unwrap_or(u16::MAX);
    let document = Paragraph::new(app.document.lines().to_vec()).scroll((scroll, 0));
    frame.render_widget(document, inner);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_viewport_drops_chrome_and_borders() {
        // 1 title row, 1 status row, 20% sidebar, then the document border.
        let viewport = content_viewport(Rect::new(0, 0, 80, 24));
        assert_eq!(viewport, Rect::new(17, 2, 62, 20));
    }

    #[test]
    fn content_viewport_survives_tiny_terminals() {
        let viewport = content_viewport(Rect::new(0, 0, 2, 2));
        assert!(viewport.width <= 2);
        assert!(viewport.height <= 2);
    }
}
