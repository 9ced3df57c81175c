//! Sidebar navigation component

use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::{Block, Borders, List, ListItem, ListState};
use ratatui::Frame;

use crate::model::App;
use crate::view::theme::{colors, Styles};

/// Render the section sidebar. The highlighted entry is the section the
/// tracker currently considers active.
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();
    let border_style = if app.focus.is_navigation() {
        Styles::border_focused()
    } else {
        Styles::border()
    };

    let block = Block::default()
        .title(" Sections ")
        .title_style(Styles::title())
        .borders(Borders::ALL)
        .border_style(border_style);

    let items: Vec<ListItem> = app
        .navigation
        .items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            let is_selected = i == app.navigation.selected;
            let prefix = if is_selected { "▶ " } else { "  " };
            let content = format!("{}{} {}", prefix, item.icon, item.section.title());
            let style = if is_selected {
                Styles::selected()
            } else {
                Style::default().fg(c.fg)
            };
            ListItem::new(content).style(style)
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(Styles::selected());

    let mut state = ListState::default();
    state.select(Some(app.navigation.selected));
    frame.render_stateful_widget(list, area, &mut state);
}
