//! Sidebar navigation state

use termfolio_core::Section;

/// One sidebar entry.
#[derive(Debug, Clone, Copy)]
pub struct NavItem {
    pub section: Section,
    pub icon: &'static str,
}

/// Sidebar state. The highlighted row always mirrors the tracker's active
/// section; cursor moves start a glide and scrolling moves the highlight.
#[derive(Debug)]
pub struct NavigationState {
    pub items: Vec<NavItem>,
    pub selected: usize,
}

impl NavigationState {
    pub fn new() -> Self {
        Self {
            items: vec![
                NavItem { section: Section::Home, icon: "⌂" },
                NavItem { section: Section::About, icon: "●" },
                NavItem { section: Section::Experience, icon: "◆" },
                NavItem { section: Section::Skills, icon: "+" },
                NavItem { section: Section::Projects, icon: "▲" },
                NavItem { section: Section::Contact, icon: "✉" },
            ],
            selected: 0,
        }
    }

    pub fn select_previous(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
        }
    }

    pub fn select_next(&mut self) {
        if self.selected < self.items.len().saturating_sub(1) {
            self.selected += 1;
        }
    }

    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    pub fn select_last(&mut self) {
        self.selected = self.items.len().saturating_sub(1);
    }

    /// Entry under the cursor.
    pub fn current_item(&self) -> Option<&NavItem> {
        self.items.get(self.selected)
    }

    /// Section under the cursor.
    pub fn current_section(&self) -> Option<Section> {
        self.current_item().map(|item| item.section)
    }

    /// Move the highlight onto the given section.
    pub fn sync_to(&mut self, section: Section) {
        self.selected = section.index();
    }
}

impl Default for NavigationState {
    fn default() -> Self {
        Self::new()
    }
}
