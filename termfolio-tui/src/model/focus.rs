//! Focus state

/// Which panel receives navigation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusPanel {
    /// Section sidebar on the left
    #[default]
    Navigation,
    /// Document panel on the right
    Content,
}

impl FocusPanel {
    /// Switch between the two panels.
    pub fn toggle(self) -> Self {
        match self {
            Self::Navigation => Self::Content,
            Self::Content => Self::Navigation,
        }
    }

    pub fn is_navigation(self) -> bool {
        matches!(self, Self::Navigation)
    }

    pub fn is_content(self) -> bool {
        matches!(self, Self::Content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_flips_between_panels() {
        assert_eq!(FocusPanel::Navigation.toggle(), FocusPanel::Content);
        assert_eq!(FocusPanel::Content.toggle(), FocusPanel::Navigation);
    }
}
