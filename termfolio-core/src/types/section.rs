//! Section identity and document geometry

use serde::{Deserialize, Serialize};

/// The six sections of the portfolio document, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Home,
    About,
    Experience,
    Skills,
    Projects,
    Contact,
}

impl Section {
    /// All sections in display order.
    pub const ALL: [Self; 6] = [
        Self::Home,
        Self::About,
        Self::Experience,
        Self::Skills,
        Self::Projects,
        Self::Contact,
    ];

    /// Stable lowercase identifier, used in profile files and logs.
    pub fn id(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::About => "about",
            Self::Experience => "experience",
            Self::Skills => "skills",
            Self::Projects => "projects",
            Self::Contact => "contact",
        }
    }

    /// Look up a section by its identifier.
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|section| section.id() == id)
    }

    /// Sidebar and heading label.
    pub fn title(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::About => "About",
            Self::Experience => "Experience",
            Self::Skills => "Skills",
            Self::Projects => "Projects",
            Self::Contact => "Contact",
        }
    }

    /// Position within [`Self::ALL`].
    pub fn index(self) -> usize {
        match self {
            Self::Home => 0,
            Self::About => 1,
            Self::Experience => 2,
            Self::Skills => 3,
            Self::Projects => 4,
            Self::Contact => 5,
        }
    }

    /// Next section in display order, saturating at the last.
    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1).min(Self::ALL.len() - 1)]
    }

    /// Previous section in display order, saturating at the first.
    pub fn prev(self) -> Self {
        Self::ALL[self.index().saturating_sub(1)]
    }
}

/// A section's row range within the rendered document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionSpan {
    pub section: Section,
    /// First document row of the section.
    pub start: usize,
    /// Rows the section occupies, including its trailing padding.
    pub height: usize,
}

impl SectionSpan {
    /// First row past the section.
    pub fn end(&self) -> usize {
        self.start + self.height
    }
}

/// Ordered section spans covering the rendered document contiguously
/// from row zero.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SectionLayout {
    spans: Vec<SectionSpan>,
    total_rows: usize,
}

impl SectionLayout {
    /// Build a layout from ordered, contiguous spans. Total height is taken
    /// from the final span.
    pub fn new(spans: Vec<SectionSpan>) -> Self {
        let total_rows = spans.last().map_or(0, SectionSpan::end);
        Self { spans, total_rows }
    }

    pub fn spans(&self) -> &[SectionSpan] {
        &self.spans
    }

    pub fn total_rows(&self) -> usize {
        self.total_rows
    }

    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    /// Row range of one section, if the layout contains it.
    pub fn span_of(&self, section: Section) -> Option<&SectionSpan> {
        self.spans.iter().find(|span| span.section == section)
    }

    /// The section considered current at an adjusted scroll offset: the
    /// first span, in order, whose range still reaches past the offset.
    /// Past the final span the last section stays current; an empty layout
    /// falls back to the first section.
    pub fn active_at(&self, adjusted_offset: usize) -> Section {
        for span in &self.spans {
            if adjusted_offset < span.end() {
                return span.section;
            }
        }
        self.spans
            .last()
            .map_or(Section::ALL[0], |span| span.section)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout() -> SectionLayout {
        let heights = [10, 20, 30, 15, 25, 30];
        let mut spans = Vec::new();
        let mut start = 0;
        for (section, height) in Section::ALL.into_iter().zip(heights) {
            spans.push(SectionSpan {
                section,
                start,
                height,
            });
            start += height;
        }
        SectionLayout::new(spans)
    }

    #[test]
    fn ids_round_trip() {
        for section in Section::ALL {
            assert_eq!(Section::from_id(section.id()), Some(section));
        }
    }

    #[test]
    fn unknown_id_is_none() {
        assert_eq!(Section::from_id("blog"), None);
        assert_eq!(Section::from_id(""), None);
        assert_eq!(Section::from_id("Home"), None);
    }

    #[test]
    fn next_and_prev_saturate() {
        assert_eq!(Section::Home.prev(), Section::Home);
        assert_eq!(Section::Home.next(), Section::About);
        assert_eq!(Section::Contact.next(), Section::Contact);
        assert_eq!(Section::Contact.prev(), Section::Projects);
    }

    #[test]
    fn layout_totals_from_final_span() {
        let layout = layout();
        assert_eq!(layout.total_rows(), 130);
        assert_eq!(layout.span_of(Section::Skills).map(|s| s.start), Some(60));
    }

    #[test]
    fn active_at_walks_spans_in_order() {
        let layout = layout();
        assert_eq!(layout.active_at(0), Section::Home);
        assert_eq!(layout.active_at(9), Section::Home);
        assert_eq!(layout.active_at(10), Section::About);
        assert_eq!(layout.active_at(59), Section::Experience);
        assert_eq!(layout.active_at(100), Section::Contact);
    }

    #[test]
    fn active_past_the_end_is_the_last_section() {
        let layout = layout();
        assert_eq!(layout.active_at(130), Section::Contact);
        assert_eq!(layout.active_at(10_000), Section::Contact);
    }

    #[test]
    fn empty_layout_falls_back_to_first_section() {
        let layout = SectionLayout::default();
        assert_eq!(layout.active_at(0), Section::Home);
        assert_eq!(layout.active_at(500), Section::Home);
        assert_eq!(layout.total_rows(), 0);
    }
}
