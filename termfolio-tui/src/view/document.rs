//! Rendered document cache
//!
//! The whole portfolio renders into one column of styled lines, and the
//! scroll tracker works in the same row coordinates through the section
//! layout built alongside. Rebuilt whenever the wrap width or the theme
//! changes.

use ratatui::text::Line;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use termfolio_core::{Profile, Section, SectionLayout, SectionSpan};

use super::sections;

/// The portfolio rendered at a fixed wrap width.
#[derive(Debug, Clone)]
pub struct Document {
    lines: Vec<Line<'static>>,
    layout: SectionLayout,
}

impl Document {
    /// Render the profile into lines at the given width. The final section
    /// is padded to the viewport height so scrolling to the bottom makes it
    /// the active one.
    pub fn build(profile: &Profile, width: u16, viewport_rows: u16) -> Self {
        let width = usize::from(width).max(10);
        let viewport_rows = usize::from(viewport_rows);

        let mut lines: Vec<Line<'static>> = Vec::new();
        let mut layout_spans = Vec::new();
        for section in Section::ALL {
            let start = lines.len();
            let mut body = match section {
                Section::Home => sections::home::lines(profile, width),
                Section::About => sections::about::lines(profile, width),
                Section::Experience => sections::experience::lines(profile, width),
                Section::Skills => sections::skills::lines(profile, width),
                Section::Projects => sections::projects::lines(profile, width),
                Section::Contact => sections::contact::lines(profile, width),
            };
            if section == Section::Contact {
                while body.len() < viewport_rows {
                    body.push(Line::from(""));
                }
            }
            lines.append(&mut body);
            layout_spans.push(SectionSpan {
                section,
                start,
                height: lines.len() - start,
            });
        }

        Self {
            layout: SectionLayout::new(layout_spans),
            lines,
        }
    }

    pub fn lines(&self) -> &[Line<'static>] {
        &self.lines
    }

    pub fn layout(&self) -> &SectionLayout {
        &self.layout
    }
}

/// Word-wrap `text` to a display width, breaking overlong words by
/// character. Widths are measured per Unicode cell width, not `len()`.
pub(crate) fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut out = Vec::new();
    let mut line = String::new();
    let mut used = 0usize;

    for word in text.split_whitespace() {
        let span = UnicodeWidthStr::width(word);
        if used > 0 && used + 1 + span > width {
            out.push(std::mem::take(&mut line));
            used = 0;
        }
        if span > width {
            for ch in word.chars() {
                let cell = UnicodeWidthChar::width(ch).unwrap_or(0);
                if used > 0 && used + cell > width {
                    out.push(std::mem::take(&mut line));
                    used = 0;
                }
                line.push(ch);
                used += cell;
            }
        } else {
            if used > 0 {
                line.push(' ');
                used += 1;
            }
            line.push_str(word);
            used += span;
        }
    }

    if !line.is_empty() || out.is_empty() {
        out.push(line);
    }
    out
}

/// The trailing part of `value` that fits into `width` cells. Keeps the
/// cursor end of a long input visible in a single-row field.
pub(crate) fn visible_tail(value: &str, width: usize) -> String {
    let mut used = 0usize;
    let mut chars: Vec<char> = Vec::new();
    for ch in value.chars().rev() {
        let cell = UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + cell > width {
            break;
        }
        used += cell;
        chars.push(ch);
    }
    chars.into_iter().rev().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use termfolio_core::content::sample_profile;

    #[test]
    fn wrap_respects_the_width() {
        assert_eq!(wrap("hello world", 11), vec!["hello world"]);
        assert_eq!(wrap("hello world", 10), vec!["hello", "world"]);
    }

    #[test]
    fn wrap_breaks_overlong_words() {
        assert_eq!(wrap("abcdefghij", 4), vec!["abcd", "efgh", "ij"]);
    }

    #[test]
    fn wrap_measures_display_width() {
        // Two cells per CJK character.
        assert_eq!(wrap("日本語", 4), vec!["日本", "語"]);
    }

    #[test]
    fn wrap_of_empty_text_is_one_blank_line() {
        assert_eq!(wrap("", 10), vec![""]);
    }

    #[test]
    fn visible_tail_keeps_the_end() {
        assert_eq!(visible_tail("hello", 10), "hello");
        assert_eq!(visible_tail("hello world", 5), "world");
        assert_eq!(visible_tail("語語語", 4), "語語");
    }

    #[test]
    fn document_spans_cover_every_section_contiguously() {
        let document = Document::build(&sample_profile(), 62, 20);
        let spans = document.layout().spans();
        assert_eq!(spans.len(), Section::ALL.len());
        let mut expected_start = 0;
        for (span, section) in spans.iter().zip(Section::ALL) {
            assert_eq!(span.section, section);
            assert_eq!(span.start, expected_start);
            assert!(span.height > 0);
            expected_start = span.end();
        }
        assert_eq!(document.layout().total_rows(), document.lines().len());
    }

    #[test]
    fn final_section_fills_the_viewport() {
        let document = Document::build(&sample_profile(), 62, 40);
        let contact = document.layout().span_of(Section::Contact).unwrap();
        assert!(contact.height >= 40);
    }

    #[test]
    fn narrow_documents_wrap_to_more_rows() {
        let profile = sample_profile();
        let narrow = Document::build(&profile, 30, 20);
        let wide = Document::build(&profile, 120, 20);
        assert!(narrow.lines().len() > wide.lines().len());
    }
}
