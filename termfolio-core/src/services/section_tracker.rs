//! Scroll-position tracking and the derived active section.

use std::cmp::Ordering;

use crate::types::{Section, SectionLayout};

/// Rows added to the scroll offset before deciding which section is active,
/// so a section counts as active slightly before its first row reaches the
/// top of the viewport.
pub const SCROLL_LOOKAHEAD: usize = 3;

/// Fraction of the remaining distance covered per animation tick.
const GLIDE_DIVISOR: usize = 3;

/// Tracks where the document is scrolled to and which section that makes
/// active.
///
/// The tracker is observable state: it does nothing until [`bind`] hands it
/// a layout, and [`release`] detaches it again. While unbound, every
/// operation is a no-op. `navigate_to` sets the active section immediately
/// and then glides the scroll offset toward the target over subsequent
/// [`tick`]s; each glide step re-derives the active section from the current
/// offset, so the highlight can briefly pass through intermediate sections.
///
/// [`bind`]: SectionTracker::bind
/// [`release`]: SectionTracker::release
/// [`tick`]: SectionTracker::tick
#[derive(Debug)]
pub struct SectionTracker {
    layout: Option<SectionLayout>,
    viewport_rows: usize,
    scroll: usize,
    active: Section,
    glide_target: Option<usize>,
}

impl SectionTracker {
    #[must_use]
    pub fn new() -> Self {
        Self {
            layout: None,
            viewport_rows: 0,
            scroll: 0,
            active: Section::Home,
            glide_target: None,
        }
    }

    /// Attach a layout and start tracking.
    ///
    /// Clamps any carried-over scroll offset into the new document and
    /// re-derives the active section. Called again whenever the document is
    /// rebuilt, such as on a resize or a theme change.
    pub fn bind(&mut self, layout: SectionLayout, viewport_rows: usize) {
        log::debug!(
            "section tracker bound: {} rows, viewport {viewport_rows}",
            layout.total_rows()
        );
        self.layout = Some(layout);
        self.viewport_rows = viewport_rows;
        self.scroll = self.scroll.min(self.max_scroll());
        self.refresh_active();
    }

    /// Detach from the current layout. Scrolling and navigation become
    /// no-ops until the next [`bind`](Self::bind).
    pub fn release(&mut self) {
        self.layout = None;
        self.glide_target = None;
    }

    #[must_use]
    pub fn is_bound(&self) -> bool {
        self.layout.is_some()
    }

    /// Current scroll offset in document rows.
    #[must_use]
    pub fn scroll(&self) -> usize {
        self.scroll
    }

    /// The section currently considered active.
    #[must_use]
    pub fn active(&self) -> Section {
        self.active
    }

    /// True while a `navigate_to` glide is still in progress.
    #[must_use]
    pub fn is_gliding(&self) -> bool {
        self.glide_target.is_some()
    }

    /// Largest reachable scroll offset for the bound layout.
    #[must_use]
    pub fn max_scroll(&self) -> usize {
        self.layout.as_ref().map_or(0, |layout| {
            layout.total_rows().saturating_sub(self.viewport_rows)
        })
    }

    /// Scroll by a signed number of rows. Cancels any glide in progress.
    ///
    /// Returns the new active section when the move changed it.
    pub fn scroll_by(&mut self, delta: isize) -> Option<Section> {
        if !self.is_bound() {
            return None;
        }
        self.glide_target = None;
        let magnitude = delta.unsigned_abs();
        let row = if delta.is_negative() {
            self.scroll.saturating_sub(magnitude)
        } else {
            self.scroll.saturating_add(magnitude)
        };
        self.apply_scroll(row)
    }

    /// Jump straight to a row. Cancels any glide in progress.
    pub fn scroll_to(&mut self, row: usize) -> Option<Section> {
        if !self.is_bound() {
            return None;
        }
        self.glide_target = None;
        self.apply_scroll(row)
    }

    /// Begin a glide to the section named by `id`.
    ///
    /// The section becomes active immediately; the scroll offset follows
    /// over the next ticks. Unknown ids and an unbound tracker are no-ops.
    /// Returns whether the navigation was accepted.
    pub fn navigate_to(&mut self, id: &str) -> bool {
        let Some(section) = Section::from_id(id) else {
            log::debug!("ignoring navigation to unknown section id {id:?}");
            return false;
        };
        let Some(layout) = &self.layout else {
            return false;
        };
        let Some(span) = layout.span_of(section) else {
            return false;
        };
        let target = span.start.min(self.max_scroll());
        self.active = section;
        self.glide_target = Some(target);
        true
    }

    /// Advance a glide by one animation step.
    ///
    /// Covers a third of the remaining distance, at least one row, so the
    /// motion eases out as it approaches the target. Returns the new active
    /// section when the step changed it.
    pub fn tick(&mut self) -> Option<Section> {
        let target = self.glide_target?.min(self.max_scroll());
        let step = (self.scroll.abs_diff(target) / GLIDE_DIVISOR).max(1);
        let next = match self.scroll.cmp(&target) {
            Ordering::Less => (self.scroll + step).min(target),
            Ordering::Greater => self.scroll.saturating_sub(step).max(target),
            Ordering::Equal => {
                self.glide_target = None;
                return None;
            }
        };
        if next == target {
            self.glide_target = None;
        }
        self.apply_scroll(next)
    }

    /// Clamp `row`, store it, and re-derive the active section.
    fn apply_scroll(&mut self, row: usize) -> Option<Section> {
        self.scroll = row.min(self.max_scroll());
        let before = self.active;
        self.refresh_active();
        (self.active != before).then_some(self.active)
    }

    fn refresh_active(&mut self) {
        if let Some(layout) = &self.layout {
            self.active = layout.active_at(self.scroll.saturating_add(SCROLL_LOOKAHEAD));
        }
    }
}

impl Default for SectionTracker {
    fn default() -> Self {
        Self::new()
    }
}
