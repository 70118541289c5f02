//! # Navigation State
//!
//! [`Navigator`] owns the only cross-component mutable state in docdeck:
//! which section is active and which language is selected. Two independent
//! inputs drive the active section — an explicit jump from the navigation
//! pane and the scroll position of the document host — and both funnel
//! through this one writer. There is no locking between them: whichever
//! operation ran last determined the active section. A scroll event landing
//! right after a jump may briefly override it, and the next scroll snapshot
//! converges back; that one-frame override is accepted behavior.
//!
//! Neither operation can fail. Unknown section ids and unknown languages are
//! no-ops; the caller decides whether to surface a warning.

use crate::catalog::Catalog;

/// Number of layout units below the viewport top within which a section
/// anchor still counts as "reached". Mirrors the fixed header offset the
/// host applies when scrolling to an anchor.
pub const HEADER_OFFSET: i64 = 20;

/// Language applied to every example block until the user picks another.
pub const DEFAULT_LANGUAGE: &str = "python";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollBehavior {
    Smooth,
    Instant,
}

/// A scroll-to-anchor instruction for the document host. Only
/// [`Navigator::select_section`] produces these.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrollRequest {
    pub id: String,
    pub behavior: ScrollBehavior,
}

/// Anchor position of one section, in the host's layout units, measured
/// from the top of the document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Anchor {
    pub id: String,
    pub offset: i64,
}

/// Snapshot of the host's scroll state. Recomputing from the same snapshot
/// is idempotent, so callers may feed every scroll event through without
/// throttling for correctness (throttling remains a performance choice).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrollMetrics {
    pub viewport_top: i64,
    /// Anchors in catalog order.
    pub anchors: Vec<Anchor>,
}

#[derive(Debug)]
pub struct Navigator {
    active: String,
    language: String,
}

impl Navigator {
    /// Starts at the catalog's first section with the default language.
    pub fn new(catalog: &Catalog) -> Self {
        Self {
            active: catalog.first_id().to_string(),
            language: DEFAULT_LANGUAGE.to_string(),
        }
    }

    pub fn active_section(&self) -> &str {
        &self.active
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    /// Jump to a section from the navigation pane.
    ///
    /// The active section updates immediately — the controller does not
    /// wait for the host to finish scrolling. Returns the scroll request
    /// for the host, or `None` (state untouched) when `id` is not a
    /// catalog key.
    pub fn select_section(&mut self, catalog: &Catalog, id: &str) -> Option<ScrollRequest> {
        if !catalog.contains(id) {
            return None;
        }
        self.active = id.to_string();
        Some(ScrollRequest {
            id: id.to_string(),
            behavior: ScrollBehavior::Smooth,
        })
    }

    /// Recompute the active section from a scroll snapshot.
    ///
    /// The winner is the section whose anchor sits furthest down the
    /// document while still at or above `viewport_top + HEADER_OFFSET` —
    /// the most recently scrolled-past section, not the next upcoming one.
    /// When the viewport is above every anchor's threshold, the first
    /// section wins. Returns whether the active section changed.
    pub fn on_scroll(&mut self, metrics: &ScrollMetrics) -> bool {
        let Some(first) = metrics.anchors.first() else {
            return false;
        };
        let threshold = metrics.viewport_top + HEADER_OFFSET;
        let winner = metrics
            .anchors
            .iter()
            .filter(|anchor| anchor.offset <= threshold)
            .max_by_key(|anchor| anchor.offset)
            .unwrap_or(first);

        if self.active == winner.id {
            return false;
        }
        self.active = winner.id.clone();
        true
    }

    /// Switch the language applied to every example block. Only keys from
    /// the catalog's closed language set are accepted; anything else is a
    /// no-op returning false.
    pub fn set_language(&mut self, catalog: &Catalog, language: &str) -> bool {
        if !catalog.languages().iter().any(|l| l == language) {
            return false;
        }
        self.language = language.to_string();
        true
    }
}
