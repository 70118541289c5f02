//! # Document Host
//!
//! The scrollable container the navigator talks to. It lays out every
//! section stacked in catalog order — nothing is virtualized or lazily
//! mounted — and owns only geometry: anchor offsets, the viewport position,
//! and scroll-to-anchor. Highlighting is the caller's concern; the host
//! reads nothing from the navigator.
//!
//! The trait is the boundary contract: the navigator only ever sees metrics
//! snapshots and scroll requests, so any host — the line-based [`TextHost`]
//! here, or another front end's layout — can stand behind it.

use crate::nav::{Anchor, ScrollMetrics, ScrollRequest, HEADER_OFFSET};

pub trait DocumentHost {
    /// Current scroll snapshot: viewport top plus every section anchor in
    /// catalog order.
    fn metrics(&self) -> ScrollMetrics;

    /// Scroll so the requested section's anchor lands `HEADER_OFFSET`
    /// layout units below the viewport top.
    fn scroll_to(&mut self, request: &ScrollRequest);

    /// User-driven scroll by a signed number of layout units.
    fn scroll_by(&mut self, delta: i64);
}

/// Line-based document host for the terminal. Layout units are text lines;
/// a section's anchor is the line its block starts on.
#[derive(Debug)]
pub struct TextHost {
    lines: Vec<String>,
    anchors: Vec<Anchor>,
    viewport_top: i64,
    viewport_height: usize,
}

impl TextHost {
    /// Stacks pre-rendered section blocks in the order given. Each block is
    /// `(section id, rendered text)`; blocks are separated by one blank
    /// line.
    pub fn new(blocks: &[(String, String)], viewport_height: usize) -> Self {
        let mut lines = Vec::new();
        let mut anchors = Vec::with_capacity(blocks.len());

        for (pos, (id, text)) in blocks.iter().enumerate() {
            if pos > 0 {
                lines.push(String::new());
            }
            anchors.push(Anchor {
                id: id.clone(),
                offset: lines.len() as i64,
            });
            lines.extend(text.lines().map(str::to_string));
        }

        Self {
            lines,
            anchors,
            viewport_top: 0,
            viewport_height,
        }
    }

    pub fn viewport_top(&self) -> i64 {
        self.viewport_top
    }

    /// The slice of lines currently inside the viewport.
    pub fn visible_lines(&self) -> &[String] {
        let top = self.viewport_top as usize;
        let bottom = (top + self.viewport_height).min(self.lines.len());
        &self.lines[top.min(self.lines.len())..bottom]
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    fn max_top(&self) -> i64 {
        self.lines.len().saturating_sub(self.viewport_height) as i64
    }

    fn clamp(&self, top: i64) -> i64 {
        top.clamp(0, self.max_top())
    }
}

impl DocumentHost for TextHost {
    fn metrics(&self) -> ScrollMetrics {
        ScrollMetrics {
            viewport_top: self.viewport_top,
            anchors: self.anchors.clone(),
        }
    }

    fn scroll_to(&mut self, request: &ScrollRequest) {
        // Both behaviors are an immediate jump in a terminal.
        if let Some(anchor) = self.anchors.iter().find(|a| a.id == request.id) {
            self.viewport_top = self.clamp(anchor.offset - HEADER_OFFSET);
        }
    }

    fn scroll_by(&mut self, delta: i64) {
        self.viewport_top = self.clamp(self.viewport_top + delta);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nav::ScrollBehavior;

    fn blocks() -> Vec<(String, String)> {
        vec![
            ("home".to_string(), lines_block(30)),
            ("auth".to_string(), lines_block(50)),
            ("errors".to_string(), lines_block(40)),
        ]
    }

    fn lines_block(n: usize) -> String {
        (0..n).map(|i| format!("line {}", i)).collect::<Vec<_>>().join("\n")
    }

    fn request(id: &str) -> ScrollRequest {
        ScrollRequest {
            id: id.to_string(),
            behavior: ScrollBehavior::Smooth,
        }
    }

    #[test]
    fn anchors_follow_block_layout() {
        let host = TextHost::new(&blocks(), 20);
        let metrics = host.metrics();
        let offsets: Vec<(String, i64)> = metrics
            .anchors
            .iter()
            .map(|a| (a.id.clone(), a.offset))
            .collect();
        // 30 lines + separator, then 50 lines + separator.
        assert_eq!(
            offsets,
            vec![
                ("home".to_string(), 0),
                ("auth".to_string(), 31),
                ("errors".to_string(), 82),
            ]
        );
        assert_eq!(host.line_count(), 122);
    }

    #[test]
    fn scroll_to_places_anchor_below_header_offset() {
        let mut host = TextHost::new(&blocks(), 20);
        host.scroll_to(&request("errors"));
        assert_eq!(host.viewport_top(), 82 - HEADER_OFFSET);
    }

    #[test]
    fn scroll_to_clamps_near_document_edges() {
        let mut host = TextHost::new(&blocks(), 20);
        // "home" sits at offset 0; subtracting the header offset clamps to 0.
        host.scroll_to(&request("home"));
        assert_eq!(host.viewport_top(), 0);
        // Unknown anchors leave the viewport alone.
        host.scroll_by(10);
        host.scroll_to(&request("nonexistent"));
        assert_eq!(host.viewport_top(), 10);
    }

    #[test]
    fn scroll_by_clamps_to_document() {
        let mut host = TextHost::new(&blocks(), 20);
        host.scroll_by(-100);
        assert_eq!(host.viewport_top(), 0);
        host.scroll_by(10_000);
        assert_eq!(host.viewport_top(), (122 - 20) as i64);
    }

    #[test]
    fn visible_lines_window_tracks_viewport() {
        let mut host = TextHost::new(&blocks(), 5);
        host.scroll_by(2);
        let visible = host.visible_lines();
        assert_eq!(visible.len(), 5);
        assert_eq!(visible[0], "line 2");
    }

    #[test]
    fn jump_then_metrics_marks_target_active() {
        use crate::catalog::Catalog;
        use crate::model::Section;
        use crate::nav::Navigator;

        let catalog = Catalog::new(
            ["home", "auth", "errors"]
                .iter()
                .map(|id| Section {
                    id: id.to_string(),
                    title: id.to_uppercase(),
                    description: String::new(),
                    endpoints: vec![],
                    content: Some("x".to_string()),
                })
                .collect(),
        );
        let mut nav = Navigator::new(&catalog);
        let mut host = TextHost::new(&blocks(), 20);

        let request = nav.select_section(&catalog, "auth").unwrap();
        host.scroll_to(&request);
        // The settled snapshot agrees with the optimistic selection.
        nav.on_scroll(&host.metrics());
        assert_eq!(nav.active_section(), "auth");
    }
}
