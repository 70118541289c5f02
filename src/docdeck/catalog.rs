//! # Content Catalog
//!
//! An ordered, id-addressable collection of [`Section`]s. The order sections
//! are handed to [`Catalog::new`] is the order they appear on screen and in
//! the navigation pane, so insertion order is semantically meaningful here.
//!
//! The catalog is loaded once at process start and is immutable afterwards;
//! everything else consumes it read-only. Shape violations (duplicate ids, a
//! section with neither endpoints nor content) are authoring defects and are
//! rejected at construction rather than handled at runtime.

use crate::model::Section;
use std::collections::HashMap;

#[derive(Debug, Clone)]
pub struct Catalog {
    sections: Vec<Section>,
    by_id: HashMap<String, usize>,
}

impl Catalog {
    /// Builds a catalog from sections in display order.
    ///
    /// Panics on duplicate ids or a section with no body; the built-in
    /// catalog is compiled in, so either is a bug, not a runtime condition.
    pub fn new(sections: Vec<Section>) -> Self {
        let mut by_id = HashMap::with_capacity(sections.len());
        for (pos, section) in sections.iter().enumerate() {
            assert!(
                section.has_body(),
                "section '{}' has neither endpoints nor content",
                section.id
            );
            let previous = by_id.insert(section.id.clone(), pos);
            assert!(previous.is_none(), "duplicate section id '{}'", section.id);
        }
        Self { sections, by_id }
    }

    /// All sections in display order.
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn get(&self, id: &str) -> Option<&Section> {
        self.by_id.get(id).map(|&pos| &self.sections[pos])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.by_id.contains_key(id)
    }

    /// Position of a section in display order.
    pub fn position(&self, id: &str) -> Option<usize> {
        self.by_id.get(id).copied()
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Id of the first section (the initial active section).
    pub fn first_id(&self) -> &str {
        &self.sections[0].id
    }

    /// The closed set of selectable language keys: the union of every
    /// endpoint's example keys, sorted and deduplicated.
    pub fn languages(&self) -> Vec<String> {
        let mut langs: Vec<String> = self
            .sections
            .iter()
            .flat_map(|s| s.endpoints.iter())
            .flat_map(|e| e.examples.keys().cloned())
            .collect();
        langs.sort();
        langs.dedup();
        langs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Endpoint, Method};

    fn narrative(id: &str) -> Section {
        Section {
            id: id.to_string(),
            title: id.to_uppercase(),
            description: String::new(),
            endpoints: vec![],
            content: Some("body".to_string()),
        }
    }

    fn with_examples(id: &str, langs: &[&str]) -> Section {
        let examples = langs
            .iter()
            .map(|l| (l.to_string(), "code".to_string()))
            .collect();
        Section {
            id: id.to_string(),
            title: id.to_uppercase(),
            description: String::new(),
            endpoints: vec![Endpoint {
                method: Method::Get,
                url: format!("/{}", id),
                title: id.to_string(),
                description: String::new(),
                parameters: vec![],
                examples,
            }],
            content: None,
        }
    }

    #[test]
    fn preserves_insertion_order() {
        let catalog = Catalog::new(vec![narrative("home"), narrative("auth"), narrative("errors")]);
        let ids: Vec<&str> = catalog.sections().iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["home", "auth", "errors"]);
        assert_eq!(catalog.first_id(), "home");
        assert_eq!(catalog.position("errors"), Some(2));
    }

    #[test]
    fn lookup_by_id() {
        let catalog = Catalog::new(vec![narrative("home"), narrative("auth")]);
        assert!(catalog.contains("auth"));
        assert_eq!(catalog.get("auth").unwrap().title, "AUTH");
        assert!(catalog.get("nope").is_none());
    }

    #[test]
    fn languages_are_the_sorted_union() {
        let catalog = Catalog::new(vec![
            with_examples("a", &["python", "curl"]),
            with_examples("b", &["ruby", "python"]),
        ]);
        assert_eq!(catalog.languages(), vec!["curl", "python", "ruby"]);
    }

    #[test]
    #[should_panic(expected = "duplicate section id")]
    fn rejects_duplicate_ids() {
        Catalog::new(vec![narrative("home"), narrative("home")]);
    }

    #[test]
    #[should_panic(expected = "neither endpoints nor content")]
    fn rejects_empty_sections() {
        Catalog::new(vec![Section {
            id: "empty".to_string(),
            title: String::new(),
            description: String::new(),
            endpoints: vec![],
            content: None,
        }]);
    }
}
