//! # Section Rendering
//!
//! Turns a [`Section`] plus the selected language into a [`SectionView`]
//! display tree. The functions here are pure: no caching, no side effects,
//! every invocation recomputes fully from its inputs, so switching languages
//! back and forth reproduces identical output. Terminal styling happens in
//! the binary's formatting layer, not here.

use crate::example::select_example;
use crate::model::{Method, Parameter, Section};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SectionView {
    pub id: String,
    pub title: String,
    pub description: String,
    pub endpoints: Vec<EndpointView>,
    /// Markdown body for narrative sections.
    pub content: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EndpointView {
    pub method: Method,
    pub url: String,
    pub title: String,
    pub description: String,
    pub parameters: Vec<ParameterRow>,
    /// Absent when the endpoint defines no example for the selected
    /// language; the block is omitted rather than substituted.
    pub example: Option<ExampleView>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParameterRow {
    pub name: String,
    pub kind: String,
    pub required: bool,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExampleView {
    pub language: String,
    pub code: String,
}

/// Renders one section for the given language.
pub fn render_section(section: &Section, language: &str) -> SectionView {
    SectionView {
        id: section.id.clone(),
        title: section.title.clone(),
        description: section.description.clone(),
        endpoints: section
            .endpoints
            .iter()
            .map(|endpoint| EndpointView {
                method: endpoint.method,
                url: endpoint.url.clone(),
                title: endpoint.title.clone(),
                description: endpoint.description.clone(),
                // Declared order, nothing re-sorted, nothing dropped.
                parameters: endpoint.parameters.iter().map(parameter_row).collect(),
                example: select_example(endpoint, language).map(|code| ExampleView {
                    language: language.to_string(),
                    code,
                }),
            })
            .collect(),
        content: section.content.clone(),
    }
}

fn parameter_row(parameter: &Parameter) -> ParameterRow {
    ParameterRow {
        name: parameter.name.clone(),
        kind: parameter.kind.clone(),
        required: parameter.required,
        description: parameter.description.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Endpoint, Parameter};
    use std::collections::BTreeMap;

    fn fixture_section() -> Section {
        let mut examples = BTreeMap::new();
        examples.insert("python".to_string(), "import requests".to_string());
        examples.insert("curl".to_string(), "curl https://example.test".to_string());

        Section {
            id: "futures".to_string(),
            title: "Futures".to_string(),
            description: "Futures data.".to_string(),
            endpoints: vec![Endpoint {
                method: Method::Get,
                url: "/datasets/futures".to_string(),
                title: "Download futures".to_string(),
                description: String::new(),
                parameters: vec![
                    Parameter::new("start_operating_date", "date", true, "Start date"),
                    Parameter::new("control_area", "string", false, "Control area"),
                ],
                examples,
            }],
            content: None,
        }
    }

    #[test]
    fn parameters_keep_declared_order_and_flags() {
        let view = render_section(&fixture_section(), "python");
        let rows = &view.endpoints[0].parameters;
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].name, "start_operating_date");
        assert!(rows[0].required);
        assert_eq!(rows[1].name, "control_area");
        assert!(!rows[1].required);
    }

    #[test]
    fn example_block_matches_selected_language() {
        let view = render_section(&fixture_section(), "curl");
        let example = view.endpoints[0].example.as_ref().unwrap();
        assert_eq!(example.language, "curl");
        assert_eq!(example.code, "curl https://example.test");
    }

    #[test]
    fn missing_language_omits_the_example_block() {
        let view = render_section(&fixture_section(), "ruby");
        assert!(view.endpoints[0].example.is_none());
    }

    #[test]
    fn language_round_trip_is_byte_identical() {
        let section = fixture_section();
        let first = render_section(&section, "python");
        let _other = render_section(&section, "curl");
        let again = render_section(&section, "python");
        assert_eq!(first, again);
        // Same check on the serialized form, byte for byte.
        assert_eq!(
            serde_json::to_vec(&first).unwrap(),
            serde_json::to_vec(&again).unwrap()
        );
    }

    #[test]
    fn narrative_content_passes_through() {
        let section = Section {
            id: "notes".to_string(),
            title: "Notes".to_string(),
            description: String::new(),
            endpoints: vec![],
            content: Some("## Heading".to_string()),
        };
        let view = render_section(&section, "python");
        assert_eq!(view.content.as_deref(), Some("## Heading"));
        assert!(view.endpoints.is_empty());
    }
}
