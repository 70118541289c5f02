//! # Example Selection
//!
//! Maps an endpoint plus a language key to the code text to display.
//! Lookup is strict: if an endpoint has no example for the requested
//! language, the caller omits the example block entirely. Substituting a
//! different language's text is disallowed — it would show code that does
//! not match the labeled language.

use crate::model::Endpoint;

/// Returns the endpoint's example for `language`, trimmed for display, or
/// `None` when the endpoint does not define that language.
pub fn select_example(endpoint: &Endpoint, language: &str) -> Option<String> {
    endpoint.examples.get(language).map(|raw| trim_example(raw))
}

/// Normalizes raw example text: strips exactly one leading blank line (a
/// first line that is all whitespace) and all trailing whitespace. The body
/// is otherwise verbatim, indentation included.
fn trim_example(raw: &str) -> String {
    let body = match raw.split_once('\n') {
        Some((first, rest)) if first.trim().is_empty() && !rest.is_empty() => rest,
        _ => raw,
    };
    body.trim_end().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Method;
    use std::collections::BTreeMap;

    fn endpoint_with(examples: &[(&str, &str)]) -> Endpoint {
        let examples: BTreeMap<String, String> = examples
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Endpoint {
            method: Method::Get,
            url: "/things".to_string(),
            title: "List things".to_string(),
            description: String::new(),
            parameters: vec![],
            examples,
        }
    }

    #[test]
    fn returns_text_for_present_language() {
        let e = endpoint_with(&[("python", "import requests")]);
        assert_eq!(
            select_example(&e, "python").as_deref(),
            Some("import requests")
        );
    }

    #[test]
    fn absent_language_yields_none() {
        let e = endpoint_with(&[("python", "import requests")]);
        assert_eq!(select_example(&e, "ruby"), None);
    }

    #[test]
    fn strips_one_leading_blank_line() {
        let e = endpoint_with(&[("curl", "\ncurl https://example.test")]);
        assert_eq!(
            select_example(&e, "curl").as_deref(),
            Some("curl https://example.test")
        );
    }

    #[test]
    fn strips_only_one_leading_blank_line() {
        let e = endpoint_with(&[("curl", "\n\ncurl https://example.test")]);
        assert_eq!(
            select_example(&e, "curl").as_deref(),
            Some("\ncurl https://example.test")
        );
    }

    #[test]
    fn whitespace_only_first_line_counts_as_blank() {
        let e = endpoint_with(&[("python", "   \nprint(1)")]);
        assert_eq!(select_example(&e, "python").as_deref(), Some("print(1)"));
    }

    #[test]
    fn strips_trailing_whitespace() {
        let e = endpoint_with(&[("python", "print(1)\n\n   ")]);
        assert_eq!(select_example(&e, "python").as_deref(), Some("print(1)"));
    }

    #[test]
    fn preserves_interior_indentation() {
        let code = "def f():\n    return 1";
        let e = endpoint_with(&[("python", code)]);
        assert_eq!(select_example(&e, "python").as_deref(), Some(code));
    }
}
