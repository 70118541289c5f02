use crate::catalog::Catalog;
use crate::commands::{CmdMessage, CmdResult, CopiedExample};
use crate::error::Result;
use crate::example::select_example;

/// Resolves one endpoint's example for copying. `endpoint` is the 1-based
/// position within the section. Every miss (unknown section, no such
/// endpoint, no example in the selected language) is a warning, not an
/// error; the actual clipboard write happens in the binary.
pub fn run(catalog: &Catalog, id: &str, endpoint: usize, language: &str) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    let Some(section) = catalog.get(id) else {
        result.add_message(CmdMessage::warning(format!("Unknown section: {}", id)));
        return Ok(result);
    };

    let Some(target) = endpoint.checked_sub(1).and_then(|i| section.endpoints.get(i)) else {
        result.add_message(CmdMessage::warning(format!(
            "Section '{}' has no endpoint {} ({} available)",
            id,
            endpoint,
            section.endpoints.len()
        )));
        return Ok(result);
    };

    match select_example(target, language) {
        Some(code) => Ok(result.with_copied(CopiedExample {
            url: target.url.clone(),
            language: language.to_string(),
            code,
        })),
        None => {
            result.add_message(CmdMessage::warning(format!(
                "No {} example for {}",
                language, target.url
            )));
            Ok(result)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content;

    #[test]
    fn resolves_example_by_ordinal_and_language() {
        let result = run(content::catalog(), "energy-futures", 2, "curl").unwrap();
        let copied = result.copied.unwrap();
        assert_eq!(copied.url, "/datasets/download/energy-futures/json");
        assert_eq!(copied.language, "curl");
        assert!(copied.code.starts_with("curl -X GET"));
        assert!(result.messages.is_empty());
    }

    #[test]
    fn unknown_section_warns() {
        let result = run(content::catalog(), "bogus", 1, "python").unwrap();
        assert!(result.copied.is_none());
        assert!(result.messages[0].content.contains("Unknown section"));
    }

    #[test]
    fn out_of_range_endpoint_warns() {
        let result = run(content::catalog(), "auth", 5, "python").unwrap();
        assert!(result.copied.is_none());
        assert!(result.messages[0].content.contains("no endpoint 5"));
    }

    #[test]
    fn narrative_section_has_no_endpoints() {
        let result = run(content::catalog(), "home", 1, "python").unwrap();
        assert!(result.copied.is_none());
        assert!(result.messages[0].content.contains("0 available"));
    }

    #[test]
    fn missing_language_warns_without_substituting() {
        let result = run(content::catalog(), "auth", 1, "go").unwrap();
        assert!(result.copied.is_none());
        assert!(result.messages[0].content.contains("No go example"));
    }
}
