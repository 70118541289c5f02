use crate::catalog::Catalog;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::render::render_section;

/// Renders the named sections (all of them when `ids` is empty) for the
/// given language. Unknown ids warn and are skipped; they never fail the
/// command.
pub fn run<I: AsRef<str>>(catalog: &Catalog, ids: &[I], language: &str) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    let mut views = Vec::new();

    if ids.is_empty() {
        for section in catalog.sections() {
            views.push(render_section(section, language));
        }
    } else {
        for id in ids {
            match catalog.get(id.as_ref()) {
                Some(section) => views.push(render_section(section, language)),
                None => result.add_message(CmdMessage::warning(format!(
                    "Unknown section: {}",
                    id.as_ref()
                ))),
            }
        }
    }

    Ok(result.with_views(views))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content;

    #[test]
    fn renders_all_sections_by_default() {
        let result = run::<&str>(content::catalog(), &[], "python").unwrap();
        assert_eq!(result.views.len(), 9);
        assert_eq!(result.views[0].id, "home");
    }

    #[test]
    fn renders_requested_sections_in_request_order() {
        let result = run(content::catalog(), &["errors", "auth"], "curl").unwrap();
        assert_eq!(result.views.len(), 2);
        assert_eq!(result.views[0].id, "errors");
        assert_eq!(result.views[1].id, "auth");
        let example = result.views[1].endpoints[0].example.as_ref().unwrap();
        assert_eq!(example.language, "curl");
    }

    #[test]
    fn unknown_id_warns_and_is_skipped() {
        let result = run(content::catalog(), &["auth", "bogus"], "python").unwrap();
        assert_eq!(result.views.len(), 1);
        assert_eq!(result.messages.len(), 1);
        assert!(result.messages[0].content.contains("bogus"));
    }
}
