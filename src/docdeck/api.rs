//! # API Facade
//!
//! Thin entry point over the command layer, shared by every UI. It
//! normalizes inputs (language casing, fallbacks to the configured
//! language) and dispatches; business logic lives in `commands/*.rs`, and
//! nothing here touches stdout or stderr.

use crate::catalog::Catalog;
use crate::commands;
use crate::config::DocdeckConfig;
use crate::error::Result;
use crate::nav::DEFAULT_LANGUAGE;
use std::path::PathBuf;

pub struct DocsApi {
    catalog: &'static Catalog,
    config_dir: PathBuf,
}

impl DocsApi {
    pub fn new(catalog: &'static Catalog, config_dir: PathBuf) -> Self {
        Self {
            catalog,
            config_dir,
        }
    }

    pub fn catalog(&self) -> &'static Catalog {
        self.catalog
    }

    pub fn list_sections(&self) -> Result<CmdResult> {
        commands::list::run(self.catalog)
    }

    pub fn view_sections<I: AsRef<str>>(
        &self,
        ids: &[I],
        language: Option<&str>,
    ) -> Result<CmdResult> {
        let (language, mut warnings) = self.resolve_language(language)?;
        let mut result = commands::view::run(self.catalog, ids, &language)?;
        result.messages.append(&mut warnings);
        Ok(result)
    }

    pub fn copy_example(
        &self,
        id: &str,
        endpoint: usize,
        language: Option<&str>,
    ) -> Result<CmdResult> {
        let (language, mut warnings) = self.resolve_language(language)?;
        let mut result = commands::copy::run(self.catalog, id, endpoint, &language)?;
        result.messages.append(&mut warnings);
        Ok(result)
    }

    pub fn search_sections(&self, term: &str) -> Result<CmdResult> {
        commands::search::run(self.catalog, term)
    }

    pub fn languages(&self) -> Result<CmdResult> {
        commands::langs::run(self.catalog)
    }

    pub fn export_sections<I: AsRef<str>>(&self, ids: &[I]) -> Result<CmdResult> {
        commands::export::run(self.catalog, ids)
    }

    pub fn config(&self, action: commands::config::ConfigAction) -> Result<CmdResult> {
        commands::config::run(&self.config_dir, self.catalog, action)
    }

    /// The language the session starts in: the configured default, checked
    /// against the catalog's closed set.
    pub fn startup_language(&self) -> Result<String> {
        Ok(self.resolve_language(None)?.0)
    }

    /// Normalizes an explicit language choice, falling back to the
    /// configured language and then to the built-in default when the key is
    /// not in the catalog. Rendering still degrades gracefully either way;
    /// the warning just tells the user why their choice was ignored.
    fn resolve_language(&self, requested: Option<&str>) -> Result<(String, Vec<CmdMessage>)> {
        let known = self.catalog.languages();
        let mut warnings = Vec::new();

        if let Some(requested) = requested {
            let normalized = requested.to_lowercase();
            if known.contains(&normalized) {
                return Ok((normalized, warnings));
            }
            warnings.push(CmdMessage::warning(format!(
                "Unknown language '{}' (available: {})",
                requested,
                known.join(", ")
            )));
        }

        let configured = DocdeckConfig::load(&self.config_dir)?.language;
        if known.contains(&configured) {
            Ok((configured, warnings))
        } else {
            Ok((DEFAULT_LANGUAGE.to_string(), warnings))
        }
    }
}

pub use crate::commands::config::ConfigAction;
pub use crate::commands::{CmdMessage, CmdResult, CopiedExample, MessageLevel, SectionSummary};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content;

    fn api(dir: &std::path::Path) -> DocsApi {
        DocsApi::new(content::catalog(), dir.to_path_buf())
    }

    #[test]
    fn explicit_language_is_normalized() {
        let dir = tempfile::tempdir().unwrap();
        let result = api(dir.path()).view_sections(&["auth"], Some("CURL")).unwrap();
        let example = result.views[0].endpoints[0].example.as_ref().unwrap();
        assert_eq!(example.language, "curl");
        assert!(result.messages.is_empty());
    }

    #[test]
    fn unknown_language_warns_and_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let result = api(dir.path())
            .view_sections(&["auth"], Some("fortran"))
            .unwrap();
        let example = result.views[0].endpoints[0].example.as_ref().unwrap();
        assert_eq!(example.language, "python");
        assert!(result
            .messages
            .iter()
            .any(|m| m.content.contains("Unknown language")));
    }

    #[test]
    fn startup_language_follows_config() {
        let dir = tempfile::tempdir().unwrap();
        let api = api(dir.path());
        assert_eq!(api.startup_language().unwrap(), "python");

        api.config(ConfigAction::SetLanguage("ruby".to_string()))
            .unwrap();
        assert_eq!(api.startup_language().unwrap(), "ruby");
    }
}
