use crate::catalog::Catalog;
use crate::commands::{CmdMessage, CmdResult};
use crate::config::DocdeckConfig;
use crate::error::Result;
use std::path::Path;

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    SetLanguage(String),
}

pub fn run(config_dir: &Path, catalog: &Catalog, action: ConfigAction) -> Result<CmdResult> {
    let mut config = DocdeckConfig::load(config_dir)?;
    let mut result = CmdResult::default();

    match action {
        ConfigAction::ShowAll | ConfigAction::ShowKey(_) => {}
        ConfigAction::SetLanguage(language) => {
            let normalized = language.to_lowercase();
            if !catalog.languages().contains(&normalized) {
                result.add_message(CmdMessage::warning(format!(
                    "Unknown language '{}' (available: {})",
                    language,
                    catalog.languages().join(", ")
                )));
                return Ok(result.with_config(config));
            }
            config.set_language(&normalized);
            config.save(config_dir)?;
            result.add_message(CmdMessage::success(format!("Language set to {}", normalized)));
        }
    }

    Ok(result.with_config(config))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content;

    #[test]
    fn show_returns_current_config() {
        let dir = tempfile::tempdir().unwrap();
        let result = run(dir.path(), content::catalog(), ConfigAction::ShowAll).unwrap();
        assert_eq!(result.config.unwrap().language, "python");
    }

    #[test]
    fn set_language_persists() {
        let dir = tempfile::tempdir().unwrap();
        run(
            dir.path(),
            content::catalog(),
            ConfigAction::SetLanguage("Curl".to_string()),
        )
        .unwrap();

        let loaded = DocdeckConfig::load(dir.path()).unwrap();
        assert_eq!(loaded.language, "curl");
    }

    #[test]
    fn set_unknown_language_warns_and_keeps_config() {
        let dir = tempfile::tempdir().unwrap();
        let result = run(
            dir.path(),
            content::catalog(),
            ConfigAction::SetLanguage("fortran".to_string()),
        )
        .unwrap();

        assert!(result.messages[0].content.contains("Unknown language"));
        let loaded = DocdeckConfig::load(dir.path()).unwrap();
        assert_eq!(loaded.language, "python");
    }
}
