use crate::catalog::Catalog;
use crate::commands::CmdResult;
use crate::error::Result;

pub fn run(catalog: &Catalog) -> Result<CmdResult> {
    Ok(CmdResult::default().with_languages(catalog.languages()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content;

    #[test]
    fn lists_the_closed_language_set() {
        let result = run(content::catalog()).unwrap();
        assert_eq!(result.languages, vec!["curl", "javascript", "python", "ruby"]);
    }
}
