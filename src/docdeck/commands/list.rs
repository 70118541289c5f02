use crate::catalog::Catalog;
use crate::commands::{CmdResult, SectionSummary};
use crate::error::Result;

pub fn run(catalog: &Catalog) -> Result<CmdResult> {
    let summaries = catalog
        .sections()
        .iter()
        .map(|section| SectionSummary {
            id: section.id.clone(),
            title: section.title.clone(),
            endpoint_count: section.endpoints.len(),
        })
        .collect();

    Ok(CmdResult::default().with_summaries(summaries))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content;

    #[test]
    fn lists_sections_in_catalog_order() {
        let result = run(content::catalog()).unwrap();
        assert_eq!(result.summaries.len(), 9);
        assert_eq!(result.summaries[0].id, "home");
        assert_eq!(result.summaries[2].id, "energy-futures");
        assert_eq!(result.summaries[2].endpoint_count, 2);
        assert_eq!(result.summaries[8].id, "support");
    }
}
