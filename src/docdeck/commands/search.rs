use crate::catalog::Catalog;
use crate::commands::{CmdResult, SectionSummary};
use crate::error::Result;
use crate::model::Section;

/// Ranked search over the catalog. Title hits rank above description hits,
/// which rank above endpoint hits; ties keep catalog order.
pub fn run(catalog: &Catalog, term: &str) -> Result<CmdResult> {
    let term_lower = term.to_lowercase();

    let mut matches: Vec<(SectionSummary, u8)> = catalog
        .sections()
        .iter()
        .filter_map(|section| {
            score(section, &term_lower).map(|score| {
                (
                    SectionSummary {
                        id: section.id.clone(),
                        title: section.title.clone(),
                        endpoint_count: section.endpoints.len(),
                    },
                    score,
                )
            })
        })
        .collect();

    matches.sort_by_key(|(_, score)| *score);

    let summaries = matches.into_iter().map(|(summary, _)| summary).collect();
    Ok(CmdResult::default().with_summaries(summaries))
}

fn score(section: &Section, term_lower: &str) -> Option<u8> {
    let title_lower = section.title.to_lowercase();
    if title_lower == *term_lower {
        return Some(1);
    }
    if title_lower.contains(term_lower) || section.id.contains(term_lower) {
        return Some(2);
    }
    if section.description.to_lowercase().contains(term_lower) {
        return Some(3);
    }
    let endpoint_hit = section.endpoints.iter().any(|e| {
        e.url.to_lowercase().contains(term_lower) || e.title.to_lowercase().contains(term_lower)
    });
    if endpoint_hit {
        return Some(4);
    }
    None
}
