use crate::catalog::Catalog;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Section;
use chrono::Utc;
use flate2::write::GzEncoder;
use flate2::Compression;
use std::fs::File;
use std::io::Write;

/// Exports sections as markdown documents in a gzipped tar archive written
/// to the current directory. With no ids, the whole catalog is exported;
/// unknown ids warn and are skipped.
pub fn run<I: AsRef<str>>(catalog: &Catalog, ids: &[I]) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    let sections = resolve_sections(catalog, ids, &mut result);

    if sections.is_empty() {
        result.add_message(CmdMessage::info("No sections to export."));
        return Ok(result);
    }

    let now = Utc::now();
    let filename = format!("docdeck-{}.tar.gz", now.format("%Y-%m-%d_%H:%M:%S"));
    let file = File::create(&filename)?;

    write_archive(file, &sections)?;

    result.add_message(CmdMessage::success(format!("Exported to {}", filename)));
    Ok(result)
}

fn resolve_sections<'a, I: AsRef<str>>(
    catalog: &'a Catalog,
    ids: &[I],
    result: &mut CmdResult,
) -> Vec<&'a Section> {
    if ids.is_empty() {
        return catalog.sections().iter().collect();
    }
    let mut sections = Vec::with_capacity(ids.len());
    for id in ids {
        match catalog.get(id.as_ref()) {
            Some(section) => sections.push(section),
            None => result.add_message(CmdMessage::warning(format!(
                "Unknown section: {}",
                id.as_ref()
            ))),
        }
    }
    sections
}

fn write_archive<W: Write>(writer: W, sections: &[&Section]) -> Result<()> {
    let enc = GzEncoder::new(writer, Compression::default());
    let mut tar = tar::Builder::new(enc);

    for section in sections {
        let entry_name = format!("docdeck/{}.md", section.id);
        let content = section_document(section);

        let mut header = tar::Header::new_gnu();
        header.set_size(content.len() as u64);
        header.set_mode(0o644);
        header.set_cksum();

        tar.append_data(&mut header, entry_name, content.as_bytes())?;
    }

    tar.finish()?;
    Ok(())
}

/// Serializes one section as a standalone markdown document, every language
/// included.
fn section_document(section: &Section) -> String {
    let mut doc = format!("# {}\n\n{}\n", section.title, section.description);

    for endpoint in &section.endpoints {
        doc.push_str(&format!(
            "\n## {} `{}` — {}\n\n{}\n",
            endpoint.method, endpoint.url, endpoint.title, endpoint.description
        ));

        if !endpoint.parameters.is_empty() {
            doc.push_str("\n| Name | Type | Required | Description |\n| --- | --- | --- | --- |\n");
            for p in &endpoint.parameters {
                doc.push_str(&format!(
                    "| {} | {} | {} | {} |\n",
                    p.name,
                    p.kind,
                    if p.required { "required" } else { "optional" },
                    p.description
                ));
            }
        }

        for (language, code) in &endpoint.examples {
            doc.push_str(&format!("\n```{}\n{}\n```\n", language, code.trim_end()));
        }
    }

    if let Some(content) = &section.content {
        doc.push('\n');
        doc.push_str(content);
    }

    doc
}
