//! # Terminal Rendering
//!
//! Formats the command layer's results for the terminal. Layout math
//! (column widths, truncation) happens here in Rust with Unicode-aware
//! widths; coloring is semantic (method badges, required flags, message
//! levels) and degrades to plain text when stdout is not a terminal.

use super::styles::{method_badge, required_flag};
use colored::Colorize;
use docdeck::commands::{CmdMessage, MessageLevel, SectionSummary};
use docdeck::render::{EndpointView, SectionView};
use unicode_width::UnicodeWidthStr;

pub const LINE_WIDTH: usize = 100;

/// Renders the navigation pane as static output: one numbered row per
/// section in catalog order.
pub fn render_summaries(summaries: &[SectionSummary]) -> String {
    if summaries.is_empty() {
        return "No sections found.\n".to_string();
    }

    let id_width = summaries.iter().map(|s| s.id.width()).max().unwrap_or(0);

    let mut out = String::new();
    for (pos, summary) in summaries.iter().enumerate() {
        let endpoints = match summary.endpoint_count {
            0 => String::new(),
            1 => "1 endpoint".to_string(),
            n => format!("{} endpoints", n),
        };
        out.push_str(&format!(
            "  {:>2}. {:<id_width$}  {:<40}  {}\n",
            pos + 1,
            summary.id,
            summary.title,
            endpoints.dimmed(),
            id_width = id_width,
        ));
    }
    out
}

/// Renders one section as a block of terminal text: header, endpoint
/// blocks with parameter tables and the selected language's example, then
/// any narrative content.
pub fn render_section_view(view: &SectionView) -> String {
    let mut out = String::new();

    out.push_str(&format!("{}\n", view.title.bold()));
    out.push_str(&format!("{}\n", "─".repeat(view.title.width().min(LINE_WIDTH))));
    if !view.description.is_empty() {
        out.push_str(&format!("{}\n", view.description));
    }

    for endpoint in &view.endpoints {
        out.push('\n');
        out.push_str(&render_endpoint(endpoint));
    }

    if let Some(content) = &view.content {
        out.push('\n');
        out.push_str(&markdown_to_text(content));
    }

    out
}

fn render_endpoint(endpoint: &EndpointView) -> String {
    let mut out = String::new();

    out.push_str(&format!("{} {}\n", method_badge(endpoint.method), endpoint.url));
    out.push_str(&format!("  {}\n", endpoint.title.bold()));
    if !endpoint.description.is_empty() {
        out.push_str(&format!("  {}\n", endpoint.description));
    }

    if !endpoint.parameters.is_empty() {
        out.push_str("\n  Parameters\n");
        let name_width = endpoint
            .parameters
            .iter()
            .map(|p| p.name.width())
            .max()
            .unwrap_or(0);
        let kind_width = endpoint
            .parameters
            .iter()
            .map(|p| p.kind.width())
            .max()
            .unwrap_or(0);

        for p in &endpoint.parameters {
            let name_pad = " ".repeat(name_width.saturating_sub(p.name.width()));
            let kind_pad = " ".repeat(kind_width.saturating_sub(p.kind.width()));
            // "required" and "optional" are both 8 columns wide, so the
            // description column stays aligned without padding the flag.
            out.push_str(&format!(
                "    {}{}  {}{}  {}  {}\n",
                p.name.cyan(),
                name_pad,
                p.kind,
                kind_pad,
                required_flag(p.required),
                p.description,
            ));
        }
    }

    if let Some(example) = &endpoint.example {
        out.push_str(&format!("\n  Example · {}\n\n", example.language.bold()));
        for line in example.code.lines() {
            if line.is_empty() {
                out.push('\n');
            } else {
                out.push_str(&format!("    {}\n", line));
            }
        }
    }

    out
}

pub fn render_languages(languages: &[String], current: &str) -> String {
    let mut out = String::new();
    for language in languages {
        if language == current {
            out.push_str(&format!("  {} {}\n", language.bold(), "(current)".dimmed()));
        } else {
            out.push_str(&format!("  {}\n", language));
        }
    }
    out
}

/// Plain-text rendition of narrative markdown: headings and paragraphs
/// separated by blank lines, `•` list bullets, `text (url)` links, and
/// `a │ b` table rows.
pub fn markdown_to_text(markdown: &str) -> String {
    use pulldown_cmark::{Event, Options, Parser, Tag, TagEnd};

    let parser = Parser::new_ext(markdown, Options::ENABLE_TABLES);
    let mut out = String::new();
    let mut link_dest: Option<String> = None;
    let mut link_start = 0usize;
    let mut first_cell = true;

    for event in parser {
        match event {
            Event::Start(Tag::Heading { .. }) | Event::Start(Tag::Paragraph) => {
                ensure_blank_line(&mut out);
            }
            Event::End(TagEnd::Heading(_)) | Event::End(TagEnd::Paragraph) => {
                out.push('\n');
            }
            Event::Start(Tag::Item) => {
                ensure_line_start(&mut out);
                out.push_str("  • ");
            }
            Event::End(TagEnd::Item) => ensure_line_start(&mut out),
            Event::End(TagEnd::List(_)) => ensure_blank_line(&mut out),
            Event::Start(Tag::Link { dest_url, .. }) => {
                link_dest = Some(dest_url.to_string());
                link_start = out.len();
            }
            Event::End(TagEnd::Link) => {
                if let Some(dest) = link_dest.take() {
                    let text = &out[link_start..];
                    // Skip the parenthetical when it adds nothing over the
                    // visible text (bare and mailto links).
                    if text != dest && format!("mailto:{}", text) != dest {
                        out.push_str(&format!(" ({})", dest));
                    }
                }
            }
            Event::Start(Tag::Table(_)) => ensure_blank_line(&mut out),
            Event::End(TagEnd::Table) => ensure_line_start(&mut out),
            Event::Start(Tag::TableHead) | Event::Start(Tag::TableRow) => {
                ensure_line_start(&mut out);
                first_cell = true;
            }
            Event::End(TagEnd::TableHead) | Event::End(TagEnd::TableRow) => {
                out.push('\n');
            }
            Event::Start(Tag::TableCell) => {
                if !first_cell {
                    out.push_str("  │  ");
                }
                first_cell = false;
            }
            Event::Start(Tag::CodeBlock(_)) => ensure_blank_line(&mut out),
            Event::End(TagEnd::CodeBlock) => ensure_blank_line(&mut out),
            Event::Text(text) => out.push_str(&text),
            Event::Code(code) => {
                out.push('`');
                out.push_str(&code);
                out.push('`');
            }
            Event::SoftBreak | Event::HardBreak => out.push('\n'),
            Event::Rule => {
                ensure_blank_line(&mut out);
                out.push_str("────\n");
            }
            _ => {}
        }
    }

    while out.ends_with('\n') {
        out.pop();
    }
    out.push('\n');
    out
}

fn ensure_line_start(out: &mut String) {
    if !out.is_empty() && !out.ends_with('\n') {
        out.push('\n');
    }
}

fn ensure_blank_line(out: &mut String) {
    if out.is_empty() {
        return;
    }
    ensure_line_start(out);
    if !out.ends_with("\n\n") {
        out.push('\n');
    }
}

pub fn render_messages(messages: &[CmdMessage]) -> String {
    let mut out = String::new();
    for message in messages {
        let line = match message.level {
            MessageLevel::Info => message.content.dimmed(),
            MessageLevel::Success => message.content.green(),
            MessageLevel::Warning => message.content.yellow(),
            MessageLevel::Error => message.content.red(),
        };
        out.push_str(&format!("{}\n", line));
    }
    out
}

pub fn print_messages(messages: &[CmdMessage]) {
    let output = render_messages(messages);
    if !output.is_empty() {
        eprint!("{}", output);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use docdeck::commands::list;
    use docdeck::content;
    use docdeck::render::render_section;

    #[test]
    fn summaries_show_order_ids_and_counts() {
        let result = list::run(content::catalog()).unwrap();
        let out = render_summaries(&result.summaries);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 9);
        assert!(lines[0].contains("1. home"));
        assert!(lines[2].contains("energy-futures"));
        assert!(lines[2].contains("2 endpoints"));
    }

    #[test]
    fn section_block_contains_method_url_and_params() {
        let catalog = content::catalog();
        let view = render_section(catalog.get("energy-futures").unwrap(), "python");
        let out = render_section_view(&view);

        assert!(out.contains("Energy Futures Data"));
        assert!(out.contains("GET"));
        assert!(out.contains("/datasets/download/energy-futures"));
        assert!(out.contains("start_operating_date"));
        assert!(out.contains("required"));
        assert!(out.contains("control_area"));
        assert!(out.contains("optional"));
        assert!(out.contains("Example · "));
        assert!(out.contains("import requests"));
    }

    #[test]
    fn missing_language_renders_no_example_block() {
        use docdeck::model::{Endpoint, Method, Section};

        let section = Section {
            id: "x".to_string(),
            title: "X".to_string(),
            description: String::new(),
            endpoints: vec![Endpoint {
                method: Method::Get,
                url: "/x".to_string(),
                title: "X".to_string(),
                description: String::new(),
                parameters: vec![],
                examples: Default::default(),
            }],
            content: None,
        };
        let out = render_section_view(&render_section(&section, "python"));
        assert!(!out.contains("Example · "));
    }

    #[test]
    fn parameters_render_in_declared_order() {
        let catalog = content::catalog();
        let view = render_section(catalog.get("energy-futures").unwrap(), "python");
        let out = render_section_view(&view);

        let start = out.find("start_operating_date").unwrap();
        let area = out.find("control_area").unwrap();
        assert!(start < area);
    }

    #[test]
    fn markdown_headings_and_links() {
        let text = markdown_to_text("## Title\n\nSee [docs](https://example.test) now.\n");
        assert!(text.contains("Title"));
        assert!(text.contains("docs (https://example.test)"));
    }

    #[test]
    fn markdown_mailto_links_stay_compact() {
        let text = markdown_to_text("[support@x.test](mailto:support@x.test)\n");
        assert!(text.contains("support@x.test"));
        assert!(!text.contains("mailto:"));
    }

    #[test]
    fn markdown_tables_render_rows() {
        let text = markdown_to_text("| Code | Meaning |\n| --- | --- |\n| 400 | Bad Request |\n");
        assert!(text.contains("Code  │  Meaning"));
        assert!(text.contains("400  │  Bad Request"));
    }

    #[test]
    fn narrative_section_renders_content() {
        let catalog = content::catalog();
        let view = render_section(catalog.get("errors").unwrap(), "python");
        let out = render_section_view(&view);
        assert!(out.contains("Error Codes"));
        assert!(out.contains("429"));
        assert!(out.contains("Too Many Requests"));
    }

    #[test]
    fn messages_render_one_per_line() {
        let messages = vec![
            CmdMessage::info("one"),
            CmdMessage::warning("two"),
        ];
        let out = render_messages(&messages);
        assert_eq!(out.lines().count(), 2);
        assert!(out.contains("one"));
        assert!(out.contains("two"));
    }
}
