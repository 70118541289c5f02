use clap::Parser;
use colored::*;
use console::{Key, Term};
use docdeck::api::{ConfigAction, DocsApi};
use docdeck::catalog::Catalog;
use docdeck::clipboard::{copy_to_clipboard, format_for_clipboard};
use docdeck::content;
use docdeck::error::Result;
use docdeck::host::{DocumentHost, TextHost};
use docdeck::nav::Navigator;
use directories::ProjectDirs;
use std::path::PathBuf;

mod args;
mod cli;

use args::{Cli, Commands};
use cli::render::{
    print_messages, render_languages, render_section_view, render_summaries,
};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

struct AppContext {
    api: DocsApi,
    language: Option<String>,
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::List) | None => handle_list(&ctx),
        Some(Commands::View { ids }) => handle_view(&ctx, ids),
        Some(Commands::Browse) => handle_browse(&ctx),
        Some(Commands::Copy { id, endpoint }) => handle_copy(&ctx, id, endpoint),
        Some(Commands::Search { term }) => handle_search(&ctx, term),
        Some(Commands::Langs) => handle_langs(&ctx),
        Some(Commands::Export { ids }) => handle_export(&ctx, ids),
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
    }
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    // DOCDECK_CONFIG_DIR lets tests (and scripts) pin the config location.
    let config_dir = match std::env::var_os("DOCDECK_CONFIG_DIR") {
        Some(dir) => PathBuf::from(dir),
        None => ProjectDirs::from("com", "docdeck", "docdeck")
            .expect("Could not determine config dir")
            .config_dir()
            .to_path_buf(),
    };

    let api = DocsApi::new(content::catalog(), config_dir);
    Ok(AppContext {
        api,
        language: cli.language.clone(),
    })
}

fn handle_list(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.list_sections()?;
    print!("{}", render_summaries(&result.summaries));
    print_messages(&result.messages);
    Ok(())
}

fn handle_view(ctx: &AppContext, ids: Vec<String>) -> Result<()> {
    let result = ctx.api.view_sections(&ids, ctx.language.as_deref())?;
    for (pos, view) in result.views.iter().enumerate() {
        if pos > 0 {
            println!();
        }
        print!("{}", render_section_view(view));
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_copy(ctx: &AppContext, id: String, endpoint: usize) -> Result<()> {
    let result = ctx.api.copy_example(&id, endpoint, ctx.language.as_deref())?;

    if let Some(copied) = &result.copied {
        let text = format_for_clipboard(&copied.url, &copied.language, &copied.code);
        match copy_to_clipboard(&text) {
            Ok(()) => println!(
                "{}",
                format!("Copied {} example for {} to clipboard.", copied.language, copied.url)
                    .green()
            ),
            Err(e) => eprintln!("{}", format!("Warning: Failed to copy to clipboard: {}", e).yellow()),
        }
    }

    print_messages(&result.messages);
    Ok(())
}

fn handle_search(ctx: &AppContext, term: String) -> Result<()> {
    let result = ctx.api.search_sections(&term)?;
    if result.summaries.is_empty() {
        println!("No sections match '{}'.", term);
    } else {
        print!("{}", render_summaries(&result.summaries));
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_langs(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.languages()?;
    let current = match &ctx.language {
        Some(language) => language.to_lowercase(),
        None => ctx.api.startup_language()?,
    };
    print!("{}", render_languages(&result.languages, &current));
    print_messages(&result.messages);
    Ok(())
}

fn handle_export(ctx: &AppContext, ids: Vec<String>) -> Result<()> {
    let result = ctx.api.export_sections(&ids)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key.as_deref(), value) {
        (None, _) => ConfigAction::ShowAll,
        (Some("language"), None) => ConfigAction::ShowKey("language".to_string()),
        (Some("language"), Some(v)) => ConfigAction::SetLanguage(v),
        (Some(other), _) => {
            println!("Unknown config key: {}", other);
            return Ok(());
        }
    };

    let result = ctx.api.config(action)?;
    if let Some(config) = &result.config {
        println!("language = {}", config.language());
    }
    print_messages(&result.messages);
    Ok(())
}

// ---------------------------------------------------------------------------
// Interactive browsing
// ---------------------------------------------------------------------------

fn handle_browse(ctx: &AppContext) -> Result<()> {
    let catalog = ctx.api.catalog();
    let mut nav = Navigator::new(catalog);

    let startup = match &ctx.language {
        Some(language) => language.to_lowercase(),
        None => ctx.api.startup_language()?,
    };
    // Falls back to the built-in default when the key is unknown.
    nav.set_language(catalog, &startup);

    let term = Term::stdout();
    term.hide_cursor()?;
    let outcome = browse_loop(ctx, &term, catalog, &mut nav);
    term.show_cursor()?;
    outcome
}

fn browse_loop(ctx: &AppContext, term: &Term, catalog: &Catalog, nav: &mut Navigator) -> Result<()> {
    let (rows, cols) = term.size();
    let viewport_rows = (rows as usize).saturating_sub(3).max(5);
    let width = cols as usize;

    let mut host = build_host(ctx, nav.language(), viewport_rows)?;
    let mut notice: Option<String> = None;
    let page = viewport_rows.saturating_sub(2).max(1) as i64;

    loop {
        draw(term, catalog, nav, &host, viewport_rows, width, notice.take())?;

        match term.read_key()? {
            Key::Char('q') | Key::Escape => break,
            Key::ArrowDown | Key::Char('j') => {
                host.scroll_by(1);
                nav.on_scroll(&host.metrics());
            }
            Key::ArrowUp | Key::Char('k') => {
                host.scroll_by(-1);
                nav.on_scroll(&host.metrics());
            }
            Key::PageDown | Key::Char(' ') => {
                host.scroll_by(page);
                nav.on_scroll(&host.metrics());
            }
            Key::PageUp => {
                host.scroll_by(-page);
                nav.on_scroll(&host.metrics());
            }
            Key::Home => {
                host.scroll_by(-(host.line_count() as i64));
                nav.on_scroll(&host.metrics());
            }
            Key::End => {
                host.scroll_by(host.line_count() as i64);
                nav.on_scroll(&host.metrics());
            }
            Key::ArrowRight | Key::Char('n') => {
                jump_relative(catalog, nav, &mut host, 1);
            }
            Key::ArrowLeft | Key::Char('p') => {
                jump_relative(catalog, nav, &mut host, -1);
            }
            Key::Char(c @ '1'..='9') => {
                let pos = c as usize - '1' as usize;
                if let Some(section) = catalog.sections().get(pos) {
                    let id = section.id.clone();
                    jump_to(catalog, nav, &mut host, &id);
                }
            }
            Key::Char('l') => {
                let languages = catalog.languages();
                let pos = languages
                    .iter()
                    .position(|l| l == nav.language())
                    .unwrap_or(0);
                let next = languages[(pos + 1) % languages.len()].clone();
                nav.set_language(catalog, &next);

                // Language switches re-render every section, so the layout
                // (and with it every anchor) is rebuilt from scratch.
                host = build_host(ctx, nav.language(), viewport_rows)?;
                let active = nav.active_section().to_string();
                jump_to(catalog, nav, &mut host, &active);
                notice = Some(format!("Language: {}", next));
            }
            Key::Char('c') => {
                notice = Some(copy_active_example(ctx, nav)?);
            }
            _ => {}
        }
    }

    term.clear_screen()?;
    Ok(())
}

fn build_host(ctx: &AppContext, language: &str, viewport_rows: usize) -> Result<TextHost> {
    let result = ctx.api.view_sections::<&str>(&[], Some(language))?;
    let blocks: Vec<(String, String)> = result
        .views
        .iter()
        .map(|view| (view.id.clone(), render_section_view(view)))
        .collect();
    Ok(TextHost::new(&blocks, viewport_rows))
}

fn jump_to(catalog: &Catalog, nav: &mut Navigator, host: &mut TextHost, id: &str) {
    if let Some(request) = nav.select_section(catalog, id) {
        host.scroll_to(&request);
        nav.on_scroll(&host.metrics());
    }
}

fn jump_relative(catalog: &Catalog, nav: &mut Navigator, host: &mut TextHost, delta: isize) {
    let Some(pos) = catalog.position(nav.active_section()) else {
        return;
    };
    let target = pos as isize + delta;
    if target < 0 || target as usize >= catalog.len() {
        return;
    }
    let id = catalog.sections()[target as usize].id.clone();
    jump_to(catalog, nav, host, &id);
}

fn copy_active_example(ctx: &AppContext, nav: &Navigator) -> Result<String> {
    let result = ctx
        .api
        .copy_example(nav.active_section(), 1, Some(nav.language()))?;

    if let Some(copied) = &result.copied {
        let text = format_for_clipboard(&copied.url, &copied.language, &copied.code);
        return Ok(match copy_to_clipboard(&text) {
            Ok(()) => format!("Copied {} example for {}.", copied.language, copied.url),
            Err(e) => format!("Clipboard failed: {}", e),
        });
    }

    Ok(result
        .messages
        .first()
        .map(|m| m.content.clone())
        .unwrap_or_else(|| "Nothing to copy here.".to_string()))
}

fn draw(
    term: &Term,
    catalog: &Catalog,
    nav: &Navigator,
    host: &TextHost,
    viewport_rows: usize,
    width: usize,
    notice: Option<String>,
) -> Result<()> {
    let nav_width = catalog
        .sections()
        .iter()
        .map(|s| console::measure_text_width(&s.title))
        .max()
        .unwrap_or(0)
        + 4;

    term.clear_screen()?;

    let header = format!(
        "docdeck · {} · ↑/↓ scroll · ←/→ section · 1-9 jump · l language · c copy · q quit",
        nav.language().bold()
    );
    term.write_line(&console::truncate_str(&header, width, "…"))?;

    let visible = host.visible_lines();
    for row in 0..viewport_rows {
        let left = match catalog.sections().get(row) {
            Some(section) => {
                let active = section.id == nav.active_section();
                let marker = if active { "▸ " } else { "  " };
                let label = format!("{}{}", marker, section.title);
                let pad = " ".repeat(nav_width.saturating_sub(console::measure_text_width(&label)));
                if active {
                    format!("{}{}", label.bold().cyan(), pad)
                } else {
                    format!("{}{}", label, pad)
                }
            }
            None => " ".repeat(nav_width),
        };

        let right = visible.get(row).map(String::as_str).unwrap_or("");
        let line = format!("{} │ {}", left, right);
        term.write_line(&console::truncate_str(&line, width, "…"))?;
    }

    let status = notice.unwrap_or_else(|| {
        format!(
            "line {} / {}",
            host.viewport_top() + 1,
            host.line_count()
        )
    });
    term.write_line(&console::truncate_str(&status.dimmed().to_string(), width, "…"))?;

    Ok(())
}
