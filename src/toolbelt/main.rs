use clap::Parser;
use colored::*;
use directories::ProjectDirs;
use std::path::PathBuf;
use toolbelt::api::{CmdMessage, ConfigAction, MessageLevel, ToolbeltApi};
use toolbelt::cache::{Bucket, CacheSnapshot};
use toolbelt::config::ToolbeltConfig;
use toolbelt::error::Result;
use toolbelt::model::{Alternative, CategoryFacet, DocLink, Entry};
use unicode_width::UnicodeWidthStr;

mod args;
use args::{Cli, Commands};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

struct AppContext {
    api: ToolbeltApi,
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let ctx = init_context(&cli)?;

    match cli.command {
        Commands::Add {
            name,
            primary,
            secondary,
            language,
            proficiency,
            last_used,
            docs,
            alts,
            tags,
            description,
        } => {
            let entry = build_entry(
                name,
                primary,
                secondary,
                language,
                proficiency,
                last_used,
                &docs,
                &alts,
                &tags,
                description,
            );
            handle_add(&ctx, entry)
        }
        Commands::List => handle_list(&ctx),
        Commands::Suggest { bucket } => handle_suggest(&ctx, bucket),
        Commands::Remember { bucket, value } => handle_remember(&ctx, bucket, value),
        Commands::New { path, force } => handle_new(&ctx, path, force),
        Commands::Config { key, value } => handle_config(&ctx, key, value),
    }
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    // TOOLBELT_CONFIG_DIR lets tests and scripts pin the config location
    let config_dir = match std::env::var_os("TOOLBELT_CONFIG_DIR") {
        Some(dir) => PathBuf::from(dir),
        None => ProjectDirs::from("com", "toolbelt", "toolbelt")
            .expect("Could not determine config dir")
            .config_dir()
            .to_path_buf(),
    };

    let config = ToolbeltConfig::load(&config_dir).unwrap_or_default();
    let catalog = cli.file.clone().or(config.catalog);

    Ok(AppContext {
        api: ToolbeltApi::new(catalog, config_dir),
    })
}

#[allow(clippy::too_many_arguments)]
fn build_entry(
    name: String,
    primary: Option<String>,
    secondary: Option<String>,
    language: Option<String>,
    proficiency: Option<String>,
    last_used: Option<chrono::NaiveDate>,
    docs: &[String],
    alts: &[String],
    tags: &[String],
    description: Option<String>,
) -> Entry {
    let mut entry = Entry::new(name);
    // Both facets are always written, as blanks if not given
    entry.category = vec![
        CategoryFacet::Primary(primary.unwrap_or_default()),
        CategoryFacet::Secondary(secondary.unwrap_or_default()),
    ];
    entry.language = language.unwrap_or_default();
    entry.proficiency = proficiency.unwrap_or_default();
    if let Some(date) = last_used {
        entry.last_used = date;
    }
    entry.documentation = docs
        .iter()
        .filter_map(|raw| parse_link(raw))
        .map(|(title, url)| DocLink { title, url })
        .collect();
    entry.alternatives = alts
        .iter()
        .filter_map(|raw| parse_link(raw))
        .map(|(name, url)| Alternative { name, url })
        .collect();
    entry.tags = split_tags(tags);
    entry.description = description.unwrap_or_default();
    entry
}

fn handle_add(ctx: &AppContext, entry: Entry) -> Result<()> {
    let result = ctx.api.add_entry(entry)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_list(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.list_entries()?;
    print_entries(&result.entries);
    print_messages(&result.messages);
    Ok(())
}

fn handle_suggest(ctx: &AppContext, bucket: Option<String>) -> Result<()> {
    let result = ctx.api.suggest(bucket.as_deref())?;
    if let Some(snapshot) = &result.cache {
        print_snapshot(snapshot);
    } else {
        for value in &result.suggestions {
            println!("{}", value);
        }
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_remember(ctx: &AppContext, bucket: String, value: String) -> Result<()> {
    let result = ctx.api.remember(&bucket, &value)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_new(ctx: &AppContext, path: Option<PathBuf>, force: bool) -> Result<()> {
    let result = ctx.api.new_catalog(path, force)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };

    let result = ctx.api.config(action)?;
    if let Some(config) = &result.config {
        println!(
            "catalog = {}",
            config
                .get("catalog")
                .unwrap_or_else(|| "(not set)".to_string())
        );
    }
    print_messages(&result.messages);
    Ok(())
}

/// Splits the "Title=URL" link syntax on the first '='. Items without both
/// halves are dropped.
fn parse_link(raw: &str) -> Option<(String, String)> {
    let (title, url) = raw.split_once('=')?;
    let title = title.trim();
    let url = url.trim();
    if title.is_empty() || url.is_empty() {
        return None;
    }
    Some((title.to_string(), url.to_string()))
}

/// Comma-splits tag arguments, trimming each and dropping empties.
fn split_tags(raw: &[String]) -> Vec<String> {
    raw.iter()
        .flat_map(|s| s.split(','))
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

const LINE_WIDTH: usize = 100;
const TIME_WIDTH: usize = 14;

fn print_entries(entries: &[Entry]) {
    if entries.is_empty() {
        println!("No entries found.");
        return;
    }

    for entry in entries {
        let facets = match (
            entry.primary_category().filter(|s| !s.is_empty()),
            entry.secondary_category().filter(|s| !s.is_empty()),
        ) {
            (Some(p), Some(s)) => format!("{}/{}", p, s),
            (Some(p), None) => p.to_string(),
            (None, Some(s)) => s.to_string(),
            (None, None) => String::new(),
        };

        let detail = [
            facets.as_str(),
            entry.language.as_str(),
            entry.proficiency.as_str(),
        ]
        .iter()
        .filter(|part| !part.is_empty())
        .cloned()
        .collect::<Vec<_>>()
        .join("  ");

        let name_detail = if detail.is_empty() {
            entry.name.clone()
        } else {
            format!("{} {}", entry.name, detail)
        };

        let available = LINE_WIDTH.saturating_sub(4 + TIME_WIDTH);
        let display = truncate_to_width(&name_detail, available);
        let padding = available.saturating_sub(display.width());
        let time_ago = format_time_ago(entry.last_used);

        println!(
            "    {}{}{}",
            display,
            " ".repeat(padding),
            time_ago.dimmed()
        );
    }
}

fn print_snapshot(snapshot: &CacheSnapshot) {
    let buckets = [
        (Bucket::PrimaryCategory, &snapshot.primary_category),
        (Bucket::SecondaryCategory, &snapshot.secondary_category),
        (Bucket::Language, &snapshot.language),
        (Bucket::Proficiency, &snapshot.proficiency),
        (Bucket::Tags, &snapshot.tags),
    ];
    for (bucket, values) in buckets {
        println!("{}", bucket.to_string().bold());
        for value in values {
            println!("  {}", value);
        }
    }
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    use unicode_width::UnicodeWidthChar;

    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}

fn format_time_ago(date: chrono::NaiveDate) -> String {
    let today = chrono::Local::now().date_naive();
    let days = (today - date).num_days();

    let time_str = if days <= 0 {
        "today".to_string()
    } else {
        let formatter = timeago::Formatter::new();
        formatter.convert(std::time::Duration::from_secs(days as u64 * 86_400))
    };

    format!("{:>width$}", time_str, width = TIME_WIDTH)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_link_splits_on_first_equals() {
        assert_eq!(
            parse_link("Manual=https://example.com/?q=1"),
            Some(("Manual".to_string(), "https://example.com/?q=1".to_string()))
        );
    }

    #[test]
    fn parse_link_drops_malformed_items() {
        assert_eq!(parse_link("no separator"), None);
        assert_eq!(parse_link("=https://example.com"), None);
        assert_eq!(parse_link("Manual= "), None);
    }

    #[test]
    fn split_tags_trims_and_drops_empties() {
        let raw = vec!["a, b".to_string(), "".to_string(), " c ,,d".to_string()];
        assert_eq!(split_tags(&raw), ["a", "b", "c", "d"]);
    }

    #[test]
    fn build_entry_always_writes_both_facets() {
        let entry = build_entry(
            "Grep".to_string(),
            Some("CLI".to_string()),
            None,
            None,
            None,
            None,
            &[],
            &[],
            &[],
            None,
        );
        assert_eq!(entry.category.len(), 2);
        assert_eq!(entry.primary_category(), Some("CLI"));
        assert_eq!(entry.secondary_category(), Some(""));
    }
}
