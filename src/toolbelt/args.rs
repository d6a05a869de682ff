use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Version string including git hash and commit date for dev builds.
/// Format: "0.3.2" for releases, "0.3.2@abc1234 2024-01-15" for dev builds
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_COMMIT_DATE: &str = env!("GIT_COMMIT_DATE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{} {}", VERSION, GIT_HASH, GIT_COMMIT_DATE)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "toolbelt")]
#[command(version = get_version())]
#[command(about = "Markdown catalog manager for your developer toolbelt", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Catalog file to operate on (overrides the configured default)
    #[arg(short, long, global = true)]
    pub file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a tool entry to the catalog
    #[command(alias = "a")]
    Add {
        /// Name of the tool
        name: String,

        /// Primary category (e.g. "Development Tools")
        #[arg(long)]
        primary: Option<String>,

        /// Secondary category
        #[arg(long)]
        secondary: Option<String>,

        /// Implementation language
        #[arg(short, long)]
        language: Option<String>,

        /// Proficiency level (e.g. beginner, intermediate, advanced)
        #[arg(short, long)]
        proficiency: Option<String>,

        /// Last used date (defaults to today)
        #[arg(long, value_name = "YYYY-MM-DD")]
        last_used: Option<NaiveDate>,

        /// Documentation link as "Title=URL" (repeatable)
        #[arg(long = "doc", value_name = "TITLE=URL")]
        docs: Vec<String>,

        /// Alternative tool as "Name=URL" (repeatable)
        #[arg(long = "alt", value_name = "NAME=URL")]
        alts: Vec<String>,

        /// Comma-separated tags (repeatable)
        #[arg(short, long = "tag", value_name = "TAG[,TAG...]")]
        tags: Vec<String>,

        /// Free-form description
        #[arg(short, long)]
        description: Option<String>,
    },

    /// List catalog entries
    #[command(alias = "ls")]
    List,

    /// Print remembered values for one bucket, or all of them
    Suggest {
        /// Bucket name (primary_category, secondary_category, language,
        /// proficiency or tags); omit to show every bucket
        bucket: Option<String>,
    },

    /// Remember a value so it is suggested later
    Remember {
        /// Bucket to remember it under
        bucket: String,

        /// Value to remember
        value: String,
    },

    /// Create a new catalog file from the template
    New {
        /// Where to create it (defaults to the selected catalog)
        path: Option<PathBuf>,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Get or set configuration
    Config {
        /// Configuration key (e.g., catalog)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}
