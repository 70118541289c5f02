use clap::{Parser, Subcommand};

/// Returns the version string, including git hash and commit date for non-release builds.
/// Format: "0.3.2" for releases, "0.3.2@abc1234 2024-01-15 14:30" for dev builds
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_COMMIT_DATE: &str = env!("GIT_COMMIT_DATE");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{} {}", VERSION, GIT_HASH, GIT_COMMIT_DATE)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "docdeck", bin_name = "docdeck", version = get_version())]
#[command(about = "Browse API reference documentation in the terminal", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Example language to render (see `docdeck langs`)
    #[arg(short, long, global = true)]
    pub language: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List sections in navigation order
    #[command(alias = "ls")]
    List,

    /// Render one or more sections (all of them when no ids are given)
    #[command(alias = "v")]
    View {
        /// Section ids (e.g. auth energy-futures)
        ids: Vec<String>,
    },

    /// Browse the documentation interactively
    #[command(alias = "b")]
    Browse,

    /// Copy an endpoint's example to the clipboard
    #[command(alias = "c")]
    Copy {
        /// Section id (e.g. auth)
        id: String,

        /// Endpoint position within the section, starting at 1
        #[arg(short, long, default_value_t = 1)]
        endpoint: usize,
    },

    /// Search section titles, descriptions and endpoints
    Search { term: String },

    /// List the selectable example languages
    Langs,

    /// Export sections to a .tar.gz archive of markdown documents
    Export {
        /// Section ids (all of them when omitted)
        ids: Vec<String>,
    },

    /// Get or set configuration
    Config {
        /// Configuration key (e.g., language)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}
