//! CLI commands and argument parsing

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Static site page generator CLI
#[derive(Parser, Debug)]
#[command(name = "site-pager")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Write page descriptors to this file instead of stdout
    #[arg(short, long, global = true)]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Split records into numbered listing pages
    Paginate {
        /// Records file (.json, .jsonl, .ndjson, .yaml, .yml)
        #[arg(short, long)]
        records: PathBuf,

        /// Component every page is rendered with
        #[arg(long)]
        component: String,

        /// Records per page
        #[arg(short, long, default_value = "10")]
        limit: usize,

        /// Prefix for the default `/`, `/2`, ... paths
        #[arg(long, conflicts_with = "path_template")]
        prefix: Option<String>,

        /// Path template using `{{ page }}`, e.g. `/archive/page/{{ page }}`
        #[arg(long)]
        path_template: Option<String>,

        /// Path for page 1 when using --path-template
        #[arg(long, requires = "path_template")]
        first_page: Option<String>,
    },

    /// Create one page per record, linked to its neighbours
    Linked {
        /// Records file (.json, .jsonl, .ndjson, .yaml, .yml)
        #[arg(short, long)]
        records: PathBuf,

        /// Component every page is rendered with
        #[arg(long)]
        component: String,

        /// Path template, e.g. `/blog/{{ record.slug }}`
        #[arg(short, long)]
        path: String,

        /// Context entry as `key=template` (repeatable)
        #[arg(long = "context", value_name = "KEY=TEMPLATE")]
        context: Vec<String>,

        /// Dotted record field holding the page layout
        #[arg(long)]
        layout_field: Option<String>,

        /// Link the last record back to the first
        #[arg(long)]
        circular: bool,
    },

    /// Run the jobs of a build plan
    Run {
        /// Build plan file (YAML)
        #[arg(long)]
        plan: PathBuf,

        /// Only run this job (repeatable)
        #[arg(long = "job", value_name = "NAME")]
        jobs: Vec<String>,
    },

    /// Validate a build plan without building
    Validate {
        /// Build plan file (YAML)
        #[arg(long)]
        plan: PathBuf,
    },
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output (one page per line)
    Json,
    /// Indented JSON
    Pretty,
}
