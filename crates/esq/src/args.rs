//! Clap argument definitions for the `esq` CLI.

use clap::{Args, Parser, Subcommand};

/// Top-level CLI options.
#[derive(Parser)]
#[command(name = "esq")]
#[command(about = "Compile declarative search intents into query documents and templates")]
pub struct Cli {
    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Supported `esq` subcommands.
#[derive(Subcommand)]
pub enum Commands {
    /// Compile and print the immediate query document
    Query(QueryCommand),

    /// Compile and print the parameterized search template
    Template(TemplateCommand),
}

/// Shared flags describing the search intent.
#[derive(Args, Debug, Clone)]
pub struct IntentArgs {
    /// Target index name
    #[arg(long, default_value = "default")]
    pub index: String,

    /// Free-text query
    #[arg(short = 'q', long, default_value = "")]
    pub query: String,

    /// Field to search (repeat for several)
    #[arg(short = 'f', long = "field")]
    pub fields: Vec<String>,

    /// Per-field boost as field=N (repeat for several)
    #[arg(short = 'w', long = "weight")]
    pub weights: Vec<String>,

    /// Field eligible for typo tolerance (repeat for several)
    #[arg(long = "typo-field")]
    pub typo_fields: Vec<String>,

    /// Minimum term length before one typo is tolerated
    #[arg(long, default_value = "3")]
    pub one_typo_chars: usize,

    /// Minimum term length before two typos are tolerated
    #[arg(long, default_value = "6")]
    pub two_typo_chars: usize,

    /// Page size (also the template's size default)
    #[arg(short = 'n', long, default_value = "20")]
    pub size: u64,

    /// Reserve a slot for an externally supplied filter
    #[arg(long)]
    pub filterable: bool,

    /// Let a bound sort variable override the default sorts
    #[arg(long)]
    pub sortable: bool,

    /// Sort entry as field:asc, field:desc, or _score (repeat for several)
    #[arg(short = 's', long = "sort")]
    pub sorts: Vec<String>,

    /// Field to highlight (repeat for several)
    #[arg(long = "highlight")]
    pub highlight_fields: Vec<String>,

    /// Tag inserted before highlighted matches
    #[arg(long, default_value = "<em>")]
    pub pre_tag: String,

    /// Tag inserted after highlighted matches
    #[arg(long, default_value = "</em>")]
    pub post_tag: String,

    /// Field to retrieve (repeat for several; default all)
    #[arg(long = "retrieve")]
    pub retrieve: Vec<String>,
}

/// Arguments for `esq query`.
#[derive(Args, Debug, Clone)]
pub struct QueryCommand {
    /// The search intent.
    #[command(flatten)]
    pub intent: IntentArgs,

    /// Print compact JSON instead of pretty-printed
    #[arg(long)]
    pub compact: bool,
}

/// Arguments for `esq template`.
#[derive(Args, Debug, Clone)]
pub struct TemplateCommand {
    /// The search intent.
    #[command(flatten)]
    pub intent: IntentArgs,

    /// Print the full script wire document instead of the bare source
    #[arg(long)]
    pub script: bool,
}
