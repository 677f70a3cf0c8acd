use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

pub const DEFAULT_SERVER: &str = "http://localhost:8080";

#[derive(Parser)]
#[command(
    name = "store",
    about = "Client for the in-memory file store",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Server address
    #[arg(short, long, global = true, default_value = DEFAULT_SERVER)]
    pub server: String,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Clone, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Command {
    /// Add files to the store
    Add(AddArgs),
    /// List files in the store
    #[command(name = "ls")]
    List,
    /// Remove a file from the store
    #[command(name = "rm")]
    Remove(RemoveArgs),
    /// Update a file in the store
    Update(UpdateArgs),
    /// Show a stored file
    Get(GetArgs),
    /// Word count of all files
    #[command(name = "wc")]
    WordCount,
    /// Frequent words in all files
    FreqWords(FreqWordsArgs),
    /// Check that the server is up
    Health,
    /// Run the file store server
    Serve(ServeArgs),
}

#[derive(Args)]
pub struct AddArgs {
    #[arg(required = true)]
    pub files: Vec<String>,
}

#[derive(Args)]
pub struct RemoveArgs {
    pub name: String,
}

#[derive(Args)]
pub struct UpdateArgs {
    pub file: String,
}

#[derive(Args)]
pub struct GetArgs {
    pub name: String,
}

#[derive(Args)]
pub struct FreqWordsArgs {
    /// Number of frequent words to show
    #[arg(short = 'n', long, default_value_t = 10, allow_negative_numbers = true)]
    pub limit: i64,
    /// Order of frequent words (asc or dsc)
    #[arg(long, default_value = "dsc")]
    pub order: String,
}

#[derive(Args)]
pub struct ServeArgs {
    /// Listen address; overrides the config file and PORT
    #[arg(long)]
    pub bind: Option<String>,
    /// TOML config file
    #[arg(long)]
    pub config: Option<PathBuf>,
}
