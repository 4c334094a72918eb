//! CLI argument definitions using clap derive

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::cli::commands::{
    asset::AssetCommands, cert::CertCommands, completions::CompletionsArgs,
    contract::ContractCommands, facility::FacilityCommands, import::ImportArgs, init::InitArgs,
    report::ReportCommands, seed::SeedArgs, validate::ValidateArgs, wo::WoCommands,
};

#[derive(Parser)]
#[command(name = "eiq")]
#[command(author, version, about = "Equipment intelligence toolkit")]
#[command(
    long_about = "A Unix-style toolkit for managing equipment inventory, certifications, \
service contracts, and maintenance history as plain text files, with derived \
risk and certification reporting."
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub global: GlobalOpts,
}

#[derive(clap::Args, Clone, Debug)]
pub struct GlobalOpts {
    /// Output format
    #[arg(long, short = 'f', global = true, default_value = "auto")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    /// Project root (default: auto-detect by finding .eiq/)
    #[arg(long, global = true)]
    pub project: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize a new project
    Init(InitArgs),

    /// Facility record management
    #[command(subcommand)]
    Facility(FacilityCommands),

    /// Asset inventory management
    #[command(subcommand)]
    Asset(AssetCommands),

    /// Work order management
    #[command(subcommand)]
    Wo(WoCommands),

    /// Manufacturer contract management
    #[command(subcommand)]
    Contract(ContractCommands),

    /// Certification record management
    #[command(subcommand)]
    Cert(CertCommands),

    /// Import records from CSV files
    Import(ImportArgs),

    /// Generate a reproducible synthetic data set
    Seed(SeedArgs),

    /// Validate project files against schemas
    Validate(ValidateArgs),

    /// Generate equipment and maintenance reports
    #[command(subcommand)]
    Report(ReportCommands),

    /// Generate shell completion scripts
    Completions(CompletionsArgs),
}

#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Automatically detect based on context (yaml for show, tsv for list)
    #[default]
    Auto,
    /// YAML format (full fidelity)
    Yaml,
    /// Tab-separated values (for piping)
    Tsv,
    /// JSON format (for programming)
    Json,
    /// CSV format (for spreadsheets)
    Csv,
    /// Markdown tables
    Md,
    /// Just IDs, one per line
    Id,
}
