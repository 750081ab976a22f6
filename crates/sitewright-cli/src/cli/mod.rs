//! CLI command definitions and dispatch for the `swright` binary.
//!
//! Uses clap derive macros for argument parsing. Generation commands take
//! positional NAME and DESCRIPTION with flag-based extras.

pub mod brand;
pub mod build;
pub mod edit;
pub mod generate;
pub mod show;
pub mod sitemap;

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use indicatif::{ProgressBar, ProgressStyle};

/// Generate website artifacts from a business brief.
#[derive(Parser)]
#[command(name = "swright", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output machine-readable JSON instead of styled text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress all output except errors.
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Detailed output (-v for verbose, -vv for debug/trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Working directory for documents, templates, and output
    /// (defaults to the current directory).
    #[arg(long, global = true, value_name = "DIR")]
    pub workspace: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate sitemap.json for a business.
    Sitemap {
        /// Business name.
        name: String,

        /// Short business description.
        description: String,

        /// Extra layout requirements for the page structure.
        #[arg(long)]
        layout: Option<String>,

        /// Overwrite an existing sitemap.json without asking.
        #[arg(long)]
        force: bool,
    },

    /// Generate brand-guide.json for a business.
    Brand {
        /// Business name.
        name: String,

        /// Short business description.
        description: String,

        /// Logo image file to include in the brief.
        #[arg(long, value_name = "FILE")]
        logo: Option<PathBuf>,

        /// Color preferences as role:#hex pairs, e.g. "primary:#112233,accent:#AABBCC".
        #[arg(long, value_name = "PAIRS")]
        colors: Option<String>,

        /// Overwrite an existing brand-guide.json without asking.
        #[arg(long)]
        force: bool,
    },

    /// Build the website source tree from existing artifacts.
    Build {
        /// Input-data JSON file (name, description, logo).
        input: PathBuf,

        /// Sitemap file (defaults to sitemap.json in the workspace).
        #[arg(long, value_name = "FILE")]
        sitemap: Option<PathBuf>,

        /// Brand guide file (defaults to brand-guide.json in the workspace).
        #[arg(long, value_name = "FILE")]
        brand: Option<PathBuf>,

        /// Output directory for the generated source tree.
        #[arg(long, value_name = "DIR")]
        out: Option<PathBuf>,
    },

    /// Run all three agents back-to-back: sitemap, brand guide, site build.
    Generate {
        /// Business name.
        name: String,

        /// Short business description.
        description: String,

        /// Extra layout requirements for the page structure.
        #[arg(long)]
        layout: Option<String>,

        /// Logo image file to include in the brief.
        #[arg(long, value_name = "FILE")]
        logo: Option<PathBuf>,

        /// Color preferences as role:#hex pairs.
        #[arg(long, value_name = "PAIRS")]
        colors: Option<String>,

        /// Output directory for the generated source tree.
        #[arg(long, value_name = "DIR")]
        out: Option<PathBuf>,
    },

    /// Merge a partial-update JSON file into a persisted document.
    Edit {
        /// Document to edit.
        target: DocTarget,

        /// JSON file with the partial update.
        #[arg(long, value_name = "FILE")]
        edits: PathBuf,
    },

    /// Display a persisted document.
    Show {
        /// Document to display.
        target: DocTarget,
    },

    /// Generate shell completions.
    Completions {
        /// Shell to generate completions for.
        shell: Shell,
    },
}

/// Persisted documents addressable by edit/show.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum DocTarget {
    Sitemap,
    Brand,
}

/// Steady-tick spinner for the long LLM calls.
pub(crate) fn spinner(message: &str) -> ProgressBar {
    let bar = ProgressBar::new_spinner();
    bar.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.cyan} {msg}")
            .unwrap(),
    );
    bar.set_message(message.to_string());
    bar.enable_steady_tick(std::time::Duration::from_millis(80));
    bar
}
