use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "logo_promptgen", version, about = "Brand brief wizard that writes logo prompts for image models")]
pub struct Args {
    /// TOML config file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Directory holding the state database
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    #[arg(long, global = true, default_value_t = false)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Walk through the seven wizard steps
    Wizard {
        /// Step to start at (1-7)
        #[arg(long, default_value_t = 1)]
        step: usize,
    },
    /// Print the prompt, or write it to a file
    Prompt {
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Show the stored record
    Show,
    /// Set a field, e.g. `set meta.name Acme` or `set stil.adjektive modern matt`
    Set {
        field: String,
        #[arg(num_args = 0..)]
        value: Vec<String>,
    },
    /// Toggle a keyword in a list field
    Toggle { field: String, keyword: String },
    /// Normalize colors and rate their contrast on white
    Contrast {
        #[arg(required = true)]
        colors: Vec<String>,
    },
    /// Export the record as JSON
    Export {
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Replace the record with an exported JSON file
    Import { file: PathBuf },
    /// Restore the starter record
    Reset {
        #[arg(long, default_value_t = false)]
        yes: bool,
    },
    /// Delete the stored record
    Clear,
    /// List keyword catalogs and their design phrases
    Options,
}
