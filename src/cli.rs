use clap::Parser;
use std::path::PathBuf;

use crate::config::Config;
use crate::license::FormState;

/// Fill in the BSD 3-Clause license with a year and an author.
#[derive(Debug, Parser)]
#[command(name = "bsd3gen", version, about)]
pub struct Cli {
    /// Copyright year (4 digits).
    #[arg(long)]
    pub year: Option<String>,

    /// Copyright holder.
    #[arg(long)]
    pub author: Option<String>,

    /// Print the license to stdout instead of opening the form.
    #[arg(long)]
    pub print: bool,

    /// Path to an alternative config file.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

impl Cli {
    /// Initial form contents: command line first, then config defaults.
    pub fn initial_form(&self, config: &Config) -> FormState {
        let year = self
            .year
            .clone()
            .or_else(|| config.defaults.year.clone())
            .unwrap_or_default();
        let author = self
            .author
            .clone()
            .or_else(|| config.defaults.author.clone())
            .unwrap_or_default();
        FormState::new(year, author)
    }
}
