use std::path::PathBuf;

use clap::Parser;

use crate::config::{EmitterConfig, Language};

/// Convert the text of the Unicode Thai chart (U0E00.pdf) into constant declarations
/// and lookup tables.
#[derive(Debug, Clone, Parser)]
#[clap(name = "thai-chart-prepare", version)]
pub struct Cli
{
    /// Chart text file, UTF-8.
    #[clap(value_parser)]
    pub input: PathBuf,

    /// Output file name or stdout if unspecified.
    #[clap(value_parser)]
    pub output: Option<PathBuf>,

    /// Write bare hexadecimal literals instead of rune(0x....).
    #[clap(long)]
    pub bare_literals: bool,

    /// Do not write the name-to-code-point table.
    #[clap(long)]
    pub no_reverse_table: bool,

    /// Language of the generated declarations.
    #[clap(long, value_enum, default_value_t = Language::Go)]
    pub lang: Language,
}

impl Cli
{
    pub fn config(&self) -> EmitterConfig
    {
        EmitterConfig {
            emit_scalar_wrapper: !self.bare_literals,
            emit_reverse_table: !self.no_reverse_table,
            language: self.lang,
        }
    }
}
