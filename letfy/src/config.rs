use std::path::PathBuf;

use clap::ValueEnum;

/// How a parsed `Program` is printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Pretty-printed `Debug` of the program body
    #[default]
    Debug,
    /// Indented node tree
    Tree,
    /// Fully parenthesised source
    Source,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub prompt: String,
    pub show_tokens: bool,
    pub format: OutputFormat,
    pub file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            prompt: "> ".into(),
            show_tokens: false,
            format: OutputFormat::default(),
            file: None,
        }
    }
}
