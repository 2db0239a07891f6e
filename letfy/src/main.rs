use std::path::PathBuf;

use clap::Parser;
use letfy::{
    config::{Config, OutputFormat},
    error::LetfyError,
    repl::{run_source, Repl},
};

#[derive(Parser)]
#[command(name = "letfy", version, about = "Parse letfy expressions into a syntax tree")]
struct Cli {
    /// Prompt shown before each line
    #[arg(short, long, default_value = "> ")]
    prompt: String,

    /// Print the token stream before the tree
    #[arg(short, long)]
    tokens: bool,

    /// Output style for the parsed program
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Debug)]
    format: OutputFormat,

    /// Parse a whole file once instead of starting the REPL
    #[arg(long, value_name = "FILE")]
    file: Option<PathBuf>,
}

impl From<Cli> for Config {
    fn from(cli: Cli) -> Self {
        Config {
            prompt: cli.prompt,
            show_tokens: cli.tokens,
            format: cli.format,
            file: cli.file,
        }
    }
}

fn main() -> Result<(), LetfyError> {
    let config = Config::from(Cli::parse());

    match &config.file {
        Some(path) => {
            let source = std::fs::read_to_string(path)?;
            run_source(&config, &source, &mut std::io::stdout())?;
        }
        None => Repl::new(config)?.run()?,
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::Parser;
    use letfy::config::{Config, OutputFormat};

    use crate::Cli;

    #[test]
    fn test_cli_defaults() {
        let config = Config::from(Cli::parse_from(["letfy"]));
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_cli_flags() {
        let config = Config::from(Cli::parse_from([
            "letfy", "--tokens", "--format", "tree", "--prompt", "$ ", "--file", "a.lf",
        ]));

        assert!(config.show_tokens);
        assert_eq!(config.format, OutputFormat::Tree);
        assert_eq!(config.prompt, "$ ");
        assert_eq!(config.file, Some("a.lf".into()));
    }
}
