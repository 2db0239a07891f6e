use std::io::Write;

use compiler::{ast::Program, error::CompilerError, parser::Parser, token::Token};
use rustyline::{error::ReadlineError, history::FileHistory};

use crate::{
    config::{Config, OutputFormat},
    error::LetfyError,
};

#[derive(Debug, PartialEq)]
pub enum IterStatus {
    Continue,
    Break,
}

pub fn render_tokens(tokens: &[Token]) -> String {
    tokens
        .iter()
        .map(|t| format!("{:?} {} ({})\n", t.kind, t, t.span))
        .collect()
}

pub fn render_program(program: &Program, format: OutputFormat) -> String {
    match format {
        OutputFormat::Debug => format!("{:#?}\n", program.body),
        OutputFormat::Tree => program.tree(),
        OutputFormat::Source if program.is_empty() => String::new(),
        OutputFormat::Source => format!("{}\n", program),
    }
}

/// Parses one unit of source and writes the result to `out`. Each call is
/// independent: a failure leaves nothing behind for the next call.
pub fn run_source(config: &Config, source: &str, out: &mut dyn Write) -> Result<(), LetfyError> {
    let tokens = compiler::tokenize(source)?;
    if config.show_tokens {
        out.write_all(render_tokens(&tokens).as_bytes())?;
    }

    let program = Parser::new(tokens).parse().map_err(CompilerError::from)?;
    out.write_all(render_program(&program, config.format).as_bytes())?;

    Ok(())
}

/// Line handling, kept apart from the line editor so it can run without a
/// terminal.
pub struct Session {
    config: Config,
    out: Box<dyn Write>,
    err: Box<dyn Write>,
}

impl Session {
    pub fn new(config: Config, out: Box<dyn Write>, err: Box<dyn Write>) -> Self {
        Session { config, out, err }
    }

    pub fn handle_line(&mut self, line: &str) -> Result<IterStatus, LetfyError> {
        let line = line.trim_end_matches(|c: char| c == '\n' || c == '\r');
        if line.is_empty() || line == "exit" {
            return Ok(IterStatus::Break);
        }

        match run_source(&self.config, line, &mut self.out) {
            Ok(()) => {}
            Err(LetfyError::CompileError(e)) => self.report(&e)?,
            Err(e) => return Err(e),
        }

        Ok(IterStatus::Continue)
    }

    fn report(&mut self, e: &CompilerError) -> Result<(), LetfyError> {
        writeln!(&mut self.err, "{}", e)?;
        Ok(())
    }
}

pub struct Repl {
    editor: rustyline::Editor<(), FileHistory>,
    session: Session,
}

impl Repl {
    pub fn new(config: Config) -> Result<Self, LetfyError> {
        Ok(Repl {
            editor: rustyline::DefaultEditor::new()?,
            session: Session::new(
                config,
                Box::new(std::io::stdout()),
                Box::new(std::io::stderr()),
            ),
        })
    }

    fn iter(&mut self) -> Result<IterStatus, LetfyError> {
        match self.editor.readline(&self.session.config.prompt) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    self.editor.add_history_entry(line.trim())?;
                }

                self.session.handle_line(&line)
            }
            Err(ReadlineError::Interrupted) => {
                writeln!(&mut self.session.err, "SIGINT received; exiting...")?;
                Ok(IterStatus::Break)
            }
            Err(ReadlineError::Eof) => Ok(IterStatus::Break),
            Err(err) => {
                writeln!(&mut self.session.err, "Error: {err:?}")?;
                Ok(IterStatus::Continue)
            }
        }
    }

    pub fn run(&mut self) -> Result<(), LetfyError> {
        writeln!(
            &mut self.session.out,
            "Welcome to letfy! Type 'exit' to quit."
        )?;

        while self.iter()? == IterStatus::Continue {}
        Ok(())
    }
}
