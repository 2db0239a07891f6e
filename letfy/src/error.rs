use std::fmt::{self, Display};
use std::io;

use compiler::error::CompilerError;
use rustyline::error::ReadlineError;

#[derive(Debug)]
pub enum LetfyError {
    CompileError(CompilerError),
    IoError(String),
    ReadlineError(String),
}

impl From<io::Error> for LetfyError {
    fn from(value: io::Error) -> Self {
        LetfyError::IoError(value.to_string())
    }
}

impl From<ReadlineError> for LetfyError {
    fn from(value: ReadlineError) -> Self {
        LetfyError::ReadlineError(value.to_string())
    }
}

impl From<CompilerError> for LetfyError {
    fn from(value: CompilerError) -> Self {
        LetfyError::CompileError(value)
    }
}

impl Display for LetfyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LetfyError::CompileError(e) => write!(f, "{}", e),
            LetfyError::IoError(e) => write!(f, "I/O error: {}", e),
            LetfyError::ReadlineError(e) => write!(f, "Readline error: {}", e),
        }
    }
}

impl std::error::Error for LetfyError {}
