//! Line input and the bounded-retry prompt.
//!
//! The input provider is an explicit object handed to the game loop,
//! and validators receive the candidate line as a plain argument, so
//! the whole prompt cycle runs unchanged against scripted input in
//! tests.

use derive_more::{Display, Error};
use std::io::{self, BufRead, Write};
use tracing::warn;

/// Supplies one line of text per question.
pub trait LineSource {
    /// Shows `prompt` and reads one line, without its newline.
    ///
    /// Returns `Ok(None)` when the input has ended.
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>>;
}

/// Blocking reader over stdin; prompts are written to stdout.
#[derive(Debug, Default)]
pub struct StdinSource;

impl StdinSource {
    /// Creates a stdin-backed line source.
    pub fn new() -> Self {
        Self
    }
}

impl LineSource for StdinSource {
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        let mut out = io::stdout().lock();
        out.write_all(prompt.as_bytes())?;
        out.flush()?;

        let mut line = String::new();
        if io::stdin().lock().read_line(&mut line)? == 0 {
            return Ok(None);
        }
        while line.ends_with('\n') || line.ends_with('\r') {
            line.pop();
        }
        Ok(Some(line))
    }
}

/// Why prompting stopped before a valid answer arrived.
#[derive(Debug, Display, Error)]
pub enum Halt {
    /// The input source has no more lines.
    #[display("input closed")]
    Eof,
    /// A bounded prompt ran out of attempts.
    #[display("too many invalid answers")]
    RetriesExhausted,
    /// Reading or writing failed.
    #[display("input failed: {_0}")]
    Io(io::Error),
}

impl From<io::Error> for Halt {
    fn from(err: io::Error) -> Self {
        Halt::Io(err)
    }
}

/// One bounded-retry prompt: its text, attempt budget and messages.
#[derive(Debug, Clone)]
pub struct Prompt {
    /// Question shown before each read.
    pub text: String,
    /// Invalid answers allowed before giving up. `usize::MAX` makes
    /// the prompt effectively unbounded.
    pub attempts: usize,
    /// Corrective message after an invalid answer.
    pub warning: String,
    /// Final message when the budget is exhausted.
    pub failure: String,
}

impl Prompt {
    /// Builds a prompt.
    pub fn new(
        text: impl Into<String>,
        attempts: usize,
        warning: impl Into<String>,
        failure: impl Into<String>,
    ) -> Self {
        Self {
            text: text.into(),
            attempts: attempts.max(1),
            warning: warning.into(),
            failure: failure.into(),
        }
    }
}

/// Asks until `parse` accepts an answer or the budget runs out.
///
/// End of input halts immediately with [`Halt::Eof`]. An exhausted
/// budget prints the prompt's failure message and halts with
/// [`Halt::RetriesExhausted`]; otherwise each invalid answer costs one
/// attempt and prints the warning.
pub fn ask<T>(
    source: &mut impl LineSource,
    out: &mut impl Write,
    prompt: &Prompt,
    parse: impl Fn(&str) -> Option<T>,
) -> Result<T, Halt> {
    let mut remaining = prompt.attempts;
    loop {
        let Some(line) = source.read_line(&prompt.text)? else {
            return Err(Halt::Eof);
        };
        if let Some(value) = parse(line.trim()) {
            return Ok(value);
        }
        remaining -= 1;
        if remaining == 0 {
            writeln!(out, "{}", prompt.failure)?;
            warn!(prompt = %prompt.text.trim_end(), "retry budget exhausted");
            return Err(Halt::RetriesExhausted);
        }
        writeln!(out, "{}", prompt.warning)?;
    }
}
