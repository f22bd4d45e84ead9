//! Interactive input for actions that need a value from the user.

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result, bail};

/// A source of answers to interactive questions.
pub trait Prompt {
    /// Show `question` and return the answer without its line ending.
    fn ask(&mut self, question: &str) -> Result<String>;
}

/// Reads answers line by line from any buffered reader, echoing the
/// question to a writer.
pub struct LinePrompt<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> LinePrompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl<R: BufRead, W: Write> Prompt for LinePrompt<R, W> {
    fn ask(&mut self, question: &str) -> Result<String> {
        write!(self.output, "{}", question)?;
        self.output.flush()?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("Failed to read from standard input")?;
        if read == 0 {
            bail!("Unexpected end of input: {}", question.trim_end());
        }

        Ok(strip_line_ending(line))
    }
}

/// Prompt bound to the process's standard input and output.
pub type StdinPrompt = LinePrompt<io::StdinLock<'static>, io::Stdout>;

pub fn stdin_prompt() -> StdinPrompt {
    LinePrompt::new(io::stdin().lock(), io::stdout())
}

fn strip_line_ending(mut line: String) -> String {
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    line
}
