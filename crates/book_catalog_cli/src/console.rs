//! Line-oriented console over any reader/writer pair.
//!
//! # Invariants
//! - Prompts are flushed before input is read.
//! - End of input surfaces as `ErrorKind::UnexpectedEof`.

use std::fmt::Display;
use std::io::{self, BufRead, ErrorKind, Write};

pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Prints `label` without a newline and reads one line of input.
    ///
    /// The trailing line terminator is stripped; other whitespace is kept.
    pub fn prompt(&mut self, label: &str) -> io::Result<String> {
        write!(self.output, "{label}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(ErrorKind::UnexpectedEof, "input closed"));
        }
        let trimmed_len = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed_len);
        Ok(line)
    }

    pub fn say(&mut self, text: impl Display) -> io::Result<()> {
        writeln!(self.output, "{text}")
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }
}
