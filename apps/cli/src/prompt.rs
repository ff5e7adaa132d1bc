//! Interactive console input.
//!
//! Validation itself lives in `bioscript_core::validate`; this module only
//! asks, reads and asks again.

use std::fmt::Display;
use std::io::{self, BufRead, Write};

pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Show `label` and read one line, without its line ending.
    ///
    /// End of input is an [`io::ErrorKind::UnexpectedEof`] error.
    pub fn read_line(&mut self, label: &str) -> io::Result<String> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input closed while waiting for an answer",
            ));
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    /// Ask until `validate` accepts the answer. There is no retry limit.
    pub fn prompt_until<T, E, F>(&mut self, label: &str, validate: F) -> io::Result<T>
    where
        E: Display,
        F: Fn(&str) -> Result<T, E>,
    {
        loop {
            let line = self.read_line(label)?;
            match validate(&line) {
                Ok(value) => return Ok(value),
                Err(e) => writeln!(self.output, "Error: {}.", e)?,
            }
        }
    }
}
