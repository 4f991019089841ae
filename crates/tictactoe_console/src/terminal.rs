//! Console backed by a reader and writer, normally stdin and stdout.

use std::io::{BufRead, Write};
use tictactoe_core::{Console, ConsoleError};
use tracing::{instrument, trace};

/// Line-oriented terminal.
#[derive(Debug)]
pub struct TerminalConsole<R, W> {
    reader: R,
    writer: W,
}

impl TerminalConsole<std::io::StdinLock<'static>, std::io::Stdout> {
    /// Terminal on the process's stdin and stdout.
    pub fn stdio() -> Self {
        Self::new(std::io::stdin().lock(), std::io::stdout())
    }
}

impl<R: BufRead, W: Write> TerminalConsole<R, W> {
    /// Creates a terminal over any reader and writer.
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Consumes the terminal, returning the writer.
    pub fn into_writer(self) -> W {
        self.writer
    }
}

impl<R: BufRead, W: Write> Console for TerminalConsole<R, W> {
    #[instrument(skip(self))]
    fn read_line(&mut self) -> Result<Option<String>, ConsoleError> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            trace!("End of input");
            return Ok(None);
        }
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(Some(line))
    }

    fn write_line(&mut self, line: &str) -> Result<(), ConsoleError> {
        writeln!(self.writer, "{}", line)?;
        self.writer.flush()?;
        Ok(())
    }
}
