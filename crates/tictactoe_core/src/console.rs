//! Line-oriented I/O boundary the game is driven through.

use crate::ConsoleError;
use std::collections::VecDeque;
use tracing::instrument;

/// Source of typed lines and sink for printed lines.
pub trait Console {
    /// Reads one line without its terminator.
    ///
    /// Returns `Ok(None)` at end of input.
    fn read_line(&mut self) -> Result<Option<String>, ConsoleError>;

    /// Prints one line.
    fn write_line(&mut self, line: &str) -> Result<(), ConsoleError>;
}

impl<C: Console + ?Sized> Console for &mut C {
    fn read_line(&mut self) -> Result<Option<String>, ConsoleError> {
        (**self).read_line()
    }

    fn write_line(&mut self, line: &str) -> Result<(), ConsoleError> {
        (**self).write_line(line)
    }
}

/// Console fed from a fixed script, recording everything printed.
#[derive(Debug, Clone, Default)]
pub struct ScriptedConsole {
    inputs: VecDeque<String>,
    output: Vec<String>,
}

impl ScriptedConsole {
    /// Creates a console that answers prompts with `inputs`, in order.
    #[instrument(skip(inputs))]
    pub fn new<I, S>(inputs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            inputs: inputs.into_iter().map(Into::into).collect(),
            output: Vec::new(),
        }
    }

    /// Lines printed so far.
    pub fn output(&self) -> &[String] {
        &self.output
    }

    /// Everything printed, joined with newlines.
    pub fn transcript(&self) -> String {
        self.output.join("\n")
    }

    /// Number of scripted lines not yet consumed.
    pub fn remaining(&self) -> usize {
        self.inputs.len()
    }

    /// Counts printed lines equal to `line`.
    pub fn count(&self, line: &str) -> usize {
        self.output.iter().filter(|l| l.as_str() == line).count()
    }
}

impl Console for ScriptedConsole {
    fn read_line(&mut self) -> Result<Option<String>, ConsoleError> {
        Ok(self.inputs.pop_front())
    }

    fn write_line(&mut self, line: &str) -> Result<(), ConsoleError> {
        self.output.push(line.to_string());
        Ok(())
    }
}
