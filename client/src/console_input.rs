use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

#[derive(Debug)]
pub enum InputError {
    /// The input stream ended before a valid value was read.
    Closed,
    Io(io::Error),
}

impl std::fmt::Display for InputError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InputError::Closed => write!(f, "Input closed"),
            InputError::Io(e) => write!(f, "IO error: {}", e),
        }
    }
}

impl std::error::Error for InputError {}

impl From<io::Error> for InputError {
    fn from(e: io::Error) -> Self {
        InputError::Io(e)
    }
}

/// Source of validated integers, so the game loop never depends on a real terminal.
pub trait InputProvider {
    /// Keeps asking until a value in `min..=max` is entered.
    fn read_int_in_range(
        &mut self,
        prompt: &str,
        min: usize,
        max: usize,
    ) -> Result<usize, InputError>;
}

/// Reads whitespace-separated tokens, so `2 3` answers a row and a column prompt in one line.
/// A malformed token discards whatever is left of its line.
pub struct ConsoleInput<R: BufRead, W: Write> {
    reader: R,
    writer: W,
    pending: VecDeque<String>,
}

impl<R: BufRead, W: Write> ConsoleInput<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            reader,
            writer,
            pending: VecDeque::new(),
        }
    }

    #[cfg(test)]
    pub fn into_writer(self) -> W {
        self.writer
    }

    /// Blank lines are skipped.
    fn next_token(&mut self) -> Result<String, InputError> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(token);
            }

            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                return Err(InputError::Closed);
            }
            self.pending.extend(line.split_whitespace().map(str::to_string));
        }
    }
}

impl<R: BufRead, W: Write> InputProvider for ConsoleInput<R, W> {
    fn read_int_in_range(
        &mut self,
        prompt: &str,
        min: usize,
        max: usize,
    ) -> Result<usize, InputError> {
        loop {
            write!(self.writer, "{}", prompt)?;
            self.writer.flush()?;

            let token = self.next_token()?;
            let value = match token.parse::<i64>() {
                Ok(value) => value,
                Err(_) => {
                    self.pending.clear();
                    writeln!(self.writer, "Invalid input, please enter a number.")?;
                    continue;
                }
            };

            match usize::try_from(value) {
                Ok(value) if (min..=max).contains(&value) => return Ok(value),
                _ => writeln!(self.writer, "Please enter a value between {} and {}.", min, max)?,
            }
        }
    }
}
