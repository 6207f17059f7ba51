use std::collections::VecDeque;
use std::io::{BufRead, Write};

use lotto_engine::{PlayerNumbers, SIZE};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum InputError {
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
    #[error("end of input")]
    Eof,
}

/// Whitespace-separated token reader over line-buffered input.
///
/// Tokens are taken from the current line and the next line is only read
/// once the current one is used up, so `discard_line` drops exactly what is
/// left of the line being read.
pub struct Prompter<'a> {
    input: &'a mut dyn BufRead,
    pending: VecDeque<String>,
}

impl<'a> Prompter<'a> {
    pub fn new(input: &'a mut dyn BufRead) -> Self {
        Self { input, pending: VecDeque::new() }
    }

    pub fn next_token(&mut self) -> Result<String, InputError> {
        loop {
            if let Some(tok) = self.pending.pop_front() {
                return Ok(tok);
            }
            let mut buf = Vec::new();
            if self.input.read_until(b'\n', &mut buf)? == 0 {
                return Err(InputError::Eof);
            }
            // bytes that are not UTF-8 become U+FFFD and fail to parse as numbers
            let line = String::from_utf8_lossy(&buf);
            self.pending
                .extend(line.split_whitespace().map(str::to_string));
        }
    }

    /// Reads one token as an integer. `Ok(None)` means the token was not numeric.
    pub fn next_int(&mut self) -> Result<Option<i32>, InputError> {
        Ok(self.next_token()?.parse().ok())
    }

    pub fn discard_line(&mut self) {
        self.pending.clear();
    }

    /// Reads batches of numbers until one passes validation.
    ///
    /// A non-numeric token abandons the batch. Whatever remains of the line is
    /// dropped after every batch. There is no retry limit.
    pub fn collect_numbers(&mut self, out: &mut dyn Write) -> Result<PlayerNumbers, InputError> {
        loop {
            let batch = self.read_batch()?;
            self.discard_line();

            let reason = match batch {
                Some(values) => match PlayerNumbers::try_from(&values[..]) {
                    Ok(numbers) => return Ok(numbers),
                    Err(e) => e.to_string(),
                },
                None => "non-numeric input".to_string(),
            };
            debug!(%reason, "rejected numbers");
            crate::ui::write_error(out, "Those numbers are invalid, please try again.")?;
        }
    }

    fn read_batch(&mut self) -> Result<Option<Vec<i32>>, InputError> {
        let mut values = Vec::with_capacity(SIZE);
        for _ in 0..SIZE {
            match self.next_int()? {
                Some(v) => values.push(v),
                None => return Ok(None),
            }
        }
        Ok(Some(values))
    }
}
