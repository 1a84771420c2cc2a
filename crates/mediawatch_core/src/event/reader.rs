//! Line reader over a buffered input stream.
//!
//! # Invariants
//! - One call yields one line with its `\n` / `\r\n` terminator removed.
//! - End of stream is `Ok(None)`, never an error.
//! - Invalid UTF-8 is decoded lossily instead of aborting the stream.

use std::io::{self, BufRead};

/// Reads event lines one at a time from `R`.
pub struct EventReader<R> {
    inner: R,
    buf: Vec<u8>,
    lines_read: u64,
}

impl<R: BufRead> EventReader<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            buf: Vec::new(),
            lines_read: 0,
        }
    }

    /// Blocks until one full line (or the unterminated tail) is available.
    ///
    /// # Errors
    /// - Returns the underlying I/O error when the source fails.
    pub fn next_line(&mut self) -> io::Result<Option<String>> {
        self.buf.clear();
        let read = self.inner.read_until(b'\n', &mut self.buf)?;
        if read == 0 {
            return Ok(None);
        }

        if self.buf.last() == Some(&b'\n') {
            self.buf.pop();
            if self.buf.last() == Some(&b'\r') {
                self.buf.pop();
            }
        }

        self.lines_read += 1;
        Ok(Some(String::from_utf8_lossy(&self.buf).into_owned()))
    }

    /// Lines delivered so far.
    pub fn lines_read(&self) -> u64 {
        self.lines_read
    }
}

impl<R: BufRead> Iterator for EventReader<R> {
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_line().transpose()
    }
}
