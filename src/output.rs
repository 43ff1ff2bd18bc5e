//! Bounded output buffer filled by one command invocation.
//!
//! An `OutputChunk` is a length-tracked view over a caller-owned byte array.
//! The shell owns one backing array, hands a fresh chunk to each handler
//! invocation, writes the filled portion to the transport, and reuses the
//! array for the next invocation. Handlers never retain the chunk across
//! calls; continuation state lives inside the handler itself.
//!
//! Writes that do not fit are silently truncated at a UTF-8 character
//! boundary. Truncation is not an error: a command's output is bounded by the
//! chunk capacity by design, and a command with more to say streams it across
//! calls via [`Progress::More`](crate::Progress).

use core::fmt;

/// Bounded, truncating output buffer for a single command invocation.
pub struct OutputChunk<'a> {
    buf: &'a mut [u8],
    len: usize,
}

impl<'a> OutputChunk<'a> {
    /// Create an empty chunk over a caller-owned backing buffer.
    ///
    /// The buffer's length is the chunk capacity.
    pub fn new(buf: &'a mut [u8]) -> Self {
        Self { buf, len: 0 }
    }

    /// Total capacity in bytes.
    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    /// Bytes written so far.
    pub fn len(&self) -> usize {
        self.len
    }

    /// True if nothing has been written.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Bytes still available.
    pub fn remaining(&self) -> usize {
        self.buf.len() - self.len
    }

    /// Discard all written content.
    pub fn clear(&mut self) {
        self.len = 0;
    }

    /// The filled portion of the buffer.
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.len]
    }

    /// The filled portion as a string slice.
    ///
    /// Writes only ever append whole UTF-8 characters, so the filled portion
    /// is always valid UTF-8.
    pub fn as_str(&self) -> &str {
        core::str::from_utf8(self.as_bytes()).unwrap_or("")
    }

    /// Append as much of `s` as fits, truncating at a character boundary.
    ///
    /// Never fails; excess input is dropped.
    pub fn push_str(&mut self, s: &str) {
        // Fast path: whole string fits
        if s.len() <= self.remaining() {
            self.buf[self.len..self.len + s.len()].copy_from_slice(s.as_bytes());
            self.len += s.len();
            return;
        }

        for ch in s.chars() {
            let mut enc = [0u8; 4];
            let bytes = ch.encode_utf8(&mut enc).as_bytes();
            if bytes.len() > self.remaining() {
                break;
            }
            self.buf[self.len..self.len + bytes.len()].copy_from_slice(bytes);
            self.len += bytes.len();
        }
    }

    /// Append a single character if it fits.
    pub fn push(&mut self, ch: char) {
        let mut enc = [0u8; 4];
        self.push_str(ch.encode_utf8(&mut enc));
    }
}

impl fmt::Write for OutputChunk<'_> {
    /// Truncating write - formatting into a chunk never errors.
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.push_str(s);
        Ok(())
    }
}

impl fmt::Debug for OutputChunk<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OutputChunk")
            .field("capacity", &self.capacity())
            .field("content", &self.as_str())
            .finish()
    }
}
