//! Byte transport abstraction for platform-agnostic input/output.
//!
//! The `Transport` trait provides blocking byte-level I/O that can be
//! implemented for any serial-style link (UART, USB CDC, RTT, stdio, a TCP
//! socket in host tests, etc.). The shell is fully synchronous with its
//! transport: it blocks on one byte of input at a time and writes each output
//! chunk before requesting the next one.

/// Platform-agnostic blocking byte transport.
///
/// The byte source may itself be interrupt or DMA driven; implementations
/// hide that behind a blocking `recv_byte()`. Failure handling for `send()`
/// is the transport's concern - the shell treats it as best-effort and only
/// propagates the error type.
pub trait Transport {
    /// Platform-specific error type
    type Error;

    /// Blocking read of the next input byte.
    ///
    /// Does not return until a byte is available or the link fails.
    fn recv_byte(&mut self) -> Result<u8, Self::Error>;

    /// Blocking write of a complete buffer.
    fn send(&mut self, bytes: &[u8]) -> Result<(), Self::Error>;

    /// Write a string slice.
    ///
    /// Default implementation forwards to [`send`](Self::send).
    fn send_str(&mut self, s: &str) -> Result<(), Self::Error> {
        self.send(s.as_bytes())
    }
}
