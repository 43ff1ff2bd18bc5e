//! Line shell: byte-at-a-time input assembly and command dispatch.
//!
//! The `Shell` owns the input buffer and editing state for one session. It
//! turns a byte stream into complete lines, drives the [`Processor`] to
//! completion for each line, and forwards every produced output chunk to the
//! transport in order.
//!
//! One session is one logical thread of control: a blocking receive of one
//! byte at a time, fully synchronous with the byte source. There is no
//! internal locking because there is exactly one mutator of session state;
//! the registry behind the processor is immutable and freely shared, so
//! multiple sessions over independent transports are possible without shared
//! mutable globals.

use crate::config;
use crate::io::Transport;
use crate::output::OutputChunk;
use crate::processor::Processor;
use crate::registry::Registry;
use core::fmt;

/// Line shell state.
///
/// `Dispatching` is only observable from within a command handler; dispatch
/// runs to completion before the next byte is read.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ShellState {
    /// Buffer empty, accepting characters.
    Idle,

    /// Buffer has characters, line not yet terminated.
    Accumulating,

    /// Line terminator seen, processor being driven to completion.
    Dispatching,
}

/// One interactive shell session over a byte transport.
///
/// Generic over:
/// - `'r`: Lifetime of the command registry (typically `'static`)
/// - `T`: Transport implementation
/// - `CMDS`: Registry capacity
/// - `INPUT`: Input line capacity in bytes
/// - `OUT`: Output chunk capacity in bytes
///
/// Create one per transport connection. The shell runs indefinitely,
/// consuming bytes until the process stops; there is no shutdown transition.
pub struct Shell<'r, T, const CMDS: usize, const INPUT: usize, const OUT: usize>
where
    T: Transport,
{
    /// Command invocation driver (owns the in-progress continuation).
    processor: Processor<'r, CMDS>,

    /// Input line buffer.
    input: heapless::String<INPUT>,

    /// Reusable backing storage for output chunks.
    out_buf: [u8; OUT],

    /// Current state machine state.
    state: ShellState,

    /// Byte transport.
    io: T,
}

impl<'r, T, const CMDS: usize, const INPUT: usize, const OUT: usize>
    Shell<'r, T, CMDS, INPUT, OUT>
where
    T: Transport,
{
    /// Create a shell session over `io`, dispatching into `registry`.
    pub fn new(registry: &'r Registry<'r, CMDS>, io: T) -> Self {
        Self {
            processor: Processor::new(registry),
            input: heapless::String::new(),
            out_buf: [0; OUT],
            state: ShellState::Idle,
            io,
        }
    }

    /// Write the welcome banner.
    ///
    /// Call once after the transport is up, before the first `run()` or
    /// `process_byte()`.
    pub fn activate(&mut self) -> Result<(), T::Error> {
        self.io.send_str(config::MSG_WELCOME)
    }

    /// Process a single input byte.
    ///
    /// Main entry point for byte-by-byte processing. Feed this from whatever
    /// drives the transport (blocking loop, interrupt-fed queue, DMA ring).
    ///
    /// Editing rules:
    /// - line terminator (`\n`): dispatch the buffered line, then clear it
    /// - `\r`: ignored
    /// - backspace (BS or DEL): erase the last character, no-op when empty
    /// - printable ASCII: appended; silently dropped once the buffer is full
    /// - anything else: ignored
    ///
    /// A line that fills the buffer without ever seeing a terminator keeps
    /// dropping characters until one arrives; the line dispatches truncated
    /// rather than raising an error.
    pub fn process_byte(&mut self, byte: u8) -> Result<(), T::Error> {
        match byte {
            config::LINE_TERMINATOR => self.dispatch(),

            b'\r' => Ok(()),

            // BS or DEL, depending on the terminal
            0x08 | 0x7f => {
                if !self.input.is_empty() {
                    self.input.pop();
                }
                self.state = if self.input.is_empty() {
                    ShellState::Idle
                } else {
                    ShellState::Accumulating
                };
                Ok(())
            }

            b @ 0x20..=0x7e => {
                // Full buffer: drop silently, no error to the transport
                let _ = self.input.push(b as char);
                self.state = ShellState::Accumulating;
                Ok(())
            }

            // Remaining control bytes carry no meaning here
            _ => Ok(()),
        }
    }

    /// Blocking receive-and-process loop.
    ///
    /// Runs until the transport fails. Use this for simple bare-metal or
    /// RTOS-task setups; event-driven integrations call
    /// [`process_byte()`](Self::process_byte) directly instead.
    pub fn run(&mut self) -> Result<(), T::Error> {
        loop {
            let byte = self.io.recv_byte()?;
            self.process_byte(byte)?;
        }
    }

    /// Drive the processor over the buffered line until it completes.
    ///
    /// Every non-empty chunk is sent before the next invocation, so a
    /// streaming command's output reaches the transport in call order. On a
    /// transport failure the in-progress invocation and the input line are
    /// abandoned before the error propagates; a later line never resumes a
    /// stale continuation.
    fn dispatch(&mut self) -> Result<(), T::Error> {
        self.state = ShellState::Dispatching;

        loop {
            let mut chunk = OutputChunk::new(&mut self.out_buf);
            let progress = self.processor.process(self.input.as_str(), &mut chunk);
            let filled = chunk.len();

            if filled > 0 {
                if let Err(e) = self.io.send(&self.out_buf[..filled]) {
                    self.processor.reset();
                    self.input.clear();
                    self.state = ShellState::Idle;
                    return Err(e);
                }
            }

            if progress.is_done() {
                break;
            }
        }

        self.input.clear();
        self.state = ShellState::Idle;
        Ok(())
    }

    /// Current state machine state.
    pub fn state(&self) -> ShellState {
        self.state
    }

    // ========================================
    // Test-only accessors
    // ========================================

    /// Get reference to the transport (test-only).
    #[doc(hidden)]
    pub fn __test_io(&self) -> &T {
        &self.io
    }

    /// Get mutable reference to the transport (test-only).
    #[doc(hidden)]
    pub fn __test_io_mut(&mut self) -> &mut T {
        &mut self.io
    }

    /// Get the input buffer content (test-only).
    #[doc(hidden)]
    pub fn __test_get_input_buffer(&self) -> &str {
        self.input.as_str()
    }
}

impl<T, const CMDS: usize, const INPUT: usize, const OUT: usize> fmt::Debug
    for Shell<'_, T, CMDS, INPUT, OUT>
where
    T: Transport,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Shell")
            .field("state", &self.state)
            .field("input", &self.input.as_str())
            .field("processor", &self.processor)
            .finish_non_exhaustive()
    }
}
