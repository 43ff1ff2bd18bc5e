//! Test fixtures and utilities for acorn-shell testing.
//!
//! Provides:
//! - `MockTransport`: scripted-input, chunk-recording Transport implementation
//! - Test commands: `EchoCommand`, `TickCommand`, `NopCommand`
//!
//! Uses `std` types (VecDeque, Vec) since tests run with std support.

#![allow(dead_code)]

use acorn_shell::{Command, OutputChunk, Progress, Transport};
use core::fmt::Write;
use std::collections::VecDeque;
use std::string::String;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::vec::Vec;

// ============================================================================
// MockTransport - Test I/O Implementation
// ============================================================================

/// Mock transport for testing.
///
/// Input is a pre-loaded byte queue (simulates the serial line); every
/// `send()` is recorded as a separate chunk so tests can assert on chunk
/// boundaries, not just concatenated output.
#[derive(Debug)]
pub struct MockTransport {
    /// Scripted input (consumed by `recv_byte`)
    input: VecDeque<u8>,

    /// Every `send()` call, in order
    writes: Vec<Vec<u8>>,

    /// When true, `send()` fails
    fail_sends: bool,
}

impl MockTransport {
    /// Create a transport with no scripted input.
    pub fn new() -> Self {
        Self {
            input: VecDeque::new(),
            writes: Vec::new(),
            fail_sends: false,
        }
    }

    /// Create a transport pre-loaded with input bytes.
    pub fn with_input(input: &str) -> Self {
        let mut t = Self::new();
        t.push_input(input);
        t
    }

    /// Queue more input (simulates the user typing).
    pub fn push_input(&mut self, s: &str) {
        self.input.extend(s.as_bytes());
    }

    /// All output concatenated, as a string.
    pub fn output(&self) -> String {
        let bytes: Vec<u8> = self.writes.iter().flatten().copied().collect();
        String::from_utf8(bytes).expect("shell output is valid UTF-8")
    }

    /// Number of chunks written (one per `send()`).
    pub fn write_count(&self) -> usize {
        self.writes.len()
    }

    /// Individual chunks, as strings.
    pub fn chunks(&self) -> Vec<String> {
        self.writes
            .iter()
            .map(|w| String::from_utf8(w.clone()).expect("chunk is valid UTF-8"))
            .collect()
    }

    /// Drop recorded output.
    pub fn clear_output(&mut self) {
        self.writes.clear();
    }

    /// Control whether following `send()` calls fail.
    pub fn set_fail_sends(&mut self, fail: bool) {
        self.fail_sends = fail;
    }
}

impl Transport for MockTransport {
    type Error = ();

    fn recv_byte(&mut self) -> Result<u8, ()> {
        // Script exhausted: report a link error, which ends Shell::run()
        self.input.pop_front().ok_or(())
    }

    fn send(&mut self, bytes: &[u8]) -> Result<(), ()> {
        if self.fail_sends {
            return Err(());
        }
        self.writes.push(bytes.to_vec());
        Ok(())
    }
}

// ============================================================================
// Test Commands
// ============================================================================

/// Echoes the full command line back, single chunk.
pub struct EchoCommand;

impl Command for EchoCommand {
    fn execute(&self, line: &str, out: &mut OutputChunk<'_>) -> Progress {
        out.push_str(line);
        out.push_str("\r\n");
        Progress::Done
    }
}

/// Does nothing, produces nothing.
pub struct NopCommand;

impl Command for NopCommand {
    fn execute(&self, _line: &str, _out: &mut OutputChunk<'_>) -> Progress {
        Progress::Done
    }
}

/// Streams `total` ticks, one per invocation, and records the line text it
/// was handed on each call so tests can check the repeated-invocation
/// invariant.
pub struct TickCommand {
    total: usize,
    cursor: AtomicUsize,
    /// Line text seen on each invocation
    pub seen_lines: Mutex<Vec<String>>,
}

impl TickCommand {
    pub fn new(total: usize) -> Self {
        Self {
            total,
            cursor: AtomicUsize::new(0),
            seen_lines: Mutex::new(Vec::new()),
        }
    }
}

impl Command for TickCommand {
    fn execute(&self, line: &str, out: &mut OutputChunk<'_>) -> Progress {
        self.seen_lines
            .lock()
            .expect("seen_lines lock")
            .push(String::from(line));

        let i = self.cursor.load(Ordering::Relaxed);
        let _ = write!(out, "tick {}\r\n", i + 1);

        if i + 1 < self.total {
            self.cursor.store(i + 1, Ordering::Relaxed);
            Progress::More
        } else {
            self.cursor.store(0, Ordering::Relaxed);
            Progress::Done
        }
    }
}

/// Stateless shared instances for catalogs that don't need per-test state.
pub static ECHO: EchoCommand = EchoCommand;
pub static NOP: NopCommand = NopCommand;
