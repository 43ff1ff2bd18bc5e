//! Command processor: maps one completed line to zero-or-more output chunks.
//!
//! The processor sits between the line shell and the registry. It owns the
//! "which invocation is in progress" bookkeeping for the multi-chunk output
//! protocol; everything else about a streaming command's progress is private
//! to the command itself.

use crate::config::MSG_UNKNOWN_COMMAND;
use crate::output::OutputChunk;
use crate::registry::{Progress, Registry};
use core::fmt;

/// Drives command invocations for completed lines.
///
/// `process()` is called repeatedly with the same line until it returns
/// [`Progress::Done`]; the caller writes each produced chunk to the transport
/// between calls. The processor guarantees the protocol invariant: once a
/// command has returned [`Progress::More`], every following call re-invokes
/// that same command until it finishes. Invocations of two different lines
/// are never interleaved.
pub struct Processor<'r, const MAX: usize> {
    registry: &'r Registry<'r, MAX>,

    /// Registration index of the command driving a multi-chunk reply.
    active: Option<usize>,
}

impl<'r, const MAX: usize> Processor<'r, MAX> {
    /// Create a processor over a read-only registry.
    pub fn new(registry: &'r Registry<'r, MAX>) -> Self {
        Self {
            registry,
            active: None,
        }
    }

    /// Produce the next output chunk for `line`.
    ///
    /// Behavior per call:
    /// - An invocation already in progress is re-invoked and completes or
    ///   continues.
    /// - An empty line (zero tokens) produces no output and is `Done`.
    /// - An unknown first token produces the fixed unknown-command message
    ///   in a single chunk.
    /// - A known command is invoked; if it reports more output, the
    ///   processor remembers it for the next call.
    ///
    /// The chunk is cleared before the command runs, so each call yields
    /// exactly one invocation's output.
    pub fn process(&mut self, line: &str, out: &mut OutputChunk<'_>) -> Progress {
        out.clear();

        if let Some(index) = self.active {
            // Mid-stream: same command, same line, until it reports Done.
            let Some(entry) = self.registry.get(index) else {
                self.active = None;
                return Progress::Done;
            };
            let progress = entry.handler.execute(line, out);
            if progress.is_done() {
                self.active = None;
            }
            return progress;
        }

        let Some(first_token) = line.split_whitespace().next() else {
            return Progress::Done;
        };

        match self.registry.position(first_token) {
            Some(index) => {
                let Some(entry) = self.registry.get(index) else {
                    return Progress::Done;
                };
                let progress = entry.handler.execute(line, out);
                if !progress.is_done() {
                    self.active = Some(index);
                }
                progress
            }
            None => {
                out.push_str(MSG_UNKNOWN_COMMAND);
                Progress::Done
            }
        }
    }

    /// True if a multi-chunk invocation is in progress.
    pub fn in_progress(&self) -> bool {
        self.active.is_some()
    }

    /// Abandon any in-progress invocation.
    ///
    /// Used when dispatch is aborted (transport failure) so a later line
    /// cannot resume a stale command.
    pub fn reset(&mut self) {
        self.active = None;
    }
}

impl<const MAX: usize> fmt::Debug for Processor<'_, MAX> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Processor")
            .field("active", &self.active)
            .finish_non_exhaustive()
    }
}
