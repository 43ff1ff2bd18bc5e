//! # acorn-shell
//!
//! Line-oriented command shell for embedded serial consoles with zero heap allocation.
//!
//! **Key features:**
//! - **Static allocation** - All buffers are fixed-capacity, zero heap usage
//! - **Declarative command catalog** - Commands defined once at startup as a plain slice
//! - **Streaming output** - Commands may produce output across multiple invocations
//! - **Flexible I/O** - Platform-agnostic byte transport trait
//!
//! The shell consumes one byte at a time from a [`Transport`], assembles bytes
//! into command lines with basic editing (backspace, carriage-return ignore,
//! silent overflow drop), and dispatches completed lines to commands looked up
//! in a [`Registry`]. A command that has more output than fits in one chunk
//! returns [`Progress::More`] and is re-invoked with the same line until it
//! reports [`Progress::Done`].
//!
//! Deliberately out of scope: quoting, piping, command history, and escape
//! sequences. This is a fixed-grammar line reader for device bring-up and
//! maintenance consoles, not a general-purpose shell.
//!
//! ## Optional Features
//!
//! - `defmt` - Derive `defmt::Format` on public state and error types
//!
//! This library is `no_std` compatible.

#![no_std]
#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

extern crate heapless;

// ============================================================================
// Module Declarations
// ============================================================================

pub mod builtins;
pub mod config;
pub mod error;
pub mod io;
pub mod output;
pub mod processor;
pub mod registry;
pub mod shell;

// ============================================================================
// Re-exports - Public API
// ============================================================================

// Transport abstraction
pub use io::Transport;

// Output chunk buffer
pub use output::OutputChunk;

// Command catalog
pub use registry::{Command, CommandEntry, Progress, Registry};

// Error types
pub use error::RegistryError;

// Line processing
pub use processor::Processor;
pub use shell::{Shell, ShellState};

// Built-in commands
pub use builtins::HelpCommand;

// ============================================================================
// Library Metadata
// ============================================================================

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
