//! Compile-time configuration: default capacities, line terminator, and
//! fixed message strings.
//!
//! Buffer sizes are const generic parameters on [`Registry`](crate::Registry)
//! and [`Shell`](crate::Shell); the constants here are the recommended
//! defaults used by the [`DefaultShell`] alias.

use crate::shell::Shell;

/// Default input line capacity in bytes.
///
/// Characters typed beyond this limit are silently dropped until a line
/// terminator arrives.
pub const DEFAULT_MAX_INPUT: usize = 64;

/// Default output chunk capacity in bytes.
///
/// Bounds the output of a single command invocation. Commands with more
/// output stream it across calls via [`Progress::More`](crate::Progress).
pub const DEFAULT_MAX_OUTPUT: usize = 256;

/// Default maximum number of registered commands.
pub const DEFAULT_MAX_COMMANDS: usize = 16;

/// Byte value marking the end of a logical input line.
pub const LINE_TERMINATOR: u8 = b'\n';

/// Fixed message written when the first token of a line matches no
/// registered command.
pub const MSG_UNKNOWN_COMMAND: &str =
    "Command not recognized. Type 'help' to view a list of registered commands.\r\n";

/// Welcome banner written by [`Shell::activate`](crate::Shell::activate).
pub const MSG_WELCOME: &str = "Type 'help' to view a list of registered commands.\r\n\r\n";

/// Shell with the default capacities.
pub type DefaultShell<'r, T> =
    Shell<'r, T, DEFAULT_MAX_COMMANDS, DEFAULT_MAX_INPUT, DEFAULT_MAX_OUTPUT>;
