//! Built-in commands.
//!
//! Currently just `help`. Built-ins are ordinary [`Command`] implementations
//! registered from the same entry list as application commands; the shell
//! gives them no special treatment.

use crate::output::OutputChunk;
use crate::registry::{Command, CommandEntry, Progress};
use core::fmt;
use core::sync::atomic::{AtomicUsize, Ordering};

/// `help`: list every registered command with its help text.
///
/// Emits one catalog entry per invocation using the more-data protocol, so
/// the listing works with an output chunk no larger than one line. The
/// cursor lives in the command itself (an `AtomicUsize`, so a `HelpCommand`
/// can sit in a `static` next to the entry list it describes) and resets
/// after the last entry, leaving the command ready for the next `help` line.
///
/// # Example
///
/// ```rust,ignore
/// static HELP: HelpCommand = HelpCommand::new(&ENTRIES);
/// static ENTRIES: [CommandEntry; 2] = [
///     CommandEntry { name: "help", help: "List commands", handler: &HELP },
///     CommandEntry { name: "led", help: "Toggle the LED", handler: &LED },
/// ];
/// ```
pub struct HelpCommand<'r> {
    entries: &'r [CommandEntry<'r>],
    cursor: AtomicUsize,
}

impl<'r> HelpCommand<'r> {
    /// Create a help command over the catalog it should describe.
    ///
    /// Pass the same entry list the registry is built from so the listing
    /// matches registration order.
    pub const fn new(entries: &'r [CommandEntry<'r>]) -> Self {
        Self {
            entries,
            cursor: AtomicUsize::new(0),
        }
    }
}

impl Command for HelpCommand<'_> {
    fn execute(&self, _line: &str, out: &mut OutputChunk<'_>) -> Progress {
        let index = self.cursor.load(Ordering::Relaxed);

        let Some(entry) = self.entries.get(index) else {
            // Empty catalog: nothing to list
            self.cursor.store(0, Ordering::Relaxed);
            return Progress::Done;
        };

        out.push_str("  ");
        out.push_str(entry.name);
        out.push_str(" - ");
        out.push_str(entry.help);
        out.push_str("\r\n");

        if index + 1 < self.entries.len() {
            self.cursor.store(index + 1, Ordering::Relaxed);
            Progress::More
        } else {
            self.cursor.store(0, Ordering::Relaxed);
            Progress::Done
        }
    }
}

impl fmt::Debug for HelpCommand<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HelpCommand")
            .field("entries", &self.entries.len())
            .field("cursor", &self.cursor.load(Ordering::Relaxed))
            .finish()
    }
}
