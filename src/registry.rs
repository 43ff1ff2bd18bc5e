//! Command catalog: entries, the handler trait, and the registry.
//!
//! Commands are registered once at startup from a declarative entry list and
//! never mutated afterwards, so a registry is safe to share read-only across
//! any number of shell sessions over independent transports.

use crate::error::RegistryError;
use crate::output::OutputChunk;
use core::fmt;

/// More-data flag returned by every command invocation.
///
/// A command whose output exceeds one chunk returns [`Progress::More`]; the
/// shell then writes the chunk and re-invokes the same command with the same
/// line. [`Progress::Done`] marks the final chunk, which may be empty.
///
/// This is a restartable-generator protocol expressed as explicit repeated
/// calls: the command is a suspendable producer, the flag is its suspension
/// point.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Progress {
    /// More output is queued; invoke again with the same line.
    More,

    /// This chunk was the last (including the no-output case).
    Done,
}

impl Progress {
    /// True if the command has finished producing output.
    pub fn is_done(self) -> bool {
        self == Progress::Done
    }
}

/// Command execution trait.
///
/// A command receives the complete line text (so it can parse its own
/// arguments) and an output chunk to fill. It writes as much as fits -
/// the chunk truncates silently - and reports whether more output follows.
///
/// # Continuation state
///
/// Invocation takes `&self` so commands can live in `static`s and be shared
/// read-only; the `Sync` supertrait makes that sharing sound. A command that
/// streams output across calls keeps its own progress cursor in
/// interior-mutable state (an `AtomicUsize`, which stays `Sync`); the shell
/// never inspects or stores that state, it only repeats the call while
/// [`Progress::More`] is returned. See
/// [`HelpCommand`](crate::builtins::HelpCommand) for the pattern.
///
/// # Faults
///
/// A failure inside the command's own domain (peripheral timeout, bad
/// argument) is rendered as output text. The shell has no error channel
/// besides what the command writes.
pub trait Command: Sync {
    /// Produce the next output chunk for `line`.
    fn execute(&self, line: &str, out: &mut OutputChunk<'_>) -> Progress;
}

/// One registered command: name, help text, and handler.
///
/// Created once at startup, immutable thereafter.
#[derive(Copy, Clone)]
pub struct CommandEntry<'r> {
    /// Command name, matched case-sensitively against the first input token.
    pub name: &'r str,

    /// One-line help text for the `help` listing.
    pub help: &'r str,

    /// Execution handler.
    pub handler: &'r dyn Command,
}

impl fmt::Debug for CommandEntry<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandEntry")
            .field("name", &self.name)
            .field("help", &self.help)
            .field("handler", &"<dyn Command>")
            .finish()
    }
}

/// Insertion-ordered command catalog, append-only after initialization.
///
/// `MAX` bounds the number of registered commands. Lookup is exact-match on
/// the command name; listing preserves registration order.
pub struct Registry<'r, const MAX: usize> {
    entries: heapless::Vec<CommandEntry<'r>, MAX>,
}

impl<'r, const MAX: usize> Registry<'r, MAX> {
    /// Create an empty registry.
    pub const fn new() -> Self {
        Self {
            entries: heapless::Vec::new(),
        }
    }

    /// Build a registry from a declarative entry list.
    ///
    /// This is the intended initialization path: define the full catalog as
    /// one slice and inject it, instead of a chain of `register()` calls.
    pub fn from_entries(entries: &[CommandEntry<'r>]) -> Result<Self, RegistryError> {
        let mut registry = Self::new();
        for entry in entries {
            registry.register(*entry)?;
        }
        Ok(registry)
    }

    /// Append a command to the catalog.
    ///
    /// Fails with [`RegistryError::DuplicateName`] if a command with the same
    /// name is already registered (duplicates are rejected, not shadowed) and
    /// [`RegistryError::CapacityExceeded`] when the catalog is full. A failed
    /// registration leaves the registry unchanged.
    pub fn register(&mut self, entry: CommandEntry<'r>) -> Result<(), RegistryError> {
        if self.entries.iter().any(|e| e.name == entry.name) {
            return Err(RegistryError::DuplicateName);
        }
        self.entries
            .push(entry)
            .map_err(|_| RegistryError::CapacityExceeded)
    }

    /// Look up a command by name (exact, case-sensitive).
    ///
    /// `None` means no such command; the caller reports "unknown command"
    /// without failing the shell.
    pub fn resolve(&self, name: &str) -> Option<&CommandEntry<'r>> {
        self.entries.iter().find(|e| e.name == name)
    }

    /// Position of a command by name, for continuation bookkeeping.
    pub(crate) fn position(&self, name: &str) -> Option<usize> {
        self.entries.iter().position(|e| e.name == name)
    }

    /// Entry at a registration index.
    pub(crate) fn get(&self, index: usize) -> Option<&CommandEntry<'r>> {
        self.entries.get(index)
    }

    /// Iterate entries in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &CommandEntry<'r>> {
        self.entries.iter()
    }

    /// Number of registered commands.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if no commands are registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'r, const MAX: usize> Default for Registry<'r, MAX> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const MAX: usize> fmt::Debug for Registry<'_, MAX> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("len", &self.entries.len())
            .field("capacity", &MAX)
            .finish_non_exhaustive()
    }
}
