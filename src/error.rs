//! Error types for command registration.
//!
//! Registration errors are raised only at startup; they fail the registration
//! call but never the running shell. All runtime faults (unknown command,
//! input overflow, command-internal failures) are resolved into user-visible
//! text or silent degradation instead, because an interactive shell has no
//! caller to report to beyond the user.

use core::fmt;

/// Error returned by [`Registry::register`](crate::Registry::register).
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RegistryError {
    /// A command with the same name is already registered.
    ///
    /// Registration is rejected rather than silently shadowed; the catalog
    /// must stay unambiguous.
    DuplicateName,

    /// The registry is full (fixed maximum command count).
    CapacityExceeded,
}

impl fmt::Display for RegistryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegistryError::DuplicateName => write!(f, "Duplicate command name"),
            RegistryError::CapacityExceeded => write!(f, "Command registry full"),
        }
    }
}
