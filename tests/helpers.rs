//! Shared test helpers to reduce duplication across integration tests.
//!
//! Test files include this module via `#[path]` and reach the fixtures
//! through it (`helpers::fixtures::…`) so the `MockTransport` inside a
//! helper-built shell is the same type the test asserts on.

#![allow(dead_code)]

#[allow(clippy::duplicate_mod)]
#[path = "fixtures/mod.rs"]
pub mod fixtures;

use acorn_shell::{Registry, Shell};
use fixtures::MockTransport;

/// Shell sized for tests: up to 8 commands, 32-byte lines, 128-byte chunks.
pub type TestShell<'r> = Shell<'r, MockTransport, 8, 32, 128>;

/// Registry sized to match [`TestShell`].
pub type TestRegistry<'r> = Registry<'r, 8>;

/// Create a test shell over an empty mock transport.
pub fn create_test_shell<'r>(registry: &'r TestRegistry<'r>) -> TestShell<'r> {
    Shell::new(registry, MockTransport::new())
}

/// Create a test shell with pre-scripted input for `run()`-style tests.
pub fn create_shell_with_input<'r>(
    registry: &'r TestRegistry<'r>,
    input: &str,
) -> TestShell<'r> {
    Shell::new(registry, MockTransport::with_input(input))
}

/// Feed every byte of `input` to the shell.
pub fn type_input(shell: &mut TestShell<'_>, input: &str) {
    for &b in input.as_bytes() {
        shell.process_byte(b).expect("process_byte");
    }
}

/// Submit `line` followed by a terminator and return the output it produced.
pub fn execute_line(shell: &mut TestShell<'_>, line: &str) -> String {
    shell.__test_io_mut().clear_output();
    type_input(shell, line);
    shell.process_byte(b'\n').expect("dispatch");
    shell.__test_io().output()
}
