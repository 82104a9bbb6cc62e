//! Elm-style runtime for the **tileboard** dashboard.
//!
//! The application is a pure **init -> update -> view** cycle; the runtime
//! owns the terminal, turns input into messages, and redraws at a fixed
//! frame rate when state changes.
//!
//! | Type | Purpose |
//! |------|---------|
//! | [`Model`] | Application trait (init / update / view / handle_event) |
//! | [`Command`] | Follow-up work returned from `update` |
//! | [`TerminalEvent`] | Input read from the terminal |
//! | [`Program`] | Wires a [`Model`] to a real terminal and drives the loop |
//! | [`TestProgram`](testing::TestProgram) | Headless harness for unit tests |

pub mod command;
pub mod event;
pub mod model;
pub mod runtime;
pub mod testing;

pub use command::Command;
pub use event::TerminalEvent;
pub use model::Model;
pub use runtime::{Program, ProgramError, ProgramOptions};

/// Run a model with the given options until it quits.
pub async fn run_with<M: Model>(
    flags: M::Flags,
    options: ProgramOptions,
) -> Result<M, ProgramError> {
    Program::<M>::with_options(flags, options)?.run().await
}
