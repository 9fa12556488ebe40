//! Terminal front end for the petstore catalog.
//!
//! Plays the part of the browser: holds the root `App`, executes the
//! requests it dispatches with ureq, and renders the active screen as text.

pub mod command;
pub mod render;
pub mod shell;
pub mod transport;

pub use command::{Command, CommandError, HELP};
pub use render::render_app;
pub use shell::{Flow, Shell, ShellError};
pub use transport::{Transport, UreqTransport};
