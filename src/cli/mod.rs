//! Command-line interface: arguments and the interactive folder prompt.

pub mod args;
pub mod prompt;

pub use args::{Args, DeleteModeArg};
pub use prompt::{prompt_for_folder, prompt_with, PROMPT_ATTEMPTS};
