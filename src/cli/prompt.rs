//! Interactive folder prompt.

use std::io;
use std::path::PathBuf;

use console::Term;

use crate::config::{clean_folder_input, validate_folder};
use crate::error::{Error, Result};

/// First try plus two retries.
pub const PROMPT_ATTEMPTS: usize = 3;

/// Ask on the terminal for a folder to work on.
pub fn prompt_for_folder() -> Result<PathBuf> {
    let term = Term::stdout();
    prompt_with(
        || {
            term.write_line("Please enter a path to a folder to work on:")?;
            term.read_line()
        },
        |e| crate::output::print_warning(&e.to_string()),
    )
}

/// Read candidate folders from `read_line` until one is valid or the
/// attempts run out. Each rejected answer is passed to `report`.
pub fn prompt_with<R, F>(mut read_line: R, mut report: F) -> Result<PathBuf>
where
    R: FnMut() -> io::Result<String>,
    F: FnMut(&Error),
{
    for attempt in 1..=PROMPT_ATTEMPTS {
        let answer = read_line().map_err(Error::Prompt)?;
        let candidate = clean_folder_input(&answer);

        match validate_folder(&candidate) {
            Ok(folder) => return Ok(folder),
            Err(e) => {
                tracing::debug!("Prompt attempt {} rejected: {}", attempt, e);
                report(&e);
            }
        }
    }

    Err(Error::NoFolder)
}
