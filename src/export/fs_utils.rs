// src/export/fs_utils.rs

use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, warning};
use std::fs;
use std::io::{self, Write};
use std::path::Path;

/// Create the output directory when absent. Failure here is fatal:
/// without a writable destination there is nothing to run for.
pub(crate) fn ensure_out_dir(dir: &Path) -> AppResult<()> {
    fs::create_dir_all(dir)?;
    Ok(())
}

/// Check whether a report file can be created or overwritten.
///
/// - file does NOT exist → Ok
/// - file exists and `force` → Ok
/// - file exists and `force == false` → ask the user.
pub(crate) fn ensure_writable(path: &Path, force: bool) -> AppResult<()> {
    if !path.exists() || force {
        return Ok(());
    }

    warning(format!("The file '{}' already exists.", path.display()));

    print!("Overwrite? [y/N]: ");
    io::stdout().flush().ok();

    let mut answer = String::new();
    io::stdin().read_line(&mut answer).map_err(AppError::from)?;
    let ans = answer.trim().to_ascii_lowercase();

    if ans == "y" || ans == "yes" {
        info("Existing file will be overwritten.");
        Ok(())
    } else {
        Err(AppError::from(io::Error::other(
            "Export cancelled: existing file not overwritten",
        )))
    }
}
