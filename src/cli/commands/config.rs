use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, warning};
use std::fs;
use std::process::Command;

pub fn handle(cmd: &Commands, _cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        edit_config,
        editor,
    } = cmd
    {
        if *print_config {
            return print_file();
        }
        if *edit_config {
            return edit_file(editor.as_deref());
        }
        info("Nothing to do: use --print or --edit.");
    }
    Ok(())
}

fn print_file() -> AppResult<()> {
    let path = Config::config_file();

    if !path.exists() {
        warning("No configuration file found. Run 'gatestats init' first.");
        return Ok(());
    }

    let content = fs::read_to_string(&path)?;
    println!("📄 {}:\n", path.display());
    println!("{content}");
    Ok(())
}

fn edit_file(editor: Option<&str>) -> AppResult<()> {
    let path = Config::config_file();

    if !path.exists() {
        warning("No configuration file found. Run 'gatestats init' first.");
        return Ok(());
    }

    let editor = match editor {
        Some(ed) => ed.to_string(),
        None => std::env::var("EDITOR")
            .or_else(|_| std::env::var("VISUAL"))
            .unwrap_or_else(|_| default_editor().to_string()),
    };

    let status = Command::new(&editor)
        .arg(&path)
        .status()
        .map_err(|e| AppError::Other(format!("cannot launch editor '{editor}': {e}")))?;

    if !status.success() {
        return Err(AppError::Other(format!("editor '{editor}' exited with an error")));
    }

    Ok(())
}

fn default_editor() -> &'static str {
    if cfg!(target_os = "windows") {
        "notepad"
    } else {
        "nano"
    }
}
