//! Console message helpers (info/success/warning/error + record diagnostics).

use crate::utils::colors::{BLUE, GREEN, GREY, RED, RESET, YELLOW};
use std::fmt;

const BOLD: &str = "\x1b[1m";

pub fn info<T: fmt::Display>(msg: T) {
    println!("{BLUE}{BOLD}ℹ️ {RESET} {msg}");
}

pub fn success<T: fmt::Display>(msg: T) {
    println!("{GREEN}{BOLD}✅{RESET} {msg}");
}

pub fn warning<T: fmt::Display>(msg: T) {
    println!("{YELLOW}{BOLD}⚠️ {RESET} {msg}");
}

pub fn error<T: fmt::Display>(msg: T) {
    eprintln!("{RED}{BOLD}❌{RESET} {msg}");
}

/// Per-record diagnostic: dimmed, one line per skipped input row.
pub fn diag<T: fmt::Display>(msg: T) {
    println!("{GREY}   · {msg}{RESET}");
}
