//! Formatting utilities used for CLI and export outputs.

/// Round to 2 decimal places, half away from zero.
pub fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

/// Human-readable duration from seconds.
///
/// es: `30600` → "08h 30m", short → "08:30"
pub fn hours2readable(secs: i64, short: bool) -> String {
    let sign = if secs < 0 { "-" } else { "" };
    let s = secs.abs();
    let hours = s / 3600;
    let minutes = (s % 3600) / 60;

    if short {
        format!("{}{:02}:{:02}", sign, hours, minutes)
    } else {
        format!("{}{:02}h {:02}m", sign, hours, minutes)
    }
}
