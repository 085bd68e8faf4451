//! Formatting utilities for terminal output

use crate::game::Rejection;

/// Render a letter count as a circled digit, e.g. `④`
///
/// Counts past twenty fall back to `(21)`.
#[must_use]
pub fn circled_count(count: usize) -> String {
    match count {
        0 => '\u{24EA}'.to_string(),
        1..=20 => char::from_u32(0x2460 + count as u32 - 1)
            .map_or_else(|| format!("({count})"), |c| c.to_string()),
        _ => format!("({count})"),
    }
}

/// One-line rendering of a rejection: `title: message`
#[must_use]
pub fn rejection_line(rejection: &Rejection) -> String {
    format!("{}: {}", rejection.title(), rejection.message())
}

/// Summary of progress through the possible words of a root
#[must_use]
pub fn found_summary(found: usize, possible: usize) -> String {
    if possible == 0 {
        format!("Found {found}")
    } else {
        let pct = found as f64 / possible as f64 * 100.0;
        format!("Found {found} of {possible} ({pct:.0}%)")
    }
}
