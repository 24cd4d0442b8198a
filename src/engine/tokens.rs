//! Recent-token list for day display.

use std::collections::HashSet;

use crate::domain::UseEntry;

/// Most token names listed for a single day.
pub const MAX_TOKEN_LINES: usize = 6;

/// Collect the day's distinct token names, most recently used first.
///
/// Scans `uses` from the last entry backward, skipping unnamed entries, and
/// stops at [`MAX_TOKEN_LINES`]. The first name found is the latest token and
/// always leads the list. When no entry carries a name, `fallback` (if
/// non-empty) becomes the only line.
pub fn collect_tokens(uses: &[UseEntry], fallback: Option<&str>) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut lines = Vec::new();

    for entry in uses.iter().rev() {
        if lines.len() >= MAX_TOKEN_LINES {
            break;
        }
        let name = entry.token_name.to_uppercase();
        if name.is_empty() || !seen.insert(name.clone()) {
            continue;
        }
        lines.push(name);
    }

    if lines.is_empty() {
        if let Some(name) = fallback.map(str::to_uppercase).filter(|n| !n.is_empty()) {
            lines.push(name);
        }
    }

    lines
}
