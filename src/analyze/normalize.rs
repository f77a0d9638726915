//! Comment stripping and line counting.
//!
//! Only the `loc` metric looks at the stripped text; the keyword counters
//! scan the raw script so that keywords inside comments still count.

use std::sync::LazyLock;

use regex::Regex;

/// `--` to end of line, per physical line.
static LINE_COMMENT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)--.*$").unwrap());

/// `/* ... */`, shortest match, may span lines. Not nested. An unterminated
/// `/*` never matches and is left in place.
static BLOCK_COMMENT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?s)/\*.*?\*/").unwrap());

/// Delete `--` line comments and `/* */` block comments.
pub fn strip_comments(sql: &str) -> String {
    let stripped = LINE_COMMENT.replace_all(sql, "");
    BLOCK_COMMENT.replace_all(&stripped, "").into_owned()
}

/// Count lines that still hold something after comment stripping and
/// whitespace trimming.
pub fn count_code_lines(stripped: &str) -> usize {
    stripped
        .split('\n')
        .filter(|line| !line.trim().is_empty())
        .count()
}

#[cfg(test)]
#[path = "normalize_test.rs"]
mod tests;
