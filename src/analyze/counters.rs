//! Keyword pattern counters.
//!
//! Each counter upcases its input and scans the whole text, so counts are
//! independent of source casing. These are textual heuristics, not a parser:
//! a keyword inside a string literal or comment counts like any other.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

/// Join keywords. `JOIN` is listed first; under leftmost-first alternation a
/// compound phrase like `LEFT JOIN` still yields exactly one match, so every
/// join clause counts once.
static JOIN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(JOIN|INNER JOIN|LEFT JOIN|RIGHT JOIN|FULL JOIN|OUTER JOIN)\b").unwrap()
});

/// Identifier right after FROM. Stops at the first non-identifier character,
/// so `schema.table` captures only `SCHEMA`.
static FROM_TABLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bFROM\s+([A-Za-z_][A-Za-z0-9_]*)").unwrap());

/// Identifier right after JOIN.
static JOIN_TABLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bJOIN\s+([A-Za-z_][A-Za-z0-9_]*)").unwrap());

/// CTE opening: `WITH name AS (`.
static CTE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bWITH\s+[A-Za-z_][A-Za-z0-9_]*\s+AS\s*\(").unwrap());

/// Derived-table alias: `) AS name`.
static DERIVED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\)\s+AS\s+[A-Za-z_][A-Za-z0-9_]*").unwrap());

static UPDATE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\bUPDATE\b").unwrap());
static DELETE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\bDELETE\b").unwrap());

/// Count join clauses of any flavor.
pub fn count_joins(sql: &str) -> usize {
    JOIN.find_iter(&sql.to_uppercase()).count()
}

/// Count distinct table identifiers referenced after FROM or JOIN.
pub fn count_unique_tables(sql: &str) -> usize {
    let upper = sql.to_uppercase();

    let mut tables: HashSet<&str> = HashSet::new();
    for caps in FROM_TABLE.captures_iter(&upper) {
        if let Some(name) = caps.get(1) {
            tables.insert(name.as_str());
        }
    }
    for caps in JOIN_TABLE.captures_iter(&upper) {
        if let Some(name) = caps.get(1) {
            tables.insert(name.as_str());
        }
    }
    tables.len()
}

/// Count virtual tables: CTE openings plus derived-table aliases.
pub fn count_virtual_tables(sql: &str) -> usize {
    let upper = sql.to_uppercase();
    CTE.find_iter(&upper).count() + DERIVED.find_iter(&upper).count()
}

/// Count UPDATE and DELETE keywords.
pub fn count_updates_deletes(sql: &str) -> usize {
    let upper = sql.to_uppercase();
    UPDATE.find_iter(&upper).count() + DELETE.find_iter(&upper).count()
}

#[cfg(test)]
#[path = "counters_test.rs"]
mod tests;
