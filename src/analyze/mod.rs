pub mod counters;
pub mod loader;
pub mod normalize;
mod report;
pub mod scoring;

use std::error::Error;
use std::path::Path;

use serde::Serialize;

use loader::LoadError;
use report::{print_json, print_report};

/// Raw pattern counts for one script. Fixed fields rather than a keyed map;
/// counts cannot go negative by construction.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct Metrics {
    pub loc: usize,
    pub joins: usize,
    pub unique_tables: usize,
    pub virtual_tables: usize,
    pub updates_deletes: usize,
}

/// Final result for one script: the weighted score plus its inputs.
#[derive(Debug, Clone, Serialize)]
pub struct Analysis {
    pub complexity_score: f64,
    pub metrics: Metrics,
}

pub fn run(path: &Path, json: bool) -> Result<(), Box<dyn Error>> {
    let analysis = analyze_file(path)?;

    if json {
        print_json(&analysis)?;
    } else {
        print_report(path, &analysis);
    }

    Ok(())
}

/// Load a script and score it. Loading is the only fallible step.
pub fn analyze_file(path: &Path) -> Result<Analysis, LoadError> {
    let sql = loader::load(path)?;
    Ok(analyze_content(&sql))
}

/// Score SQL text already in memory. Pure: the same content always yields
/// the same result.
///
/// Only `loc` works on the comment-stripped text. The keyword counters scan
/// the raw content, so keywords inside comments still count toward joins,
/// tables, and DML totals.
pub fn analyze_content(sql: &str) -> Analysis {
    let stripped = normalize::strip_comments(sql);

    let metrics = Metrics {
        loc: normalize::count_code_lines(&stripped),
        joins: counters::count_joins(sql),
        unique_tables: counters::count_unique_tables(sql),
        virtual_tables: counters::count_virtual_tables(sql),
        updates_deletes: counters::count_updates_deletes(sql),
    };

    Analysis {
        complexity_score: scoring::complexity_score(&metrics),
        metrics,
    }
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
