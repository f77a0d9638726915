use std::error::Error;
use std::path::Path;

use super::{Analysis, Metrics};

/// Metric labels and values in fixed report order. Labels are the metric
/// names with underscores replaced by spaces and each word capitalized.
pub fn metric_rows(m: &Metrics) -> [(String, usize); 5] {
    [
        (label("loc"), m.loc),
        (label("joins"), m.joins),
        (label("unique_tables"), m.unique_tables),
        (label("virtual_tables"), m.virtual_tables),
        (label("updates_deletes"), m.updates_deletes),
    ]
}

fn label(key: &str) -> String {
    key.split('_')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Print the score and metric breakdown as a formatted table.
pub fn print_report(target: &Path, analysis: &Analysis) {
    let separator = "\u{2500}".repeat(44);

    println!("SQL Complexity Analysis: {}", target.display());
    println!("{separator}");
    println!(" Complexity Score:  {:.1}", analysis.complexity_score);
    println!("{separator}");

    for (name, value) in metric_rows(&analysis.metrics) {
        println!(" {name:<18} {value:>6}");
    }
}

/// Print the full analysis as pretty JSON.
pub fn print_json(analysis: &Analysis) -> Result<(), Box<dyn Error>> {
    println!("{}", serde_json::to_string_pretty(analysis)?);
    Ok(())
}

#[cfg(test)]
#[path = "report_test.rs"]
mod tests;
