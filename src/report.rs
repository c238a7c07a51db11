use std::fmt::Write as _;

use serde::Serialize;

use crate::analysis::{FileReport, Outcome, Totals};
use crate::code_counter::LineCounts;

const RULE: &str = "----------------------------------------------------------";
const DOUBLE_RULE: &str = "==========================================================";

pub fn render_file_report(report: &FileReport) -> String {
    let mut out = String::new();
    let counts = &report.counts;
    let _ = writeln!(out, "==================== Results for File ====================");
    let _ = writeln!(out, "File Path: {}", report.path.display());
    let _ = writeln!(out, "{RULE}");
    let _ = writeln!(out, "| Type                  | Count                          |");
    let _ = writeln!(out, "{RULE}");
    row(&mut out, "Blank Lines", counts.blank_lines);
    row(&mut out, "Comment Lines", counts.comment_lines);
    row(&mut out, "Import Lines", counts.import_lines);
    row(&mut out, "Variable Declarations", counts.variable_declarations);
    row(&mut out, "Function Definitions", counts.function_definitions);
    row(&mut out, "Class Definitions", counts.class_definitions);
    row(&mut out, "Code Lines", counts.code_lines);
    row(&mut out, "Total Lines", counts.total_lines);
    let _ = writeln!(out, "{RULE}");
    let _ = writeln!(out, "{DOUBLE_RULE}");
    out
}

/// Renders every file table, the error section, and the overall summary.
pub fn render_outcome(outcome: &Outcome, totals: &Totals) -> String {
    let mut out = String::new();
    for report in &outcome.reports {
        out.push_str(&render_file_report(report));
        out.push('\n');
    }

    if !outcome.failures.is_empty() {
        let _ = writeln!(out, "==================== Errors Encountered ====================");
        for failure in &outcome.failures {
            let _ = writeln!(out, "File Path: {}", failure.path.display());
            let _ = writeln!(out, "ERROR:     {}", failure.message);
            out.push('\n');
        }
        let _ = writeln!(out, "{DOUBLE_RULE}");
    }

    out.push('\n');
    let _ = writeln!(out, "==================== Summary of Results ====================");
    let _ = writeln!(out, "Total Files Processed: {}", totals.files_processed);
    let _ = writeln!(out, "Successful Processing: {}", totals.successes);
    let _ = writeln!(out, "Errors Encountered: {}", totals.failures);
    out.push('\n');
    out.push_str(&render_totals(&totals.counts));
    out
}

fn render_totals(counts: &LineCounts) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "==================== Overall Totals ======================");
    let _ = writeln!(out, "| Type       | Count                                     |");
    let _ = writeln!(out, "{RULE}");
    row(&mut out, "Blank Lines", counts.blank_lines);
    row(&mut out, "Comment Lines", counts.comment_lines);
    row(&mut out, "Import Lines", counts.import_lines);
    row(&mut out, "Code Lines", counts.code_lines);
    row(&mut out, "Function Definitions", counts.function_definitions);
    row(&mut out, "Class Definitions", counts.class_definitions);
    row(&mut out, "Variable Declarations", counts.variable_declarations);
    row(&mut out, "Total Lines", counts.total_lines);
    let _ = writeln!(out, "{DOUBLE_RULE}");
    out
}

fn row(out: &mut String, label: &str, value: usize) {
    let _ = writeln!(out, "| {label:<24} | {value:<27} |");
}

#[derive(Serialize)]
struct JsonRun<'a> {
    files: &'a [FileReport],
    errors: &'a [crate::analysis::FileFailure],
    totals: &'a Totals,
}

pub fn render_json(outcome: &Outcome, totals: &Totals) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&JsonRun {
        files: &outcome.reports,
        errors: &outcome.failures,
        totals,
    })
}
