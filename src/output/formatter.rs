// Copyright (c) 2025 Nicholas D. Crosbie
use crate::analysis::InspectableCallable;
use chrono::Local;
use serde::Serialize;
use std::path::Path;

/// What gets printed for one inspected callable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CallableReport {
    pub name: String,
    pub file: String,
    pub line: usize,
    pub end_line: usize,
    pub location: String,
}

impl CallableReport {
    pub fn from_callable(callable: &InspectableCallable<'_>) -> Self {
        Self {
            name: callable.format_name(),
            file: callable.file_name(),
            line: callable.start_line(),
            end_line: callable.end_line(),
            location: callable.file_name_and_line_number(),
        }
    }
}

pub trait OutputFormatter {
    fn format_reports(
        &self,
        reports: &[CallableReport],
        project_path: &Path,
    ) -> serde_json::Result<String>;
}

pub fn formatter_for(format: &str) -> Box<dyn OutputFormatter> {
    match format {
        "json" => Box::new(JsonFormatter),
        _ => Box::new(ConsoleFormatter),
    }
}

pub struct ConsoleFormatter;

impl OutputFormatter for ConsoleFormatter {
    fn format_reports(
        &self,
        reports: &[CallableReport],
        project_path: &Path,
    ) -> serde_json::Result<String> {
        let mut output = String::new();

        let now = Local::now();
        output.push_str(&format!(
            "Inspection completed at: {}\n",
            now.format("%Y-%m-%d %H:%M:%S")
        ));
        output.push_str(&format!("Project path: {}\n\n", project_path.display()));

        output.push_str(&format!("Inspected {} callables:\n", reports.len()));
        for report in reports {
            if report.location.is_empty() {
                output.push_str(&format!("  {}: no source location\n", report.name));
            } else if report.end_line > report.line {
                output.push_str(&format!(
                    "  {}: {} (lines {}-{})\n",
                    report.name, report.location, report.line, report.end_line
                ));
            } else {
                output.push_str(&format!("  {}: {}\n", report.name, report.location));
            }
        }

        Ok(output)
    }
}

pub struct JsonFormatter;

#[derive(Serialize)]
struct JsonOutput<'a> {
    project: String,
    callables: &'a [CallableReport],
}

impl OutputFormatter for JsonFormatter {
    fn format_reports(
        &self,
        reports: &[CallableReport],
        project_path: &Path,
    ) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&JsonOutput {
            project: project_path.display().to_string(),
            callables: reports,
        })
    }
}
