use std::fmt::Write;
use std::path::{Path, PathBuf};

use anyhow::Context;
use chrono::Utc;

use crate::health;
use crate::models::{ReportRow, RunSummary, StatusCounts, WeightStatus};

const SEPARATOR_WIDTH: usize = 180;

/// Renders ages the way the data file is usually read back: whole numbers
/// keep one decimal (`3` becomes `3.0`).
pub fn format_age(age: f64) -> String {
    if age.is_finite() && age.fract() == 0.0 {
        format!("{age:.1}")
    } else {
        age.to_string()
    }
}

pub fn render_report(rows: &[ReportRow]) -> String {
    let mut output = String::new();

    let _ = writeln!(
        output,
        "{:<10}{:<5}{:<7}{:<15}{:<20}{:<80}{:<40}",
        "Name",
        "Age",
        "Sex",
        "Status",
        "Activity Level",
        "Diet Recommendation",
        "Activity Advice"
    );
    let _ = writeln!(output, "{}", "-".repeat(SEPARATOR_WIDTH));

    for row in rows {
        let _ = writeln!(
            output,
            "{:<10}{:<5}{:<7}{:<15}{:<20}{:<80}{:<40}",
            row.name,
            format_age(row.age),
            row.gender_symbol(),
            row.status.as_str(),
            row.activity.as_str(),
            row.diet_recommendation,
            row.activity_advice
        );
    }

    output
}

pub fn write_report(path: &Path, rows: &[ReportRow]) -> anyhow::Result<()> {
    std::fs::write(path, render_report(rows))
        .with_context(|| format!("failed to write report to {}", path.display()))?;
    Ok(())
}

pub fn summarize(rows: &[ReportRow], report_path: &Path, chart_paths: Vec<PathBuf>) -> RunSummary {
    let count = |status: WeightStatus| rows.iter().filter(|row| row.status == status).count();
    let kittens = rows.iter().filter(|row| health::is_kitten(row.age)).count();

    RunSummary {
        generated_at: Utc::now(),
        total: rows.len(),
        kittens,
        adults: rows.len() - kittens,
        statuses: StatusCounts {
            underweight: count(WeightStatus::Underweight),
            normal: count(WeightStatus::Normal),
            overweight: count(WeightStatus::Overweight),
        },
        report_path: report_path.to_path_buf(),
        chart_paths,
    }
}

pub fn render_summary(summary: &RunSummary) -> String {
    let mut output = String::new();

    let _ = writeln!(
        output,
        "Evaluated {} cats ({} kittens, {} adults) at {}",
        summary.total,
        summary.kittens,
        summary.adults,
        summary.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
    );
    let _ = writeln!(output, "- normal: {}", summary.statuses.normal);
    let _ = writeln!(output, "- underweight: {}", summary.statuses.underweight);
    let _ = writeln!(output, "- overweight: {}", summary.statuses.overweight);
    let _ = writeln!(output, "Report written to {}.", summary.report_path.display());
    for path in &summary.chart_paths {
        let _ = writeln!(output, "Chart written to {}.", path.display());
    }

    output
}
