// crates/cli/src/presentation.rs
use crate::config::StatsMode;
use crate::error::Result;
use crate::options::ReportFormat;
use line_sift_core::{Category, NumericStats, Summary, TextStats};
use serde::Serialize;
use std::fmt::Write;

pub fn print_summary(summary: &Summary, mode: StatsMode, format: ReportFormat) -> Result<()> {
    match format {
        ReportFormat::Text => print!("{}", render_text(summary, mode)),
        ReportFormat::Json => println!("{}", render_json(summary, mode)?),
    }
    Ok(())
}

/// One line per category, plus a detail line in full mode.
#[must_use]
pub fn render_text(summary: &Summary, mode: StatsMode) -> String {
    let mut out = String::new();
    let full = mode == StatsMode::Full;

    for category in Category::ALL {
        match category {
            Category::Integers => write_numeric(&mut out, category, &summary.integers, full),
            Category::Floats => write_numeric(&mut out, category, &summary.floats, full),
            Category::Strings => write_text(&mut out, category, &summary.strings, full),
        }
    }
    out
}

fn write_numeric(out: &mut String, category: Category, stats: &NumericStats, full: bool) {
    let _ = writeln!(out, "{}: {}", category.label(), stats.count);
    if !full {
        return;
    }
    if let (Some(min), Some(max), Some(sum), Some(mean)) =
        (stats.min, stats.max, stats.sum, stats.mean)
    {
        let _ = writeln!(
            out,
            "  min: {min:.6}, max: {max:.6}, sum: {sum:.6}, mean: {mean:.6}"
        );
    }
}

fn write_text(out: &mut String, category: Category, stats: &TextStats, full: bool) {
    let _ = writeln!(out, "{}: {}", category.label(), stats.count);
    if !full {
        return;
    }
    if let (Some(shortest), Some(longest)) = (stats.min_len, stats.max_len) {
        let _ = writeln!(out, "  shortest: {shortest}, longest: {longest}");
    }
}

#[derive(Serialize)]
struct JsonReport {
    mode: &'static str,
    #[serde(flatten)]
    summary: Summary,
}

pub fn render_json(summary: &Summary, mode: StatsMode) -> Result<String> {
    let report = match mode {
        StatsMode::Full => JsonReport {
            mode: "full",
            summary: *summary,
        },
        StatsMode::Short => JsonReport {
            mode: "short",
            summary: counts_only(summary),
        },
    };
    Ok(serde_json::to_string_pretty(&report)?)
}

fn counts_only(summary: &Summary) -> Summary {
    Summary {
        integers: NumericStats {
            count: summary.integers.count,
            ..NumericStats::default()
        },
        floats: NumericStats {
            count: summary.floats.count,
            ..NumericStats::default()
        },
        strings: TextStats {
            count: summary.strings.count,
            ..TextStats::default()
        },
    }
}
