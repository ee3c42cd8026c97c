use crate::stats::Report;
use anyhow::Result;

const BAR_WIDTH: usize = 40;

pub fn render_text(report: &Report) -> String {
    let mut out = String::new();

    let title = format!(
        "Partition Counts (columns {}..{}, n = {})",
        report.columns.first,
        report.columns.end(),
        report.columns.width
    );
    out.push_str(&format!("{title}\n{}\n", "=".repeat(title.chars().count())));

    let observed_mean = report
        .observed_mean
        .map(|m| format!("{m:.3}"))
        .unwrap_or_else(|| "-".to_string());
    out.push_str(&format!(
        "samples: {} | skipped: {} | mean: {} (expected {:.3})\n\n",
        report.sample_count, report.skipped, observed_mean, report.expected.mean
    ));

    if report.sample_count == 0 {
        out.push_str("<no samples>\n");
        return out;
    }

    let scale = report
        .expected
        .max()
        .max(report.histogram.max() as f64)
        .max(1.0);

    out.push_str(&format!(
        "  {:>3} {:>9} {:<width$} {:>10}\n",
        "k",
        "observed",
        "",
        "expected",
        width = BAR_WIDTH
    ));

    for (k, count) in report.histogram.bins() {
        let bars = ((count as f64 / scale) * BAR_WIDTH as f64).round() as usize;
        let bar = if count > 0 { "█".repeat(bars.max(1)) } else { String::new() };
        let expected = report
            .expected
            .at(k as u32)
            .map(|e| format!("{e:.1}"))
            .unwrap_or_else(|| "-".to_string());

        out.push_str(&format!(
            "  {:>3} {:>9} {:<width$} {:>10}\n",
            k,
            count,
            bar,
            expected,
            width = BAR_WIDTH
        ));
    }

    if report.histogram.out_of_range() > 0 {
        out.push_str(&format!(
            "\n{} samples outside 1..={}\n",
            report.histogram.out_of_range(),
            report.histogram.last()
        ));
    }

    out
}

pub fn render_json(report: &Report) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}
