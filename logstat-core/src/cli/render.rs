use crate::ingest::{Analysis, LineStats};
use crate::stats::StatsReport;
use owo_colors::OwoColorize;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt::Write;

#[derive(Serialize)]
struct AnalysisJson<'a> {
    lines: &'a LineStats,
    skipped: usize,
    stats: &'a StatsReport,
}

pub fn render_json(analysis: &Analysis) -> serde_json::Result<String> {
    let report = analysis.stats.report();
    serde_json::to_string_pretty(&AnalysisJson {
        lines: &analysis.lines,
        skipped: analysis.skipped,
        stats: &report,
    })
}

pub fn render_report(analysis: &Analysis, color: bool) -> String {
    let report = analysis.stats.report();
    let mut out = String::new();

    heading(&mut out, "Traffic", color);
    let _ = writeln!(
        out,
        "  lines: {} | skipped: {}",
        analysis.lines.total_lines, analysis.skipped
    );
    match (report.first_seen, report.last_seen) {
        (Some(first), Some(last)) => {
            let _ = writeln!(out, "  period: {} .. {}", first.to_rfc3339(), last.to_rfc3339());
        }
        _ => out.push_str("  period: <no data>\n"),
    }
    let _ = writeln!(
        out,
        "  visits: {} | users: {} | errors: {} | bytes: {}",
        report.total_visits, report.unique_users, report.error_count, report.total_traffic
    );
    out.push('\n');

    heading(&mut out, "Rates", color);
    let _ = writeln!(out, "  visits/hour:     {:.2}", report.average_visits_per_hour);
    let _ = writeln!(out, "  errors/hour:     {:.2}", report.average_errors_per_hour);
    let _ = writeln!(out, "  bytes/hour:      {:.2}", report.traffic_rate);
    let _ = writeln!(out, "  visits/user:     {:.2}", report.average_visits_per_user);
    let _ = writeln!(out, "  peak visits/sec: {}", report.peak_visits_per_second);
    let _ = writeln!(out, "  max visits/user: {}", report.max_visits_per_user);
    out.push('\n');

    heading(&mut out, "Browsers", color);
    render_shares(&mut out, &report.browsers);
    out.push('\n');

    heading(&mut out, "Operating systems", color);
    render_shares(&mut out, &report.operating_systems);
    out.push('\n');

    heading(&mut out, "Available pages", color);
    render_list(&mut out, report.available_pages.iter());

    heading(&mut out, "Not found pages", color);
    render_list(&mut out, report.not_found_pages.iter());

    heading(&mut out, "Referrer sites", color);
    render_list(&mut out, report.referrer_sites.iter());

    out
}

pub fn render_line_stats(stats: &LineStats) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Total lines: {}", stats.total_lines);
    match (stats.longest, stats.shortest) {
        (Some(longest), Some(shortest)) => {
            let _ = writeln!(out, "Longest line: {longest}");
            let _ = writeln!(out, "Shortest line: {shortest}");
        }
        _ => out.push_str("Longest line: -\nShortest line: -\n"),
    }
    out
}

fn heading(out: &mut String, title: &str, color: bool) {
    if color {
        let _ = writeln!(out, "{}", title.bold());
    } else {
        let _ = writeln!(out, "{title}");
    }
}

fn render_shares<K: ToString>(out: &mut String, shares: &BTreeMap<K, f64>) {
    if shares.is_empty() {
        out.push_str("  <no samples>\n");
        return;
    }

    // largest share first, ties by name
    let mut rows: Vec<_> = shares.iter().map(|(k, v)| (k.to_string(), *v)).collect();
    rows.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

    for (label, share) in rows {
        let pct = share * 100.0;
        let bars = ((pct / 5.0).floor() as usize).max(1);
        let _ = writeln!(out, "  {:<8} {:<20} {:>5.1}%", label, "█".repeat(bars), pct);
    }
}

fn render_list<'a>(out: &mut String, items: impl ExactSizeIterator<Item = &'a String>) {
    if items.len() == 0 {
        out.push_str("  <none>\n\n");
        return;
    }
    for item in items {
        let _ = writeln!(out, "  {item}");
    }
    out.push('\n');
}
