use chrono::{FixedOffset, TimeZone};
use integration_tests::harness::fixture_path;
use logstat_core::conf::AnalyzerConfig;
use logstat_core::ingest::{Analysis, analyze_file};
use logstat_core::user_agent::{Browser, OperatingSystem};
use pretty_assertions::assert_eq;
use std::collections::BTreeSet;

const EPSILON: f64 = 1e-9;

fn analyze_fixture() -> Analysis {
    analyze_file(&fixture_path("access.log"), &AnalyzerConfig::default())
        .expect("fixture should analyze")
}

fn set(items: &[&str]) -> BTreeSet<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn approx(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < EPSILON,
        "expected {expected}, got {actual}"
    );
}

/// Malformed lines are skipped and counted, the rest are aggregated
#[test]
fn fixture_line_accounting() {
    let analysis = analyze_fixture();

    assert_eq!(analysis.lines.total_lines, 8);
    assert_eq!(analysis.skipped, 2);
}

/// Bot requests are excluded from visits and users
#[test]
fn fixture_visit_counts() {
    let stats = analyze_fixture().stats;

    assert_eq!(stats.total_visits(), 5);
    assert_eq!(stats.unique_users(), 3);
    assert_eq!(stats.max_visits_per_user(), 2);
    assert_eq!(stats.peak_visits_per_second(), 3);
    approx(stats.average_visits_per_user(), 5.0 / 3.0);
}

/// Errors, bytes and hourly rates over a 2h34m window
#[test]
fn fixture_rates() {
    let stats = analyze_fixture().stats;

    assert_eq!(stats.error_count(), 3);
    assert_eq!(stats.total_traffic(), 3712);
    approx(stats.average_visits_per_hour(), 2.5);
    approx(stats.average_errors_per_hour(), 1.5);
    approx(stats.traffic_rate(), 1856.0);
}

#[test]
fn fixture_pages_and_referrers() {
    let stats = analyze_fixture().stats;

    assert_eq!(stats.available_pages(), set(&["/index.html", "/style.css"]));
    assert_eq!(stats.not_found_pages(), set(&["/missing", "/robots.txt"]));
    assert_eq!(
        stats.referrer_sites(),
        set(&["blog.example.org", "example.com"])
    );
}

#[test]
fn fixture_browser_and_os_shares() {
    let stats = analyze_fixture().stats;

    approx(stats.browser_share(Browser::Chrome), 0.5);
    approx(stats.browser_share(Browser::Firefox), 0.25);
    approx(stats.browser_share(Browser::Edge), 0.25);
    assert_eq!(stats.browser_share(Browser::Opera), 0.0);

    approx(stats.os_share(OperatingSystem::Windows), 0.6);
    approx(stats.os_share(OperatingSystem::Linux), 0.2);
    approx(stats.os_share(OperatingSystem::MacOs), 0.2);

    approx(stats.browser_distribution().values().sum::<f64>(), 1.0);
    approx(stats.os_distribution().values().sum::<f64>(), 1.0);
}

/// The window spans the earliest and latest parsed records
#[test]
fn fixture_time_range() {
    let stats = analyze_fixture().stats;
    let utc = FixedOffset::east_opt(0).unwrap();

    let (first, last) = stats.time_range().expect("fixture has records");

    assert_eq!(first, utc.with_ymd_and_hms(2023, 10, 10, 13, 55, 36).unwrap());
    assert_eq!(last, utc.with_ymd_and_hms(2023, 10, 10, 16, 30, 0).unwrap());
}
