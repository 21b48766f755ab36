use crate::record::LogRecord;
use crate::stats::extract_domain;
use crate::user_agent::{Browser, OperatingSystem};
use ahash::RandomState;
use chrono::{DateTime, FixedOffset};
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};
use std::hash::Hash;

type Counter<K> = HashMap<K, u64, RandomState>;

/// Running traffic statistics over a sequence of log records.
///
/// Bot traffic counts towards bytes, page sets, error counts and the
/// browser/OS tallies, but never towards visits or users.
#[derive(Debug, Clone, Default)]
pub struct StatisticsAggregator {
    min_time: Option<DateTime<FixedOffset>>,
    max_time: Option<DateTime<FixedOffset>>,

    total_traffic: u64,
    total_visits: u64,
    error_count: u64,

    unique_users: HashSet<String, RandomState>,
    visits_per_ip: Counter<String>,
    // keyed by unix second
    visits_per_second: Counter<i64>,

    available_pages: HashSet<String, RandomState>,
    not_found_pages: HashSet<String, RandomState>,

    browsers: Counter<Browser>,
    operating_systems: Counter<OperatingSystem>,

    referrer_sites: HashSet<String, RandomState>,
}

impl StatisticsAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one record into the running totals. Never fails.
    pub fn add_entry(&mut self, record: &LogRecord) {
        let ts = record.timestamp();
        if self.min_time.is_none_or(|min| ts < min) {
            self.min_time = Some(ts);
        }
        if self.max_time.is_none_or(|max| ts > max) {
            self.max_time = Some(ts);
        }
        self.total_traffic = self.total_traffic.saturating_add(record.response_size());

        match record.status() {
            404 => {
                self.not_found_pages.insert(record.path().to_owned());
            }
            200 => {
                self.available_pages.insert(record.path().to_owned());
            }
            _ => {}
        }

        let ua = record.user_agent();
        if ua.browser.is_known() {
            *self.browsers.entry(ua.browser).or_insert(0) += 1;
        }
        if ua.os.is_known() {
            *self.operating_systems.entry(ua.os).or_insert(0) += 1;
        }

        if !ua.is_bot {
            self.total_visits += 1;
            if !self.unique_users.contains(record.client_ip()) {
                self.unique_users.insert(record.client_ip().to_owned());
            }
            *self
                .visits_per_ip
                .entry(record.client_ip().to_owned())
                .or_insert(0) += 1;
            *self.visits_per_second.entry(ts.timestamp()).or_insert(0) += 1;
        }

        if record.is_error() {
            self.error_count += 1;
        }

        if let Some(domain) = record.referer_present().and_then(extract_domain) {
            self.referrer_sites.insert(domain);
        }
    }

    /// Fold another aggregator's totals into this one.
    ///
    /// Merging shards built over disjoint slices of a log gives the same
    /// result as a single pass, in any order.
    pub fn merge(&mut self, other: StatisticsAggregator) {
        self.min_time = match (self.min_time, other.min_time) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        };
        self.max_time = match (self.max_time, other.max_time) {
            (Some(a), Some(b)) => Some(a.max(b)),
            (a, b) => a.or(b),
        };

        self.total_traffic = self.total_traffic.saturating_add(other.total_traffic);
        self.total_visits += other.total_visits;
        self.error_count += other.error_count;

        self.unique_users.extend(other.unique_users);
        merge_counts(&mut self.visits_per_ip, other.visits_per_ip);
        merge_counts(&mut self.visits_per_second, other.visits_per_second);

        self.available_pages.extend(other.available_pages);
        self.not_found_pages.extend(other.not_found_pages);

        merge_counts(&mut self.browsers, other.browsers);
        merge_counts(&mut self.operating_systems, other.operating_systems);

        self.referrer_sites.extend(other.referrer_sites);
    }

    //-------------------------------------------------------------------------
    // Raw totals
    //-------------------------------------------------------------------------

    pub fn total_visits(&self) -> u64 {
        self.total_visits
    }

    pub fn error_count(&self) -> u64 {
        self.error_count
    }

    /// Sum of response sizes in bytes, bots included.
    pub fn total_traffic(&self) -> u64 {
        self.total_traffic
    }

    pub fn unique_users(&self) -> usize {
        self.unique_users.len()
    }

    /// Earliest and latest timestamp seen, if any record was added.
    pub fn time_range(&self) -> Option<(DateTime<FixedOffset>, DateTime<FixedOffset>)> {
        self.min_time.zip(self.max_time)
    }

    //-------------------------------------------------------------------------
    // Rates
    //-------------------------------------------------------------------------

    /// Whole hours between the first and last record, truncated.
    fn span_hours(&self) -> Option<i64> {
        self.time_range()
            .map(|(min, max)| max.signed_duration_since(min).num_hours())
    }

    fn per_hour(&self, total: u64) -> f64 {
        match self.span_hours() {
            None => 0.0,
            Some(0) => total as f64,
            Some(hours) => total as f64 / hours as f64,
        }
    }

    pub fn average_visits_per_hour(&self) -> f64 {
        self.per_hour(self.total_visits)
    }

    pub fn average_errors_per_hour(&self) -> f64 {
        self.per_hour(self.error_count)
    }

    /// Bytes served per hour.
    pub fn traffic_rate(&self) -> f64 {
        self.per_hour(self.total_traffic)
    }

    pub fn average_visits_per_user(&self) -> f64 {
        if self.unique_users.is_empty() {
            return 0.0;
        }
        self.total_visits as f64 / self.unique_users.len() as f64
    }

    pub fn peak_visits_per_second(&self) -> u64 {
        self.visits_per_second.values().copied().max().unwrap_or(0)
    }

    pub fn max_visits_per_user(&self) -> u64 {
        self.visits_per_ip.values().copied().max().unwrap_or(0)
    }

    //-------------------------------------------------------------------------
    // Distributions
    //-------------------------------------------------------------------------

    /// Share of `browser` among classifiable browsers; 0 when none were seen.
    pub fn browser_share(&self, browser: Browser) -> f64 {
        share_of(&self.browsers, &browser)
    }

    pub fn browser_distribution(&self) -> BTreeMap<Browser, f64> {
        distribution(&self.browsers)
    }

    /// Share of `os` among classifiable operating systems.
    pub fn os_share(&self, os: OperatingSystem) -> f64 {
        share_of(&self.operating_systems, &os)
    }

    pub fn os_distribution(&self) -> BTreeMap<OperatingSystem, f64> {
        distribution(&self.operating_systems)
    }

    //-------------------------------------------------------------------------
    // Sets (owned copies)
    //-------------------------------------------------------------------------

    pub fn not_found_pages(&self) -> BTreeSet<String> {
        self.not_found_pages.iter().cloned().collect()
    }

    pub fn available_pages(&self) -> BTreeSet<String> {
        self.available_pages.iter().cloned().collect()
    }

    pub fn referrer_sites(&self) -> BTreeSet<String> {
        self.referrer_sites.iter().cloned().collect()
    }
}

impl<'a> Extend<&'a LogRecord> for StatisticsAggregator {
    fn extend<I: IntoIterator<Item = &'a LogRecord>>(&mut self, iter: I) {
        for record in iter {
            self.add_entry(record);
        }
    }
}

impl<'a> FromIterator<&'a LogRecord> for StatisticsAggregator {
    fn from_iter<I: IntoIterator<Item = &'a LogRecord>>(iter: I) -> Self {
        let mut stats = Self::new();
        stats.extend(iter);
        stats
    }
}

fn merge_counts<K: Eq + Hash>(into: &mut Counter<K>, from: Counter<K>) {
    for (key, count) in from {
        *into.entry(key).or_insert(0) += count;
    }
}

fn share_of<K: Eq + Hash>(counts: &Counter<K>, key: &K) -> f64 {
    let total: u64 = counts.values().sum();
    if total == 0 {
        return 0.0;
    }
    counts.get(key).copied().unwrap_or(0) as f64 / total as f64
}

fn distribution<K: Copy + Ord + Eq + Hash>(counts: &Counter<K>) -> BTreeMap<K, f64> {
    let total: u64 = counts.values().sum();
    if total == 0 {
        return BTreeMap::new();
    }
    counts
        .iter()
        .map(|(key, count)| (*key, *count as f64 / total as f64))
        .collect()
}
