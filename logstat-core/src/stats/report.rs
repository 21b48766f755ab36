use crate::stats::StatisticsAggregator;
use crate::user_agent::{Browser, OperatingSystem};
use chrono::{DateTime, FixedOffset};
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

/// Point-in-time copy of every derived metric, ready for rendering.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatsReport {
    pub first_seen: Option<DateTime<FixedOffset>>,
    pub last_seen: Option<DateTime<FixedOffset>>,

    pub total_visits: u64,
    pub unique_users: usize,
    pub error_count: u64,
    pub total_traffic: u64,

    pub average_visits_per_hour: f64,
    pub average_errors_per_hour: f64,
    pub traffic_rate: f64,
    pub average_visits_per_user: f64,
    pub peak_visits_per_second: u64,
    pub max_visits_per_user: u64,

    pub browsers: BTreeMap<Browser, f64>,
    pub operating_systems: BTreeMap<OperatingSystem, f64>,

    pub available_pages: BTreeSet<String>,
    pub not_found_pages: BTreeSet<String>,
    pub referrer_sites: BTreeSet<String>,
}

impl StatisticsAggregator {
    pub fn report(&self) -> StatsReport {
        let range = self.time_range();

        StatsReport {
            first_seen: range.map(|(min, _)| min),
            last_seen: range.map(|(_, max)| max),
            total_visits: self.total_visits(),
            unique_users: self.unique_users(),
            error_count: self.error_count(),
            total_traffic: self.total_traffic(),
            average_visits_per_hour: self.average_visits_per_hour(),
            average_errors_per_hour: self.average_errors_per_hour(),
            traffic_rate: self.traffic_rate(),
            average_visits_per_user: self.average_visits_per_user(),
            peak_visits_per_second: self.peak_visits_per_second(),
            max_visits_per_user: self.max_visits_per_user(),
            browsers: self.browser_distribution(),
            operating_systems: self.os_distribution(),
            available_pages: self.available_pages(),
            not_found_pages: self.not_found_pages(),
            referrer_sites: self.referrer_sites(),
        }
    }
}
