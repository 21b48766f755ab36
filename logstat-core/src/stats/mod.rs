//! Traffic statistics
//!
//! The aggregator folds parsed records into running counters; nothing is
//! ever removed. Every metric can be queried at any point, including before
//! the first record arrives, in which case it reads as zero or empty.
//!
//! The data flow is:
//!
//! LogRecord
//! StatisticsAggregator::add_entry
//! StatisticsAggregator (queries)
//! StatsReport
//!

mod aggregator;
mod referrer;
mod report;

#[cfg(test)]
mod tests;

pub use aggregator::*;
pub use referrer::extract_domain;
pub use report::*;
