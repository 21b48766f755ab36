//! Feeding log files into the parser and aggregator.
//!
//! Lines are read one at a time, checked against the configured length
//! limit, parsed, and folded into a [`StatisticsAggregator`]. An over-long
//! line always ends the run; a malformed line is skipped or ends the run
//! depending on [`MalformedPolicy`].
//!
//! [`StatisticsAggregator`]: crate::stats::StatisticsAggregator
//! [`MalformedPolicy`]: crate::conf::MalformedPolicy

mod error;
mod pipeline;
mod reader;
mod source;


pub use error::IngestError;
pub use pipeline::*;
pub use reader::*;
pub use source::*;
