pub mod cli;
pub mod conf;
pub mod ingest;
pub mod logging;
pub mod record;
pub mod stats;
pub mod user_agent;
