use crate::record::HttpMethod;
use crate::user_agent::UserAgent;
use chrono::{DateTime, FixedOffset};
use serde::Serialize;

/// Referer value the combined format uses for "no referer".
pub const NO_REFERER: &str = "-";

/// One fully parsed access-log line.
///
/// Records are only built by [`parse_line`](crate::record::parse_line), so
/// every field is populated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogRecord {
    pub(crate) client_ip: String,
    pub(crate) timestamp: DateTime<FixedOffset>,
    pub(crate) method: HttpMethod,
    pub(crate) path: String,
    pub(crate) status: u16,
    pub(crate) response_size: u64,
    pub(crate) referer: String,
    pub(crate) user_agent_raw: String,
    pub(crate) user_agent: UserAgent,
}

impl LogRecord {
    pub fn client_ip(&self) -> &str {
        &self.client_ip
    }

    pub fn timestamp(&self) -> DateTime<FixedOffset> {
        self.timestamp
    }

    pub fn method(&self) -> HttpMethod {
        self.method
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn status(&self) -> u16 {
        self.status
    }

    pub fn response_size(&self) -> u64 {
        self.response_size
    }

    pub fn referer(&self) -> &str {
        &self.referer
    }

    /// The referer, unless it is empty or the `-` sentinel.
    pub fn referer_present(&self) -> Option<&str> {
        match self.referer.as_str() {
            "" | NO_REFERER => None,
            referer => Some(referer),
        }
    }

    pub fn user_agent_raw(&self) -> &str {
        &self.user_agent_raw
    }

    pub fn user_agent(&self) -> &UserAgent {
        &self.user_agent
    }

    pub fn is_bot(&self) -> bool {
        self.user_agent.is_bot
    }

    pub fn is_error(&self) -> bool {
        (400..=599).contains(&self.status)
    }
}
