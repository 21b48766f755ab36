use crate::record::{HttpMethod, LogRecord, MalformedReason, ParseError};
use crate::user_agent::UserAgent;
use chrono::DateTime;
use once_cell::sync::Lazy;
use regex::Regex;
use std::str::FromStr;

/// `10/Oct/2023:13:55:36 +0000`
pub const TIMESTAMP_FORMAT: &str = "%d/%b/%Y:%H:%M:%S %z";

// ip, ident, user, [time], "METHOD path protocol", status, size, "referer", "user-agent"
// Digit, word and space classes are ASCII only.
static COMBINED_LOG_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"(?x)
        ^([0-9.]+)\x20\S+\x20\S+
        \x20\[([A-Za-z0-9_:/]+(?-u:\s)[+\-][0-9]{4})\]
        \x20"([A-Za-z0-9_]+)\x20(\S+)(?-u:\s)\S+"
        \x20([0-9]{3})\x20([0-9]+|-)
        \x20"([^"]*)"\x20"([^"]*)"$"#,
    )
    .expect("combined log pattern must compile")
});

/// Parse one Apache Combined Log Format line.
///
/// A line either parses completely or fails with
/// [`ParseError::MalformedLogLine`] carrying the offending line.
pub fn parse_line(line: &str) -> Result<LogRecord, ParseError> {
    let malformed = |reason| ParseError::malformed(line, reason);

    let caps = COMBINED_LOG_LINE
        .captures(line)
        .ok_or_else(|| malformed(MalformedReason::Grammar))?;

    // All groups are mandatory in the pattern, so indexing cannot miss.
    let timestamp = DateTime::parse_from_str(&caps[2], TIMESTAMP_FORMAT)
        .map_err(|_| malformed(MalformedReason::Timestamp))?;

    let method = caps[3]
        .parse::<HttpMethod>()
        .map_err(|_| malformed(MalformedReason::Method))?;

    let status = caps[5]
        .parse::<u16>()
        .map_err(|_| malformed(MalformedReason::Grammar))?;

    let response_size = match &caps[6] {
        "-" => 0,
        size => size
            .parse::<u64>()
            .map_err(|_| malformed(MalformedReason::ResponseSize))?,
    };

    let user_agent_raw = caps[8].to_owned();
    let user_agent = UserAgent::classify(&user_agent_raw);

    Ok(LogRecord {
        client_ip: caps[1].to_owned(),
        timestamp,
        method,
        path: caps[4].to_owned(),
        status,
        response_size,
        referer: caps[7].to_owned(),
        user_agent_raw,
        user_agent,
    })
}

impl FromStr for LogRecord {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_line(s)
    }
}
