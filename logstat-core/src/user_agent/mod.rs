//! User-agent classification.
//!
//! Classification is plain substring containment checked in a fixed priority
//! order. A user agent carrying several vendor tokens is classified by the
//! first token that matches, so `Edge` wins over the `Chrome` token that Edge
//! user agents also carry.


use serde::Serialize;
use std::fmt;

const OS_TOKENS: &[(&str, OperatingSystem)] = &[
    ("Windows", OperatingSystem::Windows),
    ("Mac OS X", OperatingSystem::MacOs),
    ("Linux", OperatingSystem::Linux),
];

const BROWSER_TOKENS: &[(&str, Browser)] = &[
    ("Edge", Browser::Edge),
    ("Firefox", Browser::Firefox),
    ("Chrome", Browser::Chrome),
    ("Opera", Browser::Opera),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum OperatingSystem {
    Windows,
    #[serde(rename = "macOS")]
    MacOs,
    Linux,
    Unknown,
}

impl OperatingSystem {
    pub fn as_str(&self) -> &'static str {
        match self {
            OperatingSystem::Windows => "Windows",
            OperatingSystem::MacOs => "macOS",
            OperatingSystem::Linux => "Linux",
            OperatingSystem::Unknown => "Unknown",
        }
    }

    /// Whether this value is counted in the OS distribution.
    pub fn is_known(&self) -> bool {
        !matches!(self, OperatingSystem::Unknown)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Browser {
    Edge,
    Firefox,
    Chrome,
    Opera,
    Other,
    Unknown,
}

impl Browser {
    pub fn as_str(&self) -> &'static str {
        match self {
            Browser::Edge => "Edge",
            Browser::Firefox => "Firefox",
            Browser::Chrome => "Chrome",
            Browser::Opera => "Opera",
            Browser::Other => "Other",
            Browser::Unknown => "Unknown",
        }
    }

    /// Whether this value is counted in the browser distribution.
    pub fn is_known(&self) -> bool {
        !matches!(self, Browser::Other | Browser::Unknown)
    }
}

impl fmt::Display for OperatingSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Browser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Categorical view of a `User-Agent` header value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct UserAgent {
    pub os: OperatingSystem,
    pub browser: Browser,
    pub is_bot: bool,
}

impl Default for UserAgent {
    fn default() -> Self {
        Self {
            os: OperatingSystem::Unknown,
            browser: Browser::Unknown,
            is_bot: false,
        }
    }
}

impl UserAgent {
    /// Classify a raw user-agent string. Never fails.
    pub fn classify(raw: &str) -> Self {
        if raw.is_empty() {
            return Self::default();
        }

        let os = OS_TOKENS
            .iter()
            .find(|(token, _)| raw.contains(token))
            .map(|(_, os)| *os)
            .unwrap_or(OperatingSystem::Unknown);

        let browser = BROWSER_TOKENS
            .iter()
            .find(|(token, _)| raw.contains(token))
            .map(|(_, browser)| *browser)
            .unwrap_or(Browser::Other);

        Self {
            os,
            browser,
            is_bot: is_bot(raw),
        }
    }
}

/// Any user agent mentioning "bot" in any case is treated as a crawler.
pub fn is_bot(raw: &str) -> bool {
    raw.to_lowercase().contains("bot")
}
