use crate::record::{LogRecord, parse_line};

pub(crate) const CHROME_WINDOWS: &str = "Mozilla/5.0 (Windows NT 10.0; Chrome/100.0)";
pub(crate) const FIREFOX_LINUX: &str = "Mozilla/5.0 (X11; Linux x86_64; rv:109.0) Gecko/20100101 Firefox/115.0";
pub(crate) const SAFARI_MAC: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) Mac OS X Safari/605.1.15";
pub(crate) const GOOGLEBOT: &str = "Mozilla/5.0 (compatible; Googlebot/2.1; +http://www.google.com/bot.html)";

/// Builder for combined-format lines, defaulting every field to something valid.
#[derive(Clone)]
pub(crate) struct Line {
    pub ip: &'static str,
    pub time: &'static str,
    pub path: &'static str,
    pub status: u16,
    pub size: &'static str,
    pub referer: &'static str,
    pub ua: &'static str,
}

impl Default for Line {
    fn default() -> Self {
        Self {
            ip: "1.2.3.4",
            time: "10/Oct/2023:13:55:36 +0000",
            path: "/index.html",
            status: 200,
            size: "1024",
            referer: "-",
            ua: CHROME_WINDOWS,
        }
    }
}

impl Line {
    pub(crate) fn render(&self) -> String {
        format!(
            r#"{} - - [{}] "GET {} HTTP/1.1" {} {} "{}" "{}""#,
            self.ip, self.time, self.path, self.status, self.size, self.referer, self.ua
        )
    }

    pub(crate) fn record(&self) -> LogRecord {
        parse_line(&self.render()).expect("test line must parse")
    }
}
