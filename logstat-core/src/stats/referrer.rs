/// Host portion of a referer URL, without scheme, path, query or port.
///
/// Returns `None` when nothing usable is left, e.g. for `http:///x`.
pub fn extract_domain(referer: &str) -> Option<String> {
    let rest = referer
        .strip_prefix("https://")
        .or_else(|| referer.strip_prefix("http://"))
        .unwrap_or(referer);

    let host = rest
        .find(['/', '?'])
        .map_or(rest, |end| &rest[..end]);

    let host = match host.rfind(':') {
        Some(colon) if is_port(&host[colon + 1..]) => &host[..colon],
        _ => host,
    };

    if host.is_empty() {
        None
    } else {
        Some(host.to_owned())
    }
}

fn is_port(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}
