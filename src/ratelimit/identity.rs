//! Client identifier derivation
//!
//! Builds the partition keys the limiter counts by, from values the HTTP
//! layer extracts out of proxy headers.

/// Placeholder when no address information is available
pub const UNKNOWN_CLIENT: &str = "unknown";

/// Pick the client address from the trusted proxy header chain
///
/// Takes the first entry of a forwarded-for chain, then the
/// direct-connection address, then the placeholder.
pub fn client_address(forwarded_for: Option<&str>, direct: Option<&str>) -> String {
    if let Some(chain) = forwarded_for {
        if let Some(first) = chain.split(',').next() {
            let first = first.trim();
            if !first.is_empty() {
                return first.to_string();
            }
        }
    }

    match direct {
        Some(addr) if !addr.trim().is_empty() => addr.trim().to_string(),
        _ => UNKNOWN_CLIENT.to_string(),
    }
}

/// Partition key for the limiter
///
/// Authenticated traffic is budgeted per user, anonymous traffic per
/// address; the namespaces keep the two from colliding.
pub fn rate_limit_key(address: &str, user_id: Option<&str>) -> String {
    match user_id {
        Some(id) => format!("user:{}", id),
        None => format!("ip:{}", address),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_forwarded_entry_wins() {
        let addr = client_address(Some("203.0.113.7, 10.0.0.1, 10.0.0.2"), Some("10.0.0.9"));
        assert_eq!(addr, "203.0.113.7");
    }

    #[test]
    fn test_forwarded_entry_is_trimmed() {
        assert_eq!(client_address(Some("  203.0.113.7  "), None), "203.0.113.7");
    }

    #[test]
    fn test_falls_back_to_direct_address() {
        assert_eq!(client_address(None, Some("198.51.100.4")), "198.51.100.4");
        assert_eq!(client_address(Some(""), Some("198.51.100.4")), "198.51.100.4");
        assert_eq!(client_address(Some("  ,10.0.0.1"), Some("198.51.100.4")), "198.51.100.4");
    }

    #[test]
    fn test_unknown_when_nothing_available() {
        assert_eq!(client_address(None, None), UNKNOWN_CLIENT);
        assert_eq!(client_address(Some(""), Some("  ")), UNKNOWN_CLIENT);
    }

    #[test]
    fn test_key_namespaces() {
        assert_eq!(rate_limit_key("203.0.113.7", None), "ip:203.0.113.7");
        assert_eq!(rate_limit_key("203.0.113.7", Some("42")), "user:42");
    }
}
