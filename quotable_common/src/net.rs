//! Endpoint constants and small HTTP helpers.

/// Random-quote endpoint of the ZenQuotes service.
pub const ZENQUOTES_RANDOM_URL: &str = "https://zenquotes.io/api/random";
/// Request timeout applied when none is given on the command line.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Helper to build the `User-Agent` header value like "name/version".
pub fn user_agent(name: &str, version: &str) -> String {
    format!("{}/{}", name, version)
}

/// Returns `true` for 2xx status codes.
pub fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_range() {
        assert!(is_success(200));
        assert!(is_success(204));
        assert!(!is_success(304));
        assert!(!is_success(500));
    }

    #[test]
    fn user_agent_format() {
        assert_eq!(user_agent("quotable", "0.1.0"), "quotable/0.1.0");
    }
}
