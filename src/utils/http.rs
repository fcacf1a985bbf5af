use std::time::Duration;

/// Get standard user agent string
pub fn get_user_agent() -> &'static str {
    concat!("DDFetch/", env!("CARGO_PKG_VERSION"))
}

/// Build the HTTP client a fetcher owns for its whole lifetime
///
/// `reqwest::Client` pools connections internally and is safe to share
/// between concurrent requests.
pub fn build_client(
    user_agent: &str,
    timeout: Option<Duration>,
) -> reqwest::Result<reqwest::Client> {
    let mut builder = reqwest::Client::builder().user_agent(user_agent);

    if let Some(timeout) = timeout {
        builder = builder.timeout(timeout);
    }

    builder.build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_agent_carries_version() {
        assert!(get_user_agent().starts_with("DDFetch/"));
    }

    #[tokio::test]
    async fn builds_with_and_without_timeout() {
        assert!(build_client(get_user_agent(), None).is_ok());
        assert!(build_client(get_user_agent(), Some(Duration::from_secs(5))).is_ok());
    }
}
