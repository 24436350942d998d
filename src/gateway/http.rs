//! Shared HTTP client and status mapping.

use std::sync::OnceLock;

use crate::error::SocialGenError;

static SHARED_CLIENT: OnceLock<reqwest::Client> = OnceLock::new();

/// Get (or create) the shared reqwest client.
///
/// The client's request timeout is the only time bound anywhere in the
/// generation path.
pub fn shared_client() -> &'static reqwest::Client {
    SHARED_CLIENT.get_or_init(|| {
        reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(120))
            .pool_max_idle_per_host(10)
            .build()
            .expect("Failed to build HTTP client")
    })
}

/// Map a non-success HTTP status to an error.
pub fn status_to_error(status: u16, body: &str) -> SocialGenError {
    match status {
        401 | 403 => SocialGenError::Authentication(body.to_string()),
        _ => SocialGenError::api(status, body),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auth_statuses_map_to_authentication() {
        assert!(matches!(
            status_to_error(401, "no key"),
            SocialGenError::Authentication(_)
        ));
        assert!(matches!(
            status_to_error(403, "bad key"),
            SocialGenError::Authentication(_)
        ));
        assert!(matches!(
            status_to_error(500, "boom"),
            SocialGenError::Api { status: 500, .. }
        ));
    }
}
