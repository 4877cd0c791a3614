//! Time and timestamp utilities

use chrono::{DateTime, Duration, Utc};

/// Current UTC time; every server-assigned timestamp comes from here
pub fn now() -> DateTime<Utc> {
    Utc::now()
}

/// Instant `ttl` from now, saturating at the latest representable time
pub fn expires_in(ttl: Duration) -> DateTime<Utc> {
    now()
        .checked_add_signed(ttl)
        .unwrap_or(DateTime::<Utc>::MAX_UTC)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expires_in_is_in_the_future() {
        let before = now();
        let expiry = expires_in(Duration::hours(24));
        assert!(expiry > before + Duration::hours(23));
        assert!(expiry <= now() + Duration::hours(24));
    }

    #[test]
    fn test_expires_in_saturates() {
        assert_eq!(expires_in(Duration::MAX), DateTime::<Utc>::MAX_UTC);
    }
}
