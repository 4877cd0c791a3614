//! Server configuration
//!
//! Every setting has a default and can be overridden through an
//! environment variable:
//!
//! ```bash
//! IDENTITY_BIND_ADDR=0.0.0.0:8080
//! IDENTITY_LOG=debug,tower_http=info
//! IDENTITY_SEED_DEFAULTS=true
//! IDENTITY_DEFAULT_LIMIT=50
//! IDENTITY_MAX_LIMIT=1000
//! IDENTITY_RESET_TTL_HOURS=24
//! IDENTITY_SESSION_TTL_HOURS=168
//! IDENTITY_INVITATION_TTL_HOURS=168
//! ```

use std::env;
use std::str::FromStr;

use chrono::{Duration, Utc};
use thiserror::Error;

/// Configuration errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {value:?}")]
    Invalid { var: &'static str, value: String },
}

/// Main configuration for the identity server
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Address the HTTP listener binds to
    pub bind_addr: String,
    /// Log filter used when `RUST_LOG` is not set
    pub log_filter: String,
    /// Seed the default roles and permission catalog at startup
    pub seed_defaults: bool,
    /// `limit` used by log listings when the query omits it or it does not parse
    pub default_limit: usize,
    /// Upper bound applied to any requested `limit`
    pub max_limit: usize,
    /// Lifetime of password reset tokens
    pub password_reset_ttl: Duration,
    /// Lifetime of sessions
    pub session_ttl: Duration,
    /// Lifetime of invitations
    pub invitation_ttl: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:8080".to_string(),
            log_filter: "info,tower_http=info".to_string(),
            seed_defaults: true,
            default_limit: 50,
            max_limit: 1000,
            password_reset_ttl: Duration::hours(24),
            session_ttl: Duration::days(7),
            invitation_ttl: Duration::days(7),
        }
    }
}

impl AppConfig {
    /// Load configuration from the environment on top of the defaults
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| env::var(var).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        Ok(Self {
            bind_addr: lookup("IDENTITY_BIND_ADDR").unwrap_or(defaults.bind_addr),
            log_filter: lookup("IDENTITY_LOG").unwrap_or(defaults.log_filter),
            seed_defaults: parse_var(&lookup, "IDENTITY_SEED_DEFAULTS", defaults.seed_defaults)?,
            default_limit: parse_var(&lookup, "IDENTITY_DEFAULT_LIMIT", defaults.default_limit)?,
            max_limit: parse_var(&lookup, "IDENTITY_MAX_LIMIT", defaults.max_limit)?,
            password_reset_ttl: hours_var(
                &lookup,
                "IDENTITY_RESET_TTL_HOURS",
                defaults.password_reset_ttl,
            )?,
            session_ttl: hours_var(&lookup, "IDENTITY_SESSION_TTL_HOURS", defaults.session_ttl)?,
            invitation_ttl: hours_var(
                &lookup,
                "IDENTITY_INVITATION_TTL_HOURS",
                defaults.invitation_ttl,
            )?,
        })
    }

    /// Resolve a client-supplied `limit` query value
    ///
    /// Missing or unparsable values fall back to the default; anything above
    /// the maximum is capped.
    pub fn resolve_limit(&self, raw: Option<&str>) -> usize {
        raw.and_then(|s| s.trim().parse::<usize>().ok())
            .unwrap_or(self.default_limit)
            .min(self.max_limit)
    }
}

fn parse_var<F, T>(lookup: &F, var: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(var) {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { var, value }),
    }
}

/// A TTL in whole hours; must be positive and keep `now + ttl` representable
fn hours_var<F>(lookup: &F, var: &'static str, default: Duration) -> Result<Duration, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let Some(value) = lookup(var) else {
        return Ok(default);
    };

    let ttl = value
        .trim()
        .parse::<i64>()
        .ok()
        .filter(|hours| *hours > 0)
        .and_then(Duration::try_hours)
        .filter(|ttl| Utc::now().checked_add_signed(*ttl).is_some());

    ttl.ok_or(ConfigError::Invalid { var, value })
}
