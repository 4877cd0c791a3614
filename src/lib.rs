//! Identity Hub
//!
//! An in-memory user and identity management service exposed over a JSON
//! REST API.
//!
//! # Features
//!
//! - **Accounts**: Users, roles, profiles and preferences
//! - **Teams**: Teams with a maintained member count
//! - **Credentials**: Password reset tokens and sessions
//! - **Invitations**: Token-addressed invitations with a one-way lifecycle
//! - **Permissions**: A permission catalog and per-user grants
//! - **Audit**: Append-only audit and activity trails
//! - **Thread-Safe**: Every compound mutation runs under one write lock
//!
//! # Modules
//!
//! - `types`: Domain records (User, Team, Invitation, ...)
//! - `store`: In-memory tables and their operations
//! - `api`: Axum router, handlers, extractors and error mapping
//! - `config`: Environment-driven server configuration
//! - `logging`: Tracing subscriber setup
//! - `utils`: ID generation and timestamps
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use identity_hub::{create_router, AppConfig, AppState, Store};
//!
//! #[tokio::main]
//! async fn main() {
//!     let state = Arc::new(AppState::new(Store::with_defaults(), AppConfig::default()));
//!     let app = create_router(state);
//!     let listener = tokio::net::TcpListener::bind("127.0.0.1:8080").await.unwrap();
//!     axum::serve(listener, app).await.unwrap();
//! }
//! ```

pub mod api;
pub mod config;
pub mod logging;
pub mod store;
pub mod types;
pub mod utils;

// Re-export commonly used items at crate root
pub use api::{create_router, ApiError, AppState};
pub use config::{AppConfig, ConfigError};
pub use store::{Store, StoreError, StoreResult};
pub use types::{
    ActivityLog, AuditLog, AuditStatus, Invitation, InvitationStatus, PasswordReset, Permission,
    Role, Session, Team, TeamMember, TeamRole, User, UserPermission, UserPreferences, UserProfile,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
