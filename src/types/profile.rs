//! Per-user profile and preference types

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::JsonMap;
use crate::utils::time::now;

/// Extended profile information, one per user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: String,
    pub user_id: String,
    #[serde(default)]
    pub avatar: String,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub phone_number: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub website: String,
    pub updated_at: DateTime<Utc>,
}

impl UserProfile {
    pub fn new(id: String, user_id: String) -> Self {
        Self {
            id,
            user_id,
            avatar: String::new(),
            bio: String::new(),
            phone_number: String::new(),
            location: String::new(),
            company: String::new(),
            website: String::new(),
            updated_at: now(),
        }
    }
}

/// User-specific settings, keyed by user ID in the store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserPreferences {
    pub id: String,
    pub user_id: String,
    /// light, dark or auto
    #[serde(default)]
    pub theme: String,
    #[serde(default)]
    pub language: String,
    #[serde(default)]
    pub timezone: String,
    #[serde(default)]
    pub notifications: HashMap<String, bool>,
    #[serde(default)]
    pub settings: JsonMap,
    pub updated_at: DateTime<Utc>,
}

impl UserPreferences {
    pub fn new(id: String, user_id: String) -> Self {
        Self {
            id,
            user_id,
            theme: String::new(),
            language: String::new(),
            timezone: String::new(),
            notifications: HashMap::new(),
            settings: JsonMap::new(),
            updated_at: now(),
        }
    }
}
