//! Preference endpoints

use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;

use crate::api::error::ApiResult;
use crate::api::extract::JsonBody;
use crate::api::state::AppState;
use crate::types::{JsonMap, UserPreferences};
use crate::utils::generate_id;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct PreferencesRequest {
    pub user_id: String,
    pub theme: String,
    pub language: String,
    pub timezone: String,
    pub notifications: HashMap<String, bool>,
    pub settings: JsonMap,
}

impl PreferencesRequest {
    fn into_preferences(self, id: String, user_id: String) -> UserPreferences {
        let mut prefs = UserPreferences::new(id, user_id);
        prefs.theme = self.theme;
        prefs.language = self.language;
        prefs.timezone = self.timezone;
        prefs.notifications = self.notifications;
        prefs.settings = self.settings;
        prefs
    }
}

/// POST /preferences
pub async fn create_preferences(
    State(state): State<Arc<AppState>>,
    JsonBody(mut body): JsonBody<PreferencesRequest>,
) -> ApiResult<(StatusCode, Json<UserPreferences>)> {
    let user_id = std::mem::take(&mut body.user_id);
    let prefs = state
        .store
        .create_preferences(body.into_preferences(generate_id("pref"), user_id))?;

    Ok((StatusCode::CREATED, Json(prefs)))
}

/// GET /preferences/user/:user_id
pub async fn get_preferences(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<String>,
) -> ApiResult<Json<UserPreferences>> {
    Ok(Json(state.store.get_preferences(&user_id)?))
}

/// PUT /preferences/user/:user_id
pub async fn update_preferences(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<String>,
    JsonBody(body): JsonBody<PreferencesRequest>,
) -> ApiResult<Json<UserPreferences>> {
    let replacement = body.into_preferences(String::new(), user_id.clone());
    Ok(Json(state.store.update_preferences(&user_id, replacement)?))
}
