//! Profile endpoints

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
use crate::types::UserProfile;
use crate::utils::generate_id;

/// Profile fields supplied by clients
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ProfileRequest {
    pub user_id: String,
    pub avatar: String,
    pub bio: String,
    pub phone_number: String,
    pub location: String,
    pub company: String,
    pub website: String,
}

impl ProfileRequest {
    fn into_profile(self, id: String, user_id: String) -> UserProfile {
        let mut profile = UserProfile::new(id, user_id);
        profile.avatar = self.avatar;
        profile.bio = self.bio;
        profile.phone_number = self.phone_number;
        profile.location = self.location;
        profile.company = self.company;
        profile.website = self.website;
        profile
    }
}

/// POST /profiles
pub async fn create_profile(
    State(state): State<Arc<AppState>>,
    JsonBody(mut body): JsonBody<ProfileRequest>,
) -> ApiResult<(StatusCode, Json<UserProfile>)> {
    let user_id = std::mem::take(&mut body.user_id);
    let profile = state
        .store
        .create_profile(body.into_profile(generate_id("profile"), user_id))?;

    Ok((StatusCode::CREATED, Json(profile)))
}

/// GET /profiles/user/:user_id
pub async fn get_profile(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<String>,
) -> ApiResult<Json<UserProfile>> {
    Ok(Json(state.store.get_profile_by_user(&user_id)?))
}

/// PUT /profiles/user/:user_id - Replace the user's profile
pub async fn update_profile(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<String>,
    JsonBody(body): JsonBody<ProfileRequest>,
) -> ApiResult<Json<UserProfile>> {
    let replacement = body.into_profile(String::new(), user_id.clone());
    Ok(Json(state.store.update_profile_by_user(&user_id, replacement)?))
}
