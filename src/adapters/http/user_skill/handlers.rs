//! HTTP handlers and DTOs for the user skill association.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, rejection::PathRejection, Path, State},
    http::HeaderMap,
    response::Response,
    Json,
};
use serde::{Deserialize, Serialize};

use crate::adapters::http::correlation::request_metadata;
use crate::adapters::http::envelope::{created, ok, ApiError};
use crate::application::handlers::user_skill::{
    AddUserSkillCommand, AddUserSkillHandler, ListUserSkillsHandler, ListUserSkillsQuery,
    RemoveUserSkillCommand, RemoveUserSkillHandler,
};
use crate::domain::user::{Skill, UserSkill};
use crate::ports::EntityStore;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSkillRequest {
    pub user_id: i64,
    pub skill_id: i64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSkillResponse {
    pub user_id: i64,
    pub skill_id: i64,
}

impl From<UserSkill> for UserSkillResponse {
    fn from(link: UserSkill) -> Self {
        Self {
            user_id: link.user_id.value(),
            skill_id: link.skill_id.value(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillResponse {
    pub id: i64,
    pub skill_name: String,
}

impl From<Skill> for SkillResponse {
    fn from(skill: Skill) -> Self {
        Self {
            id: skill.id.value(),
            skill_name: skill.name,
        }
    }
}

#[derive(Clone)]
pub struct UserSkillHandlers {
    add_handler: Arc<AddUserSkillHandler>,
    list_handler: Arc<ListUserSkillsHandler>,
    remove_handler: Arc<RemoveUserSkillHandler>,
}

impl UserSkillHandlers {
    pub fn new(store: &EntityStore) -> Self {
        Self {
            add_handler: Arc::new(AddUserSkillHandler::new(store.users.clone())),
            list_handler: Arc::new(ListUserSkillsHandler::new(store.users.clone())),
            remove_handler: Arc::new(RemoveUserSkillHandler::new(store.users.clone())),
        }
    }
}

/// POST /api/UserSkill/Add
pub async fn add_user_skill(
    State(handlers): State<UserSkillHandlers>,
    headers: HeaderMap,
    payload: Result<Json<UserSkillRequest>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Json(req) = payload?;
    let link = handlers
        .add_handler
        .handle(
            AddUserSkillCommand {
                user_id: req.user_id,
                skill_id: req.skill_id,
            },
            request_metadata(&headers),
        )
        .await?;
    Ok(created(UserSkillResponse::from(link)))
}

/// GET /api/UserSkill/List/:userId
pub async fn list_user_skills(
    State(handlers): State<UserSkillHandlers>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Response, ApiError> {
    let Path(user_id) = id?;
    let skills = handlers
        .list_handler
        .handle(ListUserSkillsQuery { user_id })
        .await?;
    let response: Vec<SkillResponse> = skills.into_iter().map(SkillResponse::from).collect();
    Ok(ok(response))
}

/// DELETE /api/UserSkill/Remove/:userId/:skillId
pub async fn remove_user_skill(
    State(handlers): State<UserSkillHandlers>,
    headers: HeaderMap,
    ids: Result<Path<(i64, i64)>, PathRejection>,
) -> Result<Response, ApiError> {
    let Path((user_id, skill_id)) = ids?;
    handlers
        .remove_handler
        .handle(
            RemoveUserSkillCommand { user_id, skill_id },
            request_metadata(&headers),
        )
        .await?;
    Ok(ok("User skill removed successfully"))
}
