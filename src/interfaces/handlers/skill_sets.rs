use actix_web::{web, HttpResponse, Responder};
use tracing::instrument;

use crate::{entities::skill_set::SkillSetRequest, errors::AppError, use_cases::extractors::CurrentUser, AppState};

#[instrument(skip(_user, state))]
pub async fn list_skill_sets(
    _user: CurrentUser,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    let skill_sets = state.skill_set_handler.list_skill_sets().await?;
    Ok(HttpResponse::Ok().json(skill_sets))
}

#[instrument(skip(_user, state, data))]
pub async fn create_skill_set(
    _user: CurrentUser,
    state: web::Data<AppState>,
    data: web::Json<SkillSetRequest>,
) -> Result<impl Responder, AppError> {
    let skill_set = state.skill_set_handler.create_skill_set(data.into_inner()).await?;
    Ok(HttpResponse::Created().json(skill_set))
}

#[instrument(skip(_user, state))]
pub async fn get_skill_set(
    _user: CurrentUser,
    skill_set_id: web::Path<String>,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    let skill_set = state.skill_set_handler.get_skill_set(&skill_set_id).await?;
    Ok(HttpResponse::Ok().json(skill_set))
}

#[instrument(skip(_user, state, data))]
pub async fn update_skill_set(
    _user: CurrentUser,
    skill_set_id: web::Path<String>,
    state: web::Data<AppState>,
    data: web::Json<SkillSetRequest>,
) -> Result<impl Responder, AppError> {
    let skill_set = state
        .skill_set_handler
        .update_skill_set(&skill_set_id, data.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(skill_set))
}

#[instrument(skip(_user, state))]
pub async fn delete_skill_set(
    _user: CurrentUser,
    skill_set_id: web::Path<String>,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    state.skill_set_handler.delete_skill_set(&skill_set_id).await?;
    Ok(HttpResponse::NoContent().finish())
}
