use actix_web::{web, HttpResponse, Responder};
use tracing::instrument;

use crate::{entities::project::ProjectRequest, errors::AppError, use_cases::extractors::CurrentUser, AppState};

#[instrument(skip(_user, state))]
pub async fn list_projects(
    _user: CurrentUser,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    let projects = state.project_handler.list_projects().await?;
    Ok(HttpResponse::Ok().json(projects))
}

#[instrument(skip(user, state, data), fields(user_id = %user.id))]
pub async fn create_project(
    user: CurrentUser,
    state: web::Data<AppState>,
    data: web::Json<ProjectRequest>,
) -> Result<impl Responder, AppError> {
    let project = state.project_handler.create_project(&user.id, data.into_inner()).await?;
    Ok(HttpResponse::Created().json(project))
}

#[instrument(skip(user, state), fields(user_id = %user.id))]
pub async fn get_project(
    user: CurrentUser,
    project_id: web::Path<String>,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    let project = state.project_handler.get_project(&user.id, &project_id).await?;
    Ok(HttpResponse::Ok().json(project))
}

#[instrument(skip(user, state, data), fields(user_id = %user.id))]
pub async fn update_project(
    user: CurrentUser,
    project_id: web::Path<String>,
    state: web::Data<AppState>,
    data: web::Json<ProjectRequest>,
) -> Result<impl Responder, AppError> {
    let project = state
        .project_handler
        .update_project(&user.id, &project_id, data.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(project))
}

#[instrument(skip(user, state), fields(user_id = %user.id))]
pub async fn delete_project(
    user: CurrentUser,
    project_id: web::Path<String>,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    state.project_handler.delete_project(&user.id, &project_id).await?;
    Ok(HttpResponse::NoContent().finish())
}
