use actix_web::{web, HttpResponse, Responder};
use tracing::instrument;

use crate::{entities::team::TeamRequest, errors::AppError, use_cases::extractors::CurrentUser, AppState};

#[instrument(skip(_user, state))]
pub async fn list_teams(
    _user: CurrentUser,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    let teams = state.team_handler.list_teams().await?;
    Ok(HttpResponse::Ok().json(teams))
}

#[instrument(skip(_user, state, data))]
pub async fn create_team(
    _user: CurrentUser,
    state: web::Data<AppState>,
    data: web::Json<TeamRequest>,
) -> Result<impl Responder, AppError> {
    let team = state.team_handler.create_team(data.into_inner()).await?;
    Ok(HttpResponse::Created().json(team))
}

#[instrument(skip(_user, state))]
pub async fn get_team(
    _user: CurrentUser,
    team_id: web::Path<String>,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    let team = state.team_handler.get_team(&team_id).await?;
    Ok(HttpResponse::Ok().json(team))
}

#[instrument(skip(_user, state, data))]
pub async fn update_team(
    _user: CurrentUser,
    team_id: web::Path<String>,
    state: web::Data<AppState>,
    data: web::Json<TeamRequest>,
) -> Result<impl Responder, AppError> {
    let team = state.team_handler.update_team(&team_id, data.into_inner()).await?;
    Ok(HttpResponse::Ok().json(team))
}

#[instrument(skip(_user, state))]
pub async fn delete_team(
    _user: CurrentUser,
    team_id: web::Path<String>,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    state.team_handler.delete_team(&team_id).await?;
    Ok(HttpResponse::NoContent().finish())
}
