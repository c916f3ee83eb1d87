use actix_web::{web, HttpResponse, Responder};
use tracing::instrument;

use crate::{entities::profile::ProfileRequest, errors::AppError, use_cases::extractors::CurrentUser, AppState};

#[instrument(skip(_user, state))]
pub async fn list_profiles(
    _user: CurrentUser,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    let profiles = state.profile_handler.list_profiles().await?;
    Ok(HttpResponse::Ok().json(profiles))
}

/// The profile is always bound to the caller; any `user` in the body is ignored.
#[instrument(skip(user, state, data), fields(user_id = %user.id))]
pub async fn create_profile(
    user: CurrentUser,
    state: web::Data<AppState>,
    data: web::Json<ProfileRequest>,
) -> Result<impl Responder, AppError> {
    let profile = state.profile_handler.create_profile(&user.id, data.into_inner()).await?;
    Ok(HttpResponse::Created().json(profile))
}

#[instrument(skip(_user, state))]
pub async fn get_profile(
    _user: CurrentUser,
    profile_id: web::Path<String>,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    let profile = state.profile_handler.get_profile(&profile_id).await?;
    Ok(HttpResponse::Ok().json(profile))
}

#[instrument(skip(_user, state, data))]
pub async fn update_profile(
    _user: CurrentUser,
    profile_id: web::Path<String>,
    state: web::Data<AppState>,
    data: web::Json<ProfileRequest>,
) -> Result<impl Responder, AppError> {
    let profile = state.profile_handler.update_profile(&profile_id, data.into_inner()).await?;
    Ok(HttpResponse::Ok().json(profile))
}

#[instrument(skip(_user, state))]
pub async fn delete_profile(
    _user: CurrentUser,
    profile_id: web::Path<String>,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    state.profile_handler.delete_profile(&profile_id).await?;
    Ok(HttpResponse::NoContent().finish())
}
