use actix_web::{web, HttpResponse, Responder};
use tracing::instrument;

use crate::{
    entities::{token::TokenRefreshRequest, user::{LoginUser, NewUser}},
    errors::AppError,
    AppState,
};

#[instrument(skip(state, user), fields(username = %user.username))]
pub async fn register(
    state: web::Data<AppState>,
    user: web::Json<NewUser>,
) -> Result<impl Responder, AppError> {
    let response = state.auth_handler.register(user.into_inner()).await?;
    Ok(HttpResponse::Created().json(response))
}

#[instrument(skip(state, credentials))]
pub async fn login(
    state: web::Data<AppState>,
    credentials: web::Json<LoginUser>,
) -> Result<impl Responder, AppError> {
    let response = state.auth_handler.login(credentials.into_inner()).await?;
    Ok(HttpResponse::Ok().json(response))
}

#[instrument(skip(state, request))]
pub async fn refresh_token(
    state: web::Data<AppState>,
    request: web::Json<TokenRefreshRequest>,
) -> Result<impl Responder, AppError> {
    let response = state.auth_handler.refresh_token(&request.token).await?;
    Ok(HttpResponse::Ok().json(response))
}
