use actix_web::{web, HttpResponse, Responder};
use tracing::instrument;

use crate::{errors::AppError, use_cases::extractors::CurrentUser, AppState};

#[instrument(skip(state, user), fields(user_id = %user.id))]
pub async fn me(
    state: web::Data<AppState>,
    user: CurrentUser,
) -> Result<impl Responder, AppError> {
    let current = state.auth_handler.get_current_user(&user.id).await?;
    Ok(HttpResponse::Ok().json(current))
}
