use actix_web::{FromRequest, HttpRequest, HttpMessage};
use futures_util::future::{ready, Ready};
use uuid::Uuid;

use crate::{entities::token::Claims, errors::AuthError};

/// Identity of the caller, built once per request from the verified token.
/// Returns 401 if the auth middleware did not attach claims.
/// Usage: Add `user: CurrentUser` as a parameter to your handler function.
#[derive(Debug, Clone)]
pub struct CurrentUser {
    pub id: Uuid,
    pub username: String,
    pub email: String,
}

impl TryFrom<&Claims> for CurrentUser {
    type Error = AuthError;

    fn try_from(claims: &Claims) -> Result<Self, Self::Error> {
        Ok(CurrentUser {
            id: claims.user_id().ok_or(AuthError::InvalidUserId)?,
            username: claims.username.clone(),
            email: claims.email.clone(),
        })
    }
}

impl FromRequest for CurrentUser {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut actix_web::dev::Payload) -> Self::Future {
        let result = match req.extensions().get::<Claims>() {
            Some(claims) => CurrentUser::try_from(claims).map_err(actix_web::Error::from),
            None => Err(AuthError::MissingCredentials.into()),
        };
        ready(result)
    }
}
