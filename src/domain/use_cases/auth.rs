use uuid::Uuid;
use validator::Validate;

use crate::entities::token::TokenResponse;
use crate::entities::user::{LoginResponse, LoginUser, NewUser, PublicUser, RegisterResponse};
use crate::errors::{AppError, AuthError, FieldError};
use crate::interfaces::repositories::user::{UserRepository, DUPLICATE_EMAIL, DUPLICATE_USERNAME};
use crate::auth::password::{hash_password, verify_password};
use crate::repositories::token::TokenServiceRepository;

pub struct AuthHandler<R, T>
where
    R: UserRepository,
    T: TokenServiceRepository,
{
    pub user_repo: R,
    pub token_service: T,
}

impl<R, T> AuthHandler<R, T>
where
    R: UserRepository,
    T: TokenServiceRepository,
{
    pub fn new(user_repo: R, token_service: T) -> Self {
        AuthHandler {
            user_repo,
            token_service
        }
    }

    /// Registers a new user after validation and password hashing
    pub async fn register(&self, request: NewUser) -> Result<RegisterResponse, AppError> {
        request.validate()?;

        let mut duplicates = Vec::new();
        if self.user_repo.username_exists(request.username.trim()).await? {
            duplicates.push(FieldError::new("username", DUPLICATE_USERNAME));
        }
        if self.user_repo.email_exists(&request.email.trim().to_lowercase()).await? {
            duplicates.push(FieldError::new("email", DUPLICATE_EMAIL));
        }
        if !duplicates.is_empty() {
            return Err(AppError::ValidationError(duplicates));
        }

        let hashed_password = hash_password(&request.password)?;
        let user_insert = request.prepare_for_insert(hashed_password);

        // The unique constraints still guard against a concurrent registration.
        let user = self.user_repo.create_user(&user_insert).await?;
        let token = self.token_service.create_jwt(&user)?;

        tracing::info!(user_id = %user.id, "User registered");
        Ok(RegisterResponse::new(token, &user))
    }

    /// Checks credentials and issues a token
    pub async fn login(&self, request: LoginUser) -> Result<LoginResponse, AppError> {
        request.validate()?;

        let email = request.email.trim().to_lowercase();
        let user = self.user_repo.get_user_by_email(&email)
            .await?
            .ok_or_else(|| {
                tracing::warn!("Login attempt for unknown email");
                AuthError::LoginFailed
            })?;

        let is_password_valid = verify_password(&request.password, &user.password_hash)
            .map_err(|e| {
                tracing::warn!("Password verification error: {}", e);
                AuthError::LoginFailed
            })?;
        if !is_password_valid {
            tracing::warn!(user_id = %user.id, "Login attempt with wrong password");
            return Err(AuthError::LoginFailed.into());
        }

        let token = self.token_service.create_jwt(&user)?;

        if let Err(e) = self.user_repo.update_last_login(&user.id).await {
            tracing::warn!("Failed to record last login: {}", e);
        }

        tracing::info!(user_id = %user.id, "User logged in successfully");
        Ok(LoginResponse::new(token, &user))
    }

    /// Exchanges a valid token for a fresh one, as long as its owner still exists
    pub async fn refresh_token(&self, token: &str) -> Result<TokenResponse, AppError> {
        let claims = self.token_service.decode_jwt(token)?.claims;
        let user_id = claims.user_id().ok_or(AuthError::InvalidUserId)?;

        if self.user_repo.get_user_by_id(&user_id).await?.is_none() {
            return Err(AuthError::InvalidUserId.into());
        }

        let token = self.token_service.refresh_jwt(token)?;
        Ok(TokenResponse { token })
    }

    pub async fn get_current_user(&self, user_id: &Uuid) -> Result<PublicUser, AppError> {
        self.user_repo
            .get_user_by_id(user_id)
            .await?
            .map(PublicUser::from)
            .ok_or_else(|| AppError::NotFound("User not found".into()))
    }
}
