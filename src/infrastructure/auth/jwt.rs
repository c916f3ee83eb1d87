use jsonwebtoken::{encode, Header, decode, Validation, TokenData, Algorithm};
use chrono::{Utc, Duration};
use crate::entities::token::Claims;
use crate::entities::user::User;
use crate::repositories::token::TokenServiceRepository;
use crate::settings::{AppConfig, JwtKeys};
use crate::errors::AuthError;

const JWT_ALGORITHM: Algorithm = Algorithm::HS512;

#[derive(Clone)]
pub struct JwtService {
    keys: JwtKeys,
    access_expiration: Duration,
    refresh_window: Duration,
}

impl JwtService {
    pub fn new(config: &AppConfig) -> Self {
        JwtService {
            keys: JwtKeys::from(config),
            access_expiration: Duration::minutes(config.jwt_expiration_minutes),
            refresh_window: Duration::days(config.jwt_refresh_expiration_days),
        }
    }

    pub fn create_jwt(&self, user: &User) -> Result<String, AuthError> {
        let now = Utc::now().timestamp() as usize;
        self.sign(user.id.to_string(), user.username.clone(), user.email.clone(), now, now)
    }

    pub fn decode_jwt(&self, token: &str) -> Result<TokenData<Claims>, AuthError> {
        let mut validation = Validation::new(JWT_ALGORITHM);
        validation.validate_exp = true;
        validation.leeway = 0;

        decode::<Claims>(
            token,
            &self.keys.decoding,
            &validation
        )
        .map_err(AuthError::from)
    }

    /// Re-issues a still-valid token, keeping `orig_iat`, as long as the
    /// refresh window measured from `orig_iat` has not elapsed.
    pub fn refresh_jwt(&self, token: &str) -> Result<String, AuthError> {
        let claims = self.decode_jwt(token)?.claims;
        let now = Utc::now().timestamp() as usize;
        let refresh_limit = claims.orig_iat + self.refresh_window.num_seconds().max(0) as usize;

        if now > refresh_limit {
            return Err(AuthError::RefreshExpired);
        }

        self.sign(claims.sub, claims.username, claims.email, now, claims.orig_iat)
    }

    fn sign(
        &self,
        sub: String,
        username: String,
        email: String,
        iat: usize,
        orig_iat: usize,
    ) -> Result<String, AuthError> {
        let exp = (iat as i64 + self.access_expiration.num_seconds()).max(0) as usize;

        let claims = Claims {
            sub,
            username,
            email,
            exp,
            iat,
            orig_iat,
        };

        encode(&Header::new(JWT_ALGORITHM), &claims, &self.keys.encoding).map_err(|e| {
            tracing::error!("Failed to sign JWT: {}", e);
            AuthError::TokenCreation
        })
    }
}

impl TokenServiceRepository for JwtService {
    fn create_jwt(&self, user: &User) -> Result<String, AuthError> {
        self.create_jwt(user)
    }

    fn decode_jwt(&self, token: &str) -> Result<TokenData<Claims>, AuthError> {
        self.decode_jwt(token)
    }

    fn refresh_jwt(&self, token: &str) -> Result<String, AuthError> {
        self.refresh_jwt(token)
    }
}
