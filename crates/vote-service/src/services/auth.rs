//! Authentication service
//!
//! Handles account registration, login and session token resolution.

use tracing::{info, instrument, warn};
use vote_common::auth::{hash_password, verify_password_or_absent};
use vote_common::{AppError, Session};
use vote_core::entities::{NewUser, User};
use vote_core::value_objects::Handle;
use vote_core::DomainError;

use crate::dto::{LoginRequest, RegisterRequest};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// A freshly established session and its signed token
#[derive(Debug, Clone)]
pub struct AuthenticatedSession {
    pub session: Session,
    pub token: String,
}

/// Run Argon2 work on the blocking pool instead of an async worker
async fn off_runtime<T, F>(work: F) -> ServiceResult<T>
where
    F: FnOnce() -> Result<T, AppError> + Send + 'static,
    T: Send + 'static,
{
    let result = tokio::task::spawn_blocking(work)
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Password task failed: {e}")))?;
    Ok(result?)
}

/// Authentication service
pub struct AuthService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AuthService<'a> {
    /// Create a new AuthService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Register a new account
    ///
    /// Checks run in order: handle length, password confirmation, handle
    /// availability. Nothing is written unless all of them pass.
    #[instrument(skip(self, request), fields(handle = %request.handle))]
    pub async fn register(&self, request: RegisterRequest) -> ServiceResult<User> {
        let handle = Handle::parse(&request.handle)?;

        if request.password != request.confirm_password {
            return Err(DomainError::PasswordMismatch.into());
        }

        if self.ctx.user_repo().handle_exists(&handle).await? {
            warn!("Registration rejected: handle already taken");
            return Err(DomainError::HandleTaken.into());
        }

        let password = request.password;
        let password_hash = off_runtime(move || hash_password(&password)).await?;
        let new_user = NewUser::new(handle, request.display_name, request.email);

        // A concurrent registration can still win the race; the unique index
        // turns that into HandleTaken as well
        let user = self.ctx.user_repo().create(&new_user, &password_hash).await?;

        info!(user_id = %user.id, "User registered successfully");
        Ok(user)
    }

    /// Login with handle and password
    ///
    /// Unknown handles and wrong passwords fail with the same error after the
    /// same amount of hashing work.
    #[instrument(skip(self, request), fields(handle = %request.handle))]
    pub async fn login(&self, request: LoginRequest) -> ServiceResult<AuthenticatedSession> {
        let user = match Handle::parse(&request.handle) {
            Ok(handle) => self.ctx.user_repo().find_by_handle(&handle).await?,
            Err(_) => None,
        };
        let stored_hash = match &user {
            Some(user) => self.ctx.user_repo().get_password_hash(user.id).await?,
            None => None,
        };

        let password = request.password;
        let matches =
            off_runtime(move || verify_password_or_absent(&password, stored_hash.as_deref()))
                .await?;

        let user = match user {
            Some(user) if matches => user,
            Some(user) => {
                warn!(user_id = %user.id, "Login failed: invalid password");
                return Err(AppError::InvalidCredentials.into());
            }
            None => {
                warn!("Login failed: user not found");
                return Err(AppError::InvalidCredentials.into());
            }
        };

        let session = Session::from(&user);
        let token = self.ctx.session_service().issue(&session)?;

        info!(user_id = %user.id, "User logged in successfully");
        Ok(AuthenticatedSession { session, token })
    }

    /// Resolve a session token to the typed session
    #[instrument(skip(self, token))]
    pub fn session_from_token(&self, token: &str) -> ServiceResult<Session> {
        Ok(self.ctx.session_service().validate(token)?)
    }
}
