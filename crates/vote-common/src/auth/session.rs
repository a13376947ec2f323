//! Session tokens
//!
//! A logged-in session is an HS256 JWT signed with the configured secret and
//! carried in a cookie. [`SessionService::validate`] is the single accessor that
//! turns a raw token into a typed [`Session`].

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use vote_core::{Handle, User, UserId};

use crate::error::AppError;

/// JWT claims stored in the session cookie
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionClaims {
    /// Subject (user ID)
    pub sub: String,
    /// Login handle
    pub handle: String,
    /// Display name
    pub name: String,
    /// Issued at (Unix timestamp)
    pub iat: i64,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

impl SessionClaims {
    /// Get the user ID
    ///
    /// # Errors
    /// Returns an error if the subject is not a numeric id
    pub fn user_id(&self) -> Result<UserId, AppError> {
        self.sub.parse().map_err(|_| AppError::InvalidSession)
    }
}

/// A payload other than the session itself, signed with the same secret
///
/// The `data` field keeps a sealed payload from ever decoding as [`SessionClaims`]
/// and the reverse.
#[derive(Debug, Serialize, Deserialize)]
struct Sealed<T> {
    data: T,
    exp: i64,
}

/// Authenticated session context
///
/// Every field is present once a token has been validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub user_id: UserId,
    pub handle: Handle,
    pub display_name: String,
}

impl From<&User> for Session {
    fn from(user: &User) -> Self {
        Self {
            user_id: user.id,
            handle: user.handle.clone(),
            display_name: user.display_name.clone(),
        }
    }
}

/// Issues and validates session tokens
#[derive(Clone)]
pub struct SessionService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    ttl_seconds: i64,
}

impl SessionService {
    /// Create a new session service with the given secret and lifetime
    #[must_use]
    pub fn new(secret: &str, ttl_seconds: i64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            ttl_seconds,
        }
    }

    /// Session lifetime in seconds
    #[must_use]
    pub fn ttl_seconds(&self) -> i64 {
        self.ttl_seconds
    }

    /// Issue a signed token for a session
    ///
    /// # Errors
    /// Returns an error if token encoding fails
    pub fn issue(&self, session: &Session) -> Result<String, AppError> {
        let now = Utc::now();
        let claims = SessionClaims {
            sub: session.user_id.to_string(),
            handle: session.handle.to_string(),
            name: session.display_name.clone(),
            iat: now.timestamp(),
            exp: (now + Duration::seconds(self.ttl_seconds)).timestamp(),
        };

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|_| AppError::Internal(anyhow::anyhow!("Failed to encode session token")))
    }

    /// Decode and validate a token
    ///
    /// # Errors
    /// Returns an error if the token is invalid or expired
    pub fn decode(&self, token: &str) -> Result<SessionClaims, AppError> {
        let validation = Validation::default();

        let token_data =
            decode::<SessionClaims>(token, &self.decoding_key, &validation).map_err(|e| {
                match e.kind() {
                    jsonwebtoken::errors::ErrorKind::ExpiredSignature => AppError::SessionExpired,
                    _ => AppError::InvalidSession,
                }
            })?;

        Ok(token_data.claims)
    }

    /// Sign `data` so it can round-trip through the client untouched
    ///
    /// # Errors
    /// Returns an error if token encoding fails
    pub fn seal<T: Serialize>(&self, data: &T, ttl_seconds: i64) -> Result<String, AppError> {
        let sealed = Sealed {
            data,
            exp: (Utc::now() + Duration::seconds(ttl_seconds)).timestamp(),
        };

        encode(&Header::default(), &sealed, &self.encoding_key)
            .map_err(|_| AppError::Internal(anyhow::anyhow!("Failed to seal payload")))
    }

    /// Recover data written by [`Self::seal`]; forged or expired values yield `None`
    pub fn unseal<T: DeserializeOwned>(&self, token: &str) -> Option<T> {
        decode::<Sealed<T>>(token, &self.decoding_key, &Validation::default())
            .ok()
            .map(|token_data| token_data.claims.data)
    }

    /// Validate a token and return the typed session
    ///
    /// # Errors
    /// Returns an error if the token is invalid, expired, or carries malformed claims
    pub fn validate(&self, token: &str) -> Result<Session, AppError> {
        let claims = self.decode(token)?;

        Ok(Session {
            user_id: claims.user_id()?,
            handle: Handle::from_trusted(claims.handle),
            display_name: claims.name,
        })
    }
}

impl std::fmt::Debug for SessionService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionService")
            .field("ttl_seconds", &self.ttl_seconds)
            .finish_non_exhaustive()
    }
}
