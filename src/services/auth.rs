//! Identity-provider auth service.
//!
//! ARCHITECTURE
//! ============
//! `AuthServiceProvider` is the seam between scenes and the identity
//! backend: view-models depend on the trait, `FirebaseAuthService` talks to
//! the Identity Toolkit REST API, and tests substitute a canned mock.
//!
//! ERROR HANDLING
//! ==============
//! Every provider failure collapses into `AuthError`: credential rejections
//! keep their tag, everything else (transport failures, unexpected payloads,
//! other provider codes) folds into `Custom` with display text only.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use serde::Deserialize;

use crate::models::User;

/// Hosted Identity Toolkit base URL.
pub const DEFAULT_ENDPOINT: &str = "https://identitytoolkit.googleapis.com";

/// Errors surfaced by sign-in and sign-up operations.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// The provider rejected the email/password pair.
    #[error("invalid credentials")]
    InvalidCredentials,
    /// Any other failure; carries display text only.
    #[error("{0}")]
    Custom(String),
}

/// Asynchronous email + password authentication.
#[async_trait::async_trait]
pub trait AuthServiceProvider: Send + Sync {
    /// Exchange an email/password pair for an authenticated [`User`].
    async fn sign_in(&self, email: &str, password: &str) -> Result<User, AuthError>;
}

// =============================================================================
// CONFIG
// =============================================================================

/// Firebase project configuration.
#[derive(Debug, Clone)]
pub struct FirebaseConfig {
    /// Web API key of the Firebase project.
    pub api_key: String,
    /// Identity Toolkit base URL. Point at the local auth emulator in dev.
    pub endpoint: String,
}

// =============================================================================
// FIREBASE REST CLIENT
// =============================================================================

/// Relevant subset of an `accounts:*` success payload.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AccountResponse {
    local_id: String,
    email: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    error: ApiErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ApiErrorDetail {
    message: String,
}

/// Identity Toolkit REST client implementing [`AuthServiceProvider`].
pub struct FirebaseAuthService {
    client: reqwest::Client,
    config: FirebaseConfig,
}

impl FirebaseAuthService {
    #[must_use]
    pub fn new(config: FirebaseConfig) -> Self {
        Self { client: reqwest::Client::new(), config }
    }

    /// Create an account and sign the new user in.
    pub async fn sign_up(&self, email: &str, password: &str) -> Result<User, AuthError> {
        self.accounts_call(
            "signUp",
            serde_json::json!({ "email": email, "password": password, "returnSecureToken": true }),
        )
        .await
    }

    /// Open a guest session with no credentials.
    pub async fn sign_in_anonymously(&self) -> Result<User, AuthError> {
        self.accounts_call("signUp", serde_json::json!({ "returnSecureToken": true }))
            .await
    }

    fn accounts_url(&self, operation: &str) -> String {
        format!(
            "{}/v1/accounts:{operation}?key={}",
            self.config.endpoint.trim_end_matches('/'),
            self.config.api_key
        )
    }

    async fn accounts_call(&self, operation: &str, body: serde_json::Value) -> Result<User, AuthError> {
        let response = self
            .client
            .post(self.accounts_url(operation))
            .json(&body)
            .send()
            .await
            .map_err(|e| AuthError::Custom(e.to_string()))?;

        let status = response.status();
        let payload = response
            .text()
            .await
            .map_err(|e| AuthError::Custom(e.to_string()))?;

        if !status.is_success() {
            let error = map_api_error(status.as_u16(), &payload);
            tracing::warn!(%operation, status = status.as_u16(), error = %error, "identity provider call failed");
            return Err(error);
        }
        parse_account_response(&payload)
    }
}

#[async_trait::async_trait]
impl AuthServiceProvider for FirebaseAuthService {
    async fn sign_in(&self, email: &str, password: &str) -> Result<User, AuthError> {
        self.accounts_call(
            "signInWithPassword",
            serde_json::json!({ "email": email, "password": password, "returnSecureToken": true }),
        )
        .await
    }
}

/// Extract the signed-in [`User`] from a success payload.
fn parse_account_response(payload: &str) -> Result<User, AuthError> {
    let parsed: AccountResponse = serde_json::from_str(payload)
        .map_err(|e| AuthError::Custom(format!("unexpected provider response: {e}")))?;
    Ok(User { uid: parsed.local_id, email: parsed.email })
}

/// Classify an Identity Toolkit error payload.
///
/// Provider messages look like `"EMAIL_NOT_FOUND"` or
/// `"TOO_MANY_ATTEMPTS_TRY_LATER : ..."`; the leading code decides the
/// variant.
fn map_api_error(status: u16, payload: &str) -> AuthError {
    let Ok(body) = serde_json::from_str::<ApiErrorBody>(payload) else {
        return AuthError::Custom(format!("provider returned status {status}"));
    };
    let message = body.error.message;
    let code = message.split([' ', ':']).next().unwrap_or_default();
    match code {
        "EMAIL_NOT_FOUND" | "INVALID_PASSWORD" | "INVALID_LOGIN_CREDENTIALS" | "INVALID_EMAIL" => {
            AuthError::InvalidCredentials
        }
        _ => AuthError::Custom(message),
    }
}
