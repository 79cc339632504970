//! Sign-in scene view-model.
//!
//! DESIGN
//! ======
//! Inputs are plain methods the view calls on user events; outputs are
//! channels the view subscribes to. Form validity is a latest-value signal
//! (`watch`), completed sign-in attempts are discrete events (`broadcast`).
//! The credential fields live on the instance; there is no shared state
//! outside it.

#[cfg(test)]
#[path = "sign_in_test.rs"]
mod sign_in_test;

use std::sync::Arc;

use tokio::sync::{broadcast, watch};

use crate::services::auth::AuthServiceProvider;
use crate::validation;

const OUTCOME_CHANNEL_CAPACITY: usize = 16;

/// View-model backing the sign-in screen.
///
/// Holds the latest credential pair and derives two observable outputs:
/// whether the form is submittable, and whether a submission succeeded.
pub struct SignInViewModel {
    auth_service: Arc<dyn AuthServiceProvider>,
    email: Option<String>,
    password: Option<String>,
    form_valid_tx: watch::Sender<Option<bool>>,
    signed_in_tx: broadcast::Sender<bool>,
}

impl SignInViewModel {
    #[must_use]
    pub fn new(auth_service: Arc<dyn AuthServiceProvider>) -> Self {
        let (form_valid_tx, _) = watch::channel(None);
        let (signed_in_tx, _) = broadcast::channel(OUTCOME_CHANNEL_CAPACITY);
        Self { auth_service, email: None, password: None, form_valid_tx, signed_in_tx }
    }

    // -------------------------------------------------------------------------
    // Inputs
    // -------------------------------------------------------------------------

    /// Record the latest contents of the email field.
    pub fn email_changed(&mut self, value: &str) {
        self.email = Some(value.to_owned());
        self.publish_validity();
    }

    /// Record the latest contents of the password field.
    pub fn password_changed(&mut self, value: &str) {
        self.password = Some(value.to_owned());
        self.publish_validity();
    }

    /// Handle a tap on the sign-in button.
    ///
    /// Taps while the form is invalid are dropped without an outcome event;
    /// the button is expected to be disabled in that state. Each valid tap
    /// starts its own attempt with the credential pair current at tap time.
    pub fn sign_in_tapped(&self) {
        if *self.form_valid_tx.borrow() != Some(true) {
            tracing::debug!("ignoring sign-in tap while form is invalid");
            return;
        }
        let (Some(email), Some(password)) = (self.email.clone(), self.password.clone()) else {
            return;
        };

        let auth_service = Arc::clone(&self.auth_service);
        let signed_in_tx = self.signed_in_tx.clone();
        tokio::spawn(async move {
            let outcome = match auth_service.sign_in(&email, &password).await {
                Ok(user) => {
                    tracing::info!(uid = %user.uid, "signed in");
                    true
                }
                Err(err) => {
                    tracing::warn!(error = %err, "sign-in attempt failed");
                    false
                }
            };
            // An outcome nobody is subscribed to is simply unobserved.
            let _ = signed_in_tx.send(outcome);
        });
    }

    // -------------------------------------------------------------------------
    // Outputs
    // -------------------------------------------------------------------------

    /// Latest form validity. `None` until both fields have been set once.
    #[must_use]
    pub fn is_form_valid(&self) -> watch::Receiver<Option<bool>> {
        self.form_valid_tx.subscribe()
    }

    /// One event per completed submission attempt; `true` on success.
    /// Provider errors never surface here, they arrive as `false`.
    #[must_use]
    pub fn successfully_signed_in(&self) -> broadcast::Receiver<bool> {
        self.signed_in_tx.subscribe()
    }

    fn publish_validity(&self) {
        // Fields that were never set produce no validity value at all.
        let (Some(email), Some(password)) = (self.email.as_deref(), self.password.as_deref()) else {
            return;
        };
        let valid = validation::is_valid_email(email) && validation::is_valid_password(password);
        self.form_valid_tx.send_replace(Some(valid));
    }
}
