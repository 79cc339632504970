//! Snapgram account CLI.
//!
//! Thin front-end over the sign-in view-model: flags play the role of the
//! form's text fields, subcommands the buttons, and the process exit status
//! the navigation outcome. No account logic lives here.

mod models;
mod services;
mod state;
mod validation;

use std::sync::Arc;

use clap::{Parser, Subcommand};

use services::auth::{AuthError, DEFAULT_ENDPOINT, FirebaseAuthService, FirebaseConfig};
use state::sign_in::SignInViewModel;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("form is not valid: the email must be a full address and the password needs at least 6 characters")]
    InvalidForm,
    #[error("sign-in attempt failed")]
    SignInFailed,
    #[error(transparent)]
    Auth(#[from] AuthError),
}

#[derive(Parser, Debug)]
#[command(name = "snapgram", about = "Snapgram account CLI")]
struct Cli {
    /// Firebase web API key.
    #[arg(long, env = "FIREBASE_API_KEY")]
    api_key: String,

    /// Identity Toolkit base URL; point at the auth emulator for local runs.
    #[arg(long, env = "FIREBASE_AUTH_ENDPOINT", default_value = DEFAULT_ENDPOINT)]
    auth_endpoint: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Sign in with email and password.
    SignIn {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Create an account and sign in.
    SignUp {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Open a guest session without credentials.
    Guest,
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let service = FirebaseAuthService::new(FirebaseConfig {
        api_key: cli.api_key,
        endpoint: cli.auth_endpoint,
    });

    match cli.command {
        Command::SignIn { email, password } => run_sign_in(service, &email, &password).await,
        Command::SignUp { email, password } => report(service.sign_up(&email, &password).await),
        Command::Guest => report(service.sign_in_anonymously().await),
    }
}

/// Drive the sign-in view-model the way the form would.
async fn run_sign_in(service: FirebaseAuthService, email: &str, password: &str) -> Result<(), CliError> {
    let mut view_model = SignInViewModel::new(Arc::new(service));
    let form_valid = view_model.is_form_valid();
    let mut signed_in = view_model.successfully_signed_in();

    view_model.email_changed(email);
    view_model.password_changed(password);

    if *form_valid.borrow() != Some(true) {
        return Err(CliError::InvalidForm);
    }

    view_model.sign_in_tapped();
    match signed_in.recv().await {
        Ok(true) => {
            println!("signed in");
            Ok(())
        }
        Ok(false) | Err(_) => Err(CliError::SignInFailed),
    }
}

fn report(result: Result<models::User, AuthError>) -> Result<(), CliError> {
    let user = result?;
    println!("signed in as {}", user.uid);
    Ok(())
}
