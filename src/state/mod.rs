//! Scene view-models.
//!
//! One module per screen. Each view-model owns its inputs as plain methods
//! and exposes its outputs as channel subscriptions, so views of any kind
//! (or tests) can bind to them.

pub mod sign_in;
