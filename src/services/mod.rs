//! Backend service clients.
//!
//! ARCHITECTURE
//! ============
//! Service modules own the talking-to-the-provider logic so scene
//! view-models can stay focused on input/output wiring.

pub mod auth;
