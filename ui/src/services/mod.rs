//! Services behind the screens: configuration, typed errors and the
//! authentication seam.

pub mod auth;
pub mod config;
pub mod errors;

pub use auth::{AuthResult, AuthService, Authenticator};
pub use config::LoginConfig;
pub use errors::*;
