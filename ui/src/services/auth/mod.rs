//! Seam between the login screen and whatever performs authentication.
//!
//! The presentation layer never talks to a server itself. The host provides
//! an [`Authenticator`] through the Dioxus context as an [`AuthService`].

use async_trait::async_trait;
use std::fmt;
use std::rc::Rc;

use crate::features::login::{Account, LoginSubmission};
use crate::services::errors::AuthError;

pub type AuthResult<T> = Result<T, AuthError>;

/// Performs a single login attempt. No retry, no timeout: the caller owns
/// that policy.
#[async_trait(?Send)]
pub trait Authenticator {
    async fn authenticate(&self, submission: LoginSubmission) -> AuthResult<Account>;
}

/// Cloneable handle stored in the Dioxus context.
#[derive(Clone)]
pub struct AuthService(Rc<dyn Authenticator>);

impl AuthService {
    pub fn new(authenticator: impl Authenticator + 'static) -> Self {
        Self(Rc::new(authenticator))
    }

    pub async fn authenticate(&self, submission: LoginSubmission) -> AuthResult<Account> {
        self.0.authenticate(submission).await
    }
}

impl fmt::Debug for AuthService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthService").finish_non_exhaustive()
    }
}
