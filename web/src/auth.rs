use async_trait::async_trait;
use tracing::warn;

use ui::features::login::{Account, LoginSubmission};
use ui::services::{AuthError, AuthResult, Authenticator};

/// Used until a real backend is wired in: every attempt fails with
/// [`AuthError::Unavailable`], which the login screen shows to the user.
pub struct OfflineAuthenticator;

#[async_trait(?Send)]
impl Authenticator for OfflineAuthenticator {
    async fn authenticate(&self, submission: LoginSubmission) -> AuthResult<Account> {
        warn!("No authentication backend for {}", submission.instance);
        Err(AuthError::Unavailable {
            instance: submission.instance,
        })
    }
}
