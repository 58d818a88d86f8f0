use tracing::{debug, info, instrument};

use super::form_validation::{validate_login_fields, Denylist};
use super::types::*;
use crate::services::config::LoginConfig;
use crate::services::errors::SubmitBlocked;

/// Transient state behind the login form.
///
/// Lives in a signal owned by the login screen and is dropped with it.
/// Validity is never stored; it is derived from the fields on demand.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LoginFormController {
    pub instance: String,
    pub identifier: String,
    pub secret: String,
    pub suggestions_open: bool,
    pub secret_visible: bool,
    pub was_autofilled: bool,
    pub loading: bool,
}

impl LoginFormController {
    pub fn set_instance(&mut self, instance: String) {
        self.instance = instance;
    }

    pub fn set_identifier(&mut self, identifier: String) {
        self.identifier = identifier;
    }

    pub fn set_secret(&mut self, secret: String) {
        self.secret = secret;
    }

    pub fn toggle_suggestions(&mut self) {
        self.suggestions_open = !self.suggestions_open;
    }

    pub fn dismiss_suggestions(&mut self) {
        self.suggestions_open = false;
    }

    pub fn choose_suggestion(&mut self, instance: String) {
        self.instance = instance;
        self.suggestions_open = false;
    }

    /// Cosmetic only: switches between masked and clear rendering.
    pub fn toggle_secret_visibility(&mut self) {
        self.secret_visible = !self.secret_visible;
    }

    /// Overwrite whichever fields the provider filled in.
    pub fn apply_autofill(&mut self, autofill: AutofillCredential) {
        let mut filled = false;
        if let Some(identifier) = autofill.identifier {
            self.identifier = identifier;
            filled = true;
        }
        if let Some(secret) = autofill.secret {
            self.secret = secret;
            filled = true;
        }
        if filled {
            debug!("login form autofilled");
            self.was_autofilled = true;
        }
    }

    pub fn compute_validity(&self, denylist: &Denylist) -> bool {
        validate_login_fields(&self.instance, &self.identifier, &self.secret, denylist)
    }

    /// Whether the login button should be enabled.
    pub fn can_submit(&self, denylist: &Denylist) -> bool {
        !self.loading && self.compute_validity(denylist)
    }

    /// Build the credential from the current fields without touching state.
    pub fn credential(&self, max_password_chars: usize) -> Credential {
        Credential::from_fields(&self.identifier, &self.secret, max_password_chars)
    }

    /// Produce the submission and mark the form as loading.
    ///
    /// Blocked submissions leave the state untouched. The stored secret is
    /// never truncated; only the outgoing credential is.
    #[instrument(skip_all, fields(instance = %self.instance))]
    pub fn submit(&mut self, config: &LoginConfig) -> Result<LoginSubmission, SubmitBlocked> {
        if self.loading {
            return Err(SubmitBlocked::InFlight);
        }
        if !self.compute_validity(&config.denylist()) {
            return Err(SubmitBlocked::Invalid);
        }

        let submission = LoginSubmission {
            credential: self.credential(config.max_password_chars),
            instance: self.instance.clone(),
        };
        self.loading = true;
        info!("Submitting login to {}", submission.instance);
        debug!("Login identifier: {}", submission.credential.username_or_email);
        Ok(submission)
    }

    /// The authenticator finished, whatever the outcome. Fields are kept so
    /// the user can submit again.
    pub fn resolve(&mut self) {
        self.loading = false;
    }

    /// Reduces the state based on an action in-place (preserves Dioxus Signal reactivity)
    pub fn reduce_in_place(&mut self, action: LoginAction) {
        match action {
            LoginAction::SetInstance(instance) => self.set_instance(instance),
            LoginAction::SetIdentifier(identifier) => self.set_identifier(identifier),
            LoginAction::SetSecret(secret) => self.set_secret(secret),
            LoginAction::ToggleSuggestions => self.toggle_suggestions(),
            LoginAction::DismissSuggestions => self.dismiss_suggestions(),
            LoginAction::ChooseSuggestion(instance) => self.choose_suggestion(instance),
            LoginAction::ToggleSecretVisibility => self.toggle_secret_visibility(),
            LoginAction::Autofill(autofill) => self.apply_autofill(autofill),
            LoginAction::Resolve => self.resolve(),
        }
    }
}
