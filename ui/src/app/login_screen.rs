use dioxus::prelude::*;

use crate::components::forms::LoginForm;
use crate::components::headers::LoginHeader;
use crate::features::login::{Account, AutofillCredential, LoginFormController, LoginSubmission};
use crate::features::navigation::NavTarget;
use crate::services::{AuthService, LoginConfig};
use crate::{console_error, console_info};

#[derive(Props, PartialEq, Clone)]
pub struct LoginScreenProps {
    pub accounts: Vec<Account>,
    pub autofill: Option<AutofillCredential>,
    pub on_navigate: EventHandler<NavTarget>,
    pub on_authenticated: EventHandler<Account>,
}

/// Hosts the login form and drives the single in-flight authentication call.
///
/// Requires an [`AuthService`] in the Dioxus context.
#[component]
pub fn LoginScreen(props: LoginScreenProps) -> Element {
    let auth = use_context::<AuthService>();
    let config = use_hook(LoginConfig::load);
    let mut form = use_signal(LoginFormController::default);
    let mut failure = use_signal(|| None::<String>);
    let on_authenticated = props.on_authenticated;

    let on_login = move |submission: LoginSubmission| {
        let auth = auth.clone();
        failure.set(None);
        spawn(async move {
            let instance = submission.instance.clone();
            let outcome = auth.authenticate(submission).await;
            form.with_mut(|f| f.resolve());
            match outcome {
                Ok(account) => {
                    console_info!("[Login] Signed in as {} on {}", account.name, instance);
                    on_authenticated.call(account);
                }
                Err(e) => {
                    console_error!("[Login] Login on {} failed: {}", instance, e);
                    failure.set(Some(e.to_string()));
                }
            }
        });
    };

    rsx! {
        LoginHeader {
            accounts: props.accounts.clone(),
            on_navigate: props.on_navigate,
        }
        main {
            class: "login-screen",
            LoginForm {
                state: form,
                config: config,
                autofill: props.autofill.clone(),
                on_login: on_login,
            }
            if let Some(message) = failure() {
                div {
                    class: "auth-result error",
                    "✗ {message}"
                }
            }
        }
    }
}
