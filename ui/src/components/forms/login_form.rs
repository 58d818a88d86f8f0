use dioxus::prelude::*;

use crate::components::{
    display::LoadingIndicator,
    forms::InstanceSelector,
    input::{InputType, PasswordField, ValidatedInput},
};
use crate::features::login::*;
use crate::services::config::LoginConfig;
use crate::console_debug;

#[derive(Props, PartialEq, Clone)]
pub struct LoginFormProps {
    /// Owned by the caller so it can clear `loading` once authentication settles.
    pub state: Signal<LoginFormController>,
    pub config: LoginConfig,
    /// Values pushed by an autofill provider; applied whenever they change.
    pub autofill: Option<AutofillCredential>,
    pub on_login: EventHandler<LoginSubmission>,
}

#[component]
pub fn LoginForm(props: LoginFormProps) -> Element {
    let mut state = props.state;
    let on_login = props.on_login;
    let config = props.config.clone();
    let submit_config = props.config.clone();
    let denylist = config.denylist();

    // Dispatch function for actions - using in-place reduction to preserve Dioxus Signal reactivity
    let dispatch = EventHandler::new(move |action: LoginAction| {
        state.with_mut(|s| s.reduce_in_place(action));
    });

    use_effect(use_reactive((&props.autofill,), move |(autofill,)| {
        if let Some(autofill) = autofill {
            console_debug!("[Login] Applying autofilled credentials");
            state.with_mut(|s| s.apply_autofill(autofill));
        }
    }));

    let form = state();
    let can_submit = form.can_submit(&denylist);

    rsx! {
        div {
            class: "login-form",

            InstanceSelector {
                instance: form.instance.clone(),
                suggestions: config.suggested_instances.clone(),
                expanded: form.suggestions_open,
                on_change: move |value: String| dispatch.call(LoginAction::SetInstance(value)),
                on_toggle: move |_| dispatch.call(LoginAction::ToggleSuggestions),
                on_choose: move |value: String| dispatch.call(LoginAction::ChooseSuggestion(value)),
                on_dismiss: move |_| dispatch.call(LoginAction::DismissSuggestions),
            }

            ValidatedInput {
                value: form.identifier.clone(),
                label: "Email or Username".to_string(),
                input_type: InputType::Text,
                autocomplete: "username".to_string(),
                highlighted: form.was_autofilled,
                on_change: move |value: String| dispatch.call(LoginAction::SetIdentifier(value)),
            }

            PasswordField {
                password: form.secret.clone(),
                visible: form.secret_visible,
                highlighted: form.was_autofilled,
                on_change: move |value: String| dispatch.call(LoginAction::SetSecret(value)),
                on_toggle_visibility: move |_| dispatch.call(LoginAction::ToggleSecretVisibility),
            }

            div {
                class: "button-section",
                button {
                    class: "login-button",
                    disabled: !can_submit,
                    onclick: move |_| {
                        match state.with_mut(|s| s.submit(&submit_config)) {
                            Ok(submission) => {
                                console_debug!("[Login] Handing submission for {} to host", submission.instance);
                                on_login.call(submission);
                            }
                            Err(blocked) => {
                                console_debug!("[Login] Submit ignored: {}", blocked);
                            }
                        }
                    },
                    if form.loading {
                        LoadingIndicator {}
                    } else {
                        "Login"
                    }
                }
            }
        }
    }
}
