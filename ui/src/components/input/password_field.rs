use dioxus::prelude::*;

use super::validated_input::{input_class, InputType};

#[derive(Props, PartialEq, Clone)]
pub struct PasswordFieldProps {
    pub password: String,
    pub visible: bool,
    #[props(default)]
    pub highlighted: bool,
    pub on_change: EventHandler<String>,
    pub on_toggle_visibility: EventHandler<()>,
}

/// Password input with a show/hide toggle. Visibility is purely cosmetic.
#[component]
pub fn PasswordField(props: PasswordFieldProps) -> Element {
    let (input_type, toggle_icon, toggle_label) = if props.visible {
        (InputType::Text, "👁", "Hide password")
    } else {
        (InputType::Password, "🙈", "Show password")
    };

    rsx! {
        label {
            class: "input-label",
            "Password"
            div {
                class: "password-field",
                input {
                    class: input_class(props.highlighted),
                    r#type: input_type.as_str(),
                    value: "{props.password}",
                    autocomplete: "current-password",
                    oninput: move |event| props.on_change.call(event.value())
                }
                button {
                    class: "icon-button",
                    r#type: "button",
                    title: toggle_label,
                    onclick: move |_| props.on_toggle_visibility.call(()),
                    "{toggle_icon}"
                }
            }
        }
    }
}
