use dioxus::prelude::*;

#[derive(PartialEq, Clone, Copy, Debug)]
pub enum InputType {
    Text,
    Password,
    Url,
}

impl InputType {
    pub fn as_str(&self) -> &'static str {
        match self {
            InputType::Text => "text",
            InputType::Password => "password",
            InputType::Url => "url",
        }
    }
}

/// Class list for a field, highlighting values that came from autofill.
pub fn input_class(highlighted: bool) -> &'static str {
    if highlighted {
        "input-field input-autofilled"
    } else {
        "input-field"
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct ValidatedInputProps {
    pub value: String,
    pub label: String,
    pub input_type: InputType,
    /// Browser autocomplete hint, e.g. "username".
    #[props(default)]
    pub autocomplete: String,
    #[props(default)]
    pub highlighted: bool,
    pub on_change: EventHandler<String>,
}

#[component]
pub fn ValidatedInput(props: ValidatedInputProps) -> Element {
    rsx! {
        label {
            class: "input-label",
            "{props.label}"
            input {
                class: input_class(props.highlighted),
                r#type: "{props.input_type.as_str()}",
                value: "{props.value}",
                autocomplete: "{props.autocomplete}",
                autocapitalize: "none",
                spellcheck: false,
                oninput: move |event| props.on_change.call(event.value())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_class() {
        assert_eq!(input_class(false), "input-field");
        assert_eq!(input_class(true), "input-field input-autofilled");
    }
}
