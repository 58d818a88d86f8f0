use dioxus::prelude::*;

use crate::components::input::{input_class, InputType};

#[derive(Props, PartialEq, Clone)]
pub struct InstanceSelectorProps {
    pub instance: String,
    pub suggestions: Vec<String>,
    pub expanded: bool,
    pub on_change: EventHandler<String>,
    pub on_toggle: EventHandler<()>,
    pub on_choose: EventHandler<String>,
    pub on_dismiss: EventHandler<()>,
}

/// Free-text instance field with a dropdown of quick-pick suggestions.
#[component]
pub fn InstanceSelector(props: InstanceSelectorProps) -> Element {
    let on_change = props.on_change;
    let on_toggle = props.on_toggle;
    let on_choose = props.on_choose;
    let on_dismiss = props.on_dismiss;

    rsx! {
        div {
            class: "instance-selector",

            label {
                class: "input-label",
                "Instance"
                div {
                    class: "instance-input-row",
                    input {
                        class: input_class(false),
                        r#type: InputType::Url.as_str(),
                        value: "{props.instance}",
                        placeholder: "ex: lemmy.ml",
                        autocomplete: "off",
                        autocapitalize: "none",
                        spellcheck: false,
                        oninput: move |event| on_change.call(event.value())
                    }
                    button {
                        class: "icon-button dropdown-toggle",
                        r#type: "button",
                        title: "Suggested instances",
                        onclick: move |_| on_toggle.call(()),
                        if props.expanded { "▴" } else { "▾" }
                    }
                }
            }

            if props.expanded {
                div {
                    class: "dropdown-backdrop",
                    onclick: move |_| on_dismiss.call(())
                }
                ul {
                    class: "dropdown-menu",
                    role: "listbox",
                    for option in props.suggestions.iter().cloned() {
                        li {
                            key: "{option}",
                            class: if option == props.instance { "dropdown-item selected" } else { "dropdown-item" },
                            role: "option",
                            onclick: {
                                let option = option.clone();
                                move |_| on_choose.call(option.clone())
                            },
                            "{option}"
                        }
                    }
                }
            }
        }
    }
}
