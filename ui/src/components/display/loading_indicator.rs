use dioxus::prelude::*;

#[derive(Props, PartialEq, Clone)]
pub struct LoadingIndicatorProps {
    #[props(default)]
    pub message: String,
}

#[component]
pub fn LoadingIndicator(props: LoadingIndicatorProps) -> Element {
    rsx! {
        span {
            class: "loading-indicator",
            role: "progressbar",
            "⏳"
            if !props.message.is_empty() {
                " {props.message}"
            }
        }
    }
}
