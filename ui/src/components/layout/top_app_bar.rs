use dioxus::prelude::*;

#[derive(Props, PartialEq, Clone)]
pub struct TopAppBarProps {
    pub title: String,
    pub subtitle: Option<String>,
    #[props(default = true)]
    pub back_enabled: bool,
    pub on_back: EventHandler<()>,
    /// Trailing action buttons.
    pub actions: Option<Element>,
}

#[component]
pub fn TopAppBar(props: TopAppBarProps) -> Element {
    let on_back = props.on_back;

    rsx! {
        header {
            class: "top-app-bar",
            button {
                class: "icon-button",
                title: "Back",
                disabled: !props.back_enabled,
                onclick: move |_| on_back.call(()),
                "←"
            }
            div {
                class: "top-app-bar-title",
                h1 { "{props.title}" }
                if let Some(subtitle) = &props.subtitle {
                    h2 { "{subtitle}" }
                }
            }
            if let Some(actions) = props.actions {
                div {
                    class: "top-app-bar-actions",
                    {actions}
                }
            }
        }
    }
}
