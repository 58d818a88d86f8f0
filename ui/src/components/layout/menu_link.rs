use dioxus::prelude::*;

#[derive(Props, PartialEq, Clone)]
pub struct MenuLinkProps {
    pub icon: String,
    pub text: String,
    pub on_click: EventHandler<()>,
}

/// Icon and label row used by settings lists and dialog menus.
#[component]
pub fn MenuLink(props: MenuLinkProps) -> Element {
    let on_click = props.on_click;

    rsx! {
        button {
            class: "menu-link",
            onclick: move |_| on_click.call(()),
            span {
                class: "menu-link-icon",
                "{props.icon}"
            }
            span {
                class: "menu-link-text",
                "{props.text}"
            }
        }
    }
}
