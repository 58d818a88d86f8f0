use dioxus::prelude::*;

#[derive(Props, PartialEq, Clone)]
pub struct DialogProps {
    pub on_dismiss: EventHandler<()>,
    pub children: Element,
}

/// Modal surface over a backdrop; clicking the backdrop dismisses it.
#[component]
pub fn Dialog(props: DialogProps) -> Element {
    let on_dismiss = props.on_dismiss;

    rsx! {
        div {
            class: "dialog-backdrop",
            onclick: move |_| on_dismiss.call(()),
        }
        div {
            class: "dialog",
            role: "dialog",
            {props.children}
        }
    }
}
