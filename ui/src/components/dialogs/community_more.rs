use dioxus::prelude::*;

use super::Dialog;
use crate::components::layout::MenuLink;

#[derive(Props, PartialEq, Clone)]
pub struct CommunityMoreDialogProps {
    pub on_dismiss: EventHandler<()>,
    pub on_click_refresh: EventHandler<()>,
    pub on_click_community_info: EventHandler<()>,
    pub on_click_block_community: EventHandler<()>,
}

#[component]
pub fn CommunityMoreDialog(props: CommunityMoreDialogProps) -> Element {
    let on_refresh = props.on_click_refresh;
    let on_info = props.on_click_community_info;
    let on_block = props.on_click_block_community;

    rsx! {
        Dialog {
            on_dismiss: props.on_dismiss,
            MenuLink {
                icon: "⟳".to_string(),
                text: "Refresh".to_string(),
                on_click: move |_| on_refresh.call(()),
            }
            MenuLink {
                icon: "ℹ️".to_string(),
                text: "Community Info".to_string(),
                on_click: move |_| on_info.call(()),
            }
            MenuLink {
                icon: "⛔".to_string(),
                text: "Block Community".to_string(),
                on_click: move |_| on_block.call(()),
            }
        }
    }
}
