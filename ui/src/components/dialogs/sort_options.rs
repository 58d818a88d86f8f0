use dioxus::prelude::*;

use super::Dialog;
use crate::components::layout::MenuLink;
use crate::features::community::SortType;

fn radio_icon(checked: bool) -> String {
    let icon = if checked { "●" } else { "○" };
    icon.to_string()
}

#[derive(Props, PartialEq, Clone)]
pub struct SortOptionsDialogProps {
    pub selected_sort_type: SortType,
    pub on_dismiss: EventHandler<()>,
    pub on_click_sort_type: EventHandler<SortType>,
    pub on_click_sort_top_options: EventHandler<()>,
}

#[component]
pub fn SortOptionsDialog(props: SortOptionsDialogProps) -> Element {
    let selected = props.selected_sort_type;
    let on_pick = props.on_click_sort_type;
    let on_top = props.on_click_sort_top_options;

    rsx! {
        Dialog {
            on_dismiss: props.on_dismiss,
            for sort in SortType::MAIN {
                MenuLink {
                    key: "{sort:?}",
                    icon: radio_icon(sort == selected),
                    text: sort.label().to_string(),
                    on_click: move |_| on_pick.call(sort),
                }
            }
            MenuLink {
                icon: radio_icon(selected.is_top()),
                text: "Top ▸".to_string(),
                on_click: move |_| on_top.call(()),
            }
        }
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct SortTopOptionsDialogProps {
    pub selected_sort_type: SortType,
    pub on_dismiss: EventHandler<()>,
    pub on_click_sort_type: EventHandler<SortType>,
}

#[component]
pub fn SortTopOptionsDialog(props: SortTopOptionsDialogProps) -> Element {
    let selected = props.selected_sort_type;
    let on_pick = props.on_click_sort_type;

    rsx! {
        Dialog {
            on_dismiss: props.on_dismiss,
            for sort in SortType::TOP {
                MenuLink {
                    key: "{sort:?}",
                    icon: radio_icon(sort == selected),
                    text: sort.label().to_string(),
                    on_click: move |_| on_pick.call(sort),
                }
            }
        }
    }
}
