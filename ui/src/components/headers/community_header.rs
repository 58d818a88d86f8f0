use dioxus::prelude::*;

use crate::components::dialogs::{CommunityMoreDialog, SortOptionsDialog, SortTopOptionsDialog};
use crate::components::layout::TopAppBar;
use crate::console_debug;
use crate::features::community::{HeaderEffect, HeaderEvent, HeaderOverlay, SortType};
use crate::features::navigation::NavTarget;

#[derive(Props, PartialEq, Clone)]
pub struct CommunityHeaderProps {
    pub community_name: String,
    pub selected_sort_type: SortType,
    pub on_click_sort_type: EventHandler<SortType>,
    pub on_block_community_click: EventHandler<()>,
    pub on_click_refresh: EventHandler<()>,
    pub on_navigate: EventHandler<NavTarget>,
}

#[component]
pub fn CommunityHeader(props: CommunityHeaderProps) -> Element {
    let mut overlay = use_signal(HeaderOverlay::default);
    let on_sort = props.on_click_sort_type;
    let on_block = props.on_block_community_click;
    let on_refresh = props.on_click_refresh;
    let on_navigate = props.on_navigate;
    let selected = props.selected_sort_type;

    let send = EventHandler::new(move |event: HeaderEvent| {
        let (next, effect) = overlay().transition(event);
        overlay.set(next);
        match effect {
            Some(HeaderEffect::SelectSort(sort)) => {
                console_debug!("[Community] Sort changed to {}", sort);
                on_sort.call(sort);
            }
            Some(HeaderEffect::Refresh) => on_refresh.call(()),
            Some(HeaderEffect::Navigate(target)) => on_navigate.call(target),
            Some(HeaderEffect::Block) => on_block.call(()),
            None => {}
        }
    });

    rsx! {
        {match overlay() {
            HeaderOverlay::SortOptions => rsx! {
                SortOptionsDialog {
                    selected_sort_type: selected,
                    on_dismiss: move |_| send.call(HeaderEvent::Dismiss),
                    on_click_sort_type: move |sort: SortType| send.call(HeaderEvent::PickSort(sort)),
                    on_click_sort_top_options: move |_| send.call(HeaderEvent::OpenTopOptions),
                }
            },
            HeaderOverlay::TopOptions => rsx! {
                SortTopOptionsDialog {
                    selected_sort_type: selected,
                    on_dismiss: move |_| send.call(HeaderEvent::Dismiss),
                    on_click_sort_type: move |sort: SortType| send.call(HeaderEvent::PickSort(sort)),
                }
            },
            HeaderOverlay::MoreOptions => rsx! {
                CommunityMoreDialog {
                    on_dismiss: move |_| send.call(HeaderEvent::Dismiss),
                    on_click_refresh: move |_| send.call(HeaderEvent::Refresh),
                    on_click_community_info: move |_| send.call(HeaderEvent::CommunityInfo),
                    on_click_block_community: move |_| send.call(HeaderEvent::BlockCommunity),
                }
            },
            HeaderOverlay::Closed => rsx! {},
        }}

        TopAppBar {
            title: props.community_name.clone(),
            subtitle: selected.label().to_string(),
            on_back: move |_| on_navigate.call(NavTarget::Back),
            actions: rsx! {
                button {
                    class: "icon-button",
                    title: "Sort by",
                    onclick: move |_| send.call(HeaderEvent::ToggleSort),
                    "⇅"
                }
                button {
                    class: "icon-button",
                    title: "More options",
                    onclick: move |_| send.call(HeaderEvent::ToggleMore),
                    "⋮"
                }
            },
        }
    }
}
