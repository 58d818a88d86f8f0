use dioxus::prelude::*;

use crate::components::display::CommunityTopSection;
use crate::components::headers::CommunityHeader;
use crate::features::community::{CommunityView, SortType};
use crate::features::navigation::NavTarget;

#[derive(Props, PartialEq, Clone)]
pub struct CommunityScreenProps {
    pub community_view: CommunityView,
    pub on_navigate: EventHandler<NavTarget>,
    pub on_follow_community: EventHandler<CommunityView>,
    pub on_block_community: EventHandler<CommunityView>,
    pub on_refresh: EventHandler<SortType>,
}

#[component]
pub fn CommunityScreen(props: CommunityScreenProps) -> Element {
    let mut selected_sort = use_signal(|| SortType::Active);
    let on_block = props.on_block_community;
    let on_refresh = props.on_refresh;
    let blocked = props.community_view.clone();

    rsx! {
        CommunityHeader {
            community_name: props.community_view.community.name.clone(),
            selected_sort_type: selected_sort(),
            on_click_sort_type: move |sort: SortType| {
                selected_sort.set(sort);
                on_refresh.call(sort);
            },
            on_block_community_click: move |_| on_block.call(blocked.clone()),
            on_click_refresh: move |_| on_refresh.call(selected_sort()),
            on_navigate: props.on_navigate,
        }
        main {
            class: "community-screen",
            CommunityTopSection {
                community_view: props.community_view.clone(),
                on_click_follow_community: props.on_follow_community,
            }
        }
    }
}
