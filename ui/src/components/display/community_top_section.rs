use dioxus::prelude::*;

use crate::features::community::CommunityView;

#[derive(Props, PartialEq, Clone)]
pub struct CommunityTopSectionProps {
    pub community_view: CommunityView,
    pub on_click_follow_community: EventHandler<CommunityView>,
}

#[component]
pub fn CommunityTopSection(props: CommunityTopSectionProps) -> Element {
    let view = props.community_view.clone();
    let community = &view.community;
    let follow = view.subscribed.follow_button();
    let on_follow = props.on_click_follow_community;
    let clicked = view.clone();

    rsx! {
        div {
            class: "community-top-section",

            div {
                class: "community-images",
                if let Some(banner) = &community.banner {
                    img {
                        class: "community-banner",
                        src: "{banner}",
                        alt: ""
                    }
                }
                if let Some(icon) = &community.icon {
                    img {
                        class: "community-icon",
                        src: "{icon}",
                        alt: ""
                    }
                }
            }

            div {
                class: "community-summary",
                h2 {
                    class: "community-title",
                    "{community.title}"
                }
                p {
                    class: "community-activity muted",
                    "{view.active_users_label()}"
                }
                button {
                    class: if follow.joined { "follow-button outlined" } else { "follow-button" },
                    onclick: move |_| on_follow.call(clicked.clone()),
                    "{follow.label}"
                    if follow.joined {
                        span {
                            class: "follow-check",
                            " ✓"
                        }
                    }
                }
            }
        }
    }
}
