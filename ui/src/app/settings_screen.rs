use dioxus::prelude::*;

use crate::components::layout::{MenuLink, TopAppBar};
use crate::console_debug;
use crate::features::login::Account;
use crate::features::navigation::NavTarget;
use crate::features::settings::settings_entries;

#[derive(Props, PartialEq, Clone)]
pub struct SettingsScreenProps {
    pub accounts: Vec<Account>,
    pub on_navigate: EventHandler<NavTarget>,
}

#[component]
pub fn SettingsScreen(props: SettingsScreenProps) -> Element {
    use_hook(|| console_debug!("[Settings] Opened settings screen"));
    let on_navigate = props.on_navigate;

    rsx! {
        TopAppBar {
            title: "Settings".to_string(),
            on_back: move |_| on_navigate.call(NavTarget::Back),
        }
        main {
            class: "settings-screen",
            for entry in settings_entries(&props.accounts) {
                MenuLink {
                    key: "{entry.title}",
                    icon: entry.icon.glyph().to_string(),
                    text: entry.title.clone(),
                    on_click: move |_| on_navigate.call(entry.target.clone()),
                }
            }
        }
    }
}
