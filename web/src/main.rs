use dioxus::prelude::*;
use tracing::{info, warn};

use ui::features::community::{CommunityView, SubscribedType};
use ui::features::login::Account;
use ui::features::NavTarget;
use ui::services::AuthService;
use ui::{CommunityScreen, LoginScreen, SettingsScreen};

mod auth;

use auth::OfflineAuthenticator;

const FAVICON: Asset = asset!("/assets/favicon.svg");
const MAIN_CSS: Asset = asset!("/assets/main.css");

/// Community shown after a successful login.
const HOME_COMMUNITY: &str = "rust";

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    use_context_provider(|| AuthService::new(OfflineAuthenticator));
    use_context_provider(|| Signal::new(Vec::<Account>::new()));

    rsx! {
        // Global app resources
        document::Link { rel: "icon", href: FAVICON }
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        Router::<Route> {}
    }
}

#[derive(Clone, Routable, Debug, PartialEq)]
enum Route {
    #[route("/")]
    Login {},
    #[route("/c/:name")]
    Community { name: String },
    #[route("/settings")]
    Settings {},
}

/// Map an abstract navigation request onto the router.
fn use_navigate() -> impl Fn(NavTarget) + Copy {
    let nav = navigator();
    move |target: NavTarget| match target {
        NavTarget::Back => nav.go_back(),
        NavTarget::Settings => {
            nav.push(Route::Settings {});
        }
        NavTarget::Community(name) => {
            nav.push(Route::Community { name });
        }
        other => warn!("Screen '{}' is not available in this build", other.route_id()),
    }
}

#[component]
fn Login() -> Element {
    let mut accounts = use_context::<Signal<Vec<Account>>>();
    let navigate = use_navigate();

    rsx! {
        LoginScreen {
            accounts: accounts(),
            on_navigate: move |target| navigate(target),
            on_authenticated: move |account: Account| {
                accounts.with_mut(|list| {
                    list.retain(|a| !(a.name == account.name && a.instance == account.instance));
                    for existing in list.iter_mut() {
                        existing.current = false;
                    }
                    list.push(Account { current: true, ..account });
                });
                navigate(NavTarget::Community(HOME_COMMUNITY.to_string()));
            },
        }
    }
}

#[component]
fn Community(name: String) -> Element {
    let mut view = use_signal(CommunityView::sample);
    let navigate = use_navigate();

    // Keep the placeholder in step with the route parameter
    use_effect(use_reactive((&name,), move |(name,)| {
        view.with_mut(|v| v.community.name = name);
    }));

    rsx! {
        CommunityScreen {
            community_view: view(),
            on_navigate: move |target| navigate(target),
            on_follow_community: move |_| {
                view.with_mut(|v| {
                    v.subscribed = match v.subscribed {
                        SubscribedType::NotSubscribed => SubscribedType::Subscribed,
                        SubscribedType::Subscribed | SubscribedType::Pending => SubscribedType::NotSubscribed,
                    };
                });
            },
            on_block_community: move |blocked: CommunityView| {
                warn!("Blocking {} is not available in this build", blocked.community.name);
            },
            on_refresh: move |sort| {
                info!("Refreshing {} sorted by {}", view.peek().community.name, sort);
            },
        }
        nav {
            class: "bottom-bar",
            button {
                class: "menu-link",
                onclick: move |_| navigate(NavTarget::Settings),
                "⚙ Settings"
            }
        }
    }
}

#[component]
fn Settings() -> Element {
    let accounts = use_context::<Signal<Vec<Account>>>();
    let navigate = use_navigate();

    rsx! {
        SettingsScreen {
            accounts: accounts(),
            on_navigate: move |target| navigate(target),
        }
    }
}
