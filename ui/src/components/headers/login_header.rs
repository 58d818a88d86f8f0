use dioxus::prelude::*;

use crate::components::layout::TopAppBar;
use crate::features::login::Account;
use crate::features::navigation::NavTarget;

/// Back is only offered when there is an account to go back to.
pub fn login_back_enabled(accounts: &[Account]) -> bool {
    !accounts.is_empty()
}

#[derive(Props, PartialEq, Clone)]
pub struct LoginHeaderProps {
    pub accounts: Vec<Account>,
    pub on_navigate: EventHandler<NavTarget>,
}

#[component]
pub fn LoginHeader(props: LoginHeaderProps) -> Element {
    let on_navigate = props.on_navigate;

    rsx! {
        TopAppBar {
            title: "Login".to_string(),
            back_enabled: login_back_enabled(&props.accounts),
            on_back: move |_| on_navigate.call(NavTarget::Back),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_back_requires_an_account() {
        assert!(!login_back_enabled(&[]));
        let accounts = vec![Account {
            id: 7,
            name: "alice".to_string(),
            instance: "lemmy.ml".to_string(),
            current: false,
        }];
        assert!(login_back_enabled(&accounts));
    }
}
