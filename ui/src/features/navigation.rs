/// Screens the presentation layer can ask the host to show.
///
/// The host owns the actual routing; these are opaque identifiers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NavTarget {
    Back,
    Settings,
    LookAndFeel,
    AccountSettings,
    About,
    CommunitySidebar,
    Community(String),
}

impl NavTarget {
    pub fn route_id(&self) -> &'static str {
        match self {
            NavTarget::Back => "back",
            NavTarget::Settings => "settings",
            NavTarget::LookAndFeel => "lookAndFeel",
            NavTarget::AccountSettings => "accountSettings",
            NavTarget::About => "about",
            NavTarget::CommunitySidebar => "communitySidebar",
            NavTarget::Community(_) => "community",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_ids_are_stable() {
        assert_eq!(NavTarget::CommunitySidebar.route_id(), "communitySidebar");
        assert_eq!(NavTarget::LookAndFeel.route_id(), "lookAndFeel");
        assert_eq!(NavTarget::AccountSettings.route_id(), "accountSettings");
        assert_eq!(NavTarget::About.route_id(), "about");
        assert_eq!(NavTarget::Community("rust".to_string()).route_id(), "community");
    }
}
