use crate::features::login::{current_account, Account};
use crate::features::navigation::NavTarget;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SettingsIcon {
    Palette,
    ManageAccounts,
    Info,
}

impl SettingsIcon {
    pub fn glyph(self) -> &'static str {
        match self {
            SettingsIcon::Palette => "🎨",
            SettingsIcon::ManageAccounts => "👤",
            SettingsIcon::Info => "ℹ️",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SettingsEntry {
    pub title: String,
    pub icon: SettingsIcon,
    pub target: NavTarget,
}

/// Entries of the settings screen, in display order.
///
/// The account entry only appears while an account is current.
pub fn settings_entries(accounts: &[Account]) -> Vec<SettingsEntry> {
    let mut entries = vec![SettingsEntry {
        title: "Look and feel".to_string(),
        icon: SettingsIcon::Palette,
        target: NavTarget::LookAndFeel,
    }];

    if let Some(account) = current_account(accounts) {
        entries.push(SettingsEntry {
            title: format!("{} settings", account.name),
            icon: SettingsIcon::ManageAccounts,
            target: NavTarget::AccountSettings,
        });
    }

    entries.push(SettingsEntry {
        title: "About".to_string(),
        icon: SettingsIcon::Info,
        target: NavTarget::About,
    });
    entries
}

#[cfg(test)]
mod tests {
    use super::*;

    fn account(name: &str, current: bool) -> Account {
        Account {
            id: 1,
            name: name.to_string(),
            instance: "lemmy.ml".to_string(),
            current,
        }
    }

    #[test]
    fn test_entries_without_account() {
        let entries = settings_entries(&[]);
        let targets: Vec<_> = entries.iter().map(|e| e.target.clone()).collect();
        assert_eq!(targets, vec![NavTarget::LookAndFeel, NavTarget::About]);
    }

    #[test]
    fn test_entries_with_current_account() {
        let entries = settings_entries(&[account("alice", true)]);
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[1].title, "alice settings");
        assert_eq!(entries[1].target, NavTarget::AccountSettings);
        assert_eq!(entries[2].title, "About");
    }

    #[test]
    fn test_non_current_account_is_not_listed() {
        let entries = settings_entries(&[account("alice", false)]);
        assert!(entries.iter().all(|e| e.target != NavTarget::AccountSettings));
    }
}
