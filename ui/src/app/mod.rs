//! Screens composed from the components, one per route the host exposes.

mod community_screen;
mod login_screen;
mod settings_screen;

pub use community_screen::CommunityScreen;
pub use login_screen::LoginScreen;
pub use settings_screen::SettingsScreen;
