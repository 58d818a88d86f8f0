pub mod community;
pub mod login;
pub mod navigation;
pub mod settings;

pub use navigation::NavTarget;
