pub mod instance_selector;
pub mod login_form;

pub use instance_selector::*;
pub use login_form::*;
