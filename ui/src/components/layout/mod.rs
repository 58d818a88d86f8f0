pub mod menu_link;
pub mod top_app_bar;

pub use menu_link::*;
pub use top_app_bar::*;
