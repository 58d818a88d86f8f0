pub mod menu;

pub use menu::*;
