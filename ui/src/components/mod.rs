//! User Interface Components
//!
//! Reusable Dioxus components for the client screens:
//!
//! - **forms**: the login form and its instance selector
//! - **input**: text and password fields
//! - **display**: loading indicator and the community top section
//! - **headers**: login and community top bars
//! - **dialogs**: sort and overflow dialogs
//! - **layout**: app bar and menu rows
//!
//! Components own no business rules; they render state from `features` and
//! forward user events through `EventHandler` props.

pub mod dialogs;
pub mod display;
pub mod forms;
pub mod headers;
pub mod input;
pub mod layout;
