pub mod controller;
pub mod form_validation;
pub mod types;

pub use controller::LoginFormController;
pub use form_validation::*;
pub use types::*;
