pub mod password_field;
pub mod validated_input;

pub use password_field::*;
pub use validated_input::*;
