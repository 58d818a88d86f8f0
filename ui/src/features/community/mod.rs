pub mod header;
pub mod types;

pub use header::*;
pub use types::*;
