pub mod community_more;
pub mod dialog;
pub mod sort_options;

pub use community_more::*;
pub use dialog::*;
pub use sort_options::*;
