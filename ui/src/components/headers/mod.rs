pub mod community_header;
pub mod login_header;

pub use community_header::*;
pub use login_header::*;
