pub mod community_top_section;
pub mod loading_indicator;

pub use community_top_section::*;
pub use loading_indicator::*;
