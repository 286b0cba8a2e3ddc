pub mod navbar;
pub mod registration;
pub mod scroll_top;
pub mod sections;
pub mod stats;
