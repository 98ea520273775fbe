pub mod components;
pub mod layout;
pub mod pages;

pub use layout::page_layout;

pub const SITE_NAME: &str = "Highway Delite";
