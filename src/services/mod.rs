pub mod api;
pub mod pricing;
pub mod selection;
pub mod validation;
