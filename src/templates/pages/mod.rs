pub mod checkout;
pub mod confirmation;
pub mod detail;
pub mod error;
pub mod list;

pub use checkout::{checkout_page, CheckoutView};
pub use confirmation::confirmation_page;
pub use detail::{detail_error_page, detail_page, DetailView};
pub use error::error_page;
pub use list::list_page;
