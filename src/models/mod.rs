pub mod booking;
pub mod checkout;
pub mod experience;
pub mod promo;

pub use booking::{Booking, BookingData, BookingStatus, PaymentStatus};
pub use checkout::CheckoutForm;
pub use experience::{Experience, Slot, SlotStatus};
pub use promo::{AppliedPromo, PromoValidationRequest, PromoValidationResponse};
