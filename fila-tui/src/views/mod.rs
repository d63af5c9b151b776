//! Screen state and presentation logic
//!
//! One module per screen. The structs here hold form state and the pure
//! mappings the UI renders from; rendering itself lives in [`crate::ui`].

pub mod admin;
pub mod barber;
pub mod booking;
pub mod login;
pub mod queue_status;

pub use admin::AdminView;
pub use barber::BarberView;
pub use booking::BookingView;
pub use login::LoginView;
pub use queue_status::QueueStatusView;
