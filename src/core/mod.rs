pub mod account;
pub mod availability;
pub mod bookings;
pub mod dispatch;
pub mod password;
pub mod profile;

pub use account::Deactivation;
pub use availability::AvailabilityFeed;
pub use bookings::BookingCancel;
pub use dispatch::{BookingUi, Control, ControlRegistry, UiEvent};
pub use password::PasswordChange;
pub use profile::InlineEditor;
