pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::{Action, CliConfig};
pub use config::{EndpointProvider, Endpoints};

pub use adapters::{CookieTokens, HttpBookingApi};
pub use core::{
    AvailabilityFeed, BookingCancel, BookingUi, Control, ControlRegistry, Deactivation,
    InlineEditor, PasswordChange, UiEvent,
};
pub use domain::{
    BookingApi, CsrfTokenSource, DayHourOptions, FieldMode, Navigator, NoticeKind, Notifier,
    PasswordForm, ProfileView, SelectorView,
};
pub use utils::error::{ClientError, Result};
