pub mod model;
pub mod ports;

pub use model::{DayHourOptions, FieldMode, NoticeKind, PasswordForm};
pub use ports::{
    BookingApi, CsrfTokenSource, Navigator, Notifier, ProfileView, SelectorView,
};
