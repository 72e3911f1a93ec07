use crate::domain::model::{DayHourOptions, FieldMode, NoticeKind, PasswordForm};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Gateway to the booking backend. One method per endpoint the page calls;
/// an application-level failure flag in a 200 body maps to
/// `ClientError::Rejected`.
#[async_trait]
pub trait BookingApi: Send + Sync {
    async fn available_days_hours(&self, month: &str) -> Result<DayHourOptions>;
    async fn update_profile_field(&self, field: &str, value: &str) -> Result<()>;
    async fn change_password(&self, form: &PasswordForm) -> Result<()>;
    async fn deactivate_profile(&self) -> Result<()>;
    async fn cancel_booking(&self, booking_id: u64) -> Result<()>;
}

/// User-facing notification channel (the original blocking alert).
pub trait Notifier: Send + Sync {
    fn notify(&self, kind: NoticeKind, message: &str);
}

/// Hard navigation away from the current page.
pub trait Navigator: Send + Sync {
    fn redirect(&self, location: &str);
}

/// The day/hour dropdown pair. Replacing options discards whatever was
/// rendered before.
pub trait SelectorView: Send + Sync {
    fn replace_day_options(&self, days: &[String]);
    fn replace_hour_options(&self, hours: &[String]);
}

/// The profile page surface: per-field display text, input values and
/// edit-mode visibility, plus the password-change panel.
pub trait ProfileView: Send + Sync {
    fn input_value(&self, field: &str) -> String;
    fn set_display_text(&self, field: &str, text: &str);
    fn apply_mode(&self, field: &str, mode: FieldMode);
    fn password_form(&self) -> PasswordForm;
    fn set_password_panel_open(&self, open: bool);
}

/// Anti-forgery token provider. Implementations must re-read the ambient
/// source on every call; tokens are never cached.
pub trait CsrfTokenSource: Send + Sync {
    fn csrf_token(&self) -> Option<String>;
}
