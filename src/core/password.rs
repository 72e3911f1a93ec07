use crate::core::profile::GENERIC_FAILURE;
use crate::domain::model::{NoticeKind, PasswordForm};
use crate::domain::ports::{BookingApi, Notifier, ProfileView};
use crate::utils::error::{ClientError, Result};

/// Change-password panel. Validation short-circuits before any network call:
/// every input must be non-empty and the new password must match its
/// confirmation.
pub struct PasswordChange<A: BookingApi, V: ProfileView, N: Notifier> {
    api: A,
    view: V,
    notifier: N,
}

impl<A: BookingApi, V: ProfileView, N: Notifier> PasswordChange<A, V, N> {
    pub fn new(api: A, view: V, notifier: N) -> Self {
        Self { api, view, notifier }
    }

    pub async fn change_password(&self) {
        let form = self.view.password_form().trimmed();

        if let Err(ClientError::Validation { message }) = validate_form(&form) {
            self.notifier.notify(NoticeKind::Error, &message);
            return;
        }

        match self.api.change_password(&form).await {
            Ok(()) => {
                self.view.set_password_panel_open(false);
                self.notifier
                    .notify(NoticeKind::Success, "Password changed successfully.");
            }
            Err(ClientError::Rejected { message }) => {
                self.notifier.notify(
                    NoticeKind::Error,
                    &format!("Error changing the password: {}", message),
                );
            }
            Err(e) => {
                tracing::error!("password change request failed: {}", e);
                self.notifier.notify(NoticeKind::Error, GENERIC_FAILURE);
            }
        }
    }
}

fn validate_form(form: &PasswordForm) -> Result<()> {
    if form.old_password.is_empty()
        || form.new_password.is_empty()
        || form.confirm_password.is_empty()
    {
        return Err(ClientError::validation("The password cannot be empty."));
    }
    if form.new_password != form.confirm_password {
        return Err(ClientError::validation("The passwords do not match."));
    }
    Ok(())
}
