use crate::core::profile::GENERIC_FAILURE;
use crate::domain::model::NoticeKind;
use crate::domain::ports::{BookingApi, Navigator, Notifier};
use crate::utils::error::ClientError;

/// Account deactivation. A confirmed deactivation ends with a hard redirect
/// to the logout route; there is no confirmation step and no undo.
pub struct Deactivation<A: BookingApi, N: Notifier, Nav: Navigator> {
    api: A,
    notifier: N,
    navigator: Nav,
    logout_url: String,
}

impl<A: BookingApi, N: Notifier, Nav: Navigator> Deactivation<A, N, Nav> {
    pub fn new(api: A, notifier: N, navigator: Nav, logout_url: impl Into<String>) -> Self {
        Self {
            api,
            notifier,
            navigator,
            logout_url: logout_url.into(),
        }
    }

    pub async fn deactivate(&self) {
        match self.api.deactivate_profile().await {
            Ok(()) => self.navigator.redirect(&self.logout_url),
            Err(e) => {
                tracing::error!("profile deactivation failed: {}", e);
                let message = match e {
                    ClientError::Status { .. } | ClientError::Rejected { .. } => {
                        "Error deactivating the profile."
                    }
                    _ => GENERIC_FAILURE,
                };
                self.notifier.notify(NoticeKind::Error, message);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{DayHourOptions, PasswordForm};
    use crate::utils::error::Result;
    use async_trait::async_trait;
    use std::sync::{Arc, Mutex};

    #[derive(Clone)]
    struct StubApi {
        ok: bool,
    }

    #[async_trait]
    impl BookingApi for StubApi {
        async fn available_days_hours(&self, _month: &str) -> Result<DayHourOptions> {
            Ok(DayHourOptions::default())
        }

        async fn update_profile_field(&self, _field: &str, _value: &str) -> Result<()> {
            Ok(())
        }

        async fn change_password(&self, _form: &PasswordForm) -> Result<()> {
            Ok(())
        }

        async fn deactivate_profile(&self) -> Result<()> {
            if self.ok {
                Ok(())
            } else {
                Err(ClientError::Status {
                    status: reqwest::StatusCode::FORBIDDEN,
                })
            }
        }

        async fn cancel_booking(&self, _booking_id: u64) -> Result<()> {
            Ok(())
        }
    }

    #[derive(Clone, Default)]
    struct RecordingNavigator {
        redirects: Arc<Mutex<Vec<String>>>,
    }

    impl Navigator for RecordingNavigator {
        fn redirect(&self, location: &str) {
            self.redirects.lock().unwrap().push(location.to_string());
        }
    }

    #[derive(Clone, Default)]
    struct RecordingNotifier {
        notices: Arc<Mutex<Vec<(NoticeKind, String)>>>,
    }

    impl Notifier for RecordingNotifier {
        fn notify(&self, kind: NoticeKind, message: &str) {
            self.notices.lock().unwrap().push((kind, message.to_string()));
        }
    }

    #[tokio::test]
    async fn test_success_redirects_to_logout() {
        let navigator = RecordingNavigator::default();
        let notifier = RecordingNotifier::default();
        let handler = Deactivation::new(
            StubApi { ok: true },
            notifier.clone(),
            navigator.clone(),
            "/logout/",
        );

        handler.deactivate().await;

        assert_eq!(
            navigator.redirects.lock().unwrap().as_slice(),
            &["/logout/".to_string()]
        );
        assert!(notifier.notices.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_failure_never_navigates() {
        let navigator = RecordingNavigator::default();
        let notifier = RecordingNotifier::default();
        let handler = Deactivation::new(
            StubApi { ok: false },
            notifier.clone(),
            navigator.clone(),
            "/logout/",
        );

        handler.deactivate().await;

        assert!(navigator.redirects.lock().unwrap().is_empty());
        let notices = notifier.notices.lock().unwrap().clone();
        assert_eq!(notices.len(), 1);
        assert_eq!(notices[0].0, NoticeKind::Error);
    }
}
