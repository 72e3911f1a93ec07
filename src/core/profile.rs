use crate::domain::model::{FieldMode, NoticeKind};
use crate::domain::ports::{BookingApi, Notifier, ProfileView};
use crate::utils::error::ClientError;
use std::collections::HashMap;
use std::sync::Mutex;

pub(crate) const GENERIC_FAILURE: &str =
    "An error occurred while processing your request.";

/// Inline profile-field editor. Each field flips between a static display
/// mode and an editable input mode; the display text is only rewritten after
/// the server confirms the save.
pub struct InlineEditor<A: BookingApi, V: ProfileView, N: Notifier> {
    api: A,
    view: V,
    notifier: N,
    modes: Mutex<HashMap<String, FieldMode>>,
}

impl<A: BookingApi, V: ProfileView, N: Notifier> InlineEditor<A, V, N> {
    pub fn new(api: A, view: V, notifier: N) -> Self {
        Self {
            api,
            view,
            notifier,
            modes: Mutex::new(HashMap::new()),
        }
    }

    /// Flips the field between display and edit presentation. Two calls in a
    /// row restore the original state.
    pub fn toggle_edit(&self, field: &str) -> FieldMode {
        let mode = {
            let mut modes = self.modes.lock().expect("field mode lock poisoned");
            let entry = modes.entry(field.to_string()).or_default();
            *entry = entry.flipped();
            *entry
        };
        self.view.apply_mode(field, mode);
        mode
    }

    pub fn mode(&self, field: &str) -> FieldMode {
        self.modes
            .lock()
            .expect("field mode lock poisoned")
            .get(field)
            .copied()
            .unwrap_or_default()
    }

    /// Submits the field's current input value. On confirmation the display
    /// text is rewritten and the field reverts to display mode; on any
    /// failure the editor stays open and the user is notified.
    pub async fn save(&self, field: &str) {
        let value = self.view.input_value(field).trim().to_string();

        match self.api.update_profile_field(field, &value).await {
            Ok(()) => {
                self.view.set_display_text(field, &value);
                self.set_mode(field, FieldMode::Display);
                self.notifier
                    .notify(NoticeKind::Success, "Changes saved successfully.");
            }
            Err(e) => {
                tracing::error!("failed to save field {}: {}", field, e);
                let message = match e {
                    ClientError::Rejected { .. } | ClientError::Status { .. } => {
                        "Error saving the changes."
                    }
                    _ => GENERIC_FAILURE,
                };
                self.notifier.notify(NoticeKind::Error, message);
            }
        }
    }

    fn set_mode(&self, field: &str, mode: FieldMode) {
        self.modes
            .lock()
            .expect("field mode lock poisoned")
            .insert(field.to_string(), mode);
        self.view.apply_mode(field, mode);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{DayHourOptions, PasswordForm};
    use crate::utils::error::Result;
    use async_trait::async_trait;
    use std::sync::Arc;

    #[derive(Clone, Copy)]
    enum UpdateOutcome {
        Accepted,
        RejectedFlag,
        ServerError,
    }

    #[derive(Clone)]
    struct StubApi {
        outcome: UpdateOutcome,
        calls: Arc<Mutex<Vec<(String, String)>>>,
    }

    impl StubApi {
        fn new(outcome: UpdateOutcome) -> Self {
            Self {
                outcome,
                calls: Arc::new(Mutex::new(Vec::new())),
            }
        }
    }

    #[async_trait]
    impl BookingApi for StubApi {
        async fn available_days_hours(&self, _month: &str) -> Result<DayHourOptions> {
            Ok(DayHourOptions::default())
        }

        async fn update_profile_field(&self, field: &str, value: &str) -> Result<()> {
            self.calls
                .lock()
                .unwrap()
                .push((field.to_string(), value.to_string()));
            match self.outcome {
                UpdateOutcome::Accepted => Ok(()),
                UpdateOutcome::RejectedFlag => {
                    Err(ClientError::rejected("the profile update was not accepted"))
                }
                UpdateOutcome::ServerError => Err(ClientError::Status {
                    status: reqwest::StatusCode::INTERNAL_SERVER_ERROR,
                }),
            }
        }

        async fn change_password(&self, _form: &PasswordForm) -> Result<()> {
            Ok(())
        }

        async fn deactivate_profile(&self) -> Result<()> {
            Ok(())
        }

        async fn cancel_booking(&self, _booking_id: u64) -> Result<()> {
            Ok(())
        }
    }

    #[derive(Clone, Default)]
    struct RecordingView {
        inputs: Arc<Mutex<HashMap<String, String>>>,
        display: Arc<Mutex<HashMap<String, String>>>,
        applied_modes: Arc<Mutex<Vec<(String, FieldMode)>>>,
    }

    impl RecordingView {
        fn with_input(field: &str, value: &str) -> Self {
            let view = Self::default();
            view.inputs
                .lock()
                .unwrap()
                .insert(field.to_string(), value.to_string());
            view
        }

        fn display_text(&self, field: &str) -> Option<String> {
            self.display.lock().unwrap().get(field).cloned()
        }

        fn modes(&self) -> Vec<(String, FieldMode)> {
            self.applied_modes.lock().unwrap().clone()
        }
    }

    impl ProfileView for RecordingView {
        fn input_value(&self, field: &str) -> String {
            self.inputs
                .lock()
                .unwrap()
                .get(field)
                .cloned()
                .unwrap_or_default()
        }

        fn set_display_text(&self, field: &str, text: &str) {
            self.display
                .lock()
                .unwrap()
                .insert(field.to_string(), text.to_string());
        }

        fn apply_mode(&self, field: &str, mode: FieldMode) {
            self.applied_modes
                .lock()
                .unwrap()
                .push((field.to_string(), mode));
        }

        fn password_form(&self) -> PasswordForm {
            PasswordForm::default()
        }

        fn set_password_panel_open(&self, _open: bool) {}
    }

    #[derive(Clone, Default)]
    struct RecordingNotifier {
        notices: Arc<Mutex<Vec<(NoticeKind, String)>>>,
    }

    impl RecordingNotifier {
        fn notices(&self) -> Vec<(NoticeKind, String)> {
            self.notices.lock().unwrap().clone()
        }
    }

    impl Notifier for RecordingNotifier {
        fn notify(&self, kind: NoticeKind, message: &str) {
            self.notices.lock().unwrap().push((kind, message.to_string()));
        }
    }

    #[test]
    fn test_double_toggle_restores_original_state() {
        let view = RecordingView::default();
        let editor = InlineEditor::new(
            StubApi::new(UpdateOutcome::Accepted),
            view.clone(),
            RecordingNotifier::default(),
        );

        assert_eq!(editor.mode("email"), FieldMode::Display);
        assert_eq!(editor.toggle_edit("email"), FieldMode::Edit);
        assert_eq!(editor.toggle_edit("email"), FieldMode::Display);
        assert_eq!(editor.mode("email"), FieldMode::Display);
        assert_eq!(
            view.modes(),
            vec![
                ("email".to_string(), FieldMode::Edit),
                ("email".to_string(), FieldMode::Display),
            ]
        );
    }

    #[test]
    fn test_fields_toggle_independently() {
        let editor = InlineEditor::new(
            StubApi::new(UpdateOutcome::Accepted),
            RecordingView::default(),
            RecordingNotifier::default(),
        );

        editor.toggle_edit("email");
        assert_eq!(editor.mode("email"), FieldMode::Edit);
        assert_eq!(editor.mode("phone"), FieldMode::Display);
    }

    #[tokio::test]
    async fn test_save_trims_and_confirms_before_rendering() {
        let api = StubApi::new(UpdateOutcome::Accepted);
        let view = RecordingView::with_input("email", "  new@example.com  ");
        let notifier = RecordingNotifier::default();
        let editor = InlineEditor::new(api.clone(), view.clone(), notifier.clone());

        editor.toggle_edit("email");
        editor.save("email").await;

        assert_eq!(
            api.calls.lock().unwrap().as_slice(),
            &[("email".to_string(), "new@example.com".to_string())]
        );
        assert_eq!(view.display_text("email").as_deref(), Some("new@example.com"));
        assert_eq!(editor.mode("email"), FieldMode::Display);
        assert_eq!(notifier.notices()[0].0, NoticeKind::Success);
    }

    #[tokio::test]
    async fn test_save_rejected_leaves_editor_open() {
        let api = StubApi::new(UpdateOutcome::RejectedFlag);
        let view = RecordingView::with_input("phone", "555-0100");
        let notifier = RecordingNotifier::default();
        let editor = InlineEditor::new(api, view.clone(), notifier.clone());

        editor.toggle_edit("phone");
        editor.save("phone").await;

        assert_eq!(view.display_text("phone"), None);
        assert_eq!(editor.mode("phone"), FieldMode::Edit);
        let notices = notifier.notices();
        assert_eq!(notices.len(), 1);
        assert_eq!(notices[0].0, NoticeKind::Error);
    }

    #[tokio::test]
    async fn test_save_server_error_notifies_and_keeps_display() {
        let api = StubApi::new(UpdateOutcome::ServerError);
        let view = RecordingView::with_input("email", "x@example.com");
        let notifier = RecordingNotifier::default();
        let editor = InlineEditor::new(api, view.clone(), notifier.clone());

        editor.save("email").await;

        assert_eq!(view.display_text("email"), None);
        assert_eq!(notifier.notices()[0].0, NoticeKind::Error);
    }
}
