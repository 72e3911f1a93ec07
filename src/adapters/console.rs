use crate::domain::model::{FieldMode, NoticeKind, PasswordForm};
use crate::domain::ports::{Navigator, Notifier, ProfileView, SelectorView};
use std::collections::HashMap;

/// Prints notices to the terminal, errors on stderr.
#[derive(Debug, Clone, Default)]
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&self, kind: NoticeKind, message: &str) {
        match kind {
            NoticeKind::Success => println!("✅ {}", message),
            NoticeKind::Error => eprintln!("❌ {}", message),
        }
    }
}

/// A browser would follow the redirect; the CLI just reports it.
#[derive(Debug, Clone, Default)]
pub struct ConsoleNavigator;

impl Navigator for ConsoleNavigator {
    fn redirect(&self, location: &str) {
        println!("➡️  Redirecting to {}", location);
    }
}

/// Renders the day/hour option lists as plain text.
#[derive(Debug, Clone, Default)]
pub struct ConsoleSelectorView;

impl SelectorView for ConsoleSelectorView {
    fn replace_day_options(&self, days: &[String]) {
        println!("Days:  {}", days.join(", "));
    }

    fn replace_hour_options(&self, hours: &[String]) {
        println!("Hours: {}", hours.join(", "));
    }
}

/// Profile view preloaded with the values a CLI invocation supplies, standing
/// in for the page's input elements.
#[derive(Debug, Clone, Default)]
pub struct ScriptedProfileView {
    inputs: HashMap<String, String>,
    password: PasswordForm,
}

impl ScriptedProfileView {
    pub fn with_input(field: impl Into<String>, value: impl Into<String>) -> Self {
        let mut inputs = HashMap::new();
        inputs.insert(field.into(), value.into());
        Self {
            inputs,
            password: PasswordForm::default(),
        }
    }

    pub fn with_password(password: PasswordForm) -> Self {
        Self {
            inputs: HashMap::new(),
            password,
        }
    }
}

impl ProfileView for ScriptedProfileView {
    fn input_value(&self, field: &str) -> String {
        self.inputs.get(field).cloned().unwrap_or_default()
    }

    fn set_display_text(&self, field: &str, text: &str) {
        println!("{}: {}", field, text);
    }

    fn apply_mode(&self, field: &str, mode: FieldMode) {
        tracing::debug!("field {} now in {:?} mode", field, mode);
    }

    fn password_form(&self) -> PasswordForm {
        self.password.clone()
    }

    fn set_password_panel_open(&self, open: bool) {
        tracing::debug!("password panel open: {}", open);
    }
}
