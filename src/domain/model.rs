use serde::{Deserialize, Serialize};

/// Day and hour option lists for one month, in server order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayHourOptions {
    #[serde(default)]
    pub days: Vec<String>,
    #[serde(default)]
    pub hours: Vec<String>,
}

/// The three inputs of the change-password panel, as entered by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PasswordForm {
    pub old_password: String,
    pub new_password: String,
    pub confirm_password: String,
}

impl PasswordForm {
    pub fn new(
        old_password: impl Into<String>,
        new_password: impl Into<String>,
        confirm_password: impl Into<String>,
    ) -> Self {
        Self {
            old_password: old_password.into(),
            new_password: new_password.into(),
            confirm_password: confirm_password.into(),
        }
    }

    pub fn trimmed(&self) -> Self {
        Self {
            old_password: self.old_password.trim().to_string(),
            new_password: self.new_password.trim().to_string(),
            confirm_password: self.confirm_password.trim().to_string(),
        }
    }
}

/// Presentation state of one inline-editable profile field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FieldMode {
    #[default]
    Display,
    Edit,
}

impl FieldMode {
    pub fn flipped(self) -> Self {
        match self {
            FieldMode::Display => FieldMode::Edit,
            FieldMode::Edit => FieldMode::Display,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}
