use crate::core::account::Deactivation;
use crate::core::availability::AvailabilityFeed;
use crate::core::bookings::BookingCancel;
use crate::core::password::PasswordChange;
use crate::core::profile::InlineEditor;
use crate::domain::ports::{BookingApi, Navigator, Notifier, ProfileView, SelectorView};
use std::collections::HashMap;

/// A user interaction, decoupled from whichever control produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    MonthChanged(String),
    EditToggled(String),
    SaveRequested(String),
    PasswordSubmitted,
    DeactivateRequested,
    CancelBookingRequested(u64),
}

/// What kind of interaction a bound control produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    MonthSelector,
    EditButton,
    SaveButton,
    PasswordSubmit,
    DeactivateButton,
    CancelBookingButton,
}

/// Maps control ids to typed events. Bindings are registered once during
/// initialization instead of being wired inline on the elements themselves.
#[derive(Debug, Clone, Default)]
pub struct ControlRegistry {
    bindings: HashMap<String, Control>,
}

impl ControlRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// The control ids of the original pages.
    pub fn with_default_bindings() -> Self {
        let mut registry = Self::new();
        registry.bind("id_month", Control::MonthSelector);
        registry.bind("edit", Control::EditButton);
        registry.bind("save", Control::SaveButton);
        registry.bind("change-password", Control::PasswordSubmit);
        registry.bind("deactivate-profile", Control::DeactivateButton);
        registry.bind("cancel-booking", Control::CancelBookingButton);
        registry
    }

    pub fn bind(&mut self, control_id: impl Into<String>, control: Control) {
        self.bindings.insert(control_id.into(), control);
    }

    /// Resolves a raw `(control id, payload)` pair into a typed event. The
    /// payload carries the control's value: the chosen month, the field name
    /// of an edit/save button, or a booking id.
    pub fn resolve(&self, control_id: &str, payload: &str) -> Option<UiEvent> {
        match self.bindings.get(control_id)? {
            Control::MonthSelector => Some(UiEvent::MonthChanged(payload.to_string())),
            Control::EditButton => Some(UiEvent::EditToggled(payload.to_string())),
            Control::SaveButton => Some(UiEvent::SaveRequested(payload.to_string())),
            Control::PasswordSubmit => Some(UiEvent::PasswordSubmitted),
            Control::DeactivateButton => Some(UiEvent::DeactivateRequested),
            Control::CancelBookingButton => payload
                .parse()
                .ok()
                .map(UiEvent::CancelBookingRequested),
        }
    }
}

/// The assembled client: one handler per page concern plus the registry that
/// routes control interactions to them.
pub struct BookingUi<A, SV, PV, N, Nav>
where
    A: BookingApi,
    SV: SelectorView,
    PV: ProfileView,
    N: Notifier,
    Nav: Navigator,
{
    registry: ControlRegistry,
    availability: AvailabilityFeed<A, SV>,
    editor: InlineEditor<A, PV, N>,
    password: PasswordChange<A, PV, N>,
    deactivation: Deactivation<A, N, Nav>,
    bookings: BookingCancel<A, N>,
}

impl<A, SV, PV, N, Nav> BookingUi<A, SV, PV, N, Nav>
where
    A: BookingApi + Clone,
    SV: SelectorView,
    PV: ProfileView + Clone,
    N: Notifier + Clone,
    Nav: Navigator,
{
    pub fn init(
        api: A,
        selectors: SV,
        profile: PV,
        notifier: N,
        navigator: Nav,
        logout_url: impl Into<String>,
    ) -> Self {
        Self {
            registry: ControlRegistry::with_default_bindings(),
            availability: AvailabilityFeed::new(api.clone(), selectors),
            editor: InlineEditor::new(api.clone(), profile.clone(), notifier.clone()),
            password: PasswordChange::new(api.clone(), profile, notifier.clone()),
            deactivation: Deactivation::new(api.clone(), notifier.clone(), navigator, logout_url),
            bookings: BookingCancel::new(api, notifier),
        }
    }

    pub fn registry_mut(&mut self) -> &mut ControlRegistry {
        &mut self.registry
    }

    /// Routes one raw control interaction. Returns false when no binding
    /// exists for the control.
    pub async fn on_control(&self, control_id: &str, payload: &str) -> bool {
        match self.registry.resolve(control_id, payload) {
            Some(event) => {
                self.handle(event).await;
                true
            }
            None => {
                tracing::debug!("no handler bound for control {}", control_id);
                false
            }
        }
    }

    pub async fn handle(&self, event: UiEvent) {
        match event {
            UiEvent::MonthChanged(month) => self.availability.on_month_changed(&month).await,
            UiEvent::EditToggled(field) => {
                self.editor.toggle_edit(&field);
            }
            UiEvent::SaveRequested(field) => self.editor.save(&field).await,
            UiEvent::PasswordSubmitted => self.password.change_password().await,
            UiEvent::DeactivateRequested => self.deactivation.deactivate().await,
            UiEvent::CancelBookingRequested(id) => self.bookings.cancel(id).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_bindings_resolve_typed_events() {
        let registry = ControlRegistry::with_default_bindings();

        assert_eq!(
            registry.resolve("id_month", "2024-05"),
            Some(UiEvent::MonthChanged("2024-05".to_string()))
        );
        assert_eq!(
            registry.resolve("edit", "email"),
            Some(UiEvent::EditToggled("email".to_string()))
        );
        assert_eq!(
            registry.resolve("save", "phone"),
            Some(UiEvent::SaveRequested("phone".to_string()))
        );
        assert_eq!(
            registry.resolve("change-password", ""),
            Some(UiEvent::PasswordSubmitted)
        );
        assert_eq!(
            registry.resolve("deactivate-profile", ""),
            Some(UiEvent::DeactivateRequested)
        );
        assert_eq!(
            registry.resolve("cancel-booking", "7"),
            Some(UiEvent::CancelBookingRequested(7))
        );
    }

    #[test]
    fn test_unbound_control_resolves_to_none() {
        let registry = ControlRegistry::with_default_bindings();
        assert_eq!(registry.resolve("id_day", "3"), None);
    }

    #[test]
    fn test_non_numeric_booking_id_is_dropped() {
        let registry = ControlRegistry::with_default_bindings();
        assert_eq!(registry.resolve("cancel-booking", "abc"), None);
    }

    #[test]
    fn test_rebinding_overrides_default() {
        let mut registry = ControlRegistry::with_default_bindings();
        registry.bind("id_month", Control::DeactivateButton);
        assert_eq!(
            registry.resolve("id_month", ""),
            Some(UiEvent::DeactivateRequested)
        );
    }
}
