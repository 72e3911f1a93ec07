#[cfg(feature = "cli")]
pub mod cli;

use crate::utils::error::{ClientError, Result};
use crate::utils::validation::{validate_required_attribute, validate_url, Validate};
use std::collections::HashMap;
use url::Url;

/// Endpoint URLs injected into every handler. The original page exposed the
/// profile URLs as `data-*` attributes on a designated container element;
/// `from_attributes` consumes that same map.
pub trait EndpointProvider: Send + Sync {
    fn availability_url(&self) -> &str;
    fn update_profile_url(&self) -> &str;
    fn change_password_url(&self) -> &str;
    fn deactivate_profile_url(&self) -> &str;
    fn cancel_booking_url(&self) -> &str;
    fn logout_url(&self) -> &str;
}

#[derive(Debug, Clone)]
pub struct Endpoints {
    pub availability: String,
    pub update_profile: String,
    pub change_password: String,
    pub deactivate_profile: String,
    pub cancel_booking: String,
    pub logout: String,
}

const AVAILABILITY_PATH: &str = "/ajax/get_available_days_hours/";
const UPDATE_PROFILE_PATH: &str = "/profile/update/";
const CHANGE_PASSWORD_PATH: &str = "/profile/change-password/";
const DEACTIVATE_PROFILE_PATH: &str = "/profile/deactivate/";
const CANCEL_BOOKING_PATH: &str = "/booking/delete/";
const LOGOUT_PATH: &str = "/logout/";

impl Endpoints {
    /// Default routes of the booking site joined onto one base URL.
    pub fn for_site(base_url: &str) -> Result<Self> {
        let base = Url::parse(base_url).map_err(|e| ClientError::InvalidConfigValue {
            field: "base_url".to_string(),
            reason: format!("Invalid URL format: {}", e),
        })?;

        let join = |path: &str| -> Result<String> {
            base.join(path)
                .map(|u| u.to_string())
                .map_err(|e| ClientError::InvalidConfigValue {
                    field: "base_url".to_string(),
                    reason: format!("Cannot join {}: {}", path, e),
                })
        };

        Ok(Self {
            availability: join(AVAILABILITY_PATH)?,
            update_profile: join(UPDATE_PROFILE_PATH)?,
            change_password: join(CHANGE_PASSWORD_PATH)?,
            deactivate_profile: join(DEACTIVATE_PROFILE_PATH)?,
            cancel_booking: join(CANCEL_BOOKING_PATH)?,
            logout: join(LOGOUT_PATH)?,
        })
    }

    /// Builds endpoints from the data-container attribute map, resolving
    /// relative values against `base_url`. The three profile URLs are
    /// required, everything else falls back to the default route.
    pub fn from_attributes(
        base_url: &str,
        attributes: &HashMap<String, String>,
    ) -> Result<Self> {
        let base = Url::parse(base_url).map_err(|e| ClientError::InvalidConfigValue {
            field: "base_url".to_string(),
            reason: format!("Invalid URL format: {}", e),
        })?;

        let resolve = |value: &str| -> Result<String> {
            base.join(value)
                .map(|u| u.to_string())
                .map_err(|e| ClientError::InvalidConfigValue {
                    field: "data-container".to_string(),
                    reason: format!("Cannot resolve {}: {}", value, e),
                })
        };

        let optional = |name: &str, default: &str| -> Result<String> {
            match attributes.get(name) {
                Some(value) => resolve(value),
                None => resolve(default),
            }
        };

        Ok(Self {
            availability: optional("data-availability-url", AVAILABILITY_PATH)?,
            update_profile: resolve(validate_required_attribute(
                attributes,
                "data-update-profile-url",
            )?)?,
            change_password: resolve(validate_required_attribute(
                attributes,
                "data-change-password-url",
            )?)?,
            deactivate_profile: resolve(validate_required_attribute(
                attributes,
                "data-deactivate-profile-url",
            )?)?,
            cancel_booking: optional("data-cancel-booking-url", CANCEL_BOOKING_PATH)?,
            logout: optional("data-logout-url", LOGOUT_PATH)?,
        })
    }
}

impl Validate for Endpoints {
    fn validate(&self) -> Result<()> {
        validate_url("availability", &self.availability)?;
        validate_url("update_profile", &self.update_profile)?;
        validate_url("change_password", &self.change_password)?;
        validate_url("deactivate_profile", &self.deactivate_profile)?;
        validate_url("cancel_booking", &self.cancel_booking)?;
        validate_url("logout", &self.logout)?;
        Ok(())
    }
}

impl EndpointProvider for Endpoints {
    fn availability_url(&self) -> &str {
        &self.availability
    }

    fn update_profile_url(&self) -> &str {
        &self.update_profile
    }

    fn change_password_url(&self) -> &str {
        &self.change_password
    }

    fn deactivate_profile_url(&self) -> &str {
        &self.deactivate_profile
    }

    fn cancel_booking_url(&self) -> &str {
        &self.cancel_booking
    }

    fn logout_url(&self) -> &str {
        &self.logout
    }
}
