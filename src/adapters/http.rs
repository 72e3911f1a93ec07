use crate::config::EndpointProvider;
use crate::domain::model::{DayHourOptions, PasswordForm};
use crate::domain::ports::{BookingApi, CsrfTokenSource};
use crate::utils::error::{ClientError, Result};
use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, RequestBuilder, Response};
use serde::{Deserialize, Serialize};

const CSRF_HEADER: &str = "X-CSRFToken";

/// reqwest-backed implementation of the `BookingApi` port. The CSRF token is
/// drawn from the injected source on every state-changing request.
#[derive(Clone)]
pub struct HttpBookingApi<T: CsrfTokenSource, E: EndpointProvider> {
    client: Client,
    tokens: T,
    endpoints: E,
}

#[derive(Serialize)]
struct UpdateProfileBody<'a> {
    field: &'a str,
    value: &'a str,
}

#[derive(Serialize)]
struct ChangePasswordBody<'a> {
    old_password: &'a str,
    new_password1: &'a str,
    new_password2: &'a str,
}

#[derive(Deserialize)]
struct Ack {
    #[serde(default)]
    success: bool,
}

#[derive(Deserialize)]
struct PasswordAck {
    #[serde(default)]
    success: bool,
    #[serde(default)]
    errors: Option<PasswordErrors>,
}

#[derive(Deserialize)]
struct PasswordErrors {
    #[serde(default)]
    new_password2: Vec<String>,
}

#[derive(Deserialize)]
struct CancelAck {
    #[serde(default)]
    status: String,
}

impl<T: CsrfTokenSource, E: EndpointProvider> HttpBookingApi<T, E> {
    pub fn new(tokens: T, endpoints: E) -> Self {
        Self {
            client: Client::new(),
            tokens,
            endpoints,
        }
    }

    fn post(&self, url: &str) -> RequestBuilder {
        let mut request = self
            .client
            .post(url)
            .header(CONTENT_TYPE, "application/json");
        if let Some(token) = self.tokens.csrf_token() {
            request = request.header(CSRF_HEADER, token);
        } else {
            tracing::warn!("no csrftoken cookie present, sending request without {CSRF_HEADER}");
        }
        request
    }

    fn require_ok(&self, response: &Response) -> Result<()> {
        if response.status().is_success() {
            Ok(())
        } else {
            Err(ClientError::Status {
                status: response.status(),
            })
        }
    }
}

#[async_trait]
impl<T: CsrfTokenSource, E: EndpointProvider> BookingApi for HttpBookingApi<T, E> {
    async fn available_days_hours(&self, month: &str) -> Result<DayHourOptions> {
        tracing::debug!("GET {} month={}", self.endpoints.availability_url(), month);
        let response = self
            .client
            .get(self.endpoints.availability_url())
            .query(&[("month", month)])
            .send()
            .await?;
        self.require_ok(&response)?;
        Ok(response.json().await?)
    }

    async fn update_profile_field(&self, field: &str, value: &str) -> Result<()> {
        let response = self
            .post(self.endpoints.update_profile_url())
            .json(&UpdateProfileBody { field, value })
            .send()
            .await?;
        self.require_ok(&response)?;

        let ack: Ack = response.json().await?;
        if ack.success {
            Ok(())
        } else {
            Err(ClientError::rejected("the profile update was not accepted"))
        }
    }

    async fn change_password(&self, form: &PasswordForm) -> Result<()> {
        let response = self
            .post(self.endpoints.change_password_url())
            .json(&ChangePasswordBody {
                old_password: &form.old_password,
                new_password1: &form.new_password,
                new_password2: &form.confirm_password,
            })
            .send()
            .await?;
        self.require_ok(&response)?;

        // Django's form errors arrive keyed by field; only new_password2 is
        // ever surfaced to the user.
        let body = response.bytes().await?;
        let ack: PasswordAck = serde_json::from_slice(&body)?;
        if ack.success {
            return Ok(());
        }
        let message = ack
            .errors
            .map(|errors| errors.new_password2.join("; "))
            .filter(|joined| !joined.is_empty())
            .unwrap_or_else(|| "please check the entered values".to_string());
        Err(ClientError::rejected(message))
    }

    async fn deactivate_profile(&self) -> Result<()> {
        let response = self
            .post(self.endpoints.deactivate_profile_url())
            .send()
            .await?;
        self.require_ok(&response)
    }

    async fn cancel_booking(&self, booking_id: u64) -> Result<()> {
        let url = format!("{}{}/", self.endpoints.cancel_booking_url(), booking_id);
        let response = self.post(&url).send().await?;
        self.require_ok(&response)?;

        let ack: CancelAck = response.json().await?;
        if ack.status == "success" {
            Ok(())
        } else {
            Err(ClientError::rejected("the booking could not be cancelled"))
        }
    }
}
