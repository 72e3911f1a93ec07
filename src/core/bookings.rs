use crate::core::profile::GENERIC_FAILURE;
use crate::domain::model::NoticeKind;
use crate::domain::ports::{BookingApi, Notifier};
use crate::utils::error::ClientError;

/// Cancels an existing booking by id. One-shot request/response; the caller
/// re-renders the booking list on its own.
pub struct BookingCancel<A: BookingApi, N: Notifier> {
    api: A,
    notifier: N,
}

impl<A: BookingApi, N: Notifier> BookingCancel<A, N> {
    pub fn new(api: A, notifier: N) -> Self {
        Self { api, notifier }
    }

    pub async fn cancel(&self, booking_id: u64) {
        match self.api.cancel_booking(booking_id).await {
            Ok(()) => {
                self.notifier
                    .notify(NoticeKind::Success, "Booking cancelled.");
            }
            Err(e) => {
                tracing::error!("failed to cancel booking {}: {}", booking_id, e);
                let message = match e {
                    ClientError::Status { .. } | ClientError::Rejected { .. } => {
                        "Error cancelling the booking."
                    }
                    _ => GENERIC_FAILURE,
                };
                self.notifier.notify(NoticeKind::Error, message);
            }
        }
    }
}
