use crate::domain::ports::{BookingApi, SelectorView};
use std::sync::atomic::{AtomicU64, Ordering};

/// Refreshes the day/hour selectors whenever the month selection changes.
///
/// Requests carry a monotonically increasing sequence number; a response that
/// is no longer the latest issued request is discarded, so a slow response
/// for an earlier month can never overwrite a newer one. Failures are logged
/// and otherwise swallowed, leaving the previous options in place.
pub struct AvailabilityFeed<A: BookingApi, V: SelectorView> {
    api: A,
    view: V,
    latest: AtomicU64,
}

impl<A: BookingApi, V: SelectorView> AvailabilityFeed<A, V> {
    pub fn new(api: A, view: V) -> Self {
        Self {
            api,
            view,
            latest: AtomicU64::new(0),
        }
    }

    pub async fn on_month_changed(&self, month: &str) {
        let seq = self.latest.fetch_add(1, Ordering::SeqCst) + 1;
        tracing::debug!("refreshing availability for month {} (request {})", month, seq);

        match self.api.available_days_hours(month).await {
            Ok(options) => {
                if self.latest.load(Ordering::SeqCst) != seq {
                    tracing::debug!("discarding stale availability response for {}", month);
                    return;
                }
                self.view.replace_day_options(&options.days);
                self.view.replace_hour_options(&options.hours);
            }
            Err(e) => {
                tracing::warn!("failed to fetch days and hours for {}: {}", month, e);
            }
        }
    }
}
