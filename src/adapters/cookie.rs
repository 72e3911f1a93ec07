use crate::domain::ports::CsrfTokenSource;
use percent_encoding::percent_decode_str;
use std::sync::Arc;

const CSRF_COOKIE_NAME: &str = "csrftoken";

/// CSRF token source backed by a cookie-string provider. The provider is
/// invoked on every `csrf_token` call so a rotated cookie is picked up
/// immediately; nothing is cached.
#[derive(Clone)]
pub struct CookieTokens {
    source: Arc<dyn Fn() -> String + Send + Sync>,
}

impl CookieTokens {
    pub fn new<F>(source: F) -> Self
    where
        F: Fn() -> String + Send + Sync + 'static,
    {
        Self {
            source: Arc::new(source),
        }
    }

    /// Convenience for a cookie string that never changes (CLI usage).
    pub fn from_static(cookie: impl Into<String>) -> Self {
        let cookie = cookie.into();
        Self::new(move || cookie.clone())
    }
}

impl CsrfTokenSource for CookieTokens {
    fn csrf_token(&self) -> Option<String> {
        let cookies = (self.source)();
        for pair in cookies.split(';') {
            let mut parts = pair.trim().splitn(2, '=');
            let name = parts.next().unwrap_or("");
            if name != CSRF_COOKIE_NAME {
                continue;
            }
            let value = parts.next()?;
            return percent_decode_str(value)
                .decode_utf8()
                .ok()
                .map(|decoded| decoded.into_owned());
        }
        None
    }
}
