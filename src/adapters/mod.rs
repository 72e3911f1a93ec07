pub mod console;
pub mod cookie;
pub mod http;

pub use console::{ConsoleNavigator, ConsoleNotifier, ConsoleSelectorView, ScriptedProfileView};
pub use cookie::CookieTokens;
pub use http::HttpBookingApi;
