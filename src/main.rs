use booking_client::adapters::{
    ConsoleNavigator, ConsoleNotifier, ConsoleSelectorView, ScriptedProfileView,
};
use booking_client::utils::{logger, validation::Validate};
use booking_client::{
    Action, AvailabilityFeed, BookingCancel, CliConfig, CookieTokens, Deactivation,
    HttpBookingApi, InlineEditor, PasswordChange, PasswordForm,
};
use clap::Parser;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting booking-client");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let endpoints = config.endpoints()?;
    let tokens = CookieTokens::from_static(config.cookie.clone());
    let api = HttpBookingApi::new(tokens, endpoints.clone());
    let notifier = ConsoleNotifier;

    match config.action {
        Action::Availability { month } => {
            let feed = AvailabilityFeed::new(api, ConsoleSelectorView);
            feed.on_month_changed(&month).await;
        }
        Action::UpdateField { field, value } => {
            let view = ScriptedProfileView::with_input(&field, value);
            let editor = InlineEditor::new(api, view, notifier);
            editor.toggle_edit(&field);
            editor.save(&field).await;
        }
        Action::ChangePassword { old, new, confirm } => {
            let view = ScriptedProfileView::with_password(PasswordForm::new(old, new, confirm));
            let handler = PasswordChange::new(api, view, notifier);
            handler.change_password().await;
        }
        Action::Deactivate => {
            let handler =
                Deactivation::new(api, notifier, ConsoleNavigator, endpoints.logout.clone());
            handler.deactivate().await;
        }
        Action::CancelBooking { id } => {
            let handler = BookingCancel::new(api, notifier);
            handler.cancel(id).await;
        }
    }

    Ok(())
}
