use crate::config::Endpoints;
use crate::utils::error::Result;
use crate::utils::validation::{validate_url, Validate};
use clap::{Parser, Subcommand};

#[derive(Debug, Clone, Parser)]
#[command(name = "booking-client")]
#[command(about = "Headless client for the booking site's profile and availability endpoints")]
pub struct CliConfig {
    /// Base URL of the booking site
    #[arg(long, default_value = "http://localhost:8000")]
    pub base_url: String,

    /// Session cookie string, as sent by the browser (must contain csrftoken
    /// for state-changing actions)
    #[arg(long, default_value = "")]
    pub cookie: String,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub action: Action,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Action {
    /// Fetch the available days and hours for a month
    Availability {
        #[arg(long)]
        month: String,
    },
    /// Update one profile field
    UpdateField {
        #[arg(long)]
        field: String,
        #[arg(long)]
        value: String,
    },
    /// Change the account password
    ChangePassword {
        #[arg(long)]
        old: String,
        #[arg(long)]
        new: String,
        #[arg(long)]
        confirm: String,
    },
    /// Deactivate the profile (redirects to logout on success)
    Deactivate,
    /// Cancel a booking by id
    CancelBooking {
        #[arg(long)]
        id: u64,
    },
}

impl CliConfig {
    pub fn endpoints(&self) -> Result<Endpoints> {
        Endpoints::for_site(&self.base_url)
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_url("base_url", &self.base_url)
    }
}
