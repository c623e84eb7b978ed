pub mod toml_config;

#[cfg(feature = "cli")]
use crate::domain::model::RoomCounts;
#[cfg(feature = "cli")]
use clap::{Parser, Subcommand, ValueEnum};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "otter-quote")]
#[command(about = "Cleaning quotes and service-area checks for Otter Cleaning")]
pub struct CliConfig {
    /// Path to a TOML settings file
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Emit logs as JSON lines")]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Price a cleaning
    Quote(QuoteArgs),

    /// Check whether a ZIP code is in the service area
    Zip {
        zip: String,
    },

    /// Check a coordinate pair, optionally falling back to a ZIP code
    Locate {
        #[arg(long, allow_hyphen_values = true, requires = "lon")]
        lat: Option<f64>,

        #[arg(long, allow_hyphen_values = true, requires = "lat")]
        lon: Option<f64>,

        #[arg(long)]
        zip: Option<String>,
    },

    /// Print the published prices
    RateCard {
        #[arg(long, value_enum, default_value_t = OutputFormat::Csv)]
        format: OutputFormat,
    },
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, clap::Args)]
pub struct QuoteArgs {
    #[arg(long, default_value = "standard")]
    pub tier: String,

    #[arg(long, default_value = "one-time")]
    pub frequency: String,

    #[arg(long, default_value_t = 0)]
    pub bedrooms: u32,

    #[arg(long, default_value_t = 1)]
    pub bathrooms: u32,

    /// Add-on id, repeatable or comma separated
    #[arg(long = "add-on", value_delimiter = ',')]
    pub add_ons: Vec<String>,

    #[arg(long)]
    pub promo: Option<String>,

    /// Booking hand-off query string, e.g. "bedrooms=2&bathrooms=1&zip=10001"
    #[arg(long)]
    pub query: Option<String>,

    #[arg(long, help = "Print the breakdown as JSON")]
    pub json: bool,
}

#[cfg(feature = "cli")]
impl QuoteArgs {
    /// Room counts as the booking counters would accept them.
    pub fn rooms(&self) -> RoomCounts {
        let rooms = RoomCounts::clamped(self.bedrooms, self.bathrooms);
        if rooms.bedrooms != self.bedrooms || rooms.bathrooms != self.bathrooms {
            tracing::warn!(
                "Room counts {} bed / {} bath clamped to {} / {}",
                self.bedrooms,
                self.bathrooms,
                rooms.bedrooms,
                rooms.bathrooms
            );
        }
        rooms
    }
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Csv,
    Json,
}
