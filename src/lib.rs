pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, Command};

pub use adapters::geolocation::StaticGeolocation;
pub use config::toml_config::BookingConfig;
pub use crate::core::{
    locator::{LocationOutcome, ServiceAreaLocator},
    prefill::BookingPrefill,
    pricing::PricingEngine,
    rate_card::RateCard,
    service_area::ServiceAreaResolver,
};
pub use domain::model::{
    Coordinates, Frequency, QuoteRequest, QuoteResult, Region, ServiceAreaQuery,
    ServiceAreaResult, ServiceTier,
};
pub use utils::error::{QuoteError, Result};
