use crate::domain::model::Coordinates;
use crate::domain::promo::PromoTable;
use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;

/// How a position may be acquired: give up after `timeout`, and reuse a
/// previous fix that is younger than `maximum_age`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PositionOptions {
    pub timeout: Duration,
    pub maximum_age: Duration,
}

impl Default for PositionOptions {
    fn default() -> Self {
        Self {
            timeout: Duration::from_millis(5_000),
            maximum_age: Duration::from_millis(300_000),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GeolocationError {
    #[error("geolocation is not available on this device")]
    Unavailable,

    #[error("permission to read the location was denied")]
    PermissionDenied,

    #[error("timed out waiting for a position")]
    Timeout,

    #[error("position unavailable: {0}")]
    PositionUnavailable(String),
}

/// Device location capability. Implementations need not enforce
/// `options.timeout`; the locator bounds every call itself.
#[async_trait]
pub trait GeolocationProvider: Send + Sync {
    async fn current_position(
        &self,
        options: &PositionOptions,
    ) -> std::result::Result<Coordinates, GeolocationError>;
}

pub trait ConfigProvider: Send + Sync {
    fn promo_codes_enabled(&self) -> bool;
    fn promo_table(&self) -> PromoTable;
    fn position_options(&self) -> PositionOptions;
    fn display_discount_percent(&self) -> u32;
}
