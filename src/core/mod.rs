pub mod catalog;
pub mod locator;
pub mod prefill;
pub mod pricing;
pub mod rate_card;
pub mod service_area;

pub use crate::domain::model::{QuoteRequest, QuoteResult, ServiceAreaResult};
pub use crate::domain::ports::{ConfigProvider, GeolocationProvider};
pub use crate::utils::error::Result;
