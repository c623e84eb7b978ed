use crate::domain::money::{Cents, Dollars};
use crate::utils::error::{QuoteError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// Highest bedroom or bathroom count the booking counters allow.
pub const MAX_ROOMS: u32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ServiceTier {
    #[serde(rename = "standard")]
    Standard,
    #[serde(rename = "standard-plus")]
    StandardPlus,
    #[serde(rename = "deep")]
    Deep,
    #[serde(rename = "move")]
    MoveInOut,
}

impl ServiceTier {
    pub const ALL: [ServiceTier; 4] = [
        ServiceTier::Standard,
        ServiceTier::StandardPlus,
        ServiceTier::Deep,
        ServiceTier::MoveInOut,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            ServiceTier::Standard => "standard",
            ServiceTier::StandardPlus => "standard-plus",
            ServiceTier::Deep => "deep",
            ServiceTier::MoveInOut => "move",
        }
    }

    /// Deep and Move In/Out already cover every add-on task.
    pub fn includes_add_ons(&self) -> bool {
        matches!(self, ServiceTier::Deep | ServiceTier::MoveInOut)
    }
}

impl fmt::Display for ServiceTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for ServiceTier {
    type Err = QuoteError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "standard" => Ok(ServiceTier::Standard),
            "standard-plus" => Ok(ServiceTier::StandardPlus),
            "deep" => Ok(ServiceTier::Deep),
            "move" | "move-in-out" => Ok(ServiceTier::MoveInOut),
            _ => Err(QuoteError::InvalidTier {
                value: s.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Frequency {
    #[default]
    #[serde(rename = "one-time")]
    OneTime,
    #[serde(rename = "weekly")]
    Weekly,
    #[serde(rename = "bi-weekly")]
    BiWeekly,
    #[serde(rename = "monthly")]
    Monthly,
}

impl Frequency {
    pub const ALL: [Frequency; 4] = [
        Frequency::OneTime,
        Frequency::Weekly,
        Frequency::BiWeekly,
        Frequency::Monthly,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            Frequency::OneTime => "one-time",
            Frequency::Weekly => "weekly",
            Frequency::BiWeekly => "bi-weekly",
            Frequency::Monthly => "monthly",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Frequency::OneTime => "One Time",
            Frequency::Weekly => "Weekly",
            Frequency::BiWeekly => "Bi-Weekly",
            Frequency::Monthly => "Monthly",
        }
    }

    pub fn discount_percent(&self) -> u32 {
        match self {
            Frequency::OneTime => 0,
            Frequency::Weekly => 10,
            Frequency::BiWeekly => 7,
            Frequency::Monthly => 5,
        }
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Frequency {
    type Err = QuoteError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "one-time" => Ok(Frequency::OneTime),
            "weekly" => Ok(Frequency::Weekly),
            "bi-weekly" => Ok(Frequency::BiWeekly),
            "monthly" => Ok(Frequency::Monthly),
            _ => Err(QuoteError::InvalidFrequency {
                value: s.to_string(),
            }),
        }
    }
}

/// One row of the canonical rate table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TierRate {
    pub tier: ServiceTier,
    pub label: &'static str,
    pub base: Cents,
    pub per_room: Cents,
    pub duration: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AddOn {
    pub id: &'static str,
    pub label: &'static str,
    pub price: Dollars,
    pub unit: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum PromoDiscount {
    Percentage(u32),
    Fixed(Dollars),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoomCounts {
    pub bedrooms: u32,
    pub bathrooms: u32,
}

impl RoomCounts {
    /// Clamps to what the booking counters allow: 0..=10 bedrooms, 1..=10 bathrooms.
    pub fn clamped(bedrooms: u32, bathrooms: u32) -> Self {
        Self {
            bedrooms: bedrooms.min(MAX_ROOMS),
            bathrooms: bathrooms.clamp(1, MAX_ROOMS),
        }
    }
}

impl Default for RoomCounts {
    fn default() -> Self {
        Self {
            bedrooms: 0,
            bathrooms: 1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteRequest {
    pub tier: ServiceTier,
    pub frequency: Frequency,
    pub bedrooms: u32,
    pub bathrooms: u32,
    #[serde(default)]
    pub add_on_ids: BTreeSet<String>,
    #[serde(default)]
    pub promo_code: Option<String>,
}

impl QuoteRequest {
    pub fn new(tier: ServiceTier, frequency: Frequency) -> Self {
        let rooms = RoomCounts::default();
        Self {
            tier,
            frequency,
            bedrooms: rooms.bedrooms,
            bathrooms: rooms.bathrooms,
            add_on_ids: BTreeSet::new(),
            promo_code: None,
        }
    }

    /// Builds a request from the wire identifiers a form submits.
    pub fn from_ids(tier: &str, frequency: &str) -> Result<Self> {
        Ok(Self::new(tier.parse()?, frequency.parse()?))
    }

    pub fn with_rooms(mut self, bedrooms: u32, bathrooms: u32) -> Self {
        self.bedrooms = bedrooms;
        self.bathrooms = bathrooms;
        self
    }

    pub fn with_room_counts(self, rooms: RoomCounts) -> Self {
        self.with_rooms(rooms.bedrooms, rooms.bathrooms)
    }

    pub fn with_add_on(mut self, id: impl Into<String>) -> Self {
        self.add_on_ids.insert(id.into());
        self
    }

    pub fn with_promo_code(mut self, code: impl Into<String>) -> Self {
        self.promo_code = Some(code.into());
        self
    }
}

impl Default for QuoteRequest {
    fn default() -> Self {
        Self::new(ServiceTier::Standard, Frequency::OneTime)
    }
}

/// Price breakdown for one request. `total_discount` is never clamped, only `total` is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QuoteResult {
    pub cleaning_price: Dollars,
    pub add_ons_subtotal: Dollars,
    pub subtotal: Dollars,
    pub frequency_discount_amount: Dollars,
    pub promo_discount_amount: Dollars,
    pub total_discount: Dollars,
    pub total: Dollars,
    pub promo_applied: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Region {
    Nyc,
    LongIsland,
    NewJersey,
    Unknown,
}

impl Region {
    pub fn display_name(&self) -> &'static str {
        match self {
            Region::Nyc => "NYC",
            Region::LongIsland => "Long Island",
            Region::NewJersey => "New Jersey",
            Region::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ServiceAreaQuery {
    Zip(String),
    Coordinates(Coordinates),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServiceAreaResult {
    pub in_service_area: bool,
    pub region: Region,
    pub message: String,
    /// Set when the ZIP could not be read at all, as opposed to being outside every region.
    pub invalid_input: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_ids_round_trip_through_from_str() {
        for tier in ServiceTier::ALL {
            assert_eq!(tier.id().parse::<ServiceTier>().unwrap(), tier);
        }
        assert_eq!(
            "Move-In-Out".parse::<ServiceTier>().unwrap(),
            ServiceTier::MoveInOut
        );
    }

    #[test]
    fn test_unknown_tier_and_frequency_are_errors() {
        assert!(matches!(
            "platinum".parse::<ServiceTier>(),
            Err(QuoteError::InvalidTier { .. })
        ));
        assert!(matches!(
            "daily".parse::<Frequency>(),
            Err(QuoteError::InvalidFrequency { .. })
        ));
    }

    #[test]
    fn test_frequency_discounts() {
        let discounts: Vec<u32> = Frequency::ALL
            .iter()
            .map(|f| f.discount_percent())
            .collect();
        assert_eq!(discounts, vec![0, 10, 7, 5]);
    }

    #[test]
    fn test_room_counts_clamped() {
        assert_eq!(RoomCounts::clamped(12, 0), RoomCounts { bedrooms: 10, bathrooms: 1 });
        assert_eq!(RoomCounts::clamped(3, 11), RoomCounts { bedrooms: 3, bathrooms: 10 });
    }

    #[test]
    fn test_promo_discount_deserializes_from_tagged_table() {
        let percent: PromoDiscount =
            serde_json::from_str(r#"{"type":"percentage","value":10}"#).unwrap();
        let fixed: PromoDiscount = serde_json::from_str(r#"{"type":"fixed","value":20}"#).unwrap();
        assert_eq!(percent, PromoDiscount::Percentage(10));
        assert_eq!(fixed, PromoDiscount::Fixed(20));
    }

    #[test]
    fn test_region_serializes_kebab_case() {
        assert_eq!(serde_json::to_string(&Region::LongIsland).unwrap(), "\"long-island\"");
        assert_eq!(serde_json::to_string(&Region::Nyc).unwrap(), "\"nyc\"");
    }
}
