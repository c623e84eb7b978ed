use crate::core::catalog;
use crate::domain::money::{cents_to_dollars, display_price, Cents, Dollars};
use crate::utils::error::{QuoteError, Result};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum RateKind {
    Tier,
    AddOn,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RateCardRow {
    pub kind: RateKind,
    pub id: String,
    pub label: String,
    pub unit: String,
    pub per_room: Option<String>,
    pub list_price: Dollars,
    pub display_price: Dollars,
}

/// Published prices: tier starting prices and add-on prices, each with the
/// marketing figure derived from it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RateCard {
    pub discount_percent: u32,
    pub rows: Vec<RateCardRow>,
}

impl RateCard {
    pub fn build(discount_percent: u32) -> Self {
        let tiers = catalog::tier_rates().iter().map(|rate| RateCardRow {
            kind: RateKind::Tier,
            id: rate.tier.id().to_string(),
            label: rate.label.to_string(),
            unit: rate.duration.to_string(),
            per_room: Some(format_cents(rate.per_room)),
            list_price: cents_to_dollars(rate.base),
            display_price: display_price(rate.base, discount_percent),
        });

        let add_ons = catalog::add_ons().iter().map(|add_on| RateCardRow {
            kind: RateKind::AddOn,
            id: add_on.id.to_string(),
            label: add_on.label.to_string(),
            unit: add_on.unit.to_string(),
            per_room: None,
            list_price: add_on.price,
            display_price: display_price(add_on.price * 100, discount_percent),
        });

        Self {
            discount_percent,
            rows: tiers.chain(add_ons).collect(),
        }
    }

    pub fn to_csv(&self) -> Result<String> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        for row in &self.rows {
            writer.serialize(row)?;
        }
        let bytes = writer
            .into_inner()
            .map_err(|e| QuoteError::IoError(e.into_error()))?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

fn format_cents(cents: Cents) -> String {
    format!("{}.{:02}", cents / 100, cents % 100)
}
