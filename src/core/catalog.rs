//! The canonical rate table and add-on catalog.
//!
//! Formula for a cleaning: `base + bedrooms × per_room + (bathrooms − 1) × per_room`.
//! Any "starting at" or discounted figure shown elsewhere is derived from these
//! rows, see [`starting_price`] and [`crate::domain::money::display_price`].

use crate::domain::model::{AddOn, ServiceTier, TierRate};
use crate::domain::money::{cents_to_dollars, Dollars};

const TIER_RATES: &[TierRate] = &[
    TierRate {
        tier: ServiceTier::Standard,
        label: "Standard",
        base: 11_000,
        per_room: 4_150,
        duration: "~2 hours",
        description: "Core maintenance clean",
    },
    TierRate {
        tier: ServiceTier::StandardPlus,
        label: "Standard Plus",
        base: 15_000,
        per_room: 4_500,
        duration: "~3 hours",
        description: "Enhanced essentials",
    },
    TierRate {
        tier: ServiceTier::Deep,
        label: "Deep Clean",
        base: 29_100,
        per_room: 5_800,
        duration: "~5 hours",
        description: "Full reset",
    },
    TierRate {
        tier: ServiceTier::MoveInOut,
        label: "Move In/Out",
        base: 29_100,
        per_room: 5_800,
        duration: "~5+ hours",
        description: "Turnover ready",
    },
];

const ADD_ONS: &[AddOn] = &[
    AddOn { id: "fridge", label: "Inside Fridge", price: 45, unit: "per unit" },
    AddOn { id: "oven", label: "Inside Oven", price: 45, unit: "per oven" },
    AddOn { id: "cabinets", label: "Inside Cabinets", price: 45, unit: "flat rate" },
    AddOn { id: "windows", label: "Interior Windows", price: 60, unit: "flat rate" },
    AddOn { id: "laundry", label: "Laundry", price: 45, unit: "per load" },
    AddOn { id: "balcony", label: "Balcony", price: 60, unit: "flat rate" },
    AddOn { id: "basement", label: "Basement", price: 85, unit: "flat rate" },
    AddOn { id: "closets", label: "Closet Organization", price: 50, unit: "flat rate" },
];

pub fn tier_rates() -> &'static [TierRate] {
    TIER_RATES
}

pub fn tier_rate(tier: ServiceTier) -> Option<&'static TierRate> {
    TIER_RATES.iter().find(|rate| rate.tier == tier)
}

/// Catalog order is the order the booking form lists them in.
pub fn add_ons() -> &'static [AddOn] {
    ADD_ONS
}

pub fn add_on(id: &str) -> Option<&'static AddOn> {
    ADD_ONS.iter().find(|add_on| add_on.id == id)
}

/// Advertised price for a studio with one bathroom.
pub fn starting_price(tier: ServiceTier) -> Option<Dollars> {
    tier_rate(tier).map(|rate| cents_to_dollars(rate.base))
}
