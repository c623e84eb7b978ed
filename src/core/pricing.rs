use crate::core::catalog;
use crate::domain::model::{PromoDiscount, QuoteRequest, QuoteResult};
use crate::domain::money::{cents_to_dollars, percent_of, Dollars};
use crate::domain::ports::ConfigProvider;
use crate::domain::promo::PromoTable;
use crate::utils::error::{QuoteError, Result};

/// Stateless quote calculator over the static rate table.
#[derive(Debug, Clone)]
pub struct PricingEngine {
    promos: PromoTable,
    promo_codes_enabled: bool,
}

impl PricingEngine {
    pub fn new(promos: PromoTable) -> Self {
        Self {
            promos,
            promo_codes_enabled: true,
        }
    }

    pub fn from_config<C: ConfigProvider + ?Sized>(config: &C) -> Self {
        Self {
            promos: config.promo_table(),
            promo_codes_enabled: config.promo_codes_enabled(),
        }
    }

    pub fn with_promo_codes_enabled(mut self, enabled: bool) -> Self {
        self.promo_codes_enabled = enabled;
        self
    }

    pub fn promos(&self) -> &PromoTable {
        &self.promos
    }

    pub fn compute_quote(&self, request: &QuoteRequest) -> Result<QuoteResult> {
        let rate = catalog::tier_rate(request.tier).ok_or_else(|| QuoteError::InvalidTier {
            value: request.tier.to_string(),
        })?;

        // Bathrooms below one contribute nothing rather than a negative delta.
        let rooms = i64::from(request.bedrooms) + i64::from(request.bathrooms.saturating_sub(1));
        let cleaning_price = cents_to_dollars(rate.base + rooms * rate.per_room);

        let add_ons_subtotal = if request.tier.includes_add_ons() {
            if !request.add_on_ids.is_empty() {
                tracing::debug!(
                    "Ignoring {} add-on(s): included in {}",
                    request.add_on_ids.len(),
                    request.tier
                );
            }
            0
        } else {
            request
                .add_on_ids
                .iter()
                .filter_map(|id| catalog::add_on(id))
                .map(|add_on| add_on.price)
                .sum::<Dollars>()
        };

        let subtotal = cleaning_price + add_ons_subtotal;
        let frequency_discount_amount = percent_of(subtotal, request.frequency.discount_percent());

        let promo = self.redeem(request.promo_code.as_deref());
        let promo_discount_amount = promo.map_or(0, |discount| promo_amount(discount, subtotal));

        let total_discount = frequency_discount_amount.saturating_add(promo_discount_amount);
        let total = subtotal.saturating_sub(total_discount).max(0);

        tracing::debug!(
            "Quote {} {} bed/{} bath {}: subtotal={} discount={} total={}",
            request.tier,
            request.bedrooms,
            request.bathrooms,
            request.frequency,
            subtotal,
            total_discount,
            total
        );

        Ok(QuoteResult {
            cleaning_price,
            add_ons_subtotal,
            subtotal,
            frequency_discount_amount,
            promo_discount_amount,
            total_discount,
            total,
            promo_applied: promo.is_some(),
        })
    }

    fn redeem(&self, code: Option<&str>) -> Option<PromoDiscount> {
        let code = code.filter(|c| !c.trim().is_empty())?;
        if !self.promo_codes_enabled {
            tracing::debug!("Promo codes are disabled, ignoring '{}'", code);
            return None;
        }
        let discount = self.promos.lookup(code);
        if discount.is_none() {
            tracing::warn!("Invalid promo code: '{}'", code);
        }
        discount
    }
}

impl Default for PricingEngine {
    fn default() -> Self {
        Self::new(PromoTable::default())
    }
}

/// Fixed promos are neither scaled nor capped; the total clamp absorbs the excess.
fn promo_amount(discount: PromoDiscount, subtotal: Dollars) -> Dollars {
    match discount {
        PromoDiscount::Percentage(percent) => percent_of(subtotal, percent),
        PromoDiscount::Fixed(amount) => amount,
    }
}
