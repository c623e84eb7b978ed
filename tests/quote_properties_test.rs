use anyhow::Result;
use otter_quote::core::catalog;
use otter_quote::domain::money::cents_to_dollars;
use otter_quote::{Frequency, PricingEngine, QuoteError, QuoteRequest, ServiceTier};

const PROMOS: [Option<&str>; 4] = [None, Some("OTTER10"), Some("first20"), Some("NOPE")];

#[test]
fn test_studio_quote_is_the_advertised_starting_price() -> Result<()> {
    let engine = PricingEngine::default();
    for tier in ServiceTier::ALL {
        let quote = engine.compute_quote(&QuoteRequest::new(tier, Frequency::OneTime))?;
        let rate = catalog::tier_rate(tier).expect("rate");
        assert_eq!(quote.cleaning_price, cents_to_dollars(rate.base));
    }
    Ok(())
}

#[test]
fn test_each_bedroom_adds_one_room_rate() -> Result<()> {
    let engine = PricingEngine::default();
    for tier in ServiceTier::ALL {
        let per_room = cents_to_dollars(catalog::tier_rate(tier).expect("rate").per_room);
        for bedrooms in 0..10 {
            let smaller = QuoteRequest::new(tier, Frequency::OneTime).with_rooms(bedrooms, 1);
            let larger = QuoteRequest::new(tier, Frequency::OneTime).with_rooms(bedrooms + 1, 1);
            let step = engine.compute_quote(&larger)?.cleaning_price
                - engine.compute_quote(&smaller)?.cleaning_price;
            assert!(
                (step - per_room).abs() <= 1,
                "{} step {} at {} bedrooms",
                tier,
                step,
                bedrooms
            );
        }
    }
    Ok(())
}

#[test]
fn test_add_on_prices_only_for_standard_tiers() -> Result<()> {
    let engine = PricingEngine::default();
    for add_on in catalog::add_ons() {
        for tier in ServiceTier::ALL {
            let request = QuoteRequest::new(tier, Frequency::OneTime).with_add_on(add_on.id);
            let quote = engine.compute_quote(&request)?;
            match tier {
                ServiceTier::Standard | ServiceTier::StandardPlus => {
                    assert_eq!(quote.add_ons_subtotal, add_on.price)
                }
                ServiceTier::Deep | ServiceTier::MoveInOut => assert_eq!(quote.add_ons_subtotal, 0),
            }
        }
    }
    Ok(())
}

#[test]
fn test_first20_applies_in_full_even_on_small_subtotals() -> Result<()> {
    let engine = PricingEngine::default();
    let request = QuoteRequest::new(ServiceTier::Standard, Frequency::Weekly)
        .with_rooms(1, 1)
        .with_promo_code("FIRST20");
    let quote = engine.compute_quote(&request)?;

    assert_eq!(quote.promo_discount_amount, 20);
    assert_eq!(quote.frequency_discount_amount, 15);
    assert_eq!(quote.total, 152 - 35);
    Ok(())
}

#[test]
fn test_total_never_negative_and_breakdown_consistent() -> Result<()> {
    let engine = PricingEngine::default();
    for tier in ServiceTier::ALL {
        for frequency in Frequency::ALL {
            for bedrooms in 0..=10 {
                for bathrooms in 1..=10 {
                    for promo in PROMOS {
                        let mut request = QuoteRequest::new(tier, frequency)
                            .with_rooms(bedrooms, bathrooms)
                            .with_add_on("windows")
                            .with_add_on("laundry");
                        request.promo_code = promo.map(str::to_string);

                        let quote = engine.compute_quote(&request)?;
                        assert!(quote.total >= 0);
                        assert_eq!(quote.subtotal, quote.cleaning_price + quote.add_ons_subtotal);
                        assert_eq!(
                            quote.total_discount,
                            quote.frequency_discount_amount + quote.promo_discount_amount
                        );
                        assert_eq!(quote.total, (quote.subtotal - quote.total_discount).max(0));
                    }
                }
            }
        }
    }
    Ok(())
}

#[test]
fn test_unknown_promo_changes_nothing_but_the_flag() -> Result<()> {
    let engine = PricingEngine::default();
    let plain = QuoteRequest::new(ServiceTier::StandardPlus, Frequency::BiWeekly)
        .with_rooms(3, 2)
        .with_add_on("balcony");
    let with_bad_code = plain.clone().with_promo_code("FREECLEAN");

    let expected = engine.compute_quote(&plain)?;
    let quote = engine.compute_quote(&with_bad_code)?;
    assert_eq!(quote, expected);
    assert!(!quote.promo_applied);
    Ok(())
}

#[test]
fn test_quotes_are_repeatable() -> Result<()> {
    let engine = PricingEngine::default();
    let request = QuoteRequest::from_ids("standard-plus", "monthly")?
        .with_rooms(4, 3)
        .with_add_on("oven")
        .with_promo_code("otter10");
    assert_eq!(engine.compute_quote(&request)?, engine.compute_quote(&request)?);
    Ok(())
}

#[test]
fn test_unknown_tier_id_is_rejected() {
    let err = QuoteRequest::from_ids("platinum", "weekly").unwrap_err();
    assert!(matches!(err, QuoteError::InvalidTier { value } if value == "platinum"));

    let err = QuoteRequest::from_ids("deep", "daily").unwrap_err();
    assert!(matches!(err, QuoteError::InvalidFrequency { .. }));
}
