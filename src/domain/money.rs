//! Integer money helpers.
//!
//! Every quoted figure is a whole currency unit ([`Dollars`]). Rate tables are
//! kept in [`Cents`] so that sums such as `base + rooms × per_room` stay exact
//! and are rounded exactly once.

pub type Dollars = i64;
pub type Cents = i64;

/// Integer division rounding half away from zero. `denominator` must be positive.
pub fn div_round_half_away(numerator: i64, denominator: i64) -> i64 {
    debug_assert!(denominator > 0);
    let quotient = numerator / denominator;
    let remainder = numerator % denominator;
    if 2 * remainder.abs() >= denominator {
        quotient + numerator.signum()
    } else {
        quotient
    }
}

pub fn cents_to_dollars(cents: Cents) -> Dollars {
    div_round_half_away(cents, 100)
}

/// `round(amount × percent / 100)`.
pub fn percent_of(amount: Dollars, percent: u32) -> Dollars {
    div_round_half_away(amount * i64::from(percent), 100)
}

/// Marketing list price: the list rate reduced by `discount_percent`, rounded
/// to whole units. This is the only way a "discounted" figure is produced.
pub fn display_price(list: Cents, discount_percent: u32) -> Dollars {
    let keep = 100 - i64::from(discount_percent.min(100));
    div_round_half_away(list * keep, 100 * 100)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rounds_half_away_from_zero() {
        assert_eq!(div_round_half_away(150, 100), 2);
        assert_eq!(div_round_half_away(149, 100), 1);
        assert_eq!(div_round_half_away(-150, 100), -2);
        assert_eq!(div_round_half_away(-149, 100), -1);
        assert_eq!(div_round_half_away(0, 100), 0);
    }

    #[test]
    fn test_cents_to_dollars() {
        // 110 + 3 × 41.50
        assert_eq!(cents_to_dollars(11_000 + 3 * 4_150), 235);
        assert_eq!(cents_to_dollars(19_300), 193);
    }

    #[test]
    fn test_percent_of() {
        assert_eq!(percent_of(193, 10), 19);
        assert_eq!(percent_of(235, 10), 24);
        assert_eq!(percent_of(100, 0), 0);
    }

    #[test]
    fn test_display_price() {
        assert_eq!(display_price(11_000, 5), 105);
        assert_eq!(display_price(15_000, 5), 143);
        assert_eq!(display_price(29_100, 5), 276);
        assert_eq!(display_price(4_500, 5), 43);
        assert_eq!(display_price(6_000, 5), 57);
        assert_eq!(display_price(11_000, 0), 110);
    }
}
