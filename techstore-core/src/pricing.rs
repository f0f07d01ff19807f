//! Price formatting and discount arithmetic shared by every product view.

/// Whole-number discount percentage for a sale price against its original.
///
/// Returns `None` when there is no original price or the original is not
/// strictly greater than the current price, which is exactly when no
/// discount badge should render.
#[must_use]
pub fn discount_percent(price: f64, original_price: Option<f64>) -> Option<u32> {
    let original = original_price?;
    if original <= price || original <= 0.0 {
        return None;
    }
    let pct = ((original - price) / original * 100.0).round();
    if pct <= 0.0 {
        return None;
    }
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    Some(pct.min(100.0) as u32)
}

/// Original price to show struck through, if it is above the sale price.
#[must_use]
pub fn struck_price(price: f64, original_price: Option<f64>) -> Option<f64> {
    original_price.filter(|original| *original > price)
}

/// Render a price as `$1234.56`.
#[must_use]
pub fn format_price(amount: f64) -> String {
    format!("${amount:.2}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn headphones_discount_rounds_to_seventeen() {
        assert_eq!(discount_percent(249.99, Some(299.99)), Some(17));
    }

    #[test]
    fn featured_defaults_match_storefront_badges() {
        assert_eq!(discount_percent(999.99, Some(1299.99)), Some(23));
        assert_eq!(discount_percent(799.99, Some(999.99)), Some(20));
        assert_eq!(discount_percent(249.99, Some(349.99)), Some(29));
        assert_eq!(discount_percent(1499.99, Some(1799.99)), Some(17));
        assert_eq!(discount_percent(199.99, Some(249.99)), Some(20));
    }

    #[test]
    fn no_badge_without_a_higher_original() {
        assert_eq!(discount_percent(299.99, None), None);
        assert_eq!(discount_percent(100.0, Some(100.0)), None);
        assert_eq!(discount_percent(120.0, Some(100.0)), None);
        assert_eq!(discount_percent(0.0, Some(0.0)), None);
    }

    #[test]
    fn tiny_markdowns_that_round_to_zero_hide_the_badge() {
        assert_eq!(discount_percent(99.9, Some(100.0)), None);
    }

    #[test]
    fn struck_price_only_when_higher() {
        assert_eq!(struck_price(10.0, Some(12.5)), Some(12.5));
        assert_eq!(struck_price(10.0, Some(10.0)), None);
        assert_eq!(struck_price(10.0, None), None);
    }

    #[test]
    fn prices_use_two_decimals() {
        assert_eq!(format_price(249.99), "$249.99");
        assert_eq!(format_price(5.0), "$5.00");
    }
}
