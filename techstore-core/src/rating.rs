//! Five-star rating rows.

/// Number of stars every rating row renders.
pub const STAR_COUNT: usize = 5;

/// Upper bound of the rating scale.
pub const MAX_RATING: f64 = 5.0;

/// How a fractional rating maps onto whole stars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StarRule {
    /// Fill every star below `floor(r)` and also the star holding the
    /// fraction, so 4.5 lights five stars.
    #[default]
    FillFraction,
    /// Fill only the stars below `floor(r)`, so 4.5 lights four stars.
    StrictFloor,
}

/// Fill state of each of the five stars for `rating` under `rule`.
///
/// Ratings outside `[0, 5]` are clamped; `NaN` renders as zero.
#[must_use]
pub fn star_fills(rating: f64, rule: StarRule) -> [bool; STAR_COUNT] {
    let rating = clamp_rating(rating);
    let whole = rating.floor();
    let has_fraction = rating % 1.0 > 0.0;
    let mut stars = [false; STAR_COUNT];
    for (i, star) in stars.iter_mut().enumerate() {
        #[allow(clippy::cast_precision_loss)]
        let idx = i as f64;
        *star = idx < whole
            || (rule == StarRule::FillFraction && has_fraction && (idx - whole).abs() < f64::EPSILON);
    }
    stars
}

/// Count of filled stars for `rating` under `rule`.
#[must_use]
pub fn filled_count(rating: f64, rule: StarRule) -> usize {
    star_fills(rating, rule).iter().filter(|filled| **filled).count()
}

/// Rating formatted with one decimal, as shown beside the stars.
#[must_use]
pub fn rating_label(rating: f64) -> String {
    format!("{:.1}", clamp_rating(rating))
}

fn clamp_rating(rating: f64) -> f64 {
    if rating.is_nan() {
        0.0
    } else {
        rating.clamp(0.0, MAX_RATING)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whole_ratings_fill_exactly_floor() {
        for r in 0..=5_u8 {
            let rating = f64::from(r);
            assert_eq!(filled_count(rating, StarRule::FillFraction), usize::from(r));
            assert_eq!(filled_count(rating, StarRule::StrictFloor), usize::from(r));
        }
    }

    #[test]
    fn fractional_star_is_lit_under_fill_fraction() {
        assert_eq!(filled_count(4.5, StarRule::FillFraction), 5);
        assert_eq!(filled_count(4.5, StarRule::StrictFloor), 4);
        assert_eq!(filled_count(0.1, StarRule::FillFraction), 1);
        assert_eq!(filled_count(0.1, StarRule::StrictFloor), 0);
    }

    #[test]
    fn fill_order_is_left_to_right() {
        assert_eq!(
            star_fills(3.2, StarRule::FillFraction),
            [true, true, true, true, false]
        );
        assert_eq!(
            star_fills(3.2, StarRule::StrictFloor),
            [true, true, true, false, false]
        );
    }

    #[test]
    fn out_of_range_ratings_are_clamped() {
        assert_eq!(filled_count(7.0, StarRule::FillFraction), 5);
        assert_eq!(filled_count(-1.0, StarRule::FillFraction), 0);
        assert_eq!(filled_count(f64::NAN, StarRule::FillFraction), 0);
    }

    #[test]
    fn label_has_one_decimal() {
        assert_eq!(rating_label(4.8), "4.8");
        assert_eq!(rating_label(4.0), "4.0");
    }
}
