use rust_decimal::Decimal;

use crate::models::ExerciseSetWithContext;

/// Brzycki extrapolation: `load * 36 / (37 - reps)`.
const BRZYCKI_NUMERATOR: i32 = 36;
const BRZYCKI_OFFSET: i32 = 37;

/// Estimate the maximum weight liftable for a single repetition.
///
/// `body_weight` is the user's body weight at the time the parent entry was
/// created; `body_weight_percentage` is the exercise's coefficient for how
/// much of it counts as load. The estimate covers the external weight plus
/// an extrapolated body-weight contribution: the original body-weight load
/// is subtracted back *after* extrapolating the combined total. The two
/// operations do not cancel out and must stay in this order.
pub fn one_rep_max(
    weight: Decimal,
    reps: i32,
    body_weight: Decimal,
    body_weight_percentage: Decimal,
) -> Decimal {
    let bodyweight_load = body_weight * body_weight_percentage;
    let total = weight + bodyweight_load;

    if reps <= 1 {
        return total.round_dp(2);
    }

    let denominator = BRZYCKI_OFFSET - reps;
    if denominator <= 0 {
        // Brzycki is undefined from 37 reps upward; report the raw load.
        return total.round_dp(2);
    }

    let extrapolated = total * Decimal::from(BRZYCKI_NUMERATOR) / Decimal::from(denominator);

    (extrapolated - bodyweight_load).round_dp(2)
}

/// Estimate what the lift would have been at true failure instead of at the
/// reps actually performed, by crediting the reps left in reserve.
pub fn perceived_one_rep_max(
    weight: Decimal,
    reps: i32,
    rir: i32,
    body_weight: Decimal,
    body_weight_percentage: Decimal,
) -> Decimal {
    one_rep_max(weight, reps + rir, body_weight, body_weight_percentage)
}

/// Compute both estimates for a set joined with its entry/exercise context.
///
/// A user without any body-weight measurement at the entry's creation time
/// is treated as weighing zero.
pub fn set_estimates(set: &ExerciseSetWithContext) -> (Decimal, Decimal) {
    let body_weight = set.body_weight.unwrap_or(Decimal::ZERO);

    (
        one_rep_max(set.weight, set.reps, body_weight, set.body_weight_percentage),
        perceived_one_rep_max(
            set.weight,
            set.reps,
            set.rir,
            body_weight,
            set.body_weight_percentage,
        ),
    )
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn dec(mantissa: i64, scale: u32) -> Decimal {
        Decimal::new(mantissa, scale)
    }

    #[test]
    fn test_single_rep_returns_total_load_exactly() {
        // 50 kg external + 80 kg * 0.5 = 90 kg, no extrapolation.
        let result = one_rep_max(dec(50, 0), 1, dec(80, 0), dec(5, 1));
        assert_eq!(result, dec(90, 0).round_dp(2));
    }

    #[test]
    fn test_zero_reps_behaves_like_single_rep() {
        let result = one_rep_max(dec(100, 0), 0, Decimal::ZERO, Decimal::ZERO);
        assert_eq!(result, dec(100, 0).round_dp(2));
    }

    #[test]
    fn test_brzycki_without_bodyweight() {
        // 50 * 36 / 27 = 66.666... -> 66.67
        let result = one_rep_max(dec(50, 0), 10, dec(80, 0), Decimal::ZERO);
        assert_eq!(result, dec(6667, 2));
    }

    #[test]
    fn test_perceived_credits_reps_in_reserve() {
        // reps + rir = 12: 50 * 36 / 25 = 72 exactly.
        let result = perceived_one_rep_max(dec(50, 0), 10, 2, dec(80, 0), Decimal::ZERO);
        assert_eq!(result, dec(72, 0).round_dp(2));
    }

    #[test]
    fn test_bodyweight_load_subtracted_after_extrapolation() {
        // total = 20 + 80 * 0.6 = 68; 68 * 36 / 32 = 76.5; minus 48 = 28.5.
        let result = one_rep_max(dec(20, 0), 5, dec(80, 0), dec(6, 1));
        assert_eq!(result, dec(285, 1).round_dp(2));
    }

    #[test]
    fn test_perceived_not_below_estimate_with_reps_in_reserve() {
        let cases = [
            (dec(50, 0), 10, 2, dec(80, 0), Decimal::ZERO),
            (dec(20, 0), 5, 3, dec(80, 0), dec(6, 1)),
            (dec(0, 0), 12, 1, dec(72, 0), dec(1, 0)),
            (dec(140, 0), 3, 2, dec(90, 0), Decimal::ZERO),
        ];

        for (weight, reps, rir, body_weight, pct) in cases {
            let estimate = one_rep_max(weight, reps, body_weight, pct);
            let perceived = perceived_one_rep_max(weight, reps, rir, body_weight, pct);
            assert!(
                perceived >= estimate,
                "perceived {perceived} < estimate {estimate} for reps={reps} rir={rir}"
            );
        }
    }

    #[test]
    fn test_reps_at_or_beyond_formula_range_fall_back_to_total() {
        // The validation ceiling admits up to 100 reps; the denominator is
        // non-positive from 37 on.
        let at_boundary = one_rep_max(dec(40, 0), 37, Decimal::ZERO, Decimal::ZERO);
        assert_eq!(at_boundary, dec(40, 0).round_dp(2));

        let beyond = one_rep_max(dec(40, 0), 100, dec(80, 0), dec(5, 1));
        assert_eq!(beyond, dec(80, 0).round_dp(2));
    }

    #[test]
    fn test_missing_bodyweight_measurement_counts_as_zero() {
        let set = context_row(dec(50, 0), 10, 2, dec(5, 1), None);
        let (estimate, perceived) = set_estimates(&set);
        assert_eq!(estimate, dec(6667, 2));
        assert_eq!(perceived, dec(72, 0).round_dp(2));
    }

    #[test]
    fn test_set_estimates_use_historical_bodyweight() {
        let set = context_row(dec(20, 0), 5, 0, dec(6, 1), Some(dec(80, 0)));
        let (estimate, _) = set_estimates(&set);
        assert_eq!(estimate, dec(285, 1).round_dp(2));
    }

    fn context_row(
        weight: Decimal,
        reps: i32,
        rir: i32,
        body_weight_percentage: Decimal,
        body_weight: Option<Decimal>,
    ) -> ExerciseSetWithContext {
        let timestamp = chrono::NaiveDate::from_ymd_opt(2025, 3, 1)
            .unwrap()
            .and_hms_opt(10, 0, 0)
            .unwrap();

        ExerciseSetWithContext {
            set_id: uuid::Uuid::new_v4(),
            entry_id: uuid::Uuid::new_v4(),
            user_id: uuid::Uuid::new_v4(),
            order_index: 0,
            reps,
            weight,
            rir,
            created_at: timestamp,
            updated_at: timestamp,
            entry_created_at: timestamp,
            body_weight_percentage,
            body_weight,
        }
    }
}
