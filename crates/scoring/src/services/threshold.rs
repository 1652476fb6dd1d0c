use rust_decimal::Decimal;

use crate::models::ThresholdConfig;

/// Converts an elapsed time into points for a timed category.
///
/// Times at or under `t1` earn `max_points`, times at or over `t2` earn
/// `min_points`. In between, points fall linearly from `max_points` to
/// `min_points` and are rounded half-up to a whole number.
///
/// The interpolation branch is only reachable when `t1 < time < t2`, so a
/// config with `t1 >= t2` degrades to a step function instead of dividing
/// by zero.
pub fn score_time(
    time: Decimal,
    t1: Decimal,
    t2: Decimal,
    max_points: Decimal,
    min_points: Decimal,
) -> Decimal {
    if time <= t1 {
        return max_points;
    }
    if time >= t2 {
        return min_points;
    }

    let ratio = (time - t1) / (t2 - t1);
    round_half_up(max_points - ratio * (max_points - min_points))
}

pub fn threshold_score(time: Decimal, config: &ThresholdConfig) -> Decimal {
    score_time(
        time,
        config.threshold1,
        config.threshold2,
        config.max_points,
        config.min_points,
    )
}

/// Rounds to the nearest integer, halves towards positive infinity.
pub fn round_half_up(value: Decimal) -> Decimal {
    (value + Decimal::new(5, 1)).floor()
}
