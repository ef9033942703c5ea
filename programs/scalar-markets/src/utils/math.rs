use anchor_lang::prelude::*;

use crate::constants::{
    BASIS_POINT_SCALE, DECAY_DURATION_SCALE, DECAY_NORMALIZATION_FACTOR, FIXED_POINT_SCALE,
};
use crate::errors::MarketError;

/// Basis-point split of a raw stake. All three parts are floor-rounded, so
/// `platform_fee + creator_fee + net_stake == stake` never overshoots.
pub struct FeeSplit {
    pub platform_fee: u64,
    pub creator_fee: u64,
    pub net_stake: u64,
}

pub fn split_stake(stake: u64, platform_fee_bps: u16, creator_fee_bps: u16) -> Result<FeeSplit> {
    let platform_fee = ((stake as u128 * platform_fee_bps as u128)
        / BASIS_POINT_SCALE as u128) as u64;
    let creator_fee =
        ((stake as u128 * creator_fee_bps as u128) / BASIS_POINT_SCALE as u128) as u64;

    let net_stake = stake
        .checked_sub(platform_fee)
        .and_then(|s| s.checked_sub(creator_fee))
        .ok_or(MarketError::MathOverflow)?;

    Ok(FeeSplit {
        platform_fee,
        creator_fee,
        net_stake,
    })
}

/// Gaussian accuracy score of a prediction against the resolved value,
/// returned as a fixed-point integer in [0, FIXED_POINT_SCALE].
///
/// score = exp(-(|prediction - resolution| / effective_decay)^2), where
/// effective_decay = DECAY_NORMALIZATION_FACTOR * decay / FIXED_POINT_SCALE.
/// The kernel is 1 at zero distance, symmetric in the sign of the deviation
/// and falls off faster as the stored decay shrinks.
pub fn gaussian_score_fp(prediction: i64, resolution: i64, decay: u64) -> Result<u128> {
    require!(decay > 0, MarketError::InvalidDecay);

    let dist = (prediction as i128 - resolution as i128).unsigned_abs();
    let effective_decay =
        (DECAY_NORMALIZATION_FACTOR as f64 * decay as f64) / FIXED_POINT_SCALE as f64;
    let exponent = -((dist as f64 / effective_decay).powi(2));
    let score_fp = (exponent.exp() * FIXED_POINT_SCALE as f64) as u128;

    Ok(score_fp)
}

/// Pro-rata share of the pool for one position. `total_scores` is the sum of
/// fixed-point scores over every position of the market; a zero aggregate
/// (no positions, or every score underflowed) yields a zero reward rather
/// than an error.
pub fn calculate_reward(
    prediction: i64,
    resolution: i64,
    decay: u64,
    total_pool: u64,
    total_scores: u128,
) -> Result<u64> {
    let score_fp = gaussian_score_fp(prediction, resolution, decay)?;
    if total_scores == 0 {
        return Ok(0);
    }

    let reward = score_fp
        .checked_mul(total_pool as u128)
        .ok_or(MarketError::MathOverflow)?
        / total_scores;

    Ok(reward as u64)
}

/// Aggregates fixed-point scores over `(prediction, decay)` pairs. The
/// resolver runs this over every position of a market before calling
/// `resolve_market`; the engine stores the result without recomputing it.
pub fn sum_scores<I>(positions: I, resolution: i64) -> Result<u128>
where
    I: IntoIterator<Item = (i64, u64)>,
{
    let mut total: u128 = 0;
    for (prediction, decay) in positions {
        let score_fp = gaussian_score_fp(prediction, resolution, decay)?;
        total = total
            .checked_add(score_fp)
            .ok_or(MarketError::MathOverflow)?;
    }
    Ok(total)
}

/// Starting bandwidth for a freshly proposed market, one fixed-point unit per
/// DECAY_DURATION_SCALE seconds of market duration.
pub fn initial_decay(start_time: i64, end_time: i64) -> Result<u64> {
    require!(end_time > start_time, MarketError::InvalidEndTime);

    let duration = (end_time - start_time) as u128;
    let decay = duration
        .checked_mul(FIXED_POINT_SCALE as u128)
        .ok_or(MarketError::MathOverflow)?
        / DECAY_DURATION_SCALE as u128;

    require!(decay > 0, MarketError::InvalidDecay);
    u64::try_from(decay).map_err(|_| MarketError::MathOverflow.into())
}

/// Shrinks the market bandwidth by the fraction of the market window still
/// remaining, so later predictions are scored against a narrower kernel.
pub fn next_decay(old_decay: u64, start_time: i64, end_time: i64, now: i64) -> Result<u64> {
    let duration = (end_time - start_time) as u64;
    require!(duration > 0, MarketError::InvalidEndTime);

    let elapsed = (now - start_time).max(0) as u64;
    let progress = (elapsed as u128 * FIXED_POINT_SCALE as u128) / duration as u128;
    let remaining = (FIXED_POINT_SCALE as u128)
        .checked_sub(progress)
        .ok_or(MarketError::MathOverflow)?;

    let new_decay = (old_decay as u128)
        .checked_mul(remaining)
        .ok_or(MarketError::MathOverflow)?
        / FIXED_POINT_SCALE as u128;

    Ok(new_decay as u64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fee_split_basis_points() {
        // 10% + 10% on a 10_000_000 stake
        let split = split_stake(10_000_000, 1000, 1000).unwrap();
        assert_eq!(split.platform_fee, 1_000_000);
        assert_eq!(split.creator_fee, 1_000_000);
        assert_eq!(split.net_stake, 8_000_000);
    }

    #[test]
    fn fee_split_floors_and_conserves() {
        let split = split_stake(9_999, 333, 167).unwrap();
        assert_eq!(split.platform_fee, 9_999 * 333 / 10_000);
        assert_eq!(split.creator_fee, 9_999 * 167 / 10_000);
        assert_eq!(
            split.platform_fee + split.creator_fee + split.net_stake,
            9_999
        );
    }

    #[test]
    fn fee_split_zero_rates() {
        let split = split_stake(1_234_567, 0, 0).unwrap();
        assert_eq!(split.platform_fee, 0);
        assert_eq!(split.creator_fee, 0);
        assert_eq!(split.net_stake, 1_234_567);
    }

    #[test]
    fn score_is_one_at_exact_prediction() {
        let score = gaussian_score_fp(100, 100, FIXED_POINT_SCALE).unwrap();
        assert_eq!(score, FIXED_POINT_SCALE as u128);
    }

    #[test]
    fn score_decreases_with_distance() {
        let decay = FIXED_POINT_SCALE;
        let near = gaussian_score_fp(105, 100, decay).unwrap();
        let mid = gaussian_score_fp(1_100, 100, decay).unwrap();
        let far = gaussian_score_fp(5_100, 100, decay).unwrap();
        assert!(near > mid);
        assert!(mid > far);
        assert!(near < FIXED_POINT_SCALE as u128);
    }

    #[test]
    fn score_is_symmetric_around_resolution() {
        let decay = FIXED_POINT_SCALE;
        let below = gaussian_score_fp(100 - 750, 100, decay).unwrap();
        let above = gaussian_score_fp(100 + 750, 100, decay).unwrap();
        assert_eq!(below, above);
    }

    #[test]
    fn smaller_decay_means_steeper_falloff() {
        let wide = gaussian_score_fp(600, 100, FIXED_POINT_SCALE).unwrap();
        let narrow = gaussian_score_fp(600, 100, FIXED_POINT_SCALE / 4).unwrap();
        assert!(narrow < wide);
    }

    #[test]
    fn zero_decay_is_rejected() {
        let err = gaussian_score_fp(100, 100, 0).unwrap_err();
        assert_eq!(err, MarketError::InvalidDecay.into());
    }

    #[test]
    fn sole_participant_takes_the_whole_pool() {
        let decay = FIXED_POINT_SCALE;
        let total_pool = 8_000_000;
        let total_scores = sum_scores([(100, decay)], 100).unwrap();
        assert_eq!(total_scores, FIXED_POINT_SCALE as u128);

        let reward = calculate_reward(100, 100, decay, total_pool, total_scores).unwrap();
        assert_eq!(reward, total_pool);
    }

    #[test]
    fn symmetric_predictions_split_the_pool_evenly() {
        let decay = FIXED_POINT_SCALE;
        let resolution = 1_000;
        let positions = [(resolution - 400, decay), (resolution + 400, decay)];
        let total_scores = sum_scores(positions, resolution).unwrap();

        let low = calculate_reward(resolution - 400, resolution, decay, 8_000_000, total_scores)
            .unwrap();
        let high = calculate_reward(resolution + 400, resolution, decay, 8_000_000, total_scores)
            .unwrap();
        assert_eq!(low, high);
        assert_eq!(low, 4_000_000);
    }

    #[test]
    fn zero_total_scores_yields_zero_reward() {
        let reward = calculate_reward(100, 200, FIXED_POINT_SCALE, 8_000_000, 0).unwrap();
        assert_eq!(reward, 0);
    }

    #[test]
    fn reward_sum_never_exceeds_pool() {
        let decay = 2 * FIXED_POINT_SCALE;
        let resolution = 5_000;
        let predictions = [3_100_i64, 4_250, 4_999, 5_000, 5_003, 6_780, 9_500];
        let total_pool = 123_456_789;

        let total_scores =
            sum_scores(predictions.iter().map(|&p| (p, decay)), resolution).unwrap();

        let mut paid = 0u64;
        for &p in &predictions {
            paid += calculate_reward(p, resolution, decay, total_pool, total_scores).unwrap();
        }
        assert!(paid <= total_pool);
    }

    #[test]
    fn initial_decay_scales_with_duration() {
        // One hour of market time maps to one fixed-point unit.
        assert_eq!(initial_decay(0, 3_600).unwrap(), FIXED_POINT_SCALE);
        assert_eq!(initial_decay(0, 7_200).unwrap(), 2 * FIXED_POINT_SCALE);
        assert_eq!(initial_decay(1_000, 1_000 + 1_800).unwrap(), FIXED_POINT_SCALE / 2);
    }

    #[test]
    fn initial_decay_rejects_empty_window() {
        let err = initial_decay(3_600, 3_600).unwrap_err();
        assert_eq!(err, MarketError::InvalidEndTime.into());
    }

    #[test]
    fn decay_shrinks_as_the_window_elapses() {
        let d0 = FIXED_POINT_SCALE;
        assert_eq!(next_decay(d0, 0, 1_000, 0).unwrap(), d0);
        assert_eq!(next_decay(d0, 0, 1_000, 500).unwrap(), d0 / 2);
        assert_eq!(next_decay(d0, 0, 1_000, 1_000).unwrap(), 0);
        // clock before the window leaves the bandwidth untouched
        assert_eq!(next_decay(d0, 100, 1_100, 50).unwrap(), d0);
    }
}
