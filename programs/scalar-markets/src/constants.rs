use anchor_lang::prelude::*;

#[constant]
pub const PLATFORM_CONFIG_SEED: &[u8] = b"platform-config";

#[constant]
pub const PLATFORM_TREASURY_SEED: &[u8] = b"platform-treasury";

#[constant]
pub const MARKET_CONFIG_SEED: &[u8] = b"market-config";

#[constant]
pub const MARKET_STATE_SEED: &[u8] = b"market-state";

#[constant]
pub const MARKET_VAULT_SEED: &[u8] = b"market-vault";

#[constant]
pub const POSITION_SEED: &[u8] = b"position";

pub const MARKET_QUESTION_MAX_LEN: usize = 256;

pub const MARKET_DESCRIPTION_MAX_LEN: usize = 1024;

/// Fee rates are expressed in basis points out of 10,000.
pub const BASIS_POINT_SCALE: u16 = 10_000;

/// Sub-unit quantities (decay, scores) are stored as integers scaled by 1e9.
pub const FIXED_POINT_SCALE: u64 = 1_000_000_000;

/// Multiplier turning a stored decay value into the Gaussian bandwidth,
/// denominated in the same units as predictions.
pub const DECAY_NORMALIZATION_FACTOR: u64 = 3_600;

/// Seconds of market duration per fixed-point unit of initial decay.
/// A one-hour market starts at decay = FIXED_POINT_SCALE.
pub const DECAY_DURATION_SCALE: u64 = 3_600;
