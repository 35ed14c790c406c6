/// Fee rates are expressed in basis points, 10_000 bps = 100%.
pub const MAX_FEE_BASIS_POINTS: u16 = 10_000;

pub const SECONDS_PER_DAY: i64 = 86_400;

/// Longest campaign name accepted, campaign names discriminate PDAs.
pub const MAX_NAME_LENGTH: usize = 32;

/// Longest off-chain metadata uri stored on a campaign.
pub const MAX_URI_LENGTH: usize = 200;
