pub const MARKETPLACE_CONFIG_SEEDS: &[u8] = b"config";
pub const TREASURY_SEEDS: &[u8] = b"treasury";
pub const DROP_CAMPAIGN_SEEDS: &[u8] = b"drop_campaign";
pub const SUPPORTER_SEEDS: &[u8] = b"supporter";
