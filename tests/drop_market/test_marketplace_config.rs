//! Tests for the MarketplaceConfig state

#[cfg(test)]
mod tests {
    use crate::fixtures::fixtures::{setup_marketplace_config, MARKETPLACE_AUTHORITY, TOKEN_MINT};
    use anchor_lang::prelude::Pubkey;
    use drop_market::state::MarketplaceConfig;
    use shared::constants::{MARKETPLACE_CONFIG_SEEDS, MAX_FEE_BASIS_POINTS, TREASURY_SEEDS};
    use shared::errors::ErrorCode;

    #[test]
    fn test_validate_fee_rates() {
        assert!(MarketplaceConfig::validate_fee_rates(0, 0).is_ok());
        assert!(MarketplaceConfig::validate_fee_rates(250, 500).is_ok());
        assert!(
            MarketplaceConfig::validate_fee_rates(MAX_FEE_BASIS_POINTS, MAX_FEE_BASIS_POINTS)
                .is_ok()
        );
    }

    #[test]
    fn test_validate_fee_rates_commit_too_high() {
        let result = MarketplaceConfig::validate_fee_rates(MAX_FEE_BASIS_POINTS + 1, 0);

        assert!(result.is_err());
        assert_eq!(result.unwrap_err(), ErrorCode::InvalidFeeBps.into());
    }

    #[test]
    fn test_validate_fee_rates_withdraw_too_high() {
        let result = MarketplaceConfig::validate_fee_rates(0, MAX_FEE_BASIS_POINTS + 1);

        assert!(result.is_err());
        assert_eq!(result.unwrap_err(), ErrorCode::InvalidFeeBps.into());
    }

    #[test]
    fn test_split_commit_amount_uses_commit_rate() {
        let config = setup_marketplace_config(250, 500);

        let split = config.split_commit_amount(10_000_000).unwrap();

        // 2.5% of 10_000_000
        assert_eq!(split.fee_amount, 250_000);
        assert_eq!(split.net_amount, 9_750_000);
    }

    #[test]
    fn test_split_withdraw_amount_uses_withdraw_rate() {
        let config = setup_marketplace_config(250, 500);

        let split = config.split_withdraw_amount(10_000_000).unwrap();

        // 5% of 10_000_000
        assert_eq!(split.fee_amount, 500_000);
        assert_eq!(split.net_amount, 9_500_000);
    }

    #[test]
    fn test_splits_on_amounts_that_do_not_divide_evenly() {
        let config = setup_marketplace_config(333, 333);

        let split = config.split_commit_amount(1_001).unwrap();

        // 1_001 * 333 / 10_000 = 33.33, floored in the protocol's favor
        assert_eq!(split.fee_amount, 33);
        assert_eq!(split.net_amount, 968);
        assert_eq!(split.fee_amount + split.net_amount, 1_001);
    }

    #[test]
    fn test_config_pda_derivation_is_deterministic() {
        let seeds = [
            MARKETPLACE_CONFIG_SEEDS,
            MARKETPLACE_AUTHORITY.as_ref(),
            TOKEN_MINT.as_ref(),
        ];

        let (config_pda, _) = Pubkey::find_program_address(&seeds, &drop_market::ID);
        let (rederived, _) = Pubkey::find_program_address(&seeds, &drop_market::ID);

        assert_eq!(config_pda, rederived);
    }

    #[test]
    fn test_config_pda_is_per_mint() {
        let other_mint = Pubkey::new_unique();

        let (config_pda, _) = Pubkey::find_program_address(
            &[
                MARKETPLACE_CONFIG_SEEDS,
                MARKETPLACE_AUTHORITY.as_ref(),
                TOKEN_MINT.as_ref(),
            ],
            &drop_market::ID,
        );
        let (other_config_pda, _) = Pubkey::find_program_address(
            &[
                MARKETPLACE_CONFIG_SEEDS,
                MARKETPLACE_AUTHORITY.as_ref(),
                other_mint.as_ref(),
            ],
            &drop_market::ID,
        );

        // The same authority runs one marketplace per fee token
        assert_ne!(config_pda, other_config_pda);
    }

    #[test]
    fn test_treasury_pda_follows_config() {
        let (config_pda, _) = Pubkey::find_program_address(
            &[
                MARKETPLACE_CONFIG_SEEDS,
                MARKETPLACE_AUTHORITY.as_ref(),
                TOKEN_MINT.as_ref(),
            ],
            &drop_market::ID,
        );

        let (treasury_pda, _) =
            Pubkey::find_program_address(&[TREASURY_SEEDS, config_pda.as_ref()], &drop_market::ID);

        assert_ne!(treasury_pda, config_pda);
    }
}
