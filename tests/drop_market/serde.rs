#[cfg(test)]
mod tests {
    use crate::fixtures::fixtures::{
        setup_drop_campaign, setup_marketplace_config, setup_supporter_account,
    };
    use crate::shared::logger::init_logger;

    use anchor_lang::prelude::*;
    use anchor_lang::AccountSerialize;
    use drop_market::state::*;
    use log::info;

    fn serialize_account<T: AccountSerialize>(account: &T) -> Vec<u8> {
        let mut account_data = vec![];
        account
            .try_serialize(&mut account_data)
            .expect("Failed to serialize account");
        account_data
    }

    fn deserialize_account<T: AccountDeserialize>(data: &mut &[u8]) -> T {
        T::try_deserialize(data).expect("Failed to deserialize account")
    }

    #[test]
    fn marketplace_config() {
        init_logger();
        let config = setup_marketplace_config(250, 500);
        let data = serialize_account(&config);
        info!("MarketplaceConfig serialized into {} bytes", data.len());

        let rehydrated: MarketplaceConfig = deserialize_account(&mut &data[..]);

        assert_eq!(rehydrated.authority, config.authority);
        assert_eq!(rehydrated.token_mint, config.token_mint);
        assert_eq!(rehydrated.commit_fees_bps, 250);
        assert_eq!(rehydrated.withdraw_fees_bps, 500);
    }

    #[test]
    fn drop_campaign() {
        init_logger();
        let mut campaign = setup_drop_campaign(15, 5, 10_000_000);
        campaign.pledged_orders = 10;
        campaign.supporter_count = 2;
        let data = serialize_account(&campaign);
        info!("DropCampaign serialized into {} bytes", data.len());

        let rehydrated: DropCampaign = deserialize_account(&mut &data[..]);

        assert_eq!(rehydrated.name, campaign.name);
        assert_eq!(rehydrated.uri, campaign.uri);
        assert_eq!(rehydrated.goal_orders, 15);
        assert_eq!(rehydrated.pledged_orders, 10);
        assert_eq!(rehydrated.supporter_count, 2);
        assert_eq!(rehydrated.end_timestamp, campaign.end_timestamp);
        assert!(!rehydrated.is_finalized);
    }

    #[test]
    fn supporter_account() {
        init_logger();
        let drop_campaign = Pubkey::new_unique();
        let mut supporter_account = setup_supporter_account(&drop_campaign);
        supporter_account.units_ordered = 5;
        supporter_account.amount_committed = 48_750_000;
        let data = serialize_account(&supporter_account);
        info!("SupporterAccount serialized into {} bytes", data.len());

        let rehydrated: SupporterAccount = deserialize_account(&mut &data[..]);

        assert_eq!(rehydrated.authority, supporter_account.authority);
        assert_eq!(rehydrated.drop_campaign, drop_campaign);
        assert_eq!(rehydrated.units_ordered, 5);
        assert_eq!(rehydrated.amount_committed, 48_750_000);
        assert!(!rehydrated.refunded);
    }

    #[test]
    fn account_sizes_cover_serialized_lengths() {
        init_logger();

        // SIZE holds the discriminator plus INIT_SPACE, which reserves the
        // max_len for both strings, so the serialized form never exceeds it
        let mut campaign = setup_drop_campaign(15, 5, 10_000_000);
        campaign.name = "a".repeat(32);
        campaign.uri = "b".repeat(200);

        assert!(serialize_account(&campaign).len() <= DropCampaign::SIZE);
        assert!(
            serialize_account(&setup_marketplace_config(0, 0)).len() <= MarketplaceConfig::SIZE
        );
        assert!(
            serialize_account(&setup_supporter_account(&Pubkey::new_unique())).len()
                <= SupporterAccount::SIZE
        );
    }
}
