#[cfg(test)]
mod tests {

    use shared::constants::MAX_FEE_BASIS_POINTS;
    use shared::errors::ErrorCode;
    use shared::utils::{calculate_fee_amount, split_fee, FeeSplit};

    mod fee_amounts {

        use super::*;

        #[test]
        fn test_zero_bps() {
            assert_eq!(calculate_fee_amount(1_000_000, 0).unwrap(), 0);
        }

        #[test]
        fn test_zero_amount() {
            assert_eq!(calculate_fee_amount(0, 500).unwrap(), 0);
        }

        #[test]
        fn test_full_bps() {
            assert_eq!(
                calculate_fee_amount(1_000_000, MAX_FEE_BASIS_POINTS).unwrap(),
                1_000_000
            );
        }

        #[test]
        fn test_rounds_down() {
            // 999 * 250 / 10_000 = 24.975
            assert_eq!(calculate_fee_amount(999, 250).unwrap(), 24);

            // Amounts below the bps granularity produce no fee at all
            assert_eq!(calculate_fee_amount(39, 250).unwrap(), 0);
        }

        #[test]
        fn test_bps_above_max() {
            let result = calculate_fee_amount(1_000_000, MAX_FEE_BASIS_POINTS + 1);

            assert!(result.is_err());
            assert_eq!(result.unwrap_err(), ErrorCode::InvalidFeeBps.into());
        }

        #[test]
        fn test_max_amount_does_not_overflow() {
            // The intermediate product is u128, so u64::MAX times any bps fits
            assert_eq!(
                calculate_fee_amount(u64::MAX, MAX_FEE_BASIS_POINTS).unwrap(),
                u64::MAX
            );
            assert_eq!(calculate_fee_amount(u64::MAX, 1).unwrap(), u64::MAX / 10_000);
        }
    }

    mod fee_splits {

        use super::*;

        #[test]
        fn test_split_preserves_gross() {
            let split = split_fee(999, 250).unwrap();

            assert_eq!(
                split,
                FeeSplit {
                    fee_amount: 24,
                    net_amount: 975,
                }
            );
        }

        #[test]
        fn test_split_zero_bps_is_all_net() {
            let split = split_fee(1_000_000, 0).unwrap();

            assert_eq!(split.fee_amount, 0);
            assert_eq!(split.net_amount, 1_000_000);
        }

        #[test]
        fn test_split_full_bps_is_all_fee() {
            let split = split_fee(1_000_000, MAX_FEE_BASIS_POINTS).unwrap();

            assert_eq!(split.fee_amount, 1_000_000);
            assert_eq!(split.net_amount, 0);
        }

        #[test]
        fn test_split_bps_above_max() {
            let result = split_fee(1_000_000, 10_001);

            assert!(result.is_err());
            assert_eq!(result.unwrap_err(), ErrorCode::InvalidFeeBps.into());
        }

        #[test]
        fn test_split_parts_always_sum_to_gross() {
            for gross in [1u64, 7, 99, 10_000_001, u64::MAX] {
                for bps in [1u16, 3, 250, 999, 9_999] {
                    let split = split_fee(gross, bps).unwrap();

                    assert_eq!(split.fee_amount + split.net_amount, gross);
                }
            }
        }
    }
}
