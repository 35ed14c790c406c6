use anchor_lang::prelude::*;

/// Status a campaign resolves to at a point in time. Never stored, the
/// stored truth is the `(is_finalized, is_successful)` pair on the campaign.
#[derive(AnchorSerialize, AnchorDeserialize, Default, Clone, Copy, PartialEq, Eq, Debug)]
pub enum CampaignStatus {
    #[default]
    /// The window is open and the goal has not been reached
    Open,
    /// The goal was reached, or the stored outcome is successful
    Successful,
    /// The window elapsed short of the goal, or the stored outcome is failed
    Failed,
}
