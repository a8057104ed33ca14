use anchor_lang::prelude::*;

/// Proof that `voter` has taken part in `voting`.
///
/// One receipt per (voting, voter) pair; creating a second one fails, which is
/// what limits every voter to a single ballot.
#[account]
#[derive(InitSpace)]
pub struct BallotReceipt {
    /// PDA bump seed
    pub bump: u8,
    pub voting: Pubkey,
    pub voter: Pubkey,
    /// Unix timestamp at which the ballot was submitted
    pub cast_at: i64,
    /// Set once the ballot has been added to the encrypted tally
    pub counted: bool,
}
