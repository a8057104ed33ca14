use anchor_lang::prelude::*;

use super::PendingComputation;

#[event]
pub struct FactoryInitializedEvent {
    pub factory: Pubkey,
    pub admin: Pubkey,
}

#[event]
pub struct VotingCreatedEvent {
    pub voting: Pubkey,
    pub index: u64,
    pub creator: Pubkey,
    pub deadline: i64,
}

#[event]
pub struct TallyReadyEvent {
    pub voting: Pubkey,
}

#[event]
pub struct BallotCastEvent {
    pub voting: Pubkey,
    pub voter: Pubkey,
    pub timestamp: i64,
}

/// Tallies re-encrypted for the creator's x25519 key.
#[event]
pub struct ResultsSharedEvent {
    pub voting: Pubkey,
    /// `[no, yes]`
    pub ciphertexts: [[u8; 32]; 2],
    pub nonce: u128,
}

#[event]
pub struct ResultsRevealedEvent {
    pub voting: Pubkey,
    pub yes: u64,
    pub no: u64,
}

/// The ballot was not counted; its receipt is closed so the voter may retry.
#[event]
pub struct BallotRejectedEvent {
    pub voting: Pubkey,
    pub voter: Pubkey,
}

/// A computation failed verification or no longer owned the voting's lock.
/// Its output was dropped.
#[event]
pub struct ComputationFailedEvent {
    pub voting: Pubkey,
    pub kind: PendingComputation,
    /// Computation account of the failed computation
    pub computation: Pubkey,
}
