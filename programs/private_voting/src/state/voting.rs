use anchor_lang::prelude::*;

use crate::{
    constants::{CIPHERTEXT_LEN, MAX_DESCRIPTION_LEN, PENDING_TIMEOUT_SECS, TALLY_COUNTERS},
    error::ErrorCode,
    schedule,
};

/// Encrypted computation currently queued against a voting's tally.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq, InitSpace)]
pub enum PendingComputation {
    InitTally,
    CastBallot,
    Share,
    Reveal,
}

/// A yes/no voting with encrypted tallies.
#[account]
#[derive(InitSpace)]
pub struct Voting {
    /// PDA bump seed
    pub bump: u8,
    /// Encrypted counters `[no, yes]` as 32-byte ciphertexts.
    /// Must stay right after `bump`: MPC computations read it by byte offset.
    pub encrypted_tally: [[u8; 32]; 2],
    /// Nonce of the current tally ciphertexts
    pub nonce: u128,
    /// Position of this voting in the factory
    pub index: u64,
    pub creator: Pubkey,
    #[max_len(MAX_DESCRIPTION_LEN)]
    pub description: String,
    pub created_at: i64,
    /// Unix timestamp after which ballots are refused
    pub deadline: i64,
    /// Ballots successfully added to the tally
    pub ballots_cast: u64,
    /// False until an `init_tally` computation has completed
    pub tally_ready: bool,
    pub pending: Option<PendingComputation>,
    /// Computation account of the pending computation
    pub pending_computation: Pubkey,
    /// When `pending` was set
    pub pending_since: i64,
    pub results_revealed: bool,
    /// Plaintext results, zero until revealed
    pub yes: u64,
    pub no: u64,
}

impl Voting {
    /// Byte offset of `encrypted_tally` inside the account data.
    pub fn tally_offset() -> u32 {
        (Self::DISCRIMINATOR.len() + 1) as u32
    }

    /// Byte length of `encrypted_tally`.
    pub const fn tally_len() -> u32 {
        (CIPHERTEXT_LEN * TALLY_COUNTERS) as u32
    }

    pub fn validate_description(description: &str) -> Result<()> {
        require!(!description.trim().is_empty(), ErrorCode::EmptyDescription);
        require!(
            description.len() <= MAX_DESCRIPTION_LEN,
            ErrorCode::DescriptionTooLong
        );
        Ok(())
    }

    pub fn is_finished(&self, now: i64) -> bool {
        schedule::is_finished(now, self.deadline)
    }

    /// Plaintext `(yes, no)` once the results have been revealed.
    pub fn public_results(&self) -> Option<(u64, u64)> {
        self.results_revealed.then_some((self.yes, self.no))
    }

    /// A pending computation older than `PENDING_TIMEOUT_SECS` no longer
    /// blocks new work. If its callback still arrives it no longer owns the
    /// lock and its output is dropped by `settle`.
    pub fn is_busy(&self, now: i64) -> bool {
        self.pending.is_some() && now.saturating_sub(self.pending_since) < PENDING_TIMEOUT_SECS
    }

    fn require_idle(&self, now: i64) -> Result<()> {
        require!(self.tally_ready, ErrorCode::TallyNotReady);
        require!(!self.is_busy(now), ErrorCode::ComputationPending);
        Ok(())
    }

    /// Takes the lock for `kind`, run by the computation at `computation`.
    pub fn begin(&mut self, kind: PendingComputation, computation: Pubkey, now: i64) {
        self.pending = Some(kind);
        self.pending_computation = computation;
        self.pending_since = now;
    }

    /// Releases the lock if it is held by `kind` at `computation`.
    ///
    /// Returns false for a callback that no longer owns the lock; its output
    /// must not touch the voting.
    pub fn settle(&mut self, kind: PendingComputation, computation: &Pubkey) -> bool {
        if self.pending != Some(kind) || self.pending_computation != *computation {
            return false;
        }
        self.pending = None;
        true
    }

    /// Checks `caller` may (re)queue the zero tally at `now`.
    pub fn check_can_init(&self, caller: &Pubkey, now: i64) -> Result<()> {
        require_keys_eq!(*caller, self.creator, ErrorCode::InvalidAuthority);
        require!(!self.tally_ready, ErrorCode::TallyAlreadyReady);
        require!(!self.is_busy(now), ErrorCode::ComputationPending);
        Ok(())
    }

    /// Checks a ballot may be queued at `now`.
    pub fn check_accepts_ballot(&self, now: i64) -> Result<()> {
        require!(
            schedule::accepts_ballots(now, self.deadline),
            ErrorCode::VotingClosed
        );
        self.require_idle(now)
    }

    /// Checks `caller` may reveal the results at `now`.
    pub fn check_can_reveal(&self, caller: &Pubkey, now: i64) -> Result<()> {
        require_keys_eq!(*caller, self.creator, ErrorCode::InvalidAuthority);
        require!(!self.results_revealed, ErrorCode::ResultsAlreadyRevealed);
        require!(
            schedule::can_reveal(now, self.deadline),
            ErrorCode::VotingStillOpen
        );
        self.require_idle(now)
    }

    /// Checks `caller` may receive a private copy of the tallies at `now`.
    pub fn check_can_share(&self, caller: &Pubkey, now: i64) -> Result<()> {
        require_keys_eq!(*caller, self.creator, ErrorCode::InvalidAuthority);
        self.require_idle(now)
    }

    pub fn store_tally(&mut self, ciphertexts: [[u8; 32]; 2], nonce: u128) {
        self.encrypted_tally = ciphertexts;
        self.nonce = nonce;
    }

    pub fn record_ballot(&mut self) -> Result<()> {
        self.ballots_cast = self
            .ballots_cast
            .checked_add(1)
            .ok_or(ErrorCode::Overflow)?;
        Ok(())
    }

    pub fn publish_results(&mut self, yes: u64, no: u64) {
        self.yes = yes;
        self.no = no;
        self.results_revealed = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn voting(deadline: i64) -> Voting {
        Voting {
            bump: 254,
            encrypted_tally: [[0; 32]; 2],
            nonce: 0,
            index: 0,
            creator: Pubkey::new_unique(),
            description: "Do you agree?".to_string(),
            created_at: deadline - 3,
            deadline,
            ballots_cast: 0,
            tally_ready: true,
            pending: None,
            pending_computation: Pubkey::default(),
            pending_since: 0,
            results_revealed: false,
            yes: 0,
            no: 0,
        }
    }

    fn code(err: anchor_lang::error::Error) -> u32 {
        match err {
            anchor_lang::error::Error::AnchorError(e) => e.error_code_number,
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn tally_sits_right_after_bump() {
        assert_eq!(Voting::tally_offset(), 9);
        assert_eq!(Voting::tally_len(), 64);
    }

    #[test]
    fn description_limits() {
        assert!(Voting::validate_description("Vote YES or NO").is_ok());
        assert!(Voting::validate_description("   ").is_err());
        assert!(Voting::validate_description(&"x".repeat(MAX_DESCRIPTION_LEN)).is_ok());
        assert!(Voting::validate_description(&"x".repeat(MAX_DESCRIPTION_LEN + 1)).is_err());
    }

    #[test]
    fn ballots_only_before_deadline() {
        let v = voting(1_000);
        assert!(v.check_accepts_ballot(999).is_ok());
        let err = v.check_accepts_ballot(1_000).unwrap_err();
        assert_eq!(code(err), u32::from(ErrorCode::VotingClosed));
    }

    #[test]
    fn ballots_wait_for_tally_and_pending_work() {
        let mut v = voting(1_000);
        v.tally_ready = false;
        assert_eq!(
            code(v.check_accepts_ballot(0).unwrap_err()),
            u32::from(ErrorCode::TallyNotReady)
        );
        v.tally_ready = true;
        let computation = Pubkey::new_unique();
        v.begin(PendingComputation::CastBallot, computation, 100);
        assert_eq!(
            code(v.check_accepts_ballot(101).unwrap_err()),
            u32::from(ErrorCode::ComputationPending)
        );
        assert!(v.settle(PendingComputation::CastBallot, &computation));
        assert!(v.check_accepts_ballot(101).is_ok());
    }

    #[test]
    fn ballot_callback_updates_tally_and_releases_lock() {
        let mut v = voting(1_000);
        let computation = Pubkey::new_unique();
        v.begin(PendingComputation::CastBallot, computation, 10);

        assert!(v.settle(PendingComputation::CastBallot, &computation));
        v.store_tally([[1; 32], [2; 32]], 42);
        v.record_ballot().unwrap();

        assert_eq!(v.encrypted_tally, [[1; 32], [2; 32]]);
        assert_eq!(v.nonce, 42);
        assert_eq!(v.ballots_cast, 1);
        assert_eq!(v.pending, None);
        assert!(!v.is_busy(11));
    }

    #[test]
    fn record_ballot_refuses_to_wrap() {
        let mut v = voting(1_000);
        v.ballots_cast = u64::MAX;
        assert_eq!(
            code(v.record_ballot().unwrap_err()),
            u32::from(ErrorCode::Overflow)
        );
        assert_eq!(v.ballots_cast, u64::MAX);
    }

    #[test]
    fn failed_init_can_be_queued_again() {
        let mut v = voting(1_000_000);
        let creator = v.creator;
        v.tally_ready = false;
        let first = Pubkey::new_unique();
        v.begin(PendingComputation::InitTally, first, 0);
        assert_eq!(
            code(v.check_can_init(&creator, 1).unwrap_err()),
            u32::from(ErrorCode::ComputationPending)
        );

        // The aborted callback still owns the lock and releases it
        assert!(v.settle(PendingComputation::InitTally, &first));
        assert!(!v.tally_ready);
        assert!(v.check_can_init(&creator, 2).is_ok());
        assert!(v.check_can_init(&Pubkey::new_unique(), 2).is_err());

        let second = Pubkey::new_unique();
        v.begin(PendingComputation::InitTally, second, 2);
        assert!(v.settle(PendingComputation::InitTally, &second));
        v.store_tally([[3; 32]; 2], 7);
        v.tally_ready = true;

        assert!(v.check_accepts_ballot(500_000).is_ok());
        assert_eq!(
            code(v.check_can_init(&creator, 3).unwrap_err()),
            u32::from(ErrorCode::TallyAlreadyReady)
        );
    }

    #[test]
    fn failed_reveal_can_be_retried() {
        let mut v = voting(1_000);
        let creator = v.creator;
        let computation = Pubkey::new_unique();
        v.begin(PendingComputation::Reveal, computation, 1_500);
        assert!(v.check_can_reveal(&creator, 1_501).is_err());

        assert!(v.settle(PendingComputation::Reveal, &computation));
        assert!(v.public_results().is_none());
        assert!(v.check_can_reveal(&creator, 1_502).is_ok());
    }

    #[test]
    fn stale_pending_computation_stops_blocking() {
        let mut v = voting(10_000);
        v.begin(PendingComputation::CastBallot, Pubkey::new_unique(), 100);
        assert!(v.is_busy(100 + PENDING_TIMEOUT_SECS - 1));
        assert!(!v.is_busy(100 + PENDING_TIMEOUT_SECS));
        assert!(v.check_accepts_ballot(100 + PENDING_TIMEOUT_SECS).is_ok());
    }

    #[test]
    fn late_callback_cannot_clear_newer_lock() {
        let mut v = voting(10_000);
        let slow = Pubkey::new_unique();
        v.begin(PendingComputation::CastBallot, slow, 100);

        // Second ballot admitted once the first one is considered lost
        let now = 100 + PENDING_TIMEOUT_SECS;
        assert!(v.check_accepts_ballot(now).is_ok());
        let fresh = Pubkey::new_unique();
        v.begin(PendingComputation::CastBallot, fresh, now);

        assert!(!v.settle(PendingComputation::CastBallot, &slow));
        assert_eq!(v.pending, Some(PendingComputation::CastBallot));
        assert_eq!(v.pending_computation, fresh);
        assert!(v.is_busy(now + 1));

        assert!(v.settle(PendingComputation::CastBallot, &fresh));
        assert_eq!(v.pending, None);
    }

    #[test]
    fn callback_of_other_kind_is_ignored() {
        let mut v = voting(1_000);
        let computation = Pubkey::new_unique();
        v.begin(PendingComputation::Share, computation, 5);
        assert!(!v.settle(PendingComputation::Reveal, &computation));
        assert_eq!(v.pending, Some(PendingComputation::Share));
    }

    #[test]
    fn reveal_rules() {
        let mut v = voting(1_000);
        let creator = v.creator;
        let stranger = Pubkey::new_unique();

        assert_eq!(
            code(v.check_can_reveal(&stranger, 2_000).unwrap_err()),
            u32::from(ErrorCode::InvalidAuthority)
        );
        assert_eq!(
            code(v.check_can_reveal(&creator, 999).unwrap_err()),
            u32::from(ErrorCode::VotingStillOpen)
        );
        assert!(v.check_can_reveal(&creator, 1_000).is_ok());

        v.publish_results(1, 0);
        assert_eq!(
            code(v.check_can_reveal(&creator, 2_000).unwrap_err()),
            u32::from(ErrorCode::ResultsAlreadyRevealed)
        );
    }

    #[test]
    fn public_results_hidden_until_revealed() {
        let mut v = voting(1_000);
        assert_eq!(v.public_results(), None);
        v.publish_results(1, 0);
        assert_eq!(v.public_results(), Some((1, 0)));
    }

    #[test]
    fn only_creator_gets_private_results() {
        let v = voting(1_000);
        assert!(v.check_can_share(&v.creator, 10).is_ok());
        assert_eq!(
            code(v.check_can_share(&Pubkey::new_unique(), 10).unwrap_err()),
            u32::from(ErrorCode::InvalidAuthority)
        );
    }

    #[test]
    fn sharing_waits_for_tally_and_pending_work() {
        let mut v = voting(1_000);
        let creator = v.creator;
        v.tally_ready = false;
        assert_eq!(
            code(v.check_can_share(&creator, 10).unwrap_err()),
            u32::from(ErrorCode::TallyNotReady)
        );

        v.tally_ready = true;
        let ballot = Pubkey::new_unique();
        v.begin(PendingComputation::CastBallot, ballot, 10);
        assert_eq!(
            code(v.check_can_share(&creator, 11).unwrap_err()),
            u32::from(ErrorCode::ComputationPending)
        );
        assert!(v.settle(PendingComputation::CastBallot, &ballot));

        let share = Pubkey::new_unique();
        v.begin(PendingComputation::Share, share, 12);
        assert_eq!(
            code(v.check_accepts_ballot(13).unwrap_err()),
            u32::from(ErrorCode::ComputationPending)
        );
    }
}
