use anchor_lang::prelude::*;

#[error_code]
pub enum ErrorCode {
    #[msg("The computation was aborted")]
    AbortedComputation,
    #[msg("Cluster not set")]
    ClusterNotSet,
    #[msg("Only the voting creator may do this")]
    InvalidAuthority,
    #[msg("Description must not be empty")]
    EmptyDescription,
    #[msg("Description is too long")]
    DescriptionTooLong,
    #[msg("Duration must be a positive number of seconds")]
    InvalidDuration,
    #[msg("Arithmetic overflow")]
    Overflow,
    #[msg("Voting deadline has passed")]
    VotingClosed,
    #[msg("Voting is still open")]
    VotingStillOpen,
    #[msg("Encrypted tally has not been initialized yet")]
    TallyNotReady,
    #[msg("Another computation on this tally is still in flight")]
    ComputationPending,
    #[msg("Encrypted tally is already initialized")]
    TallyAlreadyReady,
    #[msg("Results were already revealed")]
    ResultsAlreadyRevealed,
}
