use arcium_anchor::prelude::*;

// Computation definition offsets for each encrypted instruction
pub const COMP_DEF_OFFSET_INIT_TALLY: u32 = comp_def_offset("init_tally");
pub const COMP_DEF_OFFSET_CAST_BALLOT: u32 = comp_def_offset("cast_ballot");
pub const COMP_DEF_OFFSET_SHARE_RESULTS: u32 = comp_def_offset("share_results");
pub const COMP_DEF_OFFSET_REVEAL_RESULTS: u32 = comp_def_offset("reveal_results");

pub const FACTORY_SEED: &[u8] = b"factory";
pub const VOTING_SEED: &[u8] = b"voting";
pub const BALLOT_SEED: &[u8] = b"ballot";

/// Longest accepted voting description, in bytes.
pub const MAX_DESCRIPTION_LEN: usize = 200;

/// Number of encrypted counters kept per voting (no, yes).
pub const TALLY_COUNTERS: usize = 2;

/// Size of one encrypted counter.
pub const CIPHERTEXT_LEN: usize = 32;

/// Seconds after which an unanswered computation no longer locks a voting.
pub const PENDING_TIMEOUT_SECS: i64 = 600;
