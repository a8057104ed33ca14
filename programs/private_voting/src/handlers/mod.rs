pub mod initialize_factory;
pub use initialize_factory::*;

pub mod create_voting;
pub use create_voting::*;

pub mod vote;
pub use vote::*;

pub mod share_results;
pub use share_results::*;

pub mod reveal_results;
pub use reveal_results::*;

use anchor_lang::prelude::*;

use crate::state::{ComputationFailedEvent, PendingComputation};

/// Logs and emits a computation whose output was dropped.
pub(crate) fn computation_failed(voting: Pubkey, kind: PendingComputation, computation: Pubkey) {
    msg!("Dropping {:?} output from computation {}", kind, computation);
    emit!(ComputationFailedEvent {
        voting,
        kind,
        computation,
    });
}
