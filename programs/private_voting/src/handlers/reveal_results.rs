use anchor_lang::prelude::*;
use arcium_anchor::prelude::*;
use arcium_client::idl::arcium::types::CallbackAccount;

use crate::{
    state::{PendingComputation, ResultsRevealedEvent, Voting},
    RevealResults, RevealResultsCallback, RevealResultsCompDef, RevealResultsOutput,
    RevealResultsOutputStruct0,
};

use super::computation_failed;

/// One-off job to create computation definition for `reveal_results` in encrypted-ixs/src/lib.rs.
pub fn init_reveal_results_comp_def(ctx: Context<RevealResultsCompDef>) -> Result<()> {
    init_comp_def(ctx.accounts, None, None)?;
    Ok(())
}

/// Makes the results of a finished voting public.
///
/// Only the creator can call this, only from the deadline on, and only once.
/// The plaintext tallies are written back to the voting in the callback; if the
/// computation fails the lock is released and the creator can try again.
///
/// # Arguments
/// * `index` - The voting to reveal
pub fn reveal_results(ctx: Context<RevealResults>, computation_offset: u64, index: u64) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    ctx.accounts
        .voting_account
        .check_can_reveal(&ctx.accounts.payer.key(), now)?;

    msg!("Revealing results of voting #{}", index);

    let computation_args = ArgBuilder::new()
        .plaintext_u128(ctx.accounts.voting_account.nonce)
        .account(
            ctx.accounts.voting_account.key(),
            Voting::tally_offset(),
            Voting::tally_len(),
        )
        .build();

    let computation = ctx.accounts.computation_account.key();
    ctx.accounts
        .voting_account
        .begin(PendingComputation::Reveal, computation, now);
    ctx.accounts.sign_pda_account.bump = ctx.bumps.sign_pda_account;

    queue_computation(
        ctx.accounts,
        computation_offset,
        computation_args,
        None,
        vec![RevealResultsCallback::callback_ix(
            computation_offset,
            &ctx.accounts.mxe_account,
            &[CallbackAccount {
                pubkey: ctx.accounts.voting_account.key(),
                is_writable: true,
            }],
        )?],
        1,
        0,
    )?;
    Ok(())
}

pub fn reveal_results_callback(
    ctx: Context<RevealResultsCallback>,
    output: SignedComputationOutputs<RevealResultsOutput>,
) -> Result<()> {
    let computation = ctx.accounts.computation_account.key();
    let verified =
        output.verify_output(&ctx.accounts.cluster_account, &ctx.accounts.computation_account);

    let voting = &mut ctx.accounts.voting_account;
    let owns_lock = voting.settle(PendingComputation::Reveal, &computation);

    match verified {
        Ok(RevealResultsOutput {
            field_0: RevealResultsOutputStruct0 {
                field_0: yes,
                field_1: no,
            },
        }) if owns_lock => {
            voting.publish_results(yes, no);

            msg!("Voting #{} ended with {} yes / {} no", voting.index, yes, no);

            emit!(ResultsRevealedEvent {
                voting: voting.key(),
                yes,
                no,
            });
        }
        _ => computation_failed(voting.key(), PendingComputation::Reveal, computation),
    }

    Ok(())
}
