use anchor_lang::prelude::*;
use arcium_anchor::prelude::*;
use arcium_client::idl::arcium::types::CallbackAccount;

use crate::{
    state::{PendingComputation, ResultsSharedEvent, Voting},
    ShareResults, ShareResultsCallback, ShareResultsCompDef, ShareResultsOutput,
};

use super::computation_failed;

/// One-off job to create computation definition for `share_results` in encrypted-ixs/src/lib.rs.
pub fn init_share_results_comp_def(ctx: Context<ShareResultsCompDef>) -> Result<()> {
    init_comp_def(ctx.accounts, None, None)?;
    Ok(())
}

/// Re-encrypts the current tallies for the creator.
///
/// Works at any time, also while the voting is open. Holds the voting's lock
/// until the callback so no ballot changes the tally in between. The result is
/// emitted as `ResultsSharedEvent` and can only be decrypted with the
/// creator's x25519 key.
pub fn share_results(
    ctx: Context<ShareResults>,
    computation_offset: u64,
    index: u64,
    receiver_pubkey: [u8; 32],
    receiver_nonce: u128,
) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    ctx.accounts
        .voting_account
        .check_can_share(&ctx.accounts.payer.key(), now)?;

    msg!("Sharing encrypted results of voting #{}", index);

    let computation_args = ArgBuilder::new()
        .x25519_pubkey(receiver_pubkey)
        .plaintext_u128(receiver_nonce)
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
        .begin(PendingComputation::Share, computation, now);
    ctx.accounts.sign_pda_account.bump = ctx.bumps.sign_pda_account;

    queue_computation(
        ctx.accounts,
        computation_offset,
        computation_args,
        None,
        vec![ShareResultsCallback::callback_ix(
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

pub fn share_results_callback(
    ctx: Context<ShareResultsCallback>,
    output: SignedComputationOutputs<ShareResultsOutput>,
) -> Result<()> {
    let computation = ctx.accounts.computation_account.key();
    let verified =
        output.verify_output(&ctx.accounts.cluster_account, &ctx.accounts.computation_account);

    let voting = &mut ctx.accounts.voting_account;
    let owns_lock = voting.settle(PendingComputation::Share, &computation);

    match verified {
        Ok(ShareResultsOutput { field_0: shared }) if owns_lock => {
            emit!(ResultsSharedEvent {
                voting: voting.key(),
                ciphertexts: shared.ciphertexts,
                nonce: shared.nonce,
            });
        }
        _ => computation_failed(voting.key(), PendingComputation::Share, computation),
    }

    Ok(())
}
