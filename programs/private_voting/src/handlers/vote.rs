use anchor_lang::prelude::*;
use arcium_anchor::prelude::*;
use arcium_client::idl::arcium::types::CallbackAccount;

use crate::{
    state::{BallotCastEvent, BallotRejectedEvent, PendingComputation, Voting},
    CastBallotCallback, CastBallotCompDef, CastBallotOutput, Vote,
};

use super::computation_failed;

/// One-off job to create computation definition for `cast_ballot` in encrypted-ixs/src/lib.rs.
pub fn init_cast_ballot_comp_def(ctx: Context<CastBallotCompDef>) -> Result<()> {
    init_comp_def(ctx.accounts, None, None)?;
    Ok(())
}

/// Submits an encrypted ballot to a voting.
///
/// The ballot (1 = yes, 0 = no) is encrypted client-side against the MXE key
/// and only ever added to the tallies inside the MPC computation. A ballot
/// receipt is created for the voter, so a second ballot from the same account
/// fails. If the ballot is not counted, the callback closes the receipt again.
///
/// # Arguments
/// * `index` - The voting index (used for account derivation via Anchor's #[instruction] attribute)
/// * `ballot` - Encrypted ballot ciphertext
/// * `voter_encryption_pubkey` - Voter's x25519 public key used to encrypt the ballot
/// * `ballot_nonce` - Cryptographic nonce for the ballot encryption
#[allow(unused_variables)]
pub fn vote(
    ctx: Context<Vote>,
    computation_offset: u64,
    index: u64,
    ballot: [u8; 32],
    voter_encryption_pubkey: [u8; 32],
    ballot_nonce: u128,
) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    ctx.accounts.voting_account.check_accepts_ballot(now)?;

    let receipt = &mut ctx.accounts.ballot_receipt;
    receipt.bump = ctx.bumps.ballot_receipt;
    receipt.voting = ctx.accounts.voting_account.key();
    receipt.voter = ctx.accounts.payer.key();
    receipt.cast_at = now;
    receipt.counted = false;

    let computation_args = ArgBuilder::new()
        .x25519_pubkey(voter_encryption_pubkey)
        .plaintext_u128(ballot_nonce)
        .encrypted_u32(ballot)
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
        .begin(PendingComputation::CastBallot, computation, now);
    ctx.accounts.sign_pda_account.bump = ctx.bumps.sign_pda_account;

    queue_computation(
        ctx.accounts,
        computation_offset,
        computation_args,
        None,
        vec![CastBallotCallback::callback_ix(
            computation_offset,
            &ctx.accounts.mxe_account,
            &[
                CallbackAccount {
                    pubkey: ctx.accounts.voting_account.key(),
                    is_writable: true,
                },
                CallbackAccount {
                    pubkey: ctx.accounts.ballot_receipt.key(),
                    is_writable: true,
                },
                CallbackAccount {
                    pubkey: ctx.accounts.payer.key(),
                    is_writable: true,
                },
            ],
        )?],
        1,
        0,
    )?;
    Ok(())
}

pub fn cast_ballot_callback(
    ctx: Context<CastBallotCallback>,
    output: SignedComputationOutputs<CastBallotOutput>,
) -> Result<()> {
    let computation = ctx.accounts.computation_account.key();
    let verified =
        output.verify_output(&ctx.accounts.cluster_account, &ctx.accounts.computation_account);

    let voting = &mut ctx.accounts.voting_account;
    let owns_lock = voting.settle(PendingComputation::CastBallot, &computation);
    let voting_key = voting.key();
    let voter = ctx.accounts.ballot_receipt.voter;

    match verified {
        Ok(CastBallotOutput { field_0: tally }) if owns_lock => {
            voting.store_tally(tally.ciphertexts, tally.nonce);
            voting.record_ballot()?;
            ctx.accounts.ballot_receipt.counted = true;

            emit!(BallotCastEvent {
                voting: voting_key,
                voter,
                timestamp: Clock::get()?.unix_timestamp,
            });
        }
        _ => {
            computation_failed(voting_key, PendingComputation::CastBallot, computation);
            ctx.accounts
                .ballot_receipt
                .close(ctx.accounts.voter.to_account_info())?;

            emit!(BallotRejectedEvent {
                voting: voting_key,
                voter,
            });
        }
    }

    Ok(())
}
