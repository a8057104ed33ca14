use anchor_lang::prelude::*;
use arcium_anchor::prelude::*;
use arcium_client::idl::arcium::types::CallbackAccount;

use crate::{
    error::ErrorCode,
    schedule,
    state::{PendingComputation, TallyReadyEvent, Voting, VotingCreatedEvent},
    CreateVoting, InitTallyCallback, InitTallyCompDef, InitTallyOutput, RetryInitTally,
};

use super::computation_failed;

/// One-off job to create computation definition for `init_tally` in encrypted-ixs/src/lib.rs.
pub fn init_tally_comp_def(ctx: Context<InitTallyCompDef>) -> Result<()> {
    init_comp_def(ctx.accounts, None, None)?;
    Ok(())
}

/// Creates a new voting registered in the factory.
///
/// The voting is usable once the MPC cluster has produced its zeroed encrypted
/// tallies, which happens in `init_tally_callback`.
///
/// # Arguments
/// * `description` - The question voters answer with yes or no
/// * `duration_seconds` - How long the voting accepts ballots, starting now
/// * `nonce` - Cryptographic nonce for initializing the encrypted tallies
pub fn create_voting(
    ctx: Context<CreateVoting>,
    computation_offset: u64,
    description: String,
    duration_seconds: u64,
    nonce: u128,
) -> Result<()> {
    Voting::validate_description(&description)?;

    let now = Clock::get()?.unix_timestamp;
    let deadline =
        schedule::deadline_after(now, duration_seconds).ok_or(ErrorCode::InvalidDuration)?;
    let index = ctx
        .accounts
        .factory
        .next_index()
        .ok_or(ErrorCode::Overflow)?;

    msg!("Creating voting #{} ending at {}", index, deadline);

    let voting = &mut ctx.accounts.voting_account;
    voting.bump = ctx.bumps.voting_account;
    voting.encrypted_tally = [[0; 32]; 2];
    voting.nonce = nonce;
    voting.index = index;
    voting.creator = ctx.accounts.payer.key();
    voting.description = description;
    voting.created_at = now;
    voting.deadline = deadline;
    voting.ballots_cast = 0;
    voting.tally_ready = false;
    voting.results_revealed = false;
    voting.yes = 0;
    voting.no = 0;
    voting.begin(
        PendingComputation::InitTally,
        ctx.accounts.computation_account.key(),
        now,
    );

    emit!(VotingCreatedEvent {
        voting: voting.key(),
        index,
        creator: voting.creator,
        deadline,
    });

    let computation_args = ArgBuilder::new().plaintext_u128(nonce).build();

    ctx.accounts.sign_pda_account.bump = ctx.bumps.sign_pda_account;

    queue_computation(
        ctx.accounts,
        computation_offset,
        computation_args,
        None,
        vec![InitTallyCallback::callback_ix(
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

/// Queues the zero tally again after an earlier `init_tally` failed.
///
/// Only the creator can do this, and only while the tally is not ready and no
/// other computation holds the voting.
///
/// # Arguments
/// * `index` - The voting to initialize
/// * `nonce` - Fresh nonce for the encrypted tallies
pub fn retry_init_tally(
    ctx: Context<RetryInitTally>,
    computation_offset: u64,
    index: u64,
    nonce: u128,
) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    ctx.accounts
        .voting_account
        .check_can_init(&ctx.accounts.payer.key(), now)?;

    msg!("Retrying tally initialization of voting #{}", index);

    let computation = ctx.accounts.computation_account.key();
    let voting = &mut ctx.accounts.voting_account;
    voting.nonce = nonce;
    voting.begin(PendingComputation::InitTally, computation, now);

    let computation_args = ArgBuilder::new().plaintext_u128(nonce).build();

    ctx.accounts.sign_pda_account.bump = ctx.bumps.sign_pda_account;

    queue_computation(
        ctx.accounts,
        computation_offset,
        computation_args,
        None,
        vec![InitTallyCallback::callback_ix(
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

pub fn init_tally_callback(
    ctx: Context<InitTallyCallback>,
    output: SignedComputationOutputs<InitTallyOutput>,
) -> Result<()> {
    let computation = ctx.accounts.computation_account.key();
    let verified =
        output.verify_output(&ctx.accounts.cluster_account, &ctx.accounts.computation_account);

    let voting = &mut ctx.accounts.voting_account;
    let owns_lock = voting.settle(PendingComputation::InitTally, &computation);

    match verified {
        Ok(InitTallyOutput { field_0: tally }) if owns_lock => {
            voting.store_tally(tally.ciphertexts, tally.nonce);
            voting.tally_ready = true;

            emit!(TallyReadyEvent {
                voting: voting.key(),
            });
        }
        _ => computation_failed(voting.key(), PendingComputation::InitTally, computation),
    }

    Ok(())
}
