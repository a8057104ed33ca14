// Stops Rust Analyzer complaining about missing configs
// See https://solana.stackexchange.com/questions/17777
#![allow(unexpected_cfgs)]
// Fix warning: use of deprecated method `anchor_lang::prelude::AccountInfo::<'a>::realloc`: Use AccountInfo::resize() instead
// See https://solana.stackexchange.com/questions/22979
#![allow(deprecated)]

use anchor_lang::prelude::*;
use arcium_anchor::prelude::*;

#[cfg(not(target_os = "solana"))]
pub mod board;
pub mod constants;
pub mod error;
pub mod handlers;
pub mod schedule;
pub mod state;

use constants::*;
pub use error::ErrorCode;
pub use state::{BallotReceipt, PendingComputation, Voting, VotingFactory};

declare_id!("28sDdkSz9WxFwLZEDx93ifLBVhti5NSkP6ZpgG7Z3H2m");

#[arcium_program]
pub mod private_voting {
    use super::*;

    pub fn initialize_factory(ctx: Context<InitializeFactory>) -> Result<()> {
        handlers::initialize_factory::initialize_factory(ctx)
    }

    pub fn init_tally_comp_def(ctx: Context<InitTallyCompDef>) -> Result<()> {
        handlers::create_voting::init_tally_comp_def(ctx)
    }

    pub fn create_voting(
        ctx: Context<CreateVoting>,
        computation_offset: u64,
        description: String,
        duration_seconds: u64,
        nonce: u128,
    ) -> Result<()> {
        handlers::create_voting::create_voting(
            ctx,
            computation_offset,
            description,
            duration_seconds,
            nonce,
        )
    }

    pub fn retry_init_tally(
        ctx: Context<RetryInitTally>,
        computation_offset: u64,
        index: u64,
        nonce: u128,
    ) -> Result<()> {
        handlers::create_voting::retry_init_tally(ctx, computation_offset, index, nonce)
    }

    #[arcium_callback(encrypted_ix = "init_tally")]
    pub fn init_tally_callback(
        ctx: Context<InitTallyCallback>,
        output: SignedComputationOutputs<InitTallyOutput>,
    ) -> Result<()> {
        handlers::create_voting::init_tally_callback(ctx, output)
    }

    pub fn init_cast_ballot_comp_def(ctx: Context<CastBallotCompDef>) -> Result<()> {
        handlers::vote::init_cast_ballot_comp_def(ctx)
    }

    #[allow(unused_variables)]
    pub fn vote(
        ctx: Context<Vote>,
        computation_offset: u64,
        index: u64,
        ballot: [u8; 32],
        voter_encryption_pubkey: [u8; 32],
        ballot_nonce: u128,
    ) -> Result<()> {
        handlers::vote::vote(
            ctx,
            computation_offset,
            index,
            ballot,
            voter_encryption_pubkey,
            ballot_nonce,
        )
    }

    #[arcium_callback(encrypted_ix = "cast_ballot")]
    pub fn cast_ballot_callback(
        ctx: Context<CastBallotCallback>,
        output: SignedComputationOutputs<CastBallotOutput>,
    ) -> Result<()> {
        handlers::vote::cast_ballot_callback(ctx, output)
    }

    pub fn init_share_results_comp_def(ctx: Context<ShareResultsCompDef>) -> Result<()> {
        handlers::share_results::init_share_results_comp_def(ctx)
    }

    pub fn share_results(
        ctx: Context<ShareResults>,
        computation_offset: u64,
        index: u64,
        receiver_pubkey: [u8; 32],
        receiver_nonce: u128,
    ) -> Result<()> {
        handlers::share_results::share_results(
            ctx,
            computation_offset,
            index,
            receiver_pubkey,
            receiver_nonce,
        )
    }

    #[arcium_callback(encrypted_ix = "share_results")]
    pub fn share_results_callback(
        ctx: Context<ShareResultsCallback>,
        output: SignedComputationOutputs<ShareResultsOutput>,
    ) -> Result<()> {
        handlers::share_results::share_results_callback(ctx, output)
    }

    pub fn init_reveal_results_comp_def(ctx: Context<RevealResultsCompDef>) -> Result<()> {
        handlers::reveal_results::init_reveal_results_comp_def(ctx)
    }

    pub fn reveal_results(
        ctx: Context<RevealResults>,
        computation_offset: u64,
        index: u64,
    ) -> Result<()> {
        handlers::reveal_results::reveal_results(ctx, computation_offset, index)
    }

    #[arcium_callback(encrypted_ix = "reveal_results")]
    pub fn reveal_results_callback(
        ctx: Context<RevealResultsCallback>,
        output: SignedComputationOutputs<RevealResultsOutput>,
    ) -> Result<()> {
        handlers::reveal_results::reveal_results_callback(ctx, output)
    }

    // Account struct definitions - these need to be inside the arcium_program module
    // so they can access the generated SignerAccount type

    #[derive(Accounts)]
    pub struct InitializeFactory<'info> {
        #[account(mut)]
        pub payer: Signer<'info>,

        #[account(
            init,
            payer = payer,
            space = 8 + VotingFactory::INIT_SPACE,
            seeds = [FACTORY_SEED],
            bump,
        )]
        pub factory: Account<'info, VotingFactory>,

        pub system_program: Program<'info, System>,
    }

    #[init_computation_definition_accounts("init_tally", payer)]
    #[derive(Accounts)]
    pub struct InitTallyCompDef<'info> {
        #[account(mut)]
        pub payer: Signer<'info>,

        #[account(
            mut,
            address = derive_mxe_pda!()
        )]
        pub mxe_account: Box<Account<'info, MXEAccount>>,

        #[account(mut)]
        /// CHECK: comp_def_account, checked by arcium program.
        /// Can't check it here as it's not initialized yet.
        pub comp_def_account: UncheckedAccount<'info>,

        pub arcium_program: Program<'info, Arcium>,

        pub system_program: Program<'info, System>,
    }

    #[queue_computation_accounts("init_tally", payer)]
    #[derive(Accounts)]
    #[instruction(computation_offset: u64)]
    pub struct CreateVoting<'info> {
        #[account(mut)]
        pub payer: Signer<'info>,

        #[account(
            init_if_needed,
            space = 9,
            payer = payer,
            seeds = [&SIGN_PDA_SEED],
            bump,
            address = derive_sign_pda!(),
        )]
        pub sign_pda_account: Account<'info, SignerAccount>,

        #[account(
            address = derive_mxe_pda!()
        )]
        pub mxe_account: Account<'info, MXEAccount>,

        #[account(
            mut,
            address = derive_mempool_pda!()
        )]
        /// CHECK: mempool_account, checked by the arcium program
        pub mempool_account: UncheckedAccount<'info>,

        #[account(
            mut,
            address = derive_execpool_pda!()
        )]
        /// CHECK: executing_pool, checked by the arcium program
        pub executing_pool: UncheckedAccount<'info>,

        #[account(
            mut,
            address = derive_comp_pda!(computation_offset)
        )]
        /// CHECK: computation_account, checked by the arcium program.
        pub computation_account: UncheckedAccount<'info>,

        #[account(
            address = derive_comp_def_pda!(COMP_DEF_OFFSET_INIT_TALLY)
        )]
        pub comp_def_account: Account<'info, ComputationDefinitionAccount>,

        #[account(
            mut,
            address = derive_cluster_pda!(mxe_account, ErrorCode::ClusterNotSet)
        )]
        pub cluster_account: Account<'info, Cluster>,

        #[account(
            mut,
            address = ARCIUM_FEE_POOL_ACCOUNT_ADDRESS,
        )]
        pub pool_account: Account<'info, FeePool>,

        #[account(
            address = ARCIUM_CLOCK_ACCOUNT_ADDRESS,
        )]
        pub clock_account: Account<'info, ClockAccount>,

        pub system_program: Program<'info, System>,

        pub arcium_program: Program<'info, Arcium>,

        #[account(
            mut,
            seeds = [FACTORY_SEED],
            bump = factory.bump,
        )]
        pub factory: Account<'info, VotingFactory>,

        #[account(
            init,
            payer = payer,
            space = 8 + Voting::INIT_SPACE,
            seeds = [VOTING_SEED, factory.key().as_ref(), factory.voting_count.to_le_bytes().as_ref()],
            bump,
        )]
        pub voting_account: Box<Account<'info, Voting>>,
    }

    #[queue_computation_accounts("init_tally", payer)]
    #[derive(Accounts)]
    #[instruction(computation_offset: u64, index: u64)]
    pub struct RetryInitTally<'info> {
        #[account(mut)]
        pub payer: Signer<'info>,

        #[account(
            init_if_needed,
            space = 9,
            payer = payer,
            seeds = [&SIGN_PDA_SEED],
            bump,
            address = derive_sign_pda!(),
        )]
        pub sign_pda_account: Account<'info, SignerAccount>,

        #[account(
            address = derive_mxe_pda!()
        )]
        pub mxe_account: Account<'info, MXEAccount>,

        #[account(
            mut,
            address = derive_mempool_pda!()
        )]
        /// CHECK: mempool_account, checked by the arcium program
        pub mempool_account: UncheckedAccount<'info>,

        #[account(
            mut,
            address = derive_execpool_pda!()
        )]
        /// CHECK: executing_pool, checked by the arcium program
        pub executing_pool: UncheckedAccount<'info>,

        #[account(
            mut,
            address = derive_comp_pda!(computation_offset)
        )]
        /// CHECK: computation_account, checked by the arcium program.
        pub computation_account: UncheckedAccount<'info>,

        #[account(
            address = derive_comp_def_pda!(COMP_DEF_OFFSET_INIT_TALLY)
        )]
        pub comp_def_account: Account<'info, ComputationDefinitionAccount>,

        #[account(
            mut,
            address = derive_cluster_pda!(mxe_account, ErrorCode::ClusterNotSet)
        )]
        pub cluster_account: Account<'info, Cluster>,

        #[account(
            mut,
            address = ARCIUM_FEE_POOL_ACCOUNT_ADDRESS,
        )]
        pub pool_account: Account<'info, FeePool>,

        #[account(
            address = ARCIUM_CLOCK_ACCOUNT_ADDRESS,
        )]
        pub clock_account: Account<'info, ClockAccount>,

        pub system_program: Program<'info, System>,

        pub arcium_program: Program<'info, Arcium>,

        #[account(
            seeds = [FACTORY_SEED],
            bump = factory.bump,
        )]
        pub factory: Account<'info, VotingFactory>,

        #[account(
            mut,
            seeds = [VOTING_SEED, factory.key().as_ref(), index.to_le_bytes().as_ref()],
            bump = voting_account.bump,
        )]
        pub voting_account: Box<Account<'info, Voting>>,
    }

    #[callback_accounts("init_tally")]
    #[derive(Accounts)]
    pub struct InitTallyCallback<'info> {
        pub arcium_program: Program<'info, Arcium>,

        #[account(
            address = derive_comp_def_pda!(COMP_DEF_OFFSET_INIT_TALLY)
        )]
        pub comp_def_account: Account<'info, ComputationDefinitionAccount>,

        #[account(
            address = derive_mxe_pda!()
        )]
        pub mxe_account: Account<'info, MXEAccount>,

        /// CHECK: computation_account, checked by arcium program via constraints in the callback context.
        pub computation_account: UncheckedAccount<'info>,

        #[account(
            address = derive_cluster_pda!(mxe_account, ErrorCode::ClusterNotSet)
        )]
        pub cluster_account: Account<'info, Cluster>,

        #[account(address = ::anchor_lang::solana_program::sysvar::instructions::ID)]
        /// CHECK: instructions_sysvar, checked by the account constraint
        pub instructions_sysvar: AccountInfo<'info>,

        #[account(mut)]
        pub voting_account: Box<Account<'info, Voting>>,
    }

    #[init_computation_definition_accounts("cast_ballot", payer)]
    #[derive(Accounts)]
    pub struct CastBallotCompDef<'info> {
        #[account(mut)]
        pub payer: Signer<'info>,

        #[account(
            mut,
            address = derive_mxe_pda!()
        )]
        pub mxe_account: Box<Account<'info, MXEAccount>>,

        #[account(mut)]
        /// CHECK: comp_def_account, checked by arcium program.
        /// Can't check it here as it's not initialized yet.
        pub comp_def_account: UncheckedAccount<'info>,

        pub arcium_program: Program<'info, Arcium>,

        pub system_program: Program<'info, System>,
    }

    #[queue_computation_accounts("cast_ballot", payer)]
    #[derive(Accounts)]
    #[instruction(computation_offset: u64, index: u64)]
    pub struct Vote<'info> {
        #[account(mut)]
        pub payer: Signer<'info>,

        #[account(
            init_if_needed,
            space = 9,
            payer = payer,
            seeds = [&SIGN_PDA_SEED],
            bump,
            address = derive_sign_pda!(),
        )]
        pub sign_pda_account: Account<'info, SignerAccount>,

        #[account(
            address = derive_mxe_pda!()
        )]
        pub mxe_account: Account<'info, MXEAccount>,

        #[account(
            mut,
            address = derive_mempool_pda!()
        )]
        /// CHECK: mempool_account, checked by the arcium program
        pub mempool_account: UncheckedAccount<'info>,

        #[account(
            mut,
            address = derive_execpool_pda!()
        )]
        /// CHECK: executing_pool, checked by the arcium program
        pub executing_pool: UncheckedAccount<'info>,

        #[account(
            mut,
            address = derive_comp_pda!(computation_offset)
        )]
        /// CHECK: computation_account, checked by the arcium program.
        pub computation_account: UncheckedAccount<'info>,

        #[account(
            address = derive_comp_def_pda!(COMP_DEF_OFFSET_CAST_BALLOT)
        )]
        pub comp_def_account: Account<'info, ComputationDefinitionAccount>,

        #[account(
            mut,
            address = derive_cluster_pda!(mxe_account, ErrorCode::ClusterNotSet)
        )]
        pub cluster_account: Account<'info, Cluster>,

        #[account(
            mut,
            address = ARCIUM_FEE_POOL_ACCOUNT_ADDRESS,
        )]
        pub pool_account: Account<'info, FeePool>,

        #[account(
            address = ARCIUM_CLOCK_ACCOUNT_ADDRESS,
        )]
        pub clock_account: Account<'info, ClockAccount>,

        pub system_program: Program<'info, System>,

        pub arcium_program: Program<'info, Arcium>,

        #[account(
            seeds = [FACTORY_SEED],
            bump = factory.bump,
        )]
        pub factory: Account<'info, VotingFactory>,

        #[account(
            mut,
            seeds = [VOTING_SEED, factory.key().as_ref(), index.to_le_bytes().as_ref()],
            bump = voting_account.bump,
        )]
        pub voting_account: Box<Account<'info, Voting>>,

        #[account(
            init,
            payer = payer,
            space = 8 + BallotReceipt::INIT_SPACE,
            seeds = [BALLOT_SEED, voting_account.key().as_ref(), payer.key().as_ref()],
            bump,
        )]
        pub ballot_receipt: Account<'info, BallotReceipt>,
    }

    #[callback_accounts("cast_ballot")]
    #[derive(Accounts)]
    pub struct CastBallotCallback<'info> {
        pub arcium_program: Program<'info, Arcium>,

        #[account(
            address = derive_comp_def_pda!(COMP_DEF_OFFSET_CAST_BALLOT)
        )]
        pub comp_def_account: Account<'info, ComputationDefinitionAccount>,

        #[account(
            address = derive_mxe_pda!()
        )]
        pub mxe_account: Account<'info, MXEAccount>,

        /// CHECK: computation_account, checked by arcium program via constraints in the callback context.
        pub computation_account: UncheckedAccount<'info>,

        #[account(
            address = derive_cluster_pda!(mxe_account, ErrorCode::ClusterNotSet)
        )]
        pub cluster_account: Account<'info, Cluster>,

        #[account(address = ::anchor_lang::solana_program::sysvar::instructions::ID)]
        /// CHECK: instructions_sysvar, checked by the account constraint
        pub instructions_sysvar: AccountInfo<'info>,

        #[account(mut)]
        pub voting_account: Box<Account<'info, Voting>>,

        #[account(
            mut,
            constraint = ballot_receipt.voting == voting_account.key(),
        )]
        pub ballot_receipt: Account<'info, BallotReceipt>,

        /// CHECK: receives the receipt rent back if the ballot is rejected
        #[account(
            mut,
            address = ballot_receipt.voter,
        )]
        pub voter: UncheckedAccount<'info>,
    }

    #[init_computation_definition_accounts("share_results", payer)]
    #[derive(Accounts)]
    pub struct ShareResultsCompDef<'info> {
        #[account(mut)]
        pub payer: Signer<'info>,

        #[account(
            mut,
            address = derive_mxe_pda!()
        )]
        pub mxe_account: Box<Account<'info, MXEAccount>>,

        #[account(mut)]
        /// CHECK: comp_def_account, checked by arcium program.
        /// Can't check it here as it's not initialized yet.
        pub comp_def_account: UncheckedAccount<'info>,

        pub arcium_program: Program<'info, Arcium>,

        pub system_program: Program<'info, System>,
    }

    #[queue_computation_accounts("share_results", payer)]
    #[derive(Accounts)]
    #[instruction(computation_offset: u64, index: u64)]
    pub struct ShareResults<'info> {
        #[account(mut)]
        pub payer: Signer<'info>,

        #[account(
            init_if_needed,
            space = 9,
            payer = payer,
            seeds = [&SIGN_PDA_SEED],
            bump,
            address = derive_sign_pda!(),
        )]
        pub sign_pda_account: Account<'info, SignerAccount>,

        #[account(
            address = derive_mxe_pda!()
        )]
        pub mxe_account: Account<'info, MXEAccount>,

        #[account(
            mut,
            address = derive_mempool_pda!()
        )]
        /// CHECK: mempool_account, checked by the arcium program
        pub mempool_account: UncheckedAccount<'info>,

        #[account(
            mut,
            address = derive_execpool_pda!()
        )]
        /// CHECK: executing_pool, checked by the arcium program
        pub executing_pool: UncheckedAccount<'info>,

        #[account(
            mut,
            address = derive_comp_pda!(computation_offset)
        )]
        /// CHECK: computation_account, checked by the arcium program.
        pub computation_account: UncheckedAccount<'info>,

        #[account(
            address = derive_comp_def_pda!(COMP_DEF_OFFSET_SHARE_RESULTS)
        )]
        pub comp_def_account: Account<'info, ComputationDefinitionAccount>,

        #[account(
            mut,
            address = derive_cluster_pda!(mxe_account, ErrorCode::ClusterNotSet)
        )]
        pub cluster_account: Account<'info, Cluster>,

        #[account(
            mut,
            address = ARCIUM_FEE_POOL_ACCOUNT_ADDRESS,
        )]
        pub pool_account: Account<'info, FeePool>,

        #[account(
            address = ARCIUM_CLOCK_ACCOUNT_ADDRESS,
        )]
        pub clock_account: Account<'info, ClockAccount>,

        pub system_program: Program<'info, System>,

        pub arcium_program: Program<'info, Arcium>,

        #[account(
            seeds = [FACTORY_SEED],
            bump = factory.bump,
        )]
        pub factory: Account<'info, VotingFactory>,

        #[account(
            mut,
            seeds = [VOTING_SEED, factory.key().as_ref(), index.to_le_bytes().as_ref()],
            bump = voting_account.bump,
        )]
        pub voting_account: Box<Account<'info, Voting>>,
    }

    #[callback_accounts("share_results")]
    #[derive(Accounts)]
    pub struct ShareResultsCallback<'info> {
        pub arcium_program: Program<'info, Arcium>,

        #[account(
            address = derive_comp_def_pda!(COMP_DEF_OFFSET_SHARE_RESULTS)
        )]
        pub comp_def_account: Account<'info, ComputationDefinitionAccount>,

        #[account(
            address = derive_mxe_pda!()
        )]
        pub mxe_account: Account<'info, MXEAccount>,

        /// CHECK: computation_account, checked by arcium program via constraints in the callback context.
        pub computation_account: UncheckedAccount<'info>,

        #[account(
            address = derive_cluster_pda!(mxe_account, ErrorCode::ClusterNotSet)
        )]
        pub cluster_account: Account<'info, Cluster>,

        #[account(address = ::anchor_lang::solana_program::sysvar::instructions::ID)]
        /// CHECK: instructions_sysvar, checked by the account constraint
        pub instructions_sysvar: AccountInfo<'info>,

        #[account(mut)]
        pub voting_account: Box<Account<'info, Voting>>,
    }

    #[init_computation_definition_accounts("reveal_results", payer)]
    #[derive(Accounts)]
    pub struct RevealResultsCompDef<'info> {
        #[account(mut)]
        pub payer: Signer<'info>,

        #[account(
            mut,
            address = derive_mxe_pda!()
        )]
        pub mxe_account: Box<Account<'info, MXEAccount>>,

        #[account(mut)]
        /// CHECK: comp_def_account, checked by arcium program.
        /// Can't check it here as it's not initialized yet.
        pub comp_def_account: UncheckedAccount<'info>,

        pub arcium_program: Program<'info, Arcium>,

        pub system_program: Program<'info, System>,
    }

    #[queue_computation_accounts("reveal_results", payer)]
    #[derive(Accounts)]
    #[instruction(computation_offset: u64, index: u64)]
    pub struct RevealResults<'info> {
        #[account(mut)]
        pub payer: Signer<'info>,

        #[account(
            init_if_needed,
            space = 9,
            payer = payer,
            seeds = [&SIGN_PDA_SEED],
            bump,
            address = derive_sign_pda!(),
        )]
        pub sign_pda_account: Account<'info, SignerAccount>,

        #[account(
            address = derive_mxe_pda!()
        )]
        pub mxe_account: Account<'info, MXEAccount>,

        #[account(
            mut,
            address = derive_mempool_pda!()
        )]
        /// CHECK: mempool_account, checked by the arcium program
        pub mempool_account: UncheckedAccount<'info>,

        #[account(
            mut,
            address = derive_execpool_pda!()
        )]
        /// CHECK: executing_pool, checked by the arcium program
        pub executing_pool: UncheckedAccount<'info>,

        #[account(
            mut,
            address = derive_comp_pda!(computation_offset)
        )]
        /// CHECK: computation_account, checked by the arcium program.
        pub computation_account: UncheckedAccount<'info>,

        #[account(
            address = derive_comp_def_pda!(COMP_DEF_OFFSET_REVEAL_RESULTS)
        )]
        pub comp_def_account: Account<'info, ComputationDefinitionAccount>,

        #[account(
            mut,
            address = derive_cluster_pda!(mxe_account, ErrorCode::ClusterNotSet)
        )]
        pub cluster_account: Account<'info, Cluster>,

        #[account(
            mut,
            address = ARCIUM_FEE_POOL_ACCOUNT_ADDRESS,
        )]
        pub pool_account: Account<'info, FeePool>,

        #[account(
            address = ARCIUM_CLOCK_ACCOUNT_ADDRESS,
        )]
        pub clock_account: Account<'info, ClockAccount>,

        pub system_program: Program<'info, System>,

        pub arcium_program: Program<'info, Arcium>,

        #[account(
            seeds = [FACTORY_SEED],
            bump = factory.bump,
        )]
        pub factory: Account<'info, VotingFactory>,

        #[account(
            mut,
            seeds = [VOTING_SEED, factory.key().as_ref(), index.to_le_bytes().as_ref()],
            bump = voting_account.bump,
        )]
        pub voting_account: Box<Account<'info, Voting>>,
    }

    #[callback_accounts("reveal_results")]
    #[derive(Accounts)]
    pub struct RevealResultsCallback<'info> {
        pub arcium_program: Program<'info, Arcium>,

        #[account(
            address = derive_comp_def_pda!(COMP_DEF_OFFSET_REVEAL_RESULTS)
        )]
        pub comp_def_account: Account<'info, ComputationDefinitionAccount>,

        #[account(
            address = derive_mxe_pda!()
        )]
        pub mxe_account: Account<'info, MXEAccount>,

        /// CHECK: computation_account, checked by arcium program via constraints in the callback context.
        pub computation_account: UncheckedAccount<'info>,

        #[account(
            address = derive_cluster_pda!(mxe_account, ErrorCode::ClusterNotSet)
        )]
        pub cluster_account: Account<'info, Cluster>,

        #[account(address = ::anchor_lang::solana_program::sysvar::instructions::ID)]
        /// CHECK: instructions_sysvar, checked by the account constraint
        pub instructions_sysvar: AccountInfo<'info>,

        #[account(mut)]
        pub voting_account: Box<Account<'info, Voting>>,
    }
}

pub use private_voting::{
    CastBallotCallback, CastBallotCompDef, CastBallotOutput, CreateVoting, InitTallyCallback,
    InitTallyCompDef, InitTallyOutput, InitializeFactory, RetryInitTally, RevealResults,
    RevealResultsCallback, RevealResultsCompDef, RevealResultsOutput, RevealResultsOutputStruct0,
    ShareResults, ShareResultsCallback, ShareResultsCompDef, ShareResultsOutput, Vote,
};
