use anchor_lang::prelude::*;

use crate::{state::FactoryInitializedEvent, InitializeFactory};

/// Creates the factory that every voting is registered in.
pub fn initialize_factory(ctx: Context<InitializeFactory>) -> Result<()> {
    let factory = &mut ctx.accounts.factory;
    factory.bump = ctx.bumps.factory;
    factory.admin = ctx.accounts.payer.key();
    factory.voting_count = 0;

    msg!("VotingFactory deployed to: {}", factory.key());

    emit!(FactoryInitializedEvent {
        factory: factory.key(),
        admin: factory.admin,
    });

    Ok(())
}
