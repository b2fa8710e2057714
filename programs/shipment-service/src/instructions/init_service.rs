use anchor_lang::prelude::*;
use crate::state::{LedgerVariant, ServiceInitializedEvent, ShipmentService, SERVICE_SEED};

/// Open a shipment service with the signer as its owner
///
/// The owner is fixed for the lifetime of the service. An owner may run
/// one service per variant (the variant is part of the PDA seeds).
pub fn init_service(ctx: Context<InitService>, variant: LedgerVariant) -> Result<()> {
    let service = &mut ctx.accounts.service;
    let clock = Clock::get()?;

    service.owner = ctx.accounts.owner.key();
    service.variant = variant;
    service.total_dispatched = 0;
    service.total_delivered = 0;
    service.bump = ctx.bumps.service;

    emit!(ServiceInitializedEvent {
        service: service.key(),
        owner: service.owner,
        variant,
        timestamp: clock.unix_timestamp,
    });

    Ok(())
}

#[derive(Accounts)]
#[instruction(variant: LedgerVariant)]
pub struct InitService<'info> {
    #[account(
        init,
        payer = owner,
        space = ShipmentService::SIZE,
        seeds = [SERVICE_SEED, owner.key().as_ref(), variant.seed().as_ref()],
        bump
    )]
    pub service: Account<'info, ShipmentService>,

    /// Warehouse owner, pays for the service account
    #[account(mut)]
    pub owner: Signer<'info>,

    pub system_program: Program<'info, System>,
}
