use anchor_lang::prelude::*;

pub mod access;
pub mod errors;
pub mod instructions;
pub mod state;

use instructions::*;
use state::{LedgerVariant, StatusReport};

declare_id!("Fg6PaFpoGXkYsidMpWTK6W2BeZ7FEfcYkg476zPFsLnS");

#[program]
pub mod shipment_service {
    use super::*;

    pub fn init_service(ctx: Context<InitService>, variant: LedgerVariant) -> Result<()> {
        instructions::init_service(ctx, variant)
    }

    pub fn ship_with_pin(ctx: Context<ShipWithPin>, customer: Pubkey, pin: u16) -> Result<()> {
        instructions::ship_with_pin(ctx, customer, pin)
    }

    pub fn accept_order(ctx: Context<AcceptOrder>, pin: u16) -> Result<()> {
        instructions::accept_order(ctx, pin)
    }

    pub fn check_status(ctx: Context<CustomerQuery>, customer: Pubkey) -> Result<StatusReport> {
        instructions::check_status(ctx, customer)
    }

    pub fn total_completed_deliveries(
        ctx: Context<CustomerQuery>,
        customer: Pubkey,
    ) -> Result<u64> {
        instructions::total_completed_deliveries(ctx, customer)
    }
}
