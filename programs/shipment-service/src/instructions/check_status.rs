use anchor_lang::prelude::*;
use crate::access::authorize_query;
use crate::state::{
    CustomerOrders, ShipmentRecord, ShipmentService, StatusReport, ORDERS_SEED,
    SERVICE_SEED,
};

/// Report the state of a customer's orders
///
/// Single-slot services return "no order placed", "shipped" or
/// "delivered"; counting services return the number of orders in flight.
/// Read through simulation; the result is set as return data.
pub fn check_status(ctx: Context<CustomerQuery>, customer: Pubkey) -> Result<StatusReport> {
    let service = &ctx.accounts.service;

    authorize_query(&ctx.accounts.caller.key(), &service.owner, &customer)?;

    let book = CustomerOrders::load_book(&ctx.accounts.orders, service.variant)?;

    Ok(book.status())
}

/// Accounts shared by the two read-only customer queries
#[derive(Accounts)]
#[instruction(customer: Pubkey)]
pub struct CustomerQuery<'info> {
    #[account(
        seeds = [SERVICE_SEED, service.owner.as_ref(), service.variant.seed().as_ref()],
        bump = service.bump
    )]
    pub service: Account<'info, ShipmentService>,

    /// Customer's order PDA, uncreated if nothing was ever shipped to them
    /// CHECK: Address is pinned by the seeds; contents are decoded by CustomerOrders::load_book
    #[account(
        seeds = [ORDERS_SEED, service.key().as_ref(), customer.as_ref()],
        bump
    )]
    pub orders: UncheckedAccount<'info>,

    /// Owner, or the customer being queried
    pub caller: Signer<'info>,
}
