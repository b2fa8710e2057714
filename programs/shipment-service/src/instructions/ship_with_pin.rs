use anchor_lang::prelude::*;
use crate::access::check_dispatch;
use crate::state::{
    CustomerOrders, ShipmentRecord, ShipmentService, ORDERS_SEED, SERVICE_SEED,
};

/// Mark an order to `customer` as shipped under a one-time pin
///
/// Owner only. This instruction enforces, in order:
/// 1. Signer is the service owner
/// 2. Customer is not the owner
/// 3. Pin is a four-digit code (1000-9999)
/// 4. Customer is not the null address
/// 5. The customer's record accepts another order
///    (single slot: nothing in flight; counting: pin not already pending)
///
/// The customer's order account is created on the first dispatch. Any
/// failure reverts the whole transaction, including that creation.
pub fn ship_with_pin(ctx: Context<ShipWithPin>, customer: Pubkey, pin: u16) -> Result<()> {
    let service = &mut ctx.accounts.service;
    let orders = &mut ctx.accounts.orders;
    let clock = Clock::get()?;

    check_dispatch(&ctx.accounts.caller.key(), &service.owner, &customer, pin)?;

    if !orders.is_initialized() {
        orders.open(service.key(), customer, service.variant, ctx.bumps.orders);
    }
    orders.ensure_variant(service.variant)?;

    orders.book.dispatch(pin)?;

    service.record_dispatch()?;

    // The pin is a shared secret and is never emitted
    emit!(OrderShippedEvent {
        service: service.key(),
        customer,
        in_flight: orders.book.in_flight(),
        service_in_flight: service.orders_in_flight(),
        timestamp: clock.unix_timestamp,
    });

    Ok(())
}

#[derive(Accounts)]
#[instruction(customer: Pubkey)]
pub struct ShipWithPin<'info> {
    #[account(
        mut,
        seeds = [SERVICE_SEED, service.owner.as_ref(), service.variant.seed().as_ref()],
        bump = service.bump
    )]
    pub service: Account<'info, ShipmentService>,

    /// Created on the first dispatch to this customer
    #[account(
        init_if_needed,
        payer = caller,
        space = CustomerOrders::SIZE,
        seeds = [ORDERS_SEED, service.key().as_ref(), customer.as_ref()],
        bump
    )]
    pub orders: Account<'info, CustomerOrders>,

    /// Must be the service owner (checked in the handler)
    #[account(mut)]
    pub caller: Signer<'info>,

    pub system_program: Program<'info, System>,
}

#[event]
pub struct OrderShippedEvent {
    pub service: Pubkey,
    pub customer: Pubkey,
    /// Orders in flight to this customer after the dispatch
    pub in_flight: u32,
    /// Orders in flight across the whole service
    pub service_in_flight: u64,
    pub timestamp: i64,
}
