use anchor_lang::prelude::*;
use crate::access::{authorize, Role};
use crate::errors::ShipmentError;
use crate::state::{
    CustomerOrders, ShipmentRecord, ShipmentService, ORDERS_SEED, SERVICE_SEED,
};

/// Confirm receipt of an order by presenting its pin
///
/// Customer only: the owner can never accept. The signer's own order
/// account is used, so a customer cannot accept on someone else's behalf.
/// A customer that never received a dispatch has no order account and
/// gets `PinMismatch`.
pub fn accept_order(ctx: Context<AcceptOrder>, pin: u16) -> Result<()> {
    let service = &mut ctx.accounts.service;
    let customer = ctx.accounts.customer.key();
    let clock = Clock::get()?;

    authorize(&customer, &service.owner, Role::Customer)?;

    let orders = ctx
        .accounts
        .orders
        .as_mut()
        .ok_or(ShipmentError::PinMismatch)?;
    orders.ensure_variant(service.variant)?;

    orders.book.accept(pin)?;

    service.record_delivery()?;

    emit!(OrderAcceptedEvent {
        service: service.key(),
        customer,
        in_flight: orders.book.in_flight(),
        completed_deliveries: orders.book.completed_deliveries(),
        service_in_flight: service.orders_in_flight(),
        timestamp: clock.unix_timestamp,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct AcceptOrder<'info> {
    #[account(
        mut,
        seeds = [SERVICE_SEED, service.owner.as_ref(), service.variant.seed().as_ref()],
        bump = service.bump
    )]
    pub service: Account<'info, ShipmentService>,

    /// The signer's order account, absent if nothing was ever shipped to them
    #[account(
        mut,
        seeds = [ORDERS_SEED, service.key().as_ref(), customer.key().as_ref()],
        bump = orders.bump
    )]
    pub orders: Option<Account<'info, CustomerOrders>>,

    pub customer: Signer<'info>,
}

#[event]
pub struct OrderAcceptedEvent {
    pub service: Pubkey,
    pub customer: Pubkey,
    /// Orders still in flight to this customer
    pub in_flight: u32,
    /// Lifetime accepted orders for this customer
    pub completed_deliveries: u64,
    /// Orders in flight across the whole service
    pub service_in_flight: u64,
    pub timestamp: i64,
}
