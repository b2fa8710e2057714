use anchor_lang::prelude::*;
use crate::access::authorize_query;
use crate::instructions::check_status::CustomerQuery;
use crate::state::{CustomerOrders, ShipmentRecord};

/// Number of orders a customer has accepted over the service lifetime
///
/// Same access rule as `check_status`.
pub fn total_completed_deliveries(ctx: Context<CustomerQuery>, customer: Pubkey) -> Result<u64> {
    let service = &ctx.accounts.service;

    authorize_query(&ctx.accounts.caller.key(), &service.owner, &customer)?;

    let book = CustomerOrders::load_book(&ctx.accounts.orders, service.variant)?;

    Ok(book.completed_deliveries())
}
