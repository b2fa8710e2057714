use std::collections::BTreeMap;

use anchor_lang::prelude::*;
use crate::access::{authorize, authorize_query, check_dispatch, Role};
use crate::errors::ShipmentError;
use crate::state::order_state::SingleOrder;
use crate::state::pending_state::PendingOrders;
use crate::state::record::ShipmentRecord;

/// Off-chain shipment ledger.
///
/// Holds the same records the program stores in `CustomerOrders`
/// accounts, keyed by customer, and applies the same rules. Clients use
/// it to simulate a service before sending transactions.
///
/// Mutating operations take `&mut self`; hosts that share a ledger
/// across threads wrap it in a lock.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShipmentLedger<R> {
    owner: Pubkey,
    orders: BTreeMap<Pubkey, R>,
}

/// One order in flight per customer
pub type SingleSlotLedger = ShipmentLedger<SingleOrder>;

/// Any number of orders in flight per customer
pub type CountingLedger = ShipmentLedger<PendingOrders>;

impl<R: ShipmentRecord + Default> ShipmentLedger<R> {
    pub fn new(owner: Pubkey) -> Self {
        Self {
            owner,
            orders: BTreeMap::new(),
        }
    }

    pub fn owner(&self) -> Pubkey {
        self.owner
    }

    /// Owner marks an order to `customer` as shipped under `pin`
    pub fn dispatch(&mut self, caller: &Pubkey, customer: Pubkey, pin: u16) -> Result<()> {
        check_dispatch(caller, &self.owner, &customer, pin)?;

        // A record only comes into existence once a dispatch succeeds
        match self.orders.get_mut(&customer) {
            Some(record) => record.dispatch(pin),
            None => {
                let mut record = R::default();
                record.dispatch(pin)?;
                self.orders.insert(customer, record);
                Ok(())
            }
        }
    }

    /// Customer confirms receipt of the order shipped under `pin`
    pub fn accept_order(&mut self, caller: &Pubkey, pin: u16) -> Result<()> {
        authorize(caller, &self.owner, Role::Customer)?;

        let record = self
            .orders
            .get_mut(caller)
            .ok_or(ShipmentError::PinMismatch)?;
        record.accept(pin)
    }

    pub fn check_status(&self, caller: &Pubkey, customer: &Pubkey) -> Result<R::Status> {
        authorize_query(caller, &self.owner, customer)?;

        Ok(match self.orders.get(customer) {
            Some(record) => record.status(),
            None => R::default().status(),
        })
    }

    pub fn total_completed_deliveries(&self, caller: &Pubkey, customer: &Pubkey) -> Result<u64> {
        authorize_query(caller, &self.owner, customer)?;

        Ok(self
            .orders
            .get(customer)
            .map_or(0, |record| record.completed_deliveries()))
    }
}
