use anchor_lang::prelude::*;
use crate::errors::ShipmentError;
use crate::state::record::{bump_counter, saturating_count, ShipmentRecord};

/// Concurrent shipments to one address (V2).
///
/// Orders are identified only by their pin. `pending_pins` is a multiset:
/// accepting a pin removes one matching entry, not necessarily the
/// oldest one.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, PartialEq, Eq, Debug, Default)]
pub struct PendingOrders {
    /// Pins of orders shipped but not yet accepted
    pub pending_pins: Vec<u16>,

    /// Orders this customer has accepted over the service lifetime
    pub delivered_count: u64,
}

impl PendingOrders {
    /// Serialized size with `capacity` pending pins
    /// 4 (vec length) + 2 per pin + 8 (delivered_count)
    pub const fn size_for(capacity: usize) -> usize {
        4 + 2 * capacity + 8
    }

    pub fn in_flight(&self) -> usize {
        self.pending_pins.len()
    }

    pub fn is_pending(&self, pin: u16) -> bool {
        self.pending_pins.contains(&pin)
    }
}

impl ShipmentRecord for PendingOrders {
    type Status = u32;

    fn dispatch(&mut self, pin: u16) -> Result<()> {
        require!(!self.is_pending(pin), ShipmentError::DuplicatePendingPin);

        self.pending_pins.push(pin);
        Ok(())
    }

    fn accept(&mut self, pin: u16) -> Result<()> {
        let index = self
            .pending_pins
            .iter()
            .position(|pending| *pending == pin)
            .ok_or(ShipmentError::PinMismatch)?;
        let delivered = bump_counter(self.delivered_count)?;

        self.pending_pins.swap_remove(index);
        self.delivered_count = delivered;
        Ok(())
    }

    /// Number of orders currently in flight
    fn status(&self) -> u32 {
        saturating_count(self.pending_pins.len())
    }

    fn completed_deliveries(&self) -> u64 {
        self.delivered_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::assert_rejected;

    #[test]
    fn test_size_for() {
        assert_eq!(PendingOrders::size_for(0), 12);
        assert_eq!(PendingOrders::size_for(16), 44);
    }

    #[test]
    fn test_multiple_orders_in_flight() {
        let mut orders = PendingOrders::default();
        assert_eq!(orders.status(), 0);

        orders.dispatch(1234).unwrap();
        assert_eq!(orders.status(), 1);
        orders.dispatch(9998).unwrap();
        assert_eq!(orders.status(), 2);

        orders.accept(1234).unwrap();
        assert_eq!(orders.status(), 1);
        assert_eq!(orders.completed_deliveries(), 1);
        assert!(!orders.is_pending(1234));
        assert!(orders.is_pending(9998));

        orders.accept(9998).unwrap();
        assert_eq!(orders.status(), 0);
        assert_eq!(orders.completed_deliveries(), 2);
    }

    #[test]
    fn test_duplicate_pending_pin_is_rejected() {
        let mut orders = PendingOrders::default();
        orders.dispatch(9999).unwrap();

        let before = orders.clone();
        assert_rejected(orders.dispatch(9999), ShipmentError::DuplicatePendingPin);
        assert_eq!(orders, before);

        // A different pin is fine while the first is outstanding
        orders.dispatch(1000).unwrap();
        assert_eq!(orders.status(), 2);
    }

    #[test]
    fn test_pin_reusable_after_acceptance() {
        let mut orders = PendingOrders::default();

        orders.dispatch(1234).unwrap();
        orders.accept(1234).unwrap();
        orders.dispatch(1234).unwrap();
        assert_eq!(orders.status(), 1);
        orders.accept(1234).unwrap();
        assert_eq!(orders.status(), 0);
        assert_eq!(orders.completed_deliveries(), 2);
    }

    #[test]
    fn test_accept_unknown_pin() {
        let mut orders = PendingOrders::default();
        assert_rejected(orders.accept(1234), ShipmentError::PinMismatch);

        orders.dispatch(9999).unwrap();
        assert_rejected(orders.accept(1234), ShipmentError::PinMismatch);
        orders.accept(9999).unwrap();
        assert_rejected(orders.accept(9999), ShipmentError::PinMismatch);
        assert_eq!(orders.completed_deliveries(), 1);
    }

    #[test]
    fn test_accept_removes_exactly_one_entry() {
        // dispatch never produces duplicates, so build the multiset directly
        let mut orders = PendingOrders {
            pending_pins: vec![4321, 1234, 4321],
            delivered_count: 0,
        };

        orders.accept(4321).unwrap();
        assert_eq!(orders.status(), 2);
        assert!(orders.is_pending(4321));
        assert!(orders.is_pending(1234));
    }
}
