use anchor_lang::prelude::*;
use crate::errors::ShipmentError;
use crate::state::record::{bump_counter, ShipmentRecord};

// ============================================================================
// ORDER STATUS
// ============================================================================

/// Lifecycle of the single order slot.
///
/// State transitions:
/// - NotPlaced -> Shipped (first dispatch)
/// - Shipped -> Delivered (customer presents the matching pin)
/// - Delivered -> Shipped (next dispatch to the same customer)
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum OrderStatus {
    /// Nothing has ever been dispatched to this customer
    #[default]
    NotPlaced,

    /// Order is on its way, pin not yet presented
    Shipped,

    /// Customer confirmed receipt
    Delivered,
}

impl OrderStatus {
    /// Size in bytes for serialization
    pub const SIZE: usize = 1;

    /// Human-readable status token reported by `check_status`
    pub fn label(&self) -> &'static str {
        match self {
            OrderStatus::NotPlaced => "no order placed",
            OrderStatus::Shipped => "shipped",
            OrderStatus::Delivered => "delivered",
        }
    }
}

// ============================================================================
// SINGLE ORDER (V1)
// ============================================================================

/// One parcel per address at a time.
///
/// The pin of the last dispatch is kept after delivery, so presenting it
/// again reports `AlreadyDelivered` rather than `PinMismatch`.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct SingleOrder {
    /// Pin of the most recent dispatch (0 if never dispatched)
    pub pin: u16,

    pub status: OrderStatus,

    /// Orders this customer has accepted over the service lifetime
    pub completed_deliveries: u64,
}

impl SingleOrder {
    /// 2 (pin) + 1 (status) + 8 (completed_deliveries)
    pub const SIZE: usize = 2 + OrderStatus::SIZE + 8;

    pub fn is_in_flight(&self) -> bool {
        self.status == OrderStatus::Shipped
    }
}

impl ShipmentRecord for SingleOrder {
    type Status = OrderStatus;

    fn dispatch(&mut self, pin: u16) -> Result<()> {
        require!(!self.is_in_flight(), ShipmentError::OrderAlreadyInFlight);

        self.pin = pin;
        self.status = OrderStatus::Shipped;
        Ok(())
    }

    fn accept(&mut self, pin: u16) -> Result<()> {
        // A slot that was never shipped has no pin to match
        require!(
            self.status != OrderStatus::NotPlaced && self.pin == pin,
            ShipmentError::PinMismatch
        );
        require!(
            self.status != OrderStatus::Delivered,
            ShipmentError::AlreadyDelivered
        );

        let completed = bump_counter(self.completed_deliveries)?;
        self.status = OrderStatus::Delivered;
        self.completed_deliveries = completed;
        Ok(())
    }

    fn status(&self) -> OrderStatus {
        self.status
    }

    fn completed_deliveries(&self) -> u64 {
        self.completed_deliveries
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::assert_rejected;

    #[test]
    fn test_status_labels() {
        assert_eq!(OrderStatus::NotPlaced.label(), "no order placed");
        assert_eq!(OrderStatus::Shipped.label(), "shipped");
        assert_eq!(OrderStatus::Delivered.label(), "delivered");
    }

    #[test]
    fn test_dispatch_then_accept() {
        let mut order = SingleOrder::default();
        assert_eq!(order.status(), OrderStatus::NotPlaced);

        order.dispatch(1234).unwrap();
        assert_eq!(order.status(), OrderStatus::Shipped);
        assert_eq!(order.completed_deliveries(), 0);

        order.accept(1234).unwrap();
        assert_eq!(order.status(), OrderStatus::Delivered);
        assert_eq!(order.completed_deliveries(), 1);
    }

    #[test]
    fn test_second_dispatch_while_shipped_is_rejected() {
        let mut order = SingleOrder::default();
        order.dispatch(1234).unwrap();

        let before = order;
        assert_rejected(order.dispatch(1235), ShipmentError::OrderAlreadyInFlight);
        assert_rejected(order.dispatch(1234), ShipmentError::OrderAlreadyInFlight);
        assert_eq!(order, before);
    }

    #[test]
    fn test_accept_wrong_pin_leaves_order_shipped() {
        let mut order = SingleOrder::default();
        order.dispatch(9999).unwrap();

        assert_rejected(order.accept(1234), ShipmentError::PinMismatch);
        assert_eq!(order.status(), OrderStatus::Shipped);
        assert_eq!(order.completed_deliveries(), 0);
    }

    #[test]
    fn test_accept_twice_reports_already_delivered() {
        let mut order = SingleOrder::default();
        order.dispatch(9999).unwrap();
        order.accept(9999).unwrap();

        assert_rejected(order.accept(9999), ShipmentError::AlreadyDelivered);
        assert_rejected(order.accept(1234), ShipmentError::PinMismatch);
        assert_eq!(order.completed_deliveries(), 1);
    }

    #[test]
    fn test_accept_without_dispatch_is_mismatch() {
        let mut order = SingleOrder::default();

        assert_rejected(order.accept(1234), ShipmentError::PinMismatch);
        // Stored pin of an untouched slot is 0, which must not match either
        assert_rejected(order.accept(0), ShipmentError::PinMismatch);
        assert_eq!(order, SingleOrder::default());
    }

    #[test]
    fn test_redispatch_after_delivery() {
        let mut order = SingleOrder::default();

        for round in 1..=2 {
            order.dispatch(1234).unwrap();
            assert_eq!(order.status(), OrderStatus::Shipped);
            order.accept(1234).unwrap();
            assert_eq!(order.status(), OrderStatus::Delivered);
            assert_eq!(order.completed_deliveries(), round);
        }
    }
}
