use anchor_lang::prelude::*;
use crate::state::record::bump_counter;

/// PDA seed prefix for the service account
pub const SERVICE_SEED: &[u8] = b"service";

// ============================================================================
// LEDGER VARIANT
// ============================================================================

/// Which order-record shape a service uses.
///
/// Fixed at `init_service`; every `CustomerOrders` account created under
/// the service carries the matching `OrderBook` variant.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum LedgerVariant {
    /// At most one order in flight per customer, tri-state status
    #[default]
    SingleSlot,

    /// Any number of orders in flight per customer, status is a count
    Counting,
}

impl LedgerVariant {
    /// Size in bytes for serialization
    pub const SIZE: usize = 1;

    /// Seed component distinguishing the two services an owner may run
    pub fn seed(&self) -> [u8; 1] {
        match self {
            LedgerVariant::SingleSlot => [1],
            LedgerVariant::Counting => [2],
        }
    }
}

// ============================================================================
// SHIPMENT SERVICE
// ============================================================================

/// Service configuration PDA
///
/// Seeds: ["service", owner, variant.seed()]
///
/// The owner is written once at initialization and never changes.
/// Only the owner may dispatch orders under this service.
#[account]
pub struct ShipmentService {
    /// Warehouse owner
    pub owner: Pubkey,

    /// Record shape used for every customer of this service
    pub variant: LedgerVariant,

    /// Successful dispatches across all customers
    pub total_dispatched: u64,

    /// Accepted orders across all customers
    pub total_delivered: u64,

    /// PDA bump seed
    pub bump: u8,
}

impl ShipmentService {
    /// 8 (discriminator) + 32 (owner) + 1 (variant) + 8 + 8 + 1 (bump) = 58 bytes
    pub const SIZE: usize = 8 + 32 + LedgerVariant::SIZE + 8 + 8 + 1;

    /// Orders shipped but not yet accepted, across all customers
    pub fn orders_in_flight(&self) -> u64 {
        self.total_dispatched.saturating_sub(self.total_delivered)
    }

    /// Count a successful dispatch
    pub fn record_dispatch(&mut self) -> Result<()> {
        self.total_dispatched = bump_counter(self.total_dispatched)?;
        Ok(())
    }

    /// Count an accepted order
    pub fn record_delivery(&mut self) -> Result<()> {
        self.total_delivered = bump_counter(self.total_delivered)?;
        Ok(())
    }
}

// ============================================================================
// EVENTS
// ============================================================================

/// Event emitted when an owner opens a service
#[event]
pub struct ServiceInitializedEvent {
    pub service: Pubkey,
    pub owner: Pubkey,
    pub variant: LedgerVariant,
    pub timestamp: i64,
}
